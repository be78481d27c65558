mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nytcampfin_lib::config::{parse_cycle, API_KEY_VAR};
use nytcampfin_lib::{Config, Options};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "nytcampfin")]
#[command(about = "Query campaign finance data from the New York Times Campaign Finance API")]
struct Cli {
    /// Output format: json, table, csv or markdown
    #[arg(long, default_value = "json", global = true)]
    output: String,

    /// Election cycle (even year); defaults to NYT_CAMPFIN_CYCLE or 2012
    #[arg(long, global = true, value_parser = cycle_arg)]
    cycle: Option<u32>,

    /// Result offset for pagination, in steps of 20
    #[arg(long, global = true)]
    offset: Option<u32>,

    /// API key
    #[arg(long, global = true, env = API_KEY_VAR, hide_env_values = true)]
    api_key: Option<String>,

    /// Bypass the response cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Electronic filings
    Filings(commands::filings::FilingsArgs),
    /// Candidate details, searches and rankings
    Candidates(commands::candidates::CandidatesArgs),
    /// Committee details, searches and listings
    Committees(commands::committees::CommitteesArgs),
    /// Presidential race totals
    President(commands::president::PresidentArgs),
    /// Independent expenditures
    #[command(visible_alias = "ie")]
    IndependentExpenditures(commands::independent_expenditures::IndependentExpendituresArgs),
    /// 48-hour contributions
    #[command(visible_alias = "late")]
    LateContributions(commands::late_contributions::LateContributionsArgs),
    /// Fetch an API URL taken from an earlier response (the link carries its own cycle and offset)
    Get(commands::get::GetArgs),
}

fn cycle_arg(input: &str) -> Result<u32, String> {
    parse_cycle(input).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nytcampfin=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);

    let mut config = Config::from_lookup(|name| {
        if name == API_KEY_VAR {
            cli.api_key.clone()
        } else {
            std::env::var(name).ok()
        }
    })?;
    if cli.no_cache {
        config = config.with_cache_ttl(Duration::ZERO);
    }
    let client = config.client()?;

    let opts = Options {
        cycle: cli.cycle,
        offset: cli.offset,
    };

    match &cli.command {
        Commands::Filings(args) => commands::filings::run(args, &client, opts, &format).await?,
        Commands::Candidates(args) => {
            commands::candidates::run(args, &client, opts, &format).await?
        }
        Commands::Committees(args) => {
            commands::committees::run(args, &client, opts, &format).await?
        }
        Commands::President(args) => commands::president::run(args, &client, opts, &format).await?,
        Commands::IndependentExpenditures(args) => {
            commands::independent_expenditures::run(args, &client, opts, &format).await?
        }
        Commands::LateContributions(args) => {
            commands::late_contributions::run(args, &client, opts, &format).await?
        }
        Commands::Get(args) => commands::get::run(args, &client, opts, &format).await?,
    }

    Ok(())
}
