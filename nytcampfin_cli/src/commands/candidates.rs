use anyhow::Result;
use clap::{Args, Subcommand};
use nytcampfin_lib::{Client, Options};

use crate::output::{print_one, print_results, OutputFormat};

#[derive(Args)]
pub struct CandidatesArgs {
    #[command(subcommand)]
    pub command: CandidatesCommand,
}

#[derive(Subcommand)]
pub enum CandidatesCommand {
    /// Newly registered candidates
    Latest,
    /// Details for one candidate by FEC ID
    Get { candidate_id: String },
    /// Search candidates by name
    Search { query: String },
    /// 48-hour contributions to a candidate
    Late { candidate_id: String },
    /// Leading candidates in a category (e.g. end-cash, pac-total)
    Leaders { category: String },
    /// Candidates for seats in a state
    Seats {
        /// Two-letter state abbreviation
        state: String,
        /// house or senate
        #[arg(long)]
        chamber: Option<String>,
        /// District number (requires --chamber)
        #[arg(long, requires = "chamber")]
        district: Option<String>,
    },
}

pub async fn run(
    args: &CandidatesArgs,
    client: &Client,
    opts: Options,
    format: &OutputFormat,
) -> Result<()> {
    let candidates = client.candidates();
    let results = match &args.command {
        CandidatesCommand::Get { candidate_id } => {
            let candidate = candidates.get(candidate_id, opts).await?;
            return print_one(&candidate, format);
        }
        CandidatesCommand::Latest => candidates.latest(opts).await?,
        CandidatesCommand::Search { query } => candidates.filter(query, opts).await?,
        CandidatesCommand::Late { candidate_id } => {
            candidates.late_contributions(candidate_id, opts).await?
        }
        CandidatesCommand::Leaders { category } => candidates.leaders(category, opts).await?,
        CandidatesCommand::Seats {
            state,
            chamber,
            district,
        } => {
            candidates
                .seats(state, chamber.as_deref(), district.as_deref(), opts)
                .await?
        }
    };
    print_results(&results, format)
}
