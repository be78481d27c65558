use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use nytcampfin_lib::{Client, Options};

use crate::output::{print_results, OutputFormat};

#[derive(Args)]
pub struct LateContributionsArgs {
    #[command(subcommand)]
    pub command: LateContributionsCommand,
}

#[derive(Subcommand)]
pub enum LateContributionsCommand {
    /// Most recent 48-hour contributions
    Latest,
    /// 48-hour contributions made on a date (YYYY-MM-DD)
    Date { date: NaiveDate },
}

pub async fn run(
    args: &LateContributionsArgs,
    client: &Client,
    opts: Options,
    format: &OutputFormat,
) -> Result<()> {
    let late = client.late_contributions();
    let results = match &args.command {
        LateContributionsCommand::Latest => late.latest(opts).await?,
        LateContributionsCommand::Date { date } => late.date(*date, opts).await?,
    };
    print_results(&results, format)
}
