use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use nytcampfin_lib::{Client, Options};

use crate::output::{print_results, OutputFormat};

#[derive(Args)]
pub struct IndependentExpendituresArgs {
    #[command(subcommand)]
    pub command: IndependentExpendituresCommand,
}

#[derive(Subcommand)]
pub enum IndependentExpendituresCommand {
    /// Latest independent expenditures
    Latest,
    /// Independent expenditures made on a date (YYYY-MM-DD)
    Date { date: NaiveDate },
    /// A committee's independent expenditures
    Committee { committee_id: String },
    /// Independent expenditures about a candidate
    Candidate { candidate_id: String },
    /// Independent expenditures about presidential candidates
    President,
    /// Super PACs
    Superpacs,
    /// Race totals for an office: president, senate or house
    RaceTotals { office: String },
}

pub async fn run(
    args: &IndependentExpendituresArgs,
    client: &Client,
    opts: Options,
    format: &OutputFormat,
) -> Result<()> {
    let ie = client.independent_expenditures();
    let results = match &args.command {
        IndependentExpendituresCommand::Latest => ie.latest(opts).await?,
        IndependentExpendituresCommand::Date { date } => ie.date(*date, opts).await?,
        IndependentExpendituresCommand::Committee { committee_id } => {
            ie.committee(committee_id, opts).await?
        }
        IndependentExpendituresCommand::Candidate { candidate_id } => {
            ie.candidate(candidate_id, opts).await?
        }
        IndependentExpendituresCommand::President => ie.president(opts).await?,
        IndependentExpendituresCommand::Superpacs => ie.superpacs(opts).await?,
        IndependentExpendituresCommand::RaceTotals { office } => {
            ie.race_totals(office, opts).await?
        }
    };
    print_results(&results, format)
}
