use anyhow::Result;
use clap::{Args, Subcommand};
use nytcampfin_lib::{Client, Options};

use crate::output::{print_one, print_results, OutputFormat};

#[derive(Args)]
pub struct CommitteesArgs {
    #[command(subcommand)]
    pub command: CommitteesCommand,
}

#[derive(Subcommand)]
pub enum CommitteesCommand {
    /// Newly registered committees
    Latest,
    /// Details for one committee by FEC ID
    Get { committee_id: String },
    /// Search committees by name
    Search { query: String },
    /// 48-hour contributions to a candidate committee
    Late { committee_id: String },
    /// A committee's filings
    Filings { committee_id: String },
    /// A committee's contributions
    Contributions {
        committee_id: String,
        /// Only contributions to this candidate
        #[arg(long)]
        candidate: Option<String>,
    },
    /// Races where the committee made independent expenditures
    IeTotals { committee_id: String },
    /// Leadership PACs
    Leadership,
}

pub async fn run(
    args: &CommitteesArgs,
    client: &Client,
    opts: Options,
    format: &OutputFormat,
) -> Result<()> {
    let committees = client.committees();
    let results = match &args.command {
        CommitteesCommand::Get { committee_id } => {
            let committee = committees.get(committee_id, opts).await?;
            return print_one(&committee, format);
        }
        CommitteesCommand::Latest => committees.latest(opts).await?,
        CommitteesCommand::Search { query } => committees.filter(query, opts).await?,
        CommitteesCommand::Late { committee_id } => {
            committees.late_contributions(committee_id, opts).await?
        }
        CommitteesCommand::Filings { committee_id } => {
            committees.filings(committee_id, opts).await?
        }
        CommitteesCommand::Contributions {
            committee_id,
            candidate: Some(candidate_id),
        } => {
            committees
                .contributions_to_candidate(committee_id, candidate_id, opts)
                .await?
        }
        CommitteesCommand::Contributions {
            committee_id,
            candidate: None,
        } => committees.contributions(committee_id, opts).await?,
        CommitteesCommand::IeTotals { committee_id } => {
            committees.ie_totals(committee_id, opts).await?
        }
        CommitteesCommand::Leadership => committees.leadership(opts).await?,
    };
    print_results(&results, format)
}
