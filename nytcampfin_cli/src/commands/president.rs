use anyhow::Result;
use clap::{Args, Subcommand};
use nytcampfin_lib::{Client, Options};

use crate::output::{print_one, print_results, OutputFormat};

#[derive(Args)]
pub struct PresidentArgs {
    #[command(subcommand)]
    pub command: PresidentCommand,
}

#[derive(Subcommand)]
pub enum PresidentCommand {
    /// Presidential candidates with totals
    Candidates,
    /// One candidate, by FEC committee ID or last name
    Detail { candidate: String },
    /// Totals for a state
    State { state: String },
    /// Totals for a zip code
    Zip { zipcode: String },
}

pub async fn run(
    args: &PresidentArgs,
    client: &Client,
    opts: Options,
    format: &OutputFormat,
) -> Result<()> {
    let president = client.president();
    let results = match &args.command {
        PresidentCommand::Detail { candidate } => {
            let detail = president.detail(candidate, opts).await?;
            return print_one(&detail, format);
        }
        PresidentCommand::Candidates => president.candidates(opts).await?,
        PresidentCommand::State { state } => president.state(state, opts).await?,
        PresidentCommand::Zip { zipcode } => president.zipcode(zipcode, opts).await?,
    };
    print_results(&results, format)
}
