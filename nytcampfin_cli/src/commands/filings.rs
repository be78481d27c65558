use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use nytcampfin_lib::{Client, Options};

use crate::output::{print_results, OutputFormat};

#[derive(Args)]
pub struct FilingsArgs {
    #[command(subcommand)]
    pub command: FilingsCommand,
}

#[derive(Subcommand)]
pub enum FilingsCommand {
    /// Today's electronic filings
    Today,
    /// Filings received on a date (YYYY-MM-DD)
    Date { date: NaiveDate },
    /// Filing form types
    Types,
    /// Filings of one form type (e.g. F3, F24)
    ByType { form_type: String },
    /// Recent amendments
    Amendments,
}

pub async fn run(
    args: &FilingsArgs,
    client: &Client,
    opts: Options,
    format: &OutputFormat,
) -> Result<()> {
    let filings = client.filings();
    let results = match &args.command {
        FilingsCommand::Today => filings.today(opts).await?,
        FilingsCommand::Date { date } => filings.date(*date, opts).await?,
        FilingsCommand::Types => filings.form_types(opts).await?,
        FilingsCommand::ByType { form_type } => filings.by_type(form_type, opts).await?,
        FilingsCommand::Amendments => filings.amendments(opts).await?,
    };
    print_results(&results, format)
}
