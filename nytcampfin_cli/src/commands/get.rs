use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use nytcampfin_lib::{Client, Options, Unwrap};
use serde_json::Value;

use crate::output::{print_one, print_results, OutputFormat};

#[derive(Args)]
pub struct GetArgs {
    /// Full API URL, e.g. a `committee` link from an earlier result
    pub url: String,

    /// What to return from the response envelope
    #[arg(long, value_enum, default_value_t = Shape::Results)]
    pub shape: Shape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// The whole envelope
    Envelope,
    /// The `results` array
    Results,
    /// The first element of `results`
    First,
}

impl Shape {
    fn unwrap_policy(self) -> Unwrap {
        match self {
            Shape::Envelope => Unwrap::Identity,
            Shape::Results => Unwrap::Results,
            Shape::First => Unwrap::FirstResult,
        }
    }
}

/// A link already names its cycle in the path and its page in the query,
/// so the global scoping flags have nothing to apply to.
fn reject_scoping(opts: Options) -> Result<()> {
    if opts.cycle.is_some() || opts.offset.is_some() {
        bail!("--cycle and --offset don't apply to `get`; the link carries its own cycle and offset");
    }
    Ok(())
}

pub async fn run(
    args: &GetArgs,
    client: &Client,
    opts: Options,
    format: &OutputFormat,
) -> Result<()> {
    reject_scoping(opts)?;
    let value = client
        .fetch_url(&args.url, args.shape.unwrap_policy())
        .await?;
    match value {
        Value::Array(results) => print_results(&results, format),
        other => print_one(&other, format),
    }
}
