//! CLI subcommand implementations, one module per API resource.

pub mod candidates;
pub mod committees;
pub mod filings;
pub mod get;
pub mod independent_expenditures;
pub mod late_contributions;
pub mod president;
