//! Independent expenditures: spending for or against candidates by outside groups.

use chrono::NaiveDate;
use serde_json::Value;

use super::date_parts;
use crate::{Client, Error, Options};

pub struct IndependentExpenditures<'a> {
    client: &'a Client,
}

impl<'a> IndependentExpenditures<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Most recently received independent expenditures.
    pub async fn latest(&self, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/independent_expenditures", &[], opts)
            .await
    }

    /// Independent expenditures made on `date`.
    pub async fn date(&self, date: NaiveDate, opts: Options) -> Result<Vec<Value>, Error> {
        let [year, month, day] = date_parts(date);
        self.client
            .list(
                "/%s/independent_expenditures/%s/%s/%s",
                &[year.as_str(), month.as_str(), day.as_str()],
                opts,
            )
            .await
    }

    /// A committee's independent expenditures within the cycle.
    pub async fn committee(&self, committee_id: &str, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list(
                "/%s/committees/%s/independent_expenditures",
                &[committee_id],
                opts,
            )
            .await
    }

    /// Independent expenditures about a candidate within the cycle.
    pub async fn candidate(&self, candidate_id: &str, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list(
                "/%s/candidates/%s/independent_expenditures",
                &[candidate_id],
                opts,
            )
            .await
    }

    /// Independent expenditures about presidential candidates.
    pub async fn president(&self, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/president/independent_expenditures", &[], opts)
            .await
    }

    /// Super PACs, the committees that may raise unlimited sums for independent expenditures.
    pub async fn superpacs(&self, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/committees/superpacs", &[], opts)
            .await
    }

    /// Races with their independent expenditure totals for an office
    /// (`president`, `senate` or `house`).
    pub async fn race_totals(&self, office: &str, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list(
                "/%s/independent_expenditures/race_totals/%s",
                &[office],
                opts,
            )
            .await
    }
}
