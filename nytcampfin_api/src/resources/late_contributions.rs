//! 48-hour notices: contributions of $1,000 or more received shortly before an election.

use chrono::NaiveDate;
use serde_json::Value;

use super::date_parts;
use crate::{Client, Error, Options};

pub struct LateContributions<'a> {
    client: &'a Client,
}

impl<'a> LateContributions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Most recent 48-hour contributions.
    pub async fn latest(&self, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/contributions/48hour", &[], opts)
            .await
    }

    /// 48-hour contributions made on `date`.
    pub async fn date(&self, date: NaiveDate, opts: Options) -> Result<Vec<Value>, Error> {
        let [year, month, day] = date_parts(date);
        self.client
            .list(
                "/%s/contributions/48hour/%s/%s/%s",
                &[year.as_str(), month.as_str(), day.as_str()],
                opts,
            )
            .await
    }
}
