//! Electronic filings submitted to the FEC.

use chrono::NaiveDate;
use serde_json::Value;

use super::date_parts;
use crate::{Client, Error, Options};

/// Filings endpoints.
pub struct Filings<'a> {
    client: &'a Client,
}

impl<'a> Filings<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Today's electronic filings.
    pub async fn today(&self, opts: Options) -> Result<Vec<Value>, Error> {
        self.client.list("/%s/filings", &[], opts).await
    }

    /// Electronic filings received on `date`.
    pub async fn date(&self, date: NaiveDate, opts: Options) -> Result<Vec<Value>, Error> {
        let [year, month, day] = date_parts(date);
        self.client
            .list(
                "/%s/filings/%s/%s/%s",
                &[year.as_str(), month.as_str(), day.as_str()],
                opts,
            )
            .await
    }

    /// The filing form types known to the API.
    pub async fn form_types(&self, opts: Options) -> Result<Vec<Value>, Error> {
        self.client.list("/%s/filings/types", &[], opts).await
    }

    /// Filings of one form type, e.g. `F3` or `F24`.
    pub async fn by_type(&self, form_type: &str, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/filings/types/%s", &[form_type], opts)
            .await
    }

    /// Recent amended filings.
    pub async fn amendments(&self, opts: Options) -> Result<Vec<Value>, Error> {
        self.client.list("/%s/filings/amendments", &[], opts).await
    }
}
