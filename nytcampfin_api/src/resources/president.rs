use serde_json::Value;

use crate::{Client, Error, Options};

/// Presidential race totals.
pub struct President<'a> {
    client: &'a Client,
}

impl<'a> President<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Presidential candidates with top-level totals.
    pub async fn candidates(&self, opts: Options) -> Result<Vec<Value>, Error> {
        self.client.list("/%s/president/totals", &[], opts).await
    }

    /// Financial details for one presidential candidate, by FEC committee
    /// ID or by last name.
    pub async fn detail(&self, candidate: &str, opts: Options) -> Result<Value, Error> {
        self.client
            .detail("/%s/president/candidates/%s", &[candidate], opts)
            .await
    }

    pub async fn state(&self, state: &str, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/president/states/%s", &[state], opts)
            .await
    }

    pub async fn zipcode(&self, zipcode: &str, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/president/zips/%s", &[zipcode], opts)
            .await
    }
}
