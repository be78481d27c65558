//! Committee lookups, searches and per-committee listings.

use serde_json::Value;

use crate::{Client, Error, Options, QueryParams};

/// Committees endpoints. Committee IDs look like `C00431171`.
pub struct Committees<'a> {
    client: &'a Client,
}

impl<'a> Committees<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Newly registered committees.
    pub async fn latest(&self, opts: Options) -> Result<Vec<Value>, Error> {
        self.client.list("/%s/committees/new", &[], opts).await
    }

    /// Details for a single committee within the cycle.
    pub async fn get(&self, committee_id: &str, opts: Options) -> Result<Value, Error> {
        self.client
            .detail("/%s/committees/%s", &[committee_id], opts)
            .await
    }

    /// Committees whose name matches `query`.
    pub async fn filter(&self, query: &str, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list_with(
                "/%s/committees/search",
                &[],
                opts,
                QueryParams::new().with_query(query),
            )
            .await
    }

    /// 48-hour notices of contributions to a candidate committee.
    pub async fn late_contributions(
        &self,
        committee_id: &str,
        opts: Options,
    ) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/committees/%s/48hour", &[committee_id], opts)
            .await
    }

    pub async fn filings(&self, committee_id: &str, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/committees/%s/filings", &[committee_id], opts)
            .await
    }

    pub async fn contributions(
        &self,
        committee_id: &str,
        opts: Options,
    ) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/committees/%s/contributions", &[committee_id], opts)
            .await
    }

    /// A committee's contributions to one candidate.
    pub async fn contributions_to_candidate(
        &self,
        committee_id: &str,
        candidate_id: &str,
        opts: Options,
    ) -> Result<Vec<Value>, Error> {
        self.client
            .list(
                "/%s/committees/%s/contributions/candidates/%s",
                &[committee_id, candidate_id],
                opts,
            )
            .await
    }

    /// Races where the committee has made independent expenditures.
    pub async fn ie_totals(&self, committee_id: &str, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list(
                "/%s/committees/%s/independent_expenditures/races",
                &[committee_id],
                opts,
            )
            .await
    }

    /// Leadership PACs.
    pub async fn leadership(&self, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/committees/leadership", &[], opts)
            .await
    }
}
