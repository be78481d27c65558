//! Candidate lookups, searches and rankings.

use serde_json::Value;

use crate::{Client, Error, Options, QueryParams};

/// Candidates endpoints.
///
/// Candidate IDs are FEC identifiers such as `P80003338` or `H4NY11138`.
pub struct Candidates<'a> {
    client: &'a Client,
}

impl<'a> Candidates<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Newly registered candidates.
    pub async fn latest(&self, opts: Options) -> Result<Vec<Value>, Error> {
        self.client.list("/%s/candidates/new", &[], opts).await
    }

    /// Details for a single candidate within the cycle.
    ///
    /// An unknown ID yields [`Error::NotFound`].
    pub async fn get(&self, candidate_id: &str, opts: Options) -> Result<Value, Error> {
        self.client
            .detail("/%s/candidates/%s", &[candidate_id], opts)
            .await
    }

    /// Candidates whose name matches `query`.
    pub async fn filter(&self, query: &str, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list_with(
                "/%s/candidates/search",
                &[],
                opts,
                QueryParams::new().with_query(query),
            )
            .await
    }

    /// 48-hour notices of contributions to the candidate.
    pub async fn late_contributions(
        &self,
        candidate_id: &str,
        opts: Options,
    ) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/candidates/%s/48hour", &[candidate_id], opts)
            .await
    }

    /// Leading candidates in a category such as `pac-total` or `end-cash`.
    pub async fn leaders(&self, category: &str, opts: Options) -> Result<Vec<Value>, Error> {
        self.client
            .list("/%s/candidates/leaders/%s", &[category], opts)
            .await
    }

    /// Candidates for seats in a state, optionally narrowed to a chamber
    /// (`house` or `senate`) and a district. A district is only used
    /// together with a chamber.
    pub async fn seats(
        &self,
        state: &str,
        chamber: Option<&str>,
        district: Option<&str>,
        opts: Options,
    ) -> Result<Vec<Value>, Error> {
        match (chamber, district) {
            (Some(chamber), Some(district)) => {
                self.client
                    .list("/%s/seats/%s/%s/%s", &[state, chamber, district], opts)
                    .await
            }
            (Some(chamber), None) => {
                self.client
                    .list("/%s/seats/%s/%s", &[state, chamber], opts)
                    .await
            }
            (None, _) => self.client.list("/%s/seats/%s", &[state], opts).await,
        }
    }
}
