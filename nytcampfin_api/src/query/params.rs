//! Query string parameters and per-call options.

use url::Url;

/// Name of the query parameter that carries the API key.
pub const API_KEY_PARAM: &str = "api-key";
/// Name of the pagination parameter.
pub const OFFSET_PARAM: &str = "offset";
/// Name of the free-text search parameter.
pub const QUERY_PARAM: &str = "query";

/// Ordered query parameters for a single request.
///
/// Built fresh for every call. The client adds `offset` (when absent) and
/// `api-key` at dispatch time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key/value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Sets the pagination offset.
    pub fn with_offset(self, offset: u32) -> Self {
        self.with(OFFSET_PARAM, offset)
    }

    /// Sets the free-text search term used by the search endpoints.
    pub fn with_query(self, query: &str) -> Self {
        self.with(QUERY_PARAM, query)
    }

    /// Appends every pair of `other` after this set's own pairs.
    pub fn merge(mut self, other: QueryParams) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Appends these parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(self.iter());
        }
        url
    }
}

/// Cycle and offset accepted by every resource method.
///
/// Both default to unset: the cycle falls back to the client's default
/// cycle and the offset to `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub cycle: Option<u32>,
    pub offset: Option<u32>,
}

impl Options {
    /// Scopes the request to an election cycle (e.g. `2010`).
    pub fn with_cycle(mut self, cycle: u32) -> Self {
        self.cycle = Some(cycle);
        self
    }

    /// Sets the pagination offset. The API pages in steps of 20.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// The cycle to use, given the client's default.
    pub fn cycle_or(&self, default: u32) -> u32 {
        self.cycle.unwrap_or(default)
    }

    /// Query parameters carrying the offset, `0` when unset.
    pub fn params(&self) -> QueryParams {
        QueryParams::new().with_offset(self.offset.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_keep_insertion_order() {
        let params = QueryParams::new().with_query("Hallmark").with_offset(20);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("query", "Hallmark"), ("offset", "20")]);
    }

    #[test]
    fn merge_appends_in_order() {
        let params = QueryParams::new()
            .with_query("Smith")
            .merge(QueryParams::new().with_offset(0));
        assert_eq!(params.len(), 2);
        assert_eq!(params.iter().last(), Some(("offset", "0")));
    }

    #[test]
    fn params_get_and_contains() {
        let params = QueryParams::new().with("state", "CA");
        assert_eq!(params.get("state"), Some("CA"));
        assert!(params.contains("state"));
        assert!(!params.contains("offset"));
    }

    #[test]
    fn params_add_to_url_encodes_values() {
        let url = Url::parse("https://example.com/search.json").unwrap();
        let url = QueryParams::new()
            .with_query("Friends of Bob")
            .add_to_url(&url);
        assert_eq!(url.query(), Some("query=Friends+of+Bob"));
    }

    #[test]
    fn empty_params_leave_url_untouched() {
        let url = Url::parse("https://example.com/filings.json").unwrap();
        assert_eq!(QueryParams::new().add_to_url(&url).as_str(), url.as_str());
    }

    #[test]
    fn options_default_offset_is_zero() {
        let params = Options::default().params();
        assert_eq!(params.get(OFFSET_PARAM), Some("0"));
    }

    #[test]
    fn options_offset_passes_through() {
        let params = Options::default().with_offset(20).params();
        assert_eq!(params.get(OFFSET_PARAM), Some("20"));
    }

    #[test]
    fn options_cycle_fallback() {
        assert_eq!(Options::default().cycle_or(2012), 2012);
        assert_eq!(Options::default().with_cycle(2010).cycle_or(2012), 2010);
    }
}
