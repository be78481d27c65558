//! HTTP client for the New York Times Campaign Finance API.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{
    path,
    query::{Options, QueryParams, Unwrap, API_KEY_PARAM, OFFSET_PARAM},
    resources::{
        Candidates, Committees, Filings, IndependentExpenditures, LateContributions, President,
    },
    transport::{HttpResponse, ReqwestTransport, Transport},
    Error,
};

/// Root of every resource path.
pub const BASE_URI: &str = "http://api.nytimes.com/svc/elections/us/v3/finances";

/// Election cycle used when neither the client nor the call names one.
pub const CURRENT_CYCLE: u32 = 2012;

/// Request timeout of the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Field added to results when URL annotation is enabled.
pub const DEBUG_URL_FIELD: &str = "_url";

/// Client handle for the Campaign Finance API.
///
/// Holds the API key, base URI, default cycle and transport. Cloning is
/// cheap and clones share the transport. Resource methods live on the
/// facades returned by [`Client::filings`], [`Client::candidates`] and
/// friends; [`Client::fetch`] and [`Client::fetch_url`] are the generic
/// entry points underneath them.
#[derive(Clone)]
pub struct Client {
    api_key: Arc<str>,
    base_uri: Arc<str>,
    cycle: u32,
    transport: Arc<dyn Transport>,
    debug_urls: bool,
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    api_key: String,
    base_uri: String,
    cycle: u32,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
    debug_urls: bool,
}

impl ClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_uri: BASE_URI.to_string(),
            cycle: CURRENT_CYCLE,
            timeout: DEFAULT_TIMEOUT,
            transport: None,
            debug_urls: false,
        }
    }

    /// Points the client somewhere other than the production API. Used for testing with wiremock.
    pub fn base_uri(mut self, base_uri: &str) -> Self {
        self.base_uri = base_uri.to_string();
        self
    }

    /// Default election cycle for calls that don't pass one.
    pub fn cycle(mut self, cycle: u32) -> Self {
        self.cycle = cycle;
        self
    }

    /// Timeout of the default transport. Ignored when a transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the default `reqwest` transport, e.g. with a caching decorator.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Like [`ClientBuilder::transport`] for a transport that is already shared.
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Adds a `_url` field (API key stripped) to every object result.
    pub fn debug_urls(mut self, enabled: bool) -> Self {
        self.debug_urls = enabled;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let base_uri = self.base_uri.trim_end_matches('/');
        Url::parse(base_uri).map_err(|e| {
            tracing::error!("Invalid base URI {}: {}", base_uri, e);
            Error::InvalidUrl(e)
        })?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };

        Ok(Client {
            api_key: Arc::from(api_key),
            base_uri: Arc::from(base_uri),
            cycle: self.cycle,
            transport,
            debug_urls: self.debug_urls,
        })
    }
}

impl Client {
    /// Creates a client for the production API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        ClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Creates a client with a custom base URI. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        ClientBuilder::new(api_key).base_uri(base_url).build()
    }

    /// Default election cycle.
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn filings(&self) -> Filings<'_> {
        Filings::new(self)
    }

    pub fn candidates(&self) -> Candidates<'_> {
        Candidates::new(self)
    }

    pub fn committees(&self) -> Committees<'_> {
        Committees::new(self)
    }

    pub fn president(&self) -> President<'_> {
        President::new(self)
    }

    pub fn independent_expenditures(&self) -> IndependentExpenditures<'_> {
        IndependentExpenditures::new(self)
    }

    pub fn late_contributions(&self) -> LateContributions<'_> {
        LateContributions::new(self)
    }

    /// Builds the request URL for a template, its positional values and query parameters.
    ///
    /// A `template` that is already a full URL under the base URI is used
    /// as-is: no substitution and no `.json` suffix. `offset=0` is added
    /// unless an offset is already present, then `api-key` last.
    pub fn get_url<S: AsRef<str>>(
        &self,
        template: &str,
        args: &[S],
        params: &QueryParams,
    ) -> Result<Url, Error> {
        let url = if path::is_absolute_under(template, &self.base_uri) {
            Url::parse(template)?
        } else {
            let resource = path::render(template, args)?;
            Url::parse(&format!("{}{}.json", self.base_uri, resource))?
        };

        let mut url = params.add_to_url(&url);
        let has_offset = url.query_pairs().any(|(k, _)| k == OFFSET_PARAM);
        {
            let mut pairs = url.query_pairs_mut();
            if !has_offset {
                pairs.append_pair(OFFSET_PARAM, "0");
            }
            pairs.append_pair(API_KEY_PARAM, &self.api_key);
        }
        Ok(url)
    }

    /// Issues one GET and unwraps the envelope.
    ///
    /// 200 and 304 decode the body and apply `unwrap`. 404 becomes
    /// [`Error::NotFound`], any other status [`Error::Api`], both carrying
    /// the server's `errors` joined with `"; "`.
    pub async fn fetch<S: AsRef<str>>(
        &self,
        template: &str,
        args: &[S],
        params: QueryParams,
        unwrap: Unwrap,
    ) -> Result<Value, Error> {
        if self.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let url = self.get_url(template, args, &params)?;
        let shown = without_api_key(&url);
        tracing::debug!("GET {}", shown);

        let resp = self.transport.get(&url).await?;
        let envelope = decode(resp)?;
        let mut value = unwrap.apply(envelope)?;
        if self.debug_urls {
            annotate(&mut value, shown.as_str());
        }
        Ok(value)
    }

    /// Fetches a URL taken from an earlier response (a `next` or related link).
    pub async fn fetch_url(&self, url: &str, unwrap: Unwrap) -> Result<Value, Error> {
        if !path::is_absolute_under(url, &self.base_uri) {
            return Err(Error::ForeignUrl(url.to_string()));
        }
        self.fetch::<&str>(url, &[], QueryParams::new(), unwrap)
            .await
    }

    /// Listing call: the cycle fills the template's first slot, `args` the rest.
    pub(crate) async fn list(
        &self,
        template: &str,
        args: &[&str],
        opts: Options,
    ) -> Result<Vec<Value>, Error> {
        self.list_with(template, args, opts, QueryParams::new())
            .await
    }

    pub(crate) async fn list_with(
        &self,
        template: &str,
        args: &[&str],
        opts: Options,
        params: QueryParams,
    ) -> Result<Vec<Value>, Error> {
        let args = self.scoped_args(args, opts);
        let params = params.merge(opts.params());
        match self
            .fetch(template, args.as_slice(), params, Unwrap::Results)
            .await?
        {
            Value::Array(items) => Ok(items),
            _ => Err(Error::Envelope("`results` is not an array".to_string())),
        }
    }

    /// Detail call: returns the single expected element of `results`.
    pub(crate) async fn detail(
        &self,
        template: &str,
        args: &[&str],
        opts: Options,
    ) -> Result<Value, Error> {
        let args = self.scoped_args(args, opts);
        self.fetch(template, args.as_slice(), opts.params(), Unwrap::FirstResult)
            .await
    }

    fn scoped_args(&self, args: &[&str], opts: Options) -> Vec<String> {
        let mut scoped = Vec::with_capacity(args.len() + 1);
        scoped.push(opts.cycle_or(self.cycle).to_string());
        scoped.extend(args.iter().map(|a| a.to_string()));
        scoped
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_uri", &self.base_uri)
            .field("cycle", &self.cycle)
            .field("debug_urls", &self.debug_urls)
            .finish_non_exhaustive()
    }
}

fn decode(resp: HttpResponse) -> Result<Value, Error> {
    if resp.is_success() {
        return serde_json::from_str(&resp.body).map_err(|e| {
            tracing::error!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&resp.body)
            );
            Error::Parse(e)
        });
    }

    let message = error_message(resp.status, &resp.body)?;
    tracing::error!("Request failed with status {}: {}", resp.status, message);
    if resp.status == 404 {
        Err(Error::NotFound(message))
    } else {
        Err(Error::Api {
            status: resp.status,
            message,
        })
    }
}

/// Joins the `errors` of an error body with `"; "`. Entries are either
/// strings or `{"error": "..."}` objects.
pub(crate) fn error_message(status: u16, body: &str) -> Result<String, Error> {
    let content: Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            "Failed to parse error body ({}): {} | body: {}",
            status,
            e,
            truncate_body(body)
        );
        Error::Parse(e)
    })?;

    let messages: Vec<&str> = match content.get("errors") {
        Some(Value::Array(errors)) => errors
            .iter()
            .filter_map(|e| match e {
                Value::String(s) => Some(s.as_str()),
                other => other.get("error").and_then(Value::as_str),
            })
            .collect(),
        Some(Value::String(s)) => vec![s.as_str()],
        _ => Vec::new(),
    };

    if messages.is_empty() {
        Ok(format!("HTTP {}", status))
    } else {
        Ok(messages.join("; "))
    }
}

/// Copy of `url` without the `api-key` pair, for logs and annotations.
fn without_api_key(url: &Url) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != API_KEY_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let mut clean = url.clone();
    if kept.is_empty() {
        clean.set_query(None);
    } else {
        clean.query_pairs_mut().clear().extend_pairs(kept);
    }
    clean
}

fn annotate(value: &mut Value, url: &str) {
    match value {
        Value::Object(map) => {
            map.insert(DEBUG_URL_FIELD.to_string(), Value::String(url.to_string()));
        }
        Value::Array(items) => {
            for item in items {
                if let Value::Object(map) = item {
                    map.insert(DEBUG_URL_FIELD.to_string(), Value::String(url.to_string()));
                }
            }
        }
        _ => {}
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
