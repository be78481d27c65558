//! Client for the New York Times Campaign Finance API (v3).
//!
//! Every call composes a URL from a path template, attaches the API key,
//! issues one GET and unwraps the `{"results": [...]}` envelope. Resource
//! methods are grouped into facades hanging off [`Client`]:
//!
//! ```rust,no_run
//! use nytcampfin_api::{Client, Options};
//!
//! # async fn run() -> Result<(), nytcampfin_api::Error> {
//! let client = Client::new("my-api-key")?;
//! let filings = client.filings().today(Options::default()).await?;
//! let obama = client.candidates().get("P80003338", Options::default().with_cycle(2012)).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod path;
mod query;
pub mod resources;
pub mod transport;
pub use self::client::{
    Client, ClientBuilder, BASE_URI, CURRENT_CYCLE, DEBUG_URL_FIELD, DEFAULT_TIMEOUT,
};
pub use self::errors::Error;
pub use self::query::{
    results, Options, QueryParams, Unwrap, API_KEY_PARAM, OFFSET_PARAM, QUERY_PARAM,
};
pub use self::transport::{HttpResponse, ReqwestTransport, Transport};
