//! Library layer for the Campaign Finance client: response caching and
//! environment configuration around `nytcampfin_api`.

pub mod cache;
pub mod config;
pub mod error;
pub mod transport;

pub use nytcampfin_api;
pub use nytcampfin_api::resources;
pub use nytcampfin_api::{Client, ClientBuilder, Error, Options, QueryParams, Unwrap};

pub use cache::MemoryCache;
pub use config::Config;
pub use error::CampfinError;
pub use transport::CachedTransport;
