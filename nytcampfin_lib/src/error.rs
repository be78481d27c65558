//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding configuration failures.
#[derive(Debug)]
pub enum CampfinError {
    /// An error from the underlying API client.
    Api(nytcampfin_api::Error),
    /// The environment did not describe a usable configuration.
    Config(String),
}

impl CampfinError {
    /// Returns `true` when the API answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_not_found())
    }
}

impl fmt::Display for CampfinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CampfinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<nytcampfin_api::Error> for CampfinError {
    fn from(e: nytcampfin_api::Error) -> Self {
        Self::Api(e)
    }
}
