//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API answered 404. Carries the server's messages joined with `"; "`.
    #[error("Not found: {0}")]
    NotFound(String),
    /// The API answered with any other non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    /// A response body (success or error) was not valid JSON.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    /// The HTTP transport failed before a status was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// No API key was configured. Raised before any request is sent.
    #[error("API key is missing")]
    MissingApiKey,
    /// A path template received the wrong number of positional values.
    #[error("Path template expects {expected} values, got {given}")]
    Template { expected: usize, given: usize },
    /// A positional value can't form a path segment (empty, `.` or `..`).
    #[error("Invalid path value: {0:?}")]
    PathValue(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A follow-up link is not on the base URI's host or below its path.
    #[error("URL is not under the API base URI: {0}")]
    ForeignUrl(String),
    /// The response envelope did not have the shape the unwrap policy needs.
    #[error("Unexpected response envelope: {0}")]
    Envelope(String),
}

impl Error {
    /// Returns `true` for the 404 failure kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// The server-reported message for [`Error::NotFound`] and [`Error::Api`].
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::NotFound(message) | Error::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
