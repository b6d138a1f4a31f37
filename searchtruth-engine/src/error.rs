//! Error types for the searchtruth-engine crate.
//!
//! Transport and parse failures are recovered inside the engine and turned
//! into "service unavailable" outcomes; only [`SearchError::InvalidQuery`]
//! and [`SearchError::Config`] ever reach a caller of the public API.

/// Errors that can occur while fetching or extracting search results.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The HTTP request failed or the server answered with a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The response could not be turned into a usable document, or a
    /// strategy selector could not be compiled.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The query is missing its keyword or country, or asks for zero results.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl SearchError {
    /// Whether this error belongs to the fetch/parse class that the engine
    /// recovers into a "service unavailable" outcome.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout(_) | Self::Parse(_))
    }
}

/// Convenience type alias for searchtruth-engine results.
pub type Result<T> = std::result::Result<T, SearchError>;
