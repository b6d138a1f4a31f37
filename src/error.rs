//! Error types for the searchtruth command-line host.

use searchtruth_engine::SearchError;

/// Top-level error type for the host application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration file could not be parsed or holds invalid values.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine rejected the query or its client configuration.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Bad command-line arguments.
    #[error("usage error: {0}")]
    Usage(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
