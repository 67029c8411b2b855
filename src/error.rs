//! Error types for the broll host.

/// Top-level error type for configuration and CLI plumbing.
#[derive(Debug, thiserror::Error)]
pub enum BrollError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<broll_search::SearchError> for BrollError {
    fn from(err: broll_search::SearchError) -> Self {
        match err {
            broll_search::SearchError::Config(msg) => Self::Config(msg),
            other => Self::Config(other.to_string()),
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, BrollError>;
