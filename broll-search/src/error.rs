//! Error types for the broll-search crate.
//!
//! These errors only travel between a live provider and the resilient
//! wrapper around it. The aggregator never surfaces them: every provider
//! failure is turned into that provider's synthetic result set. No API keys
//! appear in error messages.

/// Errors that can occur while querying a provider.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to a provider failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A provider did not answer within the configured timeout.
    #[error("provider timed out: {0}")]
    Timeout(String),

    /// Failed to parse a provider's JSON or HTML response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The provider needs an API key that is not configured.
    #[error("missing credential: {0}")]
    MissingCredential(String),
}

/// Convenience type alias for broll-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
