//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which providers are queried, per-provider
//! timeouts and result counts, scoring tunables, provider endpoints and the
//! API keys handed to providers.

use crate::credentials::Credentials;
use crate::error::SearchError;
use crate::types::ProviderId;

/// Base URLs for every network-backed provider.
///
/// Overridable so tests (and self-hosted proxies) can redirect traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Pexels API root.
    pub pexels: String,
    /// YouTube Data API v3 root.
    pub youtube: String,
    /// SerpApi root.
    pub serpapi: String,
    /// Mixkit site root.
    pub mixkit: String,
    /// Coverr site root.
    pub coverr: String,
    /// Videvo site root.
    pub videvo: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            pexels: "https://api.pexels.com".into(),
            youtube: "https://www.googleapis.com/youtube/v3".into(),
            serpapi: "https://serpapi.com".into(),
            mixkit: "https://mixkit.co".into(),
            coverr: "https://coverr.co".into(),
            videvo: "https://www.videvo.net".into(),
        }
    }
}

/// Tunables for the relevance scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Maximum number of content words compared in the fuzzy pass.
    /// `None` compares every word.
    pub fuzzy_word_limit: Option<usize>,
}

/// Configuration for an aggregate search.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Providers used by [`crate::search`]. [`crate::aggregate`] takes its
    /// provider set explicitly.
    pub providers: Vec<ProviderId>,
    /// Results requested from each provider (live or synthetic).
    pub max_results_per_provider: usize,
    /// Per-provider timeout in seconds. Expiry selects the fallback set.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in list.
    pub user_agent: Option<String>,
    /// Scorer tunables.
    pub scoring: ScoringConfig,
    /// Truncate the ranked list to this many items. `None` keeps all.
    pub max_results_total: Option<usize>,
    /// Provider base URLs.
    pub endpoints: Endpoints,
    /// Provider API keys.
    pub credentials: Credentials,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            providers: ProviderId::all().to_vec(),
            max_results_per_provider: 8,
            timeout_seconds: 10,
            user_agent: None,
            scoring: ScoringConfig::default(),
            max_results_total: None,
            endpoints: Endpoints::default(),
            credentials: Credentials::default(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results_per_provider` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `max_results_total`, when set, must be greater than 0
    /// - `scoring.fuzzy_word_limit`, when set, must be greater than 0
    ///
    /// An empty provider list is valid and yields an empty result set.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results_per_provider == 0 {
            return Err(SearchError::Config(
                "max_results_per_provider must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.max_results_total == Some(0) {
            return Err(SearchError::Config(
                "max_results_total must be greater than 0 when set".into(),
            ));
        }
        if self.scoring.fuzzy_word_limit == Some(0) {
            return Err(SearchError::Config(
                "fuzzy_word_limit must be greater than 0 when set".into(),
            ));
        }
        Ok(())
    }
}
