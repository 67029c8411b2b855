//! Trait definition for pluggable clip providers.
//!
//! Each source (Pexels, the URL-addressed catalogs, YouTube, web search)
//! implements [`Provider`] for its live strategy. The synthetic fallback
//! implements it too, and [`crate::providers::ResilientProvider`] composes
//! the two.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{CandidateItem, ProviderId};

/// A pluggable clip provider.
///
/// Implementors map one source's native response into [`CandidateItem`]
/// values. Each live implementation handles its own:
///
/// - URL construction with query encoding
/// - Credential lookup from `config.credentials`
/// - HTTP request and status handling
/// - JSON or HTML parsing
///
/// All implementations must be `Send + Sync` so providers can be queried
/// concurrently.
pub trait Provider: Send + Sync {
    /// Search for up to `max_results` clips matching `query`.
    ///
    /// `query` is the enhanced query, not the text the user typed.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if a credential is missing, the request
    /// fails, or the response cannot be parsed.
    fn search(
        &self,
        query: &str,
        max_results: usize,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<CandidateItem>, SearchError>> + Send;

    /// Returns which [`ProviderId`] this implementation represents.
    fn provider_id(&self) -> ProviderId;
}
