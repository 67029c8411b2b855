//! # broll-search
//!
//! Semantic query expansion and relevance ranking for b-roll video search.
//!
//! A free-text query is reduced to keywords, expanded through a fixed
//! category taxonomy, and sent to several heterogeneous providers (stock
//! catalogs, a video platform, general web search). Every returned clip is
//! scored against the original query and the merged set is returned as one
//! ranked list with a match type per item.
//!
//! ## Design
//!
//! - Providers are queried concurrently, each bounded by its own timeout
//! - A provider that fails, times out, or lacks a credential contributes a
//!   deterministic synthetic result set instead
//! - Scoring and ranking are pure CPU passes over the collected set
//! - Search queries are logged only at trace level

pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod provider;
pub mod providers;
pub mod semantic;
pub mod types;

pub use config::{Endpoints, ScoringConfig, SearchConfig};
pub use credentials::Credentials;
pub use error::{Result, SearchError};
pub use provider::Provider;
pub use semantic::{
    enhance_query, expand, extract_keywords, insights, ExpandedKeywords, QueryInsights,
};
pub use types::{CandidateItem, MatchType, ProviderId, SourceType};

/// Aggregate ranked results for `query` from the `enabled` providers.
///
/// Never fails: providers that cannot deliver contribute synthetic items.
/// A blank query or an empty provider set yields an empty list.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use broll_search::{aggregate, ProviderId, SearchConfig};
///
/// let config = SearchConfig::default();
/// let providers = [ProviderId::Pexels, ProviderId::YouTube];
/// let results = aggregate("business meeting", &providers, &config).await;
/// for item in &results {
///     println!("{:.1} {}: {}", item.relevance_score, item.title, item.url);
/// }
/// # }
/// ```
pub async fn aggregate(
    query: &str,
    enabled: &[ProviderId],
    config: &SearchConfig,
) -> Vec<CandidateItem> {
    orchestrator::search::aggregate(query, enabled, config).await
}

/// Search with the providers listed in `config.providers`.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` fails validation. Provider
/// failures never surface here.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> broll_search::Result<()> {
/// let config = broll_search::SearchConfig {
///     credentials: broll_search::Credentials::from_env(),
///     ..Default::default()
/// };
/// let results = broll_search::search("forest", &config).await?;
/// println!("{} clips", results.len());
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<CandidateItem>> {
    config.validate()?;
    Ok(aggregate(query, &config.providers, config).await)
}
