//! Live-then-synthetic composition.
//!
//! A provider's live strategy is bounded by the configured timeout. An
//! error, a timeout, or an empty live result all select the synthetic set
//! for the same provider, so every requested provider contributes items.

use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::provider::Provider;
use crate::types::CandidateItem;

use super::fallback::SyntheticProvider;

/// Wraps a live provider with its synthetic stand-in.
#[derive(Debug, Clone)]
pub struct ResilientProvider<P> {
    live: P,
    fallback: SyntheticProvider,
}

impl<P: Provider> ResilientProvider<P> {
    /// Pair `live` with the synthetic provider of the same id.
    pub fn new(live: P) -> Self {
        let fallback = SyntheticProvider::new(live.provider_id());
        Self { live, fallback }
    }

    /// Query the live strategy, substituting synthetic items when it does
    /// not deliver. Never fails.
    pub async fn search_or_fallback(
        &self,
        query: &str,
        max_results: usize,
        config: &SearchConfig,
    ) -> Vec<CandidateItem> {
        let id = self.live.provider_id();
        let limit = Duration::from_secs(config.timeout_seconds);

        let live = self.live.search(query, max_results, config);
        let outcome = match tokio::time::timeout(limit, live).await {
            Ok(result) => result,
            Err(_) => Err(SearchError::Timeout(id.to_string())),
        };

        match outcome {
            Ok(items) if !items.is_empty() => {
                tracing::debug!(provider = %id, count = items.len(), "live results");
                items
            }
            Ok(_) => {
                tracing::debug!(
                    provider = %id,
                    "live search returned nothing, using synthetic results"
                );
                self.fallback.generate(query, max_results, config)
            }
            Err(SearchError::MissingCredential(name)) => {
                tracing::debug!(
                    provider = %id,
                    credential = %name,
                    "no credential, using synthetic results"
                );
                self.fallback.generate(query, max_results, config)
            }
            Err(err) => {
                tracing::warn!(
                    provider = %id,
                    error = %err,
                    "live search failed, using synthetic results"
                );
                self.fallback.generate(query, max_results, config)
            }
        }
    }
}
