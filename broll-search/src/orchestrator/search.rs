//! Core aggregation: concurrent provider fan-out, score, rank.
//!
//! Every enabled provider is queried with the enhanced query. The merged
//! candidates are scored against the query the user typed, sorted, and
//! optionally truncated.

use crate::config::SearchConfig;
use crate::providers::{
    CatalogProvider, CatalogSite, PexelsProvider, ResilientProvider, WebSearchProvider,
    YouTubeProvider,
};
use crate::semantic::enhance_query;
use crate::types::{CandidateItem, ProviderId};

use super::scoring::{rank, score_all};

/// Aggregate results for `query` from `enabled` providers.
///
/// # Pipeline
///
/// 1. Blank query or empty provider set short-circuits to an empty list
/// 2. Build the enhanced query once (falls back to the trimmed query when
///    every token is a stop word)
/// 3. Fan out one future per distinct provider with
///    [`futures::future::join_all`]; each one resolves to live or
///    synthetic items and never fails
/// 4. Concatenate in invocation order
/// 5. Score every item against the original query
/// 6. Stable sort by score descending, then match priority
/// 7. Truncate to `config.max_results_total` when set
///
/// Dropping the returned future cancels in-flight provider requests.
pub async fn aggregate(
    query: &str,
    enabled: &[ProviderId],
    config: &SearchConfig,
) -> Vec<CandidateItem> {
    let query = query.trim();
    if query.is_empty() || enabled.is_empty() {
        return Vec::new();
    }

    let mut providers: Vec<ProviderId> = Vec::with_capacity(enabled.len());
    for id in enabled {
        if !providers.contains(id) {
            providers.push(*id);
        }
    }

    let enhanced = enhance_query(query);
    let call_query = if enhanced.is_empty() {
        query
    } else {
        enhanced.as_str()
    };
    tracing::trace!(query, enhanced = call_query, "aggregate search");

    let futures: Vec<_> = providers
        .iter()
        .map(|id| query_provider(*id, call_query, config))
        .collect();
    let outcomes = futures::future::join_all(futures).await;

    let mut items: Vec<CandidateItem> = Vec::new();
    for (id, batch) in providers.iter().zip(outcomes) {
        tracing::debug!(provider = %id, count = batch.len(), "provider finished");
        items.extend(batch);
    }

    score_all(&mut items, query, &config.scoring);
    rank(&mut items);

    if let Some(limit) = config.max_results_total {
        items.truncate(limit);
    }

    tracing::debug!(count = items.len(), "aggregate complete");
    items
}

/// Query one provider through its resilient wrapper.
async fn query_provider(id: ProviderId, query: &str, config: &SearchConfig) -> Vec<CandidateItem> {
    let max = config.max_results_per_provider;
    match id {
        ProviderId::Pexels => {
            ResilientProvider::new(PexelsProvider)
                .search_or_fallback(query, max, config)
                .await
        }
        ProviderId::Mixkit | ProviderId::Coverr | ProviderId::Videvo => {
            let Some(site) = CatalogSite::from_provider(id) else {
                return Vec::new();
            };
            ResilientProvider::new(CatalogProvider::new(site))
                .search_or_fallback(query, max, config)
                .await
        }
        ProviderId::YouTube => {
            ResilientProvider::new(YouTubeProvider)
                .search_or_fallback(query, max, config)
                .await
        }
        ProviderId::Web => {
            ResilientProvider::new(WebSearchProvider)
                .search_or_fallback(query, max, config)
                .await
        }
    }
}
