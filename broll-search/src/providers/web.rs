//! General web video search through SerpApi's `google_videos` engine.

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::Provider;
use crate::types::{CandidateItem, ProviderId, SourceType};

use super::api_key;

#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    video_results: Option<Vec<VideoResult>>,
}

#[derive(Debug, Deserialize)]
struct VideoResult {
    title: String,
    link: String,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    channel: Option<String>,
}

/// Live SerpApi client.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSearchProvider;

impl Provider for WebSearchProvider {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
        config: &SearchConfig,
    ) -> Result<Vec<CandidateItem>, SearchError> {
        let key = api_key(config, ProviderId::Web)?;
        tracing::trace!(query, "web video search");

        let num = max_results.max(1).to_string();
        let base = config.endpoints.serpapi.trim_end_matches('/');
        let endpoint = format!("{base}/search.json");

        let client = http::build_client(config)?;
        let response = client
            .get(endpoint)
            .query(&[
                ("engine", "google_videos"),
                ("q", query),
                ("num", num.as_str()),
                ("api_key", key),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("SerpApi request failed: {e}")))?;
        let body: SerpResponse = http::check_status("SerpApi", response)?
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("SerpApi response: {e}")))?;

        parse_response(body, max_results)
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::Web
    }
}

fn parse_response(
    body: SerpResponse,
    max_results: usize,
) -> Result<Vec<CandidateItem>, SearchError> {
    if let Some(error) = body.error {
        return Err(SearchError::Http(format!("SerpApi error: {error}")));
    }
    let results = body
        .video_results
        .ok_or_else(|| SearchError::Parse("SerpApi response has no video_results".into()))?;

    tracing::trace!(count = results.len(), "SerpApi response received");

    Ok(results
        .into_iter()
        .filter(|r| !r.link.is_empty())
        .take(max_results)
        .map(into_candidate)
        .collect())
}

fn into_candidate(result: VideoResult) -> CandidateItem {
    let description = result.snippet.unwrap_or_default();
    let mut item = CandidateItem::new(result.title, description, result.link, SourceType::Web);
    item.thumbnail = result.thumbnail;
    item.duration = result.duration;
    item.channel = result.channel.or_else(|| result.source.clone());
    item.source_name = Some(match result.source {
        Some(source) => source,
        None => ProviderId::Web.name().to_owned(),
    });
    item
}
