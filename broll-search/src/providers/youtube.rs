//! YouTube Data API v3 search, restricted to Creative Commons videos.

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::Provider;
use crate::types::{CandidateItem, ProviderId, SourceType};

use super::api_key;

/// The search endpoint returns at most 50 items per page.
const MAX_PER_PAGE: usize = 50;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel_title: Option<String>,
    #[serde(default)]
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    #[serde(default)]
    high: Option<Thumbnail>,
    #[serde(default)]
    medium: Option<Thumbnail>,
    #[serde(default)]
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// Live YouTube Data API client.
#[derive(Debug, Clone, Copy, Default)]
pub struct YouTubeProvider;

impl Provider for YouTubeProvider {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
        config: &SearchConfig,
    ) -> Result<Vec<CandidateItem>, SearchError> {
        let key = api_key(config, ProviderId::YouTube)?;
        tracing::trace!(query, "YouTube search");

        let per_page = max_results.clamp(1, MAX_PER_PAGE).to_string();
        let base = config.endpoints.youtube.trim_end_matches('/');
        let endpoint = format!("{base}/search");

        let client = http::build_client(config)?;
        let response = client
            .get(endpoint)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("videoLicense", "creativeCommon"),
                ("maxResults", per_page.as_str()),
                ("q", query),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("YouTube request failed: {e}")))?;
        let body: SearchResponse = http::check_status("YouTube", response)?
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("YouTube response: {e}")))?;

        tracing::trace!(count = body.items.len(), "YouTube response received");

        Ok(body
            .items
            .into_iter()
            .filter_map(into_candidate)
            .take(max_results)
            .collect())
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::YouTube
    }
}

/// Items without a video id (channels, playlists) are skipped.
fn into_candidate(item: SearchItem) -> Option<CandidateItem> {
    let video_id = item.id.video_id?;
    let snippet = item.snippet;

    let mut candidate = CandidateItem::new(
        unescape_html(&snippet.title),
        unescape_html(&snippet.description),
        format!("https://www.youtube.com/watch?v={video_id}"),
        SourceType::Platform,
    );
    candidate.thumbnail = snippet
        .thumbnails
        .and_then(|t| t.high.or(t.medium).or(t.default))
        .map(|t| t.url);
    candidate.channel = snippet.channel_title;
    candidate.license = Some("Creative Commons".to_owned());
    candidate.source_name = Some(ProviderId::YouTube.name().to_owned());
    Some(candidate)
}

/// The API returns titles with HTML entities escaped.
pub(crate) fn unescape_html(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
