//! Pexels video search: curated stock footage behind a JSON API.
//!
//! `GET {base}/videos/search?query=…&per_page=…` with the API key in the
//! `Authorization` header. Pexels videos have no title field; one is
//! derived from the page URL slug.

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::Provider;
use crate::types::{CandidateItem, ProviderId, SourceType};

use super::api_key;

/// Pexels caps `per_page` at 80.
const MAX_PER_PAGE: usize = 80;

#[derive(Debug, Deserialize)]
struct PexelsResponse {
    videos: Vec<PexelsVideo>,
}

#[derive(Debug, Deserialize)]
struct PexelsVideo {
    id: u64,
    url: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    duration: Option<u64>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    user: Option<PexelsUser>,
}

#[derive(Debug, Deserialize)]
struct PexelsUser {
    name: String,
}

/// Live Pexels API client.
#[derive(Debug, Clone, Copy, Default)]
pub struct PexelsProvider;

impl Provider for PexelsProvider {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
        config: &SearchConfig,
    ) -> Result<Vec<CandidateItem>, SearchError> {
        let key = api_key(config, ProviderId::Pexels)?;
        tracing::trace!(query, "Pexels search");

        let per_page = max_results.clamp(1, MAX_PER_PAGE).to_string();
        let base = config.endpoints.pexels.trim_end_matches('/');
        let endpoint = format!("{base}/videos/search");

        let client = http::build_client(config)?;
        let response = client
            .get(endpoint)
            .query(&[("query", query), ("per_page", per_page.as_str())])
            .header("Authorization", key)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Pexels request failed: {e}")))?;
        let body: PexelsResponse = http::check_status("Pexels", response)?
            .json()
            .await
            .map_err(|e| SearchError::Parse(format!("Pexels response: {e}")))?;

        tracing::trace!(count = body.videos.len(), "Pexels response received");

        Ok(body
            .videos
            .into_iter()
            .take(max_results)
            .map(into_candidate)
            .collect())
    }

    fn provider_id(&self) -> ProviderId {
        ProviderId::Pexels
    }
}

fn into_candidate(video: PexelsVideo) -> CandidateItem {
    let title = title_from_url(&video.url).unwrap_or_else(|| format!("Pexels video {}", video.id));
    let description = match &video.user {
        Some(user) => format!("{title}. Stock footage by {} on Pexels.", user.name),
        None => format!("{title}. Stock footage on Pexels."),
    };

    let mut item = CandidateItem::new(title, description, video.url, SourceType::Curated);
    item.thumbnail = video.image;
    item.duration = video.duration.map(format_duration);
    item.resolution = match (video.width, video.height) {
        (Some(w), Some(h)) => Some(format!("{w}x{h}")),
        _ => None,
    };
    item.channel = video.user.map(|u| u.name);
    item.license = Some("Pexels License".to_owned());
    item.source_name = Some(ProviderId::Pexels.name().to_owned());
    item
}

/// `https://www.pexels.com/video/aerial-view-of-a-forest-856789/` →
/// `Aerial view of a forest`.
fn title_from_url(url: &str) -> Option<String> {
    let slug = url.trim_end_matches('/').rsplit('/').next()?;
    let mut words: Vec<&str> = slug.split('-').filter(|w| !w.is_empty()).collect();
    if words.last().is_some_and(|w| w.parse::<u64>().is_ok()) {
        words.pop();
    }
    let sentence = words.join(" ");
    let mut chars = sentence.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

/// Seconds → `m:ss`.
pub(crate) fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
