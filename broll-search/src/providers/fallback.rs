//! Deterministic synthetic results used when a live provider is unavailable.
//!
//! Items are built from small template tables. The only inputs are the
//! enhanced query and the loop index, so the same query always produces
//! the same items.

use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::provider::Provider;
use crate::types::{CandidateItem, ProviderId, SourceType};

use super::catalog::{search_url, CatalogSite};

/// Words of the enhanced query used in synthetic titles.
const SUBJECT_WORDS: usize = 4;

const STOCK_TITLES: &[&str] = &[
    "{} - Cinematic Stock Footage",
    "{} in Slow Motion",
    "Aerial View of {}",
    "{} Timelapse",
    "Close-up {} B-Roll",
    "{} Seamless Background Loop",
];

const STOCK_DURATIONS: &[&str] = &["0:08", "0:12", "0:15", "0:20", "0:30", "0:45"];

const STOCK_RESOLUTIONS: &[&str] = &["4K", "1080p", "1080p", "720p"];

const PLATFORM_TITLES: &[&str] = &[
    "{} | Free B-Roll Footage (No Copyright)",
    "{} Stock Video Compilation",
    "Cinematic {} B-Roll",
    "{} 4K Footage - Creative Commons",
];

const PLATFORM_CHANNELS: &[&str] = &[
    "Free Stock Footage Archive",
    "B-Roll Library",
    "Creative Commons Clips",
    "Open Footage Hub",
];

const PLATFORM_DURATIONS: &[&str] = &["1:24", "3:05", "0:58", "2:17", "4:40"];

const WEB_TITLES: &[&str] = &[
    "{} stock video clips",
    "Free {} footage downloads",
    "{} video collection",
    "Royalty-free {} b-roll",
];

const WEB_SOURCES: &[&str] = &[
    "Storyblocks",
    "Pond5",
    "Shutterstock",
    "Dissolve",
    "Artgrid",
];

/// Fallback strategy for one provider.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticProvider {
    id: ProviderId,
}

impl SyntheticProvider {
    /// Synthetic stand-in for `id`.
    pub fn new(id: ProviderId) -> Self {
        Self { id }
    }

    /// Generate up to `max_results` items for `query`. Never fails.
    pub fn generate(
        &self,
        query: &str,
        max_results: usize,
        config: &SearchConfig,
    ) -> Vec<CandidateItem> {
        let subject = subject(query);
        let seed = seed(query);
        (0..max_results)
            .map(|i| match self.id.source_type() {
                SourceType::Curated => stock_item(self.id, &subject, query, seed, i, config),
                SourceType::Platform => platform_item(self.id, &subject, query, seed, i),
                SourceType::Web => web_item(self.id, &subject, query, seed, i),
            })
            .collect()
    }
}

impl Provider for SyntheticProvider {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
        config: &SearchConfig,
    ) -> Result<Vec<CandidateItem>, SearchError> {
        Ok(self.generate(query, max_results, config))
    }

    fn provider_id(&self) -> ProviderId {
        self.id
    }
}

/// Stable seed from the query bytes (FNV-1a).
fn seed(query: &str) -> usize {
    let hash = query.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |acc, b| {
        (acc ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    });
    (hash % 1_000_003) as usize
}

/// Title-cased leading words of the query, or a generic subject.
fn subject(query: &str) -> String {
    let words: Vec<String> = query
        .split_whitespace()
        .take(SUBJECT_WORDS)
        .map(capitalize)
        .collect();
    if words.is_empty() {
        "Stock".to_owned()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn pick<'a>(table: &[&'a str], seed: usize, index: usize, stride: usize) -> &'a str {
    table[(seed + index * stride) % table.len()]
}

fn fill(template: &str, subject: &str) -> String {
    template.replacen("{}", subject, 1)
}

fn stock_item(
    id: ProviderId,
    subject: &str,
    query: &str,
    seed: usize,
    index: usize,
    config: &SearchConfig,
) -> CandidateItem {
    let title = fill(pick(STOCK_TITLES, seed, index, 1), subject);
    let description = format!(
        "Royalty-free {} clip for \"{}\" on {}.",
        pick(STOCK_RESOLUTIONS, seed, index, 3),
        query.to_lowercase(),
        id.name()
    );
    let url = match CatalogSite::from_provider(id) {
        Some(site) => catalog_search_url(site, config, query),
        None => pexels_search_url(query),
    };

    let mut item = CandidateItem::new(title, description, url, SourceType::Curated);
    item.duration = Some(pick(STOCK_DURATIONS, seed, index, 5).to_owned());
    item.resolution = Some(pick(STOCK_RESOLUTIONS, seed, index, 3).to_owned());
    item.license = Some("Royalty-free".to_owned());
    item.source_name = Some(id.name().to_owned());
    item
}

fn platform_item(
    id: ProviderId,
    subject: &str,
    query: &str,
    seed: usize,
    index: usize,
) -> CandidateItem {
    let title = fill(pick(PLATFORM_TITLES, seed, index, 1), subject);
    let channel = pick(PLATFORM_CHANNELS, seed, index, 3);
    let description = format!(
        "B-roll of {} uploaded by {channel}. Free to use with attribution.",
        query.to_lowercase()
    );
    let url = with_query(
        "https://www.youtube.com/results",
        &[("search_query", query)],
    );

    let mut item = CandidateItem::new(title, description, url, SourceType::Platform);
    item.duration = Some(pick(PLATFORM_DURATIONS, seed, index, 2).to_owned());
    item.channel = Some(channel.to_owned());
    item.license = Some("Creative Commons".to_owned());
    item.source_name = Some(id.name().to_owned());
    item
}

fn web_item(
    id: ProviderId,
    subject: &str,
    query: &str,
    seed: usize,
    index: usize,
) -> CandidateItem {
    let title = fill(pick(WEB_TITLES, seed, index, 1), subject);
    let source = pick(WEB_SOURCES, seed, index, 2);
    let description = format!(
        "Browse {} footage matching \"{}\".",
        source,
        query.to_lowercase()
    );
    let url = with_query(
        "https://www.google.com/search",
        &[("q", query), ("tbm", "vid")],
    );

    let mut item = CandidateItem::new(title, description, url, SourceType::Web);
    item.channel = Some(source.to_owned());
    item.source_name = Some(id.name().to_owned());
    item
}

fn catalog_search_url(site: CatalogSite, config: &SearchConfig, query: &str) -> String {
    let base = site.base_url(&config.endpoints);
    search_url(site, base, query).map_or_else(|_| base.to_owned(), |u| u.to_string())
}

/// Pexels video search page; the query is one percent-encoded path segment.
fn pexels_search_url(query: &str) -> String {
    const BASE: &str = "https://www.pexels.com/search/videos/";
    let Ok(mut url) = Url::parse(BASE) else {
        return BASE.to_owned();
    };
    let segment = query.split_whitespace().collect::<Vec<_>>().join(" ");
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(&segment).push("");
    }
    url.to_string()
}

fn with_query(base: &str, pairs: &[(&str, &str)]) -> String {
    match Url::parse_with_params(base, pairs) {
        Ok(url) => url.to_string(),
        Err(_) => base.to_owned(),
    }
}
