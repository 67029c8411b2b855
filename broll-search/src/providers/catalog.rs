//! Stock catalogs addressed only by a constructed search URL.
//!
//! Mixkit, Coverr and Videvo have no public API. The live strategy fetches
//! the site's search page and collects links that point at individual
//! clips: any anchor whose `href` contains the site's clip path.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::{Endpoints, SearchConfig};
use crate::error::SearchError;
use crate::http;
use crate::provider::Provider;
use crate::types::{CandidateItem, ProviderId, SourceType};

/// One of the URL-addressed catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSite {
    /// mixkit.co: `/free-stock-video/<slug>/`
    Mixkit,
    /// coverr.co: `/s?q=<query>`
    Coverr,
    /// videvo.net: `/search/?q=<query>`
    Videvo,
}

impl CatalogSite {
    /// Catalog behind `id`, if it is one.
    pub fn from_provider(id: ProviderId) -> Option<Self> {
        match id {
            ProviderId::Mixkit => Some(Self::Mixkit),
            ProviderId::Coverr => Some(Self::Coverr),
            ProviderId::Videvo => Some(Self::Videvo),
            ProviderId::Pexels | ProviderId::YouTube | ProviderId::Web => None,
        }
    }

    /// Provider id of this catalog.
    pub fn provider_id(&self) -> ProviderId {
        match self {
            Self::Mixkit => ProviderId::Mixkit,
            Self::Coverr => ProviderId::Coverr,
            Self::Videvo => ProviderId::Videvo,
        }
    }

    /// Configured site root.
    pub fn base_url<'a>(&self, endpoints: &'a Endpoints) -> &'a str {
        match self {
            Self::Mixkit => &endpoints.mixkit,
            Self::Coverr => &endpoints.coverr,
            Self::Videvo => &endpoints.videvo,
        }
    }

    /// Path fragment that identifies a single-clip page.
    fn clip_path(&self) -> &'static str {
        match self {
            Self::Mixkit => "/free-stock-video/",
            Self::Coverr => "/videos/",
            Self::Videvo => "/video/",
        }
    }

    /// `true` for paths naming a clip below the clip prefix, not the prefix itself.
    fn is_clip_path(&self, path: &str) -> bool {
        path.split_once(self.clip_path())
            .is_some_and(|(_, rest)| !rest.trim_matches('/').is_empty())
    }

    fn license(&self) -> &'static str {
        match self {
            Self::Mixkit => "Mixkit License",
            Self::Coverr => "Coverr License",
            Self::Videvo => "Videvo Free License",
        }
    }
}

/// Build the catalog search URL for `query` under `base`.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `base` is not a valid URL.
pub fn search_url(site: CatalogSite, base: &str, query: &str) -> Result<Url, SearchError> {
    let root = Url::parse(base)
        .map_err(|e| SearchError::Config(format!("invalid {base} URL: {e}")))?;
    let mut url = match site {
        CatalogSite::Mixkit => {
            let slug = query
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join("-");
            root.join(&format!("free-stock-video/{slug}/"))
        }
        CatalogSite::Coverr => root.join("s"),
        CatalogSite::Videvo => root.join("search/"),
    }
    .map_err(|e| SearchError::Config(format!("invalid search URL: {e}")))?;

    if site != CatalogSite::Mixkit {
        url.query_pairs_mut().append_pair("q", query);
    }
    Ok(url)
}

/// Live strategy for a URL-addressed catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogProvider {
    site: CatalogSite,
}

impl CatalogProvider {
    /// Scraper for `site`.
    pub fn new(site: CatalogSite) -> Self {
        Self { site }
    }
}

impl Provider for CatalogProvider {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
        config: &SearchConfig,
    ) -> Result<Vec<CandidateItem>, SearchError> {
        let name = self.site.provider_id().name();
        let url = search_url(self.site, self.site.base_url(&config.endpoints), query)?;
        tracing::trace!(query, %url, "{name} search");

        let client = http::build_client(config)?;
        let response = client
            .get(url.clone())
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("{name} request failed: {e}")))?;
        let html = http::check_status(name, response)?
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("{name} response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "{name} response received");

        parse_catalog_html(self.site, &html, &url, max_results)
    }

    fn provider_id(&self) -> ProviderId {
        self.site.provider_id()
    }
}

/// Extract clip links from a catalog search page.
///
/// Relative links are resolved against `page_url`. Duplicate clip URLs
/// keep their first occurrence.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if no clip links are found.
pub fn parse_catalog_html(
    site: CatalogSite,
    html: &str,
    page_url: &Url,
    max_results: usize,
) -> Result<Vec<CandidateItem>, SearchError> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]")
        .map_err(|e| SearchError::Parse(format!("invalid anchor selector: {e:?}")))?;
    let images = Selector::parse("img")
        .map_err(|e| SearchError::Parse(format!("invalid image selector: {e:?}")))?;

    let name = site.provider_id().name();
    let mut items: Vec<CandidateItem> = Vec::new();

    for anchor in document.select(&anchors) {
        if items.len() >= max_results {
            break;
        }
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(clip_url) = page_url.join(href) else {
            continue;
        };
        if !site.is_clip_path(clip_url.path()) || clip_url.path() == page_url.path() {
            continue;
        }
        let clip_url = clip_url.to_string();
        if items.iter().any(|i| i.url == clip_url) {
            continue;
        }
        let Some(title) = anchor_title(&anchor, &images) else {
            continue;
        };

        let mut item = CandidateItem::new(
            title.clone(),
            format!("{title}. Free stock video from {name}."),
            clip_url,
            SourceType::Curated,
        );
        item.thumbnail = anchor
            .select(&images)
            .next()
            .and_then(image_source)
            .and_then(|src| page_url.join(src).ok())
            .map(|u| u.to_string());
        item.license = Some(site.license().to_owned());
        item.source_name = Some(name.to_owned());
        items.push(item);
    }

    if items.is_empty() {
        return Err(SearchError::Parse(format!("{name}: no clip links found on search page")));
    }
    Ok(items)
}

/// Title from the anchor's `title`/`aria-label`, its text, or an image `alt`.
fn anchor_title(anchor: &ElementRef<'_>, images: &Selector) -> Option<String> {
    let attr = |name: &str| {
        anchor
            .value()
            .attr(name)
            .map(collapse_whitespace)
            .filter(|t| !t.is_empty())
    };
    attr("title")
        .or_else(|| attr("aria-label"))
        .or_else(|| {
            let text = collapse_whitespace(&anchor.text().collect::<Vec<_>>().join(" "));
            (!text.is_empty()).then_some(text)
        })
        .or_else(|| {
            anchor
                .select(images)
                .next()
                .and_then(|img| img.value().attr("alt"))
                .map(collapse_whitespace)
                .filter(|t| !t.is_empty())
        })
}

/// Image `src`, or the lazy-loading `data-src` when `src` is absent.
fn image_source(img: ElementRef<'_>) -> Option<&str> {
    let element = img.value();
    element.attr("src").or_else(|| element.attr("data-src"))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXKIT_PAGE: &str = r#"
        <html><body>
          <nav><a href="/free-stock-video/">All videos</a></nav>
          <div class="item-grid">
            <a href="/free-stock-video/forest-river-at-dawn-4201/" title="Forest river at dawn">
              <img src="/thumbs/4201.jpg" alt="Forest river">
            </a>
            <a href="/free-stock-video/forest-river-at-dawn-4201/">Forest river at dawn</a>
            <a href="https://mixkit.co/free-stock-video/pine-trees-in-fog-4310/">
              <img data-src="https://assets.mixkit.co/4310.jpg" alt="Pine trees in fog">
            </a>
            <a href="/free-sound-effects/birds/">Bird sounds</a>
          </div>
        </body></html>
    "#;

    fn mixkit_page_url() -> Url {
        search_url(CatalogSite::Mixkit, "https://mixkit.co", "forest").expect("valid url")
    }

    fn parse_mixkit(max_results: usize) -> Vec<CandidateItem> {
        let url = mixkit_page_url();
        parse_catalog_html(CatalogSite::Mixkit, MIXKIT_PAGE, &url, max_results).expect("parse")
    }

    #[test]
    fn mixkit_search_url_uses_slug() {
        let url =
            search_url(CatalogSite::Mixkit, "https://mixkit.co", "Forest River").expect("url");
        assert_eq!(
            url.as_str(),
            "https://mixkit.co/free-stock-video/forest-river/"
        );
    }

    #[test]
    fn coverr_and_videvo_use_query_param() {
        let coverr =
            search_url(CatalogSite::Coverr, "https://coverr.co", "ocean waves").expect("url");
        assert_eq!(coverr.as_str(), "https://coverr.co/s?q=ocean+waves");
        let videvo =
            search_url(CatalogSite::Videvo, "https://www.videvo.net", "ocean").expect("url");
        assert_eq!(videvo.as_str(), "https://www.videvo.net/search/?q=ocean");
    }

    #[test]
    fn invalid_base_is_config_error() {
        let err = search_url(CatalogSite::Coverr, "not a url", "q").unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn parses_clip_links_and_dedups() {
        let items = parse_mixkit(10);
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].title, "Forest river at dawn");
        assert_eq!(
            items[0].url,
            "https://mixkit.co/free-stock-video/forest-river-at-dawn-4201/"
        );
        assert_eq!(
            items[0].thumbnail.as_deref(),
            Some("https://mixkit.co/thumbs/4201.jpg")
        );
        assert_eq!(items[0].source_name.as_deref(), Some("Mixkit"));
        assert_eq!(items[0].source_type, SourceType::Curated);

        assert_eq!(items[1].title, "Pine trees in fog");
        assert_eq!(
            items[1].thumbnail.as_deref(),
            Some("https://assets.mixkit.co/4310.jpg")
        );
    }

    #[test]
    fn respects_max_results() {
        assert_eq!(parse_mixkit(1).len(), 1);
    }

    #[test]
    fn page_without_clips_is_parse_error() {
        let err = parse_catalog_html(
            CatalogSite::Coverr,
            "<html><body><a href=\"/pricing\">Pricing</a></body></html>",
            &Url::parse("https://coverr.co/s?q=x").expect("url"),
            5,
        )
        .unwrap_err();
        assert!(err.to_string().contains("no clip links"));
    }

    #[test]
    fn clip_prefix_alone_is_not_a_clip() {
        assert!(!CatalogSite::Mixkit.is_clip_path("/free-stock-video/"));
        assert!(CatalogSite::Mixkit.is_clip_path("/free-stock-video/rain-1234/"));
        assert!(CatalogSite::Coverr.is_clip_path("/videos/surfer-at-sunset"));
        assert!(!CatalogSite::Videvo.is_clip_path("/about/"));
    }

    #[test]
    fn site_mapping_round_trips() {
        for id in [ProviderId::Mixkit, ProviderId::Coverr, ProviderId::Videvo] {
            let site = CatalogSite::from_provider(id).expect("catalog");
            assert_eq!(site.provider_id(), id);
        }
        assert!(CatalogSite::from_provider(ProviderId::YouTube).is_none());
    }
}
