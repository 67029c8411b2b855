//! End-to-end aggregation against mock provider endpoints.
//!
//! Every network-backed provider is pointed at a local `wiremock` server;
//! no test touches the real network.

use std::time::Duration;

use broll_search::{
    aggregate, CandidateItem, Credentials, Endpoints, MatchType, ProviderId, SearchConfig,
    SourceType,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> SearchConfig {
    let base = server.uri();
    SearchConfig {
        max_results_per_provider: 3,
        timeout_seconds: 2,
        user_agent: Some("broll-test/1.0".into()),
        endpoints: Endpoints {
            pexels: base.clone(),
            youtube: base.clone(),
            serpapi: base.clone(),
            mixkit: base.clone(),
            coverr: base.clone(),
            videvo: base,
        },
        credentials: Credentials::new()
            .with("pexels", "pexels-key")
            .with("youtube", "youtube-key")
            .with("serpapi", "serpapi-key"),
        ..Default::default()
    }
}

fn assert_sorted(items: &[CandidateItem]) {
    for pair in items.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.relevance_score > b.relevance_score
                || (a.relevance_score == b.relevance_score
                    && a.match_priority() <= b.match_priority()),
            "{:?} ({}) ranked before {:?} ({})",
            a.title,
            a.relevance_score,
            b.title,
            b.relevance_score
        );
    }
}

fn pexels_body() -> serde_json::Value {
    json!({
        "page": 1,
        "per_page": 3,
        "videos": [
            {
                "id": 101,
                "url": "https://www.pexels.com/video/aerial-view-of-a-forest-101/",
                "image": "https://images.pexels.com/videos/101/preview.jpeg",
                "duration": 24,
                "width": 3840,
                "height": 2160,
                "user": {"name": "Mara Lens"}
            },
            {
                "id": 102,
                "url": "https://www.pexels.com/video/waves-on-the-shore-102/",
                "duration": 15,
                "width": 1920,
                "height": 1080
            }
        ]
    })
}

fn pexels_ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(pexels_body())
}

async fn mount_pexels(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/videos/search"))
        .and(header("Authorization", "pexels-key"))
        .respond_with(response)
        .mount(server)
        .await;
}

const PEXELS_SEARCH_PAGE: &str = "https://www.pexels.com/search/videos/";

fn is_pexels_fallback(item: &CandidateItem) -> bool {
    item.url.starts_with(PEXELS_SEARCH_PAGE)
}

// ────────────────────────────────────────────────────────────────────────────
// Live mapping
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn pexels_results_are_mapped_and_scored() {
    let server = MockServer::start().await;
    mount_pexels(&server, pexels_ok()).await;

    let items = aggregate("forest", &[ProviderId::Pexels], &config_for(&server)).await;

    assert_eq!(items.len(), 2);
    let top = &items[0];
    assert_eq!(top.title, "Aerial view of a forest");
    assert_eq!(top.match_type, Some(MatchType::Direct));
    assert!(top.relevance_score >= 100.0);
    assert_eq!(top.duration.as_deref(), Some("0:24"));
    assert_eq!(top.resolution.as_deref(), Some("3840x2160"));
    assert_eq!(top.source_type, SourceType::Curated);
    assert!(items.iter().all(|i| !is_pexels_fallback(i)));
    assert_sorted(&items);
}

#[tokio::test]
async fn youtube_results_are_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("part", "snippet"))
        .and(query_param("type", "video"))
        .and(query_param("videoLicense", "creativeCommon"))
        .and(query_param("key", "youtube-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#searchListResponse",
            "items": [{
                "id": {"kind": "youtube#video", "videoId": "dQw4w9WgXcQ"},
                "snippet": {
                    "title": "Forest stream &amp; birdsong",
                    "description": "Relaxing nature b-roll",
                    "channelTitle": "Open Nature",
                    "thumbnails": {"high": {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq.jpg"}}
                }
            }]
        })))
        .mount(&server)
        .await;

    let items = aggregate("forest", &[ProviderId::YouTube], &config_for(&server)).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Forest stream & birdsong");
    assert_eq!(items[0].url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    assert_eq!(items[0].channel.as_deref(), Some("Open Nature"));
    assert_eq!(items[0].source_type, SourceType::Platform);
    assert_eq!(items[0].match_type, Some(MatchType::Direct));
}

#[tokio::test]
async fn web_results_are_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google_videos"))
        .and(query_param("api_key", "serpapi-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "video_results": [
                {
                    "title": "Business plan walkthrough",
                    "link": "https://vimeo.com/555",
                    "snippet": "Quarterly numbers explained",
                    "duration": "0:45",
                    "source": "Vimeo"
                }
            ]
        })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let items = aggregate("business meeting", &[ProviderId::Web], &config).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].url, "https://vimeo.com/555");
    assert_eq!(items[0].source_type, SourceType::Web);
    assert_eq!(items[0].match_type, Some(MatchType::Keyword));
}

#[tokio::test]
async fn catalog_page_is_scraped() {
    let server = MockServer::start().await;
    let page = r#"<html><body>
        <a href="/pricing">Pricing</a>
        <a href="/videos/misty-forest-at-sunrise" title="Misty forest at sunrise">
          <img src="/thumbs/misty.jpg">
        </a>
        <a href="/videos/city-traffic-night">City traffic at night</a>
      </body></html>"#;
    Mock::given(method("GET"))
        .and(path("/s"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;

    let items = aggregate("forest", &[ProviderId::Coverr], &config_for(&server)).await;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Misty forest at sunrise");
    assert!(items[0].url.starts_with(&server.uri()));
    assert!(items[0].url.ends_with("/videos/misty-forest-at-sunrise"));
    assert_eq!(items[0].source_name.as_deref(), Some("Coverr"));
    assert_sorted(&items);
}

// ────────────────────────────────────────────────────────────────────────────
// Failure paths select the synthetic set
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn server_error_falls_back() {
    let server = MockServer::start().await;
    mount_pexels(&server, ResponseTemplate::new(500)).await;

    let items = aggregate("forest", &[ProviderId::Pexels], &config_for(&server)).await;

    assert_eq!(items.len(), 3);
    assert!(items.iter().all(is_pexels_fallback));
    assert_sorted(&items);
}

#[tokio::test]
async fn unauthorized_falls_back() {
    let server = MockServer::start().await;
    mount_pexels(
        &server,
        ResponseTemplate::new(401).set_body_string("bad key"),
    )
    .await;

    let items = aggregate("forest", &[ProviderId::Pexels], &config_for(&server)).await;
    assert!(!items.is_empty());
    assert!(items.iter().all(is_pexels_fallback));
}

#[tokio::test]
async fn malformed_payload_falls_back() {
    let server = MockServer::start().await;
    mount_pexels(
        &server,
        ResponseTemplate::new(200).set_body_string("{\"videos\": [oops"),
    )
    .await;

    let items = aggregate("forest", &[ProviderId::Pexels], &config_for(&server)).await;
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(is_pexels_fallback));
}

#[tokio::test]
async fn missing_credential_falls_back_without_request() {
    let server = MockServer::start().await;
    mount_pexels(&server, pexels_ok()).await;

    let config = SearchConfig {
        credentials: Credentials::new(),
        ..config_for(&server)
    };
    let items = aggregate("forest", &[ProviderId::Pexels], &config).await;

    assert!(items.iter().all(is_pexels_fallback));
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn slow_provider_times_out_and_falls_back() {
    let server = MockServer::start().await;
    mount_pexels(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(pexels_body())
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let config = SearchConfig {
        timeout_seconds: 1,
        ..config_for(&server)
    };
    let items = aggregate("forest", &[ProviderId::Pexels], &config).await;

    assert_eq!(items.len(), 3);
    assert!(items.iter().all(is_pexels_fallback));
}

#[tokio::test]
async fn failing_provider_does_not_hide_others() {
    let server = MockServer::start().await;
    mount_pexels(&server, ResponseTemplate::new(503)).await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": {"videoId": "abc"},
                "snippet": {"title": "Forest hike", "description": "Trail footage"}
            }]
        })))
        .mount(&server)
        .await;

    let items = aggregate(
        "forest",
        &[ProviderId::Pexels, ProviderId::YouTube],
        &config_for(&server),
    )
    .await;

    assert!(items.iter().any(|i| i.url == "https://www.youtube.com/watch?v=abc"));
    assert!(items.iter().any(is_pexels_fallback));
    assert_sorted(&items);
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate contract
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_provider_set_is_empty() {
    let server = MockServer::start().await;
    let items = aggregate("forest", &[], &config_for(&server)).await;
    assert!(items.is_empty());
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn all_providers_ranked_together() {
    let server = MockServer::start().await;
    mount_pexels(&server, pexels_ok()).await;

    let items = aggregate("forest", ProviderId::all(), &config_for(&server)).await;

    for id in ProviderId::all() {
        assert!(
            items
                .iter()
                .any(|i| i.source_name.as_deref() == Some(id.name())),
            "{id} contributed nothing"
        );
    }
    assert!(items.iter().all(|i| i.match_type.is_some()));
    assert_sorted(&items);
}
