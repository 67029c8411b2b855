//! Core types for candidate clips and provider identification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad kind of source a candidate came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Curated stock-footage catalog.
    Curated,
    /// Video-sharing platform.
    Platform,
    /// General web search.
    #[default]
    Web,
}

/// Why a candidate matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// The whole query appears verbatim in the title or description.
    Direct,
    /// Individual query keywords appear literally.
    Keyword,
    /// Only expanded (category) terms matched.
    Semantic,
}

impl MatchType {
    /// Sort priority when scores tie. Lower sorts first.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Direct => 0,
            Self::Keyword => 1,
            Self::Semantic => 2,
        }
    }

    /// Returns the lowercase label used on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Keyword => "keyword",
            Self::Semantic => "semantic",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single clip returned by a provider, before or after scoring.
///
/// Providers fill the descriptive fields; the scorer writes
/// `relevance_score` and `match_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateItem {
    /// Clip or page title.
    pub title: String,
    /// Free-text description or snippet.
    pub description: String,
    /// Link to the clip or to the provider's search page.
    pub url: String,
    /// Which kind of provider produced this item.
    pub source_type: SourceType,
    /// Thumbnail image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Human-readable duration, e.g. `0:42`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Resolution label, e.g. `1920x1080` or `4K`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Uploader, channel or photographer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// License summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Display name of the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// Relevance against the original query. Zero until scored.
    #[serde(default)]
    pub relevance_score: f64,
    /// Dominant match type. `None` until scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MatchType>,
}

impl CandidateItem {
    /// Create an unscored item with the required fields set.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        source_type: SourceType,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            source_type,
            ..Default::default()
        }
    }

    /// Match priority of this item; unscored items sort last.
    pub fn match_priority(&self) -> u8 {
        self.match_type.map_or(u8::MAX, |m| m.priority())
    }
}

/// Providers the aggregator can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProviderId {
    /// Pexels video API (curated, API key).
    Pexels,
    /// Mixkit free stock video (curated, search URL only).
    Mixkit,
    /// Coverr (curated, search URL only).
    Coverr,
    /// Videvo (curated, search URL only).
    Videvo,
    /// YouTube Data API (platform, API key).
    YouTube,
    /// SerpApi Google Videos (web, API key).
    Web,
}

impl ProviderId {
    /// Returns the human-readable name of this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pexels => "Pexels",
            Self::Mixkit => "Mixkit",
            Self::Coverr => "Coverr",
            Self::Videvo => "Videvo",
            Self::YouTube => "YouTube",
            Self::Web => "Web",
        }
    }

    /// Kind of source this provider represents.
    pub fn source_type(&self) -> SourceType {
        match self {
            Self::Pexels | Self::Mixkit | Self::Coverr | Self::Videvo => SourceType::Curated,
            Self::YouTube => SourceType::Platform,
            Self::Web => SourceType::Web,
        }
    }

    /// Name of the API key this provider needs, if any.
    pub fn credential_name(&self) -> Option<&'static str> {
        match self {
            Self::Pexels => Some("pexels"),
            Self::YouTube => Some("youtube"),
            Self::Web => Some("serpapi"),
            Self::Mixkit | Self::Coverr | Self::Videvo => None,
        }
    }

    /// Returns all providers in default invocation order.
    pub fn all() -> &'static [ProviderId] {
        &[
            Self::Pexels,
            Self::Mixkit,
            Self::Coverr,
            Self::Videvo,
            Self::YouTube,
            Self::Web,
        ]
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown provider: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_new_is_unscored() {
        let item = CandidateItem::new("Title", "Desc", "https://x.test", SourceType::Curated);
        assert_eq!(item.title, "Title");
        assert_eq!(item.source_type, SourceType::Curated);
        assert!(item.match_type.is_none());
        assert!(item.relevance_score.abs() < f64::EPSILON);
        assert_eq!(item.match_priority(), u8::MAX);
    }

    #[test]
    fn candidate_serializes_camel_case() {
        let mut item = CandidateItem::new("T", "D", "https://x.test", SourceType::Platform);
        item.source_name = Some("YouTube".into());
        item.relevance_score = 20.0;
        item.match_type = Some(MatchType::Keyword);

        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["sourceType"], "platform");
        assert_eq!(json["sourceName"], "YouTube");
        assert_eq!(json["matchType"], "keyword");
        assert_eq!(json["relevanceScore"], 20.0);
        assert!(json.get("thumbnail").is_none());
    }

    #[test]
    fn match_type_priority_order() {
        assert!(MatchType::Direct.priority() < MatchType::Keyword.priority());
        assert!(MatchType::Keyword.priority() < MatchType::Semantic.priority());
    }

    #[test]
    fn provider_source_types() {
        assert_eq!(ProviderId::Pexels.source_type(), SourceType::Curated);
        assert_eq!(ProviderId::Videvo.source_type(), SourceType::Curated);
        assert_eq!(ProviderId::YouTube.source_type(), SourceType::Platform);
        assert_eq!(ProviderId::Web.source_type(), SourceType::Web);
    }

    #[test]
    fn provider_credentials() {
        assert_eq!(ProviderId::Pexels.credential_name(), Some("pexels"));
        assert_eq!(ProviderId::Web.credential_name(), Some("serpapi"));
        assert_eq!(ProviderId::Mixkit.credential_name(), None);
    }

    #[test]
    fn provider_from_str_is_case_insensitive() {
        assert_eq!("youtube".parse::<ProviderId>(), Ok(ProviderId::YouTube));
        assert_eq!(" PEXELS ".parse::<ProviderId>(), Ok(ProviderId::Pexels));
        assert!("vimeo".parse::<ProviderId>().is_err());
    }

    #[test]
    fn provider_all_and_display() {
        assert_eq!(ProviderId::all().len(), 6);
        assert_eq!(ProviderId::Coverr.to_string(), "Coverr");
    }
}
