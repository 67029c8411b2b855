//! Relevance scoring of candidates against the original query.
//!
//! Content is the lower-cased title and description. Four buckets add up
//! to the score:
//!
//! ```text
//! direct   = 100            whole query is a substring of content
//! keyword  = 20 × k         k distinct query keywords found in content
//! semantic = 10 × s + 15 × r   s expanded terms, r related categories found
//! fuzzy    = Σ 5 × ratio    query keyword / content word pairs with 0.8 < ratio < 1
//! ```
//!
//! The match type is `direct` when the direct bucket is non-zero, else
//! `keyword` when the keyword bucket beats the semantic one, else
//! `semantic`. Fuzzy points never affect the match type.

use std::cmp::Ordering;

use crate::config::ScoringConfig;
use crate::semantic::keywords::tokenize;
use crate::semantic::{expand, extract_keywords, ExpandedKeywords};
use crate::types::{CandidateItem, MatchType};

use super::similarity::ratio;

/// Points for a verbatim query match.
pub const DIRECT_MATCH_POINTS: f64 = 100.0;
/// Points per distinct query keyword found.
pub const KEYWORD_MATCH_POINTS: f64 = 20.0;
/// Points per expanded semantic term found.
pub const SEMANTIC_TERM_POINTS: f64 = 10.0;
/// Points per related category name found.
pub const RELATED_CATEGORY_POINTS: f64 = 15.0;
/// Multiplier applied to a fuzzy similarity ratio.
pub const FUZZY_WEIGHT: f64 = 5.0;
/// Ratios must exceed this to count as a fuzzy match.
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// Per-bucket contributions to a candidate's score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    /// Verbatim query match.
    pub direct: f64,
    /// Literal keyword matches.
    pub keyword: f64,
    /// Expanded term and related category matches.
    pub semantic: f64,
    /// Near-miss word similarity.
    pub fuzzy: f64,
}

impl ScoreBreakdown {
    /// Sum of all buckets.
    pub fn total(&self) -> f64 {
        self.direct + self.keyword + self.semantic + self.fuzzy
    }

    /// Dominant match type. Ignores the fuzzy bucket.
    pub fn match_type(&self) -> MatchType {
        if self.direct > 0.0 {
            MatchType::Direct
        } else if self.keyword > self.semantic {
            MatchType::Keyword
        } else {
            MatchType::Semantic
        }
    }
}

/// Score one candidate against the expanded keywords and the raw query.
///
/// Pure and deterministic. Missing text is treated as empty.
pub fn score_item(
    item: &CandidateItem,
    expanded: &ExpandedKeywords,
    original_query: &str,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let content = format!("{} {}", item.title, item.description).to_lowercase();
    let mut breakdown = ScoreBreakdown::default();

    let query = original_query.trim().to_lowercase();
    if !query.is_empty() && content.contains(&query) {
        breakdown.direct = DIRECT_MATCH_POINTS;
    }

    let mut seen: Vec<&str> = Vec::with_capacity(expanded.original.len());
    for keyword in &expanded.original {
        if seen.contains(&keyword.as_str()) {
            continue;
        }
        seen.push(keyword);
        if content.contains(keyword.as_str()) {
            breakdown.keyword += KEYWORD_MATCH_POINTS;
        }
    }

    for term in &expanded.semantic {
        if content.contains(term.as_str()) {
            breakdown.semantic += SEMANTIC_TERM_POINTS;
        }
    }
    for category in &expanded.related {
        if content.contains(category.as_str()) {
            breakdown.semantic += RELATED_CATEGORY_POINTS;
        }
    }

    breakdown.fuzzy = fuzzy_points(&expanded.original, &content, config.fuzzy_word_limit);
    breakdown
}

fn fuzzy_points(keywords: &[String], content: &str, word_limit: Option<usize>) -> f64 {
    let words = tokenize(content);
    let limit = word_limit.unwrap_or(words.len());

    let mut points = 0.0;
    for keyword in keywords {
        for word in words.iter().take(limit) {
            let similarity = ratio(keyword, word);
            if similarity > FUZZY_THRESHOLD && similarity < 1.0 {
                points += similarity * FUZZY_WEIGHT;
            }
        }
    }
    points
}

/// Score `item` and write `relevance_score` and `match_type` back onto it.
pub fn apply_score(
    item: &mut CandidateItem,
    expanded: &ExpandedKeywords,
    original_query: &str,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let breakdown = score_item(item, expanded, original_query, config);
    item.relevance_score = breakdown.total();
    item.match_type = Some(breakdown.match_type());
    breakdown
}

/// Score every item against `original_query`, expanding it once.
pub fn score_all(items: &mut [CandidateItem], original_query: &str, config: &ScoringConfig) {
    let expanded = expand(&extract_keywords(original_query));
    for item in items.iter_mut() {
        apply_score(item, &expanded, original_query, config);
    }
}

/// Ranking order: score descending, then match priority ascending.
pub fn compare_ranked(a: &CandidateItem, b: &CandidateItem) -> Ordering {
    b.relevance_score
        .total_cmp(&a.relevance_score)
        .then_with(|| a.match_priority().cmp(&b.match_priority()))
}

/// Stable sort by [`compare_ranked`]; full ties keep their input order.
pub fn rank(items: &mut [CandidateItem]) {
    items.sort_by(compare_ranked);
}
