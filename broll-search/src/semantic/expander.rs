//! Keyword expansion through the category taxonomy.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::keywords::extract_keywords;
use super::taxonomy::{categories_for, category_terms};

/// Number of semantic terms appended by [`enhance_query`].
pub const ENHANCE_SEMANTIC_TERMS: usize = 3;

/// Number of related categories appended by [`enhance_query`].
pub const ENHANCE_RELATED_TERMS: usize = 2;

/// The three keyword buckets produced for a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedKeywords {
    /// Extracted query keywords, as given.
    pub original: Vec<String>,
    /// Related terms pulled from every matched category.
    pub semantic: BTreeSet<String>,
    /// Canonical categories whose term list contains an original keyword.
    pub related: BTreeSet<String>,
}

/// Expand extracted keywords through the taxonomy.
///
/// A keyword naming a category contributes that category's terms to
/// `semantic`. A keyword listed under one or more categories contributes
/// those category names to `related` and each category's full term list to
/// `semantic`.
pub fn expand(keywords: &[String]) -> ExpandedKeywords {
    let mut semantic = BTreeSet::new();
    let mut related = BTreeSet::new();

    for keyword in keywords {
        if let Some(terms) = category_terms(keyword) {
            semantic.extend(terms.iter().map(|t| (*t).to_owned()));
        }
        for category in categories_for(keyword) {
            related.insert((*category).to_owned());
            if let Some(terms) = category_terms(category) {
                semantic.extend(terms.iter().map(|t| (*t).to_owned()));
            }
        }
    }

    ExpandedKeywords {
        original: keywords.to_vec(),
        semantic,
        related,
    }
}

/// Build the string sent to providers for `query`.
///
/// Original keywords, then the first [`ENHANCE_SEMANTIC_TERMS`] semantic
/// terms and the first [`ENHANCE_RELATED_TERMS`] related categories,
/// space-joined. Never used for scoring.
pub fn enhance_query(query: &str) -> String {
    let expanded = expand(&extract_keywords(query));
    expanded
        .original
        .iter()
        .chain(expanded.semantic.iter().take(ENHANCE_SEMANTIC_TERMS))
        .chain(expanded.related.iter().take(ENHANCE_RELATED_TERMS))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Everything the expansion step derived from a query, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInsights {
    /// The query as typed.
    pub query: String,
    /// Output of keyword extraction.
    pub keywords: Vec<String>,
    /// Output of expansion.
    pub expanded: ExpandedKeywords,
    /// The string that providers receive.
    pub enhanced_query: String,
}

/// Run extraction and expansion for `query` and collect the intermediate values.
pub fn insights(query: &str) -> QueryInsights {
    let keywords = extract_keywords(query);
    let expanded = expand(&keywords);
    QueryInsights {
        query: query.to_owned(),
        enhanced_query: enhance_query(query),
        keywords,
        expanded,
    }
}
