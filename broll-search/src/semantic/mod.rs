//! Query understanding: keyword extraction and taxonomy-based expansion.
//!
//! Expansion is a static curated mapping. The expanded terms widen what
//! providers are asked for; scoring still happens against the original
//! query.

pub mod expander;
pub mod keywords;
pub mod taxonomy;

pub use expander::{enhance_query, expand, insights, ExpandedKeywords, QueryInsights};
pub use keywords::extract_keywords;
