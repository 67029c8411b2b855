//! broll: find b-roll clips for a free-text query.
//!
//! Thin host around [`broll_search`]: loads the TOML config, layers
//! environment credentials on top, and renders ranked results for the
//! terminal.

pub mod config;
pub mod error;

use std::fmt::Write as _;
use std::path::Path;

use broll_search::{CandidateItem, QueryInsights};

pub use config::BrollConfig;
pub use error::{BrollError, Result};

/// Load `path`, or the default config file when it exists, or defaults.
///
/// # Errors
///
/// Returns an error if an explicitly given file cannot be read or parsed,
/// or if the default file exists but is invalid.
pub fn load_config(path: Option<&Path>) -> Result<BrollConfig> {
    match path {
        Some(path) => BrollConfig::from_file(path),
        None => {
            let default_path = BrollConfig::default_config_path();
            if default_path.exists() {
                tracing::debug!(path = %default_path.display(), "loading config");
                BrollConfig::from_file(&default_path)
            } else {
                Ok(BrollConfig::default())
            }
        }
    }
}

/// One block per clip: rank, score, match type, title, source, URL.
pub fn render_results(items: &[CandidateItem]) -> String {
    let mut out = String::new();
    for (rank, item) in items.iter().enumerate() {
        let match_label = item.match_type.map_or("-", |m| m.label());
        let _ = writeln!(
            out,
            "{:>2}. [{:>6.1} {:<8}] {}",
            rank + 1,
            item.relevance_score,
            match_label,
            item.title
        );

        let mut meta: Vec<&str> = Vec::new();
        if let Some(source) = item.source_name.as_deref() {
            meta.push(source);
        }
        if let Some(duration) = item.duration.as_deref() {
            meta.push(duration);
        }
        if let Some(resolution) = item.resolution.as_deref() {
            meta.push(resolution);
        }
        if let Some(license) = item.license.as_deref() {
            meta.push(license);
        }
        if !meta.is_empty() {
            let _ = writeln!(out, "    {}", meta.join(" · "));
        }
        let _ = writeln!(out, "    {}", item.url);
    }
    out
}

/// Keyword extraction and expansion diagnostics.
pub fn render_insights(insights: &QueryInsights) -> String {
    let expanded = &insights.expanded;
    let mut out = String::new();
    let _ = writeln!(out, "query:     {}", insights.query);
    let _ = writeln!(out, "keywords:  {}", comma_list(&insights.keywords));
    let _ = writeln!(out, "semantic:  {}", comma_list(&expanded.semantic));
    let _ = writeln!(out, "related:   {}", comma_list(&expanded.related));
    let _ = writeln!(out, "enhanced:  {}", insights.enhanced_query);
    out
}

fn comma_list<'a>(words: impl IntoIterator<Item = &'a String>) -> String {
    words
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
