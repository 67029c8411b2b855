//! Query tokenization and stop-word filtering.

/// Words that carry no search intent.
const STOP_WORDS: &[&str] = &[
    "the", "and", "but", "for", "nor", "yet", "with", "from", "into", "onto", "over", "under",
    "about", "are", "was", "were", "been", "being", "this", "that", "these", "those", "its",
    "our", "your", "their", "some", "any", "very", "just", "than", "then", "via", "per",
];

/// Minimum token length kept by [`extract_keywords`]; tokens of length ≤ 2 are dropped.
const MIN_TOKEN_LEN: usize = 3;

/// Split lower-cased text into alphanumeric runs.
///
/// No filtering; shared by the extractor and the scorer's fuzzy pass.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Returns `true` if `token` is in the stop-word list.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Extract normalized keywords from a free-text query.
///
/// Lower-cases, splits on non-alphanumeric characters, then drops stop
/// words and tokens of two characters or fewer. Order of first occurrence
/// is preserved; repeated tokens are kept.
///
/// # Examples
///
/// ```
/// let keywords = broll_search::extract_keywords("The Business Meeting");
/// assert_eq!(keywords, vec!["business", "meeting"]);
/// ```
pub fn extract_keywords(query: &str) -> Vec<String> {
    tokenize(query)
        .into_iter()
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN && !is_stop_word(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_meeting() {
        assert_eq!(
            extract_keywords("business meeting"),
            vec!["business", "meeting"]
        );
    }

    #[test]
    fn empty_query_yields_nothing() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   ").is_empty());
    }

    #[test]
    fn drops_stop_words_and_short_tokens() {
        let keywords = extract_keywords("A man and the dog in an old car at 5 pm with kids");
        assert_eq!(keywords, vec!["man", "dog", "old", "car", "kids"]);
        for k in &keywords {
            assert!(k.len() > 2);
            assert!(!is_stop_word(k));
        }
    }

    #[test]
    fn splits_on_punctuation() {
        assert_eq!(
            extract_keywords("drone-shot, city/skyline!"),
            vec!["drone", "shot", "city", "skyline"]
        );
    }

    #[test]
    fn keeps_order_and_repeats() {
        assert_eq!(
            extract_keywords("ocean waves ocean"),
            vec!["ocean", "waves", "ocean"]
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let queries = [
            "The Quick brown FOX jumps over the lazy dog",
            "4K drone footage of Tokyo at night",
            "",
            "a an of",
        ];
        for q in queries {
            let once = extract_keywords(q);
            let twice = extract_keywords(&once.join(" "));
            assert_eq!(once, twice, "query: {q:?}");
        }
    }

    #[test]
    fn tokenize_keeps_everything() {
        assert_eq!(tokenize("A b-cd"), vec!["a", "b", "cd"]);
    }
}
