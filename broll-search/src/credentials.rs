//! Read-only provider API keys, looked up by name.
//!
//! A missing key is not an error: it routes the provider to its synthetic
//! fallback. Values never appear in `Debug` output.

use std::collections::BTreeMap;
use std::fmt;

/// Environment variables consulted by [`Credentials::from_env`], keyed by
/// credential name.
pub const ENV_VARS: &[(&str, &str)] = &[
    ("pexels", "PEXELS_API_KEY"),
    ("youtube", "YOUTUBE_API_KEY"),
    ("serpapi", "SERPAPI_API_KEY"),
];

/// Provider API keys by credential name (`pexels`, `youtube`, `serpapi`).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    keys: BTreeMap<String, String>,
}

impl Credentials {
    /// An empty credential set. Every keyed provider will fall back.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect keys from the process environment (see [`ENV_VARS`]).
    ///
    /// Empty variables are ignored.
    pub fn from_env() -> Self {
        let mut creds = Self::new();
        for (name, var) in ENV_VARS {
            if let Ok(value) = std::env::var(var) {
                creds.insert(name, value);
            }
        }
        creds
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: &str, key: impl Into<String>) -> Self {
        self.insert(name, key);
        self
    }

    /// Insert or replace a key. Blank values remove the entry.
    pub fn insert(&mut self, name: &str, key: impl Into<String>) {
        let key = key.into();
        if key.trim().is_empty() {
            self.keys.remove(name);
        } else {
            self.keys.insert(name.to_owned(), key);
        }
    }

    /// Look up a key by credential name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.keys.get(name).map(String::as_str)
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    #[must_use]
    pub fn merged(mut self, other: &Credentials) -> Self {
        for (name, key) in &other.keys {
            self.keys.insert(name.clone(), key.clone());
        }
        self
    }

    /// Names of the configured credentials.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for name in self.keys.keys() {
            map.entry(name, &"[REDACTED]");
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_keys() {
        let creds = Credentials::new();
        assert!(creds.get("pexels").is_none());
        assert_eq!(creds.names().count(), 0);
    }

    #[test]
    fn with_and_get() {
        let creds = Credentials::new().with("pexels", "px-123");
        assert_eq!(creds.get("pexels"), Some("px-123"));
        assert!(creds.get("youtube").is_none());
    }

    #[test]
    fn blank_value_removes_key() {
        let creds = Credentials::new()
            .with("youtube", "yt")
            .with("youtube", "  ");
        assert!(creds.get("youtube").is_none());
    }

    #[test]
    fn merged_prefers_other() {
        let file = Credentials::new()
            .with("pexels", "from-file")
            .with("youtube", "yt");
        let env = Credentials::new().with("pexels", "from-env");
        let merged = file.merged(&env);
        assert_eq!(merged.get("pexels"), Some("from-env"));
        assert_eq!(merged.get("youtube"), Some("yt"));
    }

    #[test]
    fn debug_redacts_values() {
        let creds = Credentials::new().with("serpapi", "secret-value");
        let debug = format!("{creds:?}");
        assert!(debug.contains("serpapi"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-value"));
    }
}
