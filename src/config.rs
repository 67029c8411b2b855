//! TOML configuration for the broll host.
//!
//! ```toml
//! [search]
//! providers = ["pexels", "youtube", "web"]
//! max_results_per_provider = 8
//! timeout_seconds = 10
//!
//! [credentials]
//! pexels = "..."
//! ```
//!
//! Keys found in the environment (`PEXELS_API_KEY`, `YOUTUBE_API_KEY`,
//! `SERPAPI_API_KEY`) override the `[credentials]` section.

use std::path::{Path, PathBuf};

use broll_search::{Credentials, ProviderId, ScoringConfig, SearchConfig};
use serde::{Deserialize, Serialize};

use crate::error::{BrollError, Result};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrollConfig {
    /// Search tunables.
    pub search: SearchSection,
    /// Plaintext provider API keys.
    pub credentials: CredentialsSection,
}

/// `[search]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Provider names, case-insensitive (`pexels`, `mixkit`, `coverr`,
    /// `videvo`, `youtube`, `web`).
    pub providers: Vec<String>,
    /// Results requested from each provider.
    pub max_results_per_provider: usize,
    /// Per-provider timeout.
    pub timeout_seconds: u64,
    /// Cap on content words compared by the fuzzy scorer.
    pub fuzzy_word_limit: Option<usize>,
    /// Cap on the ranked list.
    pub max_results_total: Option<usize>,
    /// Fixed User-Agent instead of the built-in rotation.
    pub user_agent: Option<String>,
}

impl Default for SearchSection {
    fn default() -> Self {
        let core = SearchConfig::default();
        Self {
            providers: core
                .providers
                .iter()
                .map(|p| p.name().to_lowercase())
                .collect(),
            max_results_per_provider: core.max_results_per_provider,
            timeout_seconds: core.timeout_seconds,
            fuzzy_word_limit: core.scoring.fuzzy_word_limit,
            max_results_total: core.max_results_total,
            user_agent: core.user_agent,
        }
    }
}

/// `[credentials]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsSection {
    /// Pexels API key.
    pub pexels: Option<String>,
    /// YouTube Data API key.
    pub youtube: Option<String>,
    /// SerpApi key.
    pub serpapi: Option<String>,
}

impl CredentialsSection {
    fn to_credentials(&self) -> Credentials {
        let mut creds = Credentials::new();
        for (name, key) in [
            ("pexels", &self.pexels),
            ("youtube", &self.youtube),
            ("serpapi", &self.serpapi),
        ] {
            if let Some(key) = key {
                creds.insert(name, key.as_str());
            }
        }
        creds
    }
}

impl BrollConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BrollError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| BrollError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/broll/config.toml`.
    ///
    /// `BROLL_CONFIG_DIR` overrides the directory.
    pub fn default_config_path() -> PathBuf {
        if let Some(dir) = std::env::var_os("BROLL_CONFIG_DIR") {
            return PathBuf::from(dir).join("config.toml");
        }
        dirs::config_dir()
            .map(|d| d.join("broll"))
            .unwrap_or_else(|| PathBuf::from("/tmp/broll-config"))
            .join("config.toml")
    }

    /// Parsed provider list.
    ///
    /// # Errors
    ///
    /// Returns [`BrollError::Config`] for an unknown provider name.
    pub fn providers(&self) -> Result<Vec<ProviderId>> {
        self.search
            .providers
            .iter()
            .map(|name| name.parse::<ProviderId>().map_err(BrollError::Config))
            .collect()
    }

    /// Build the core search configuration.
    ///
    /// `env` credentials win over the `[credentials]` section.
    ///
    /// # Errors
    ///
    /// Returns [`BrollError::Config`] for unknown providers or values the
    /// core rejects.
    pub fn into_search_config(self, env: &Credentials) -> Result<SearchConfig> {
        let providers = self.providers()?;
        let config = SearchConfig {
            providers,
            max_results_per_provider: self.search.max_results_per_provider,
            timeout_seconds: self.search.timeout_seconds,
            user_agent: self.search.user_agent,
            scoring: ScoringConfig {
                fuzzy_word_limit: self.search.fuzzy_word_limit,
            },
            max_results_total: self.search.max_results_total,
            credentials: self.credentials.to_credentials().merged(env),
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }
}
