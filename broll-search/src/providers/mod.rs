//! Provider implementations.
//!
//! Each network-backed source has a live strategy implementing
//! [`crate::provider::Provider`]. [`SyntheticProvider`] stands in for any of
//! them, and [`ResilientProvider`] composes a live strategy with its
//! synthetic counterpart.

pub mod catalog;
pub mod fallback;
pub mod pexels;
pub mod resilient;
pub mod web;
pub mod youtube;

pub use catalog::{CatalogProvider, CatalogSite};
pub use fallback::SyntheticProvider;
pub use pexels::PexelsProvider;
pub use resilient::ResilientProvider;
pub use web::WebSearchProvider;
pub use youtube::YouTubeProvider;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::ProviderId;

/// API key configured for `id`.
///
/// # Errors
///
/// Returns [`SearchError::MissingCredential`] if the key is not set, or
/// [`SearchError::Config`] if `id` takes no key.
pub(crate) fn api_key(config: &SearchConfig, id: ProviderId) -> Result<&str, SearchError> {
    let name = id
        .credential_name()
        .ok_or_else(|| SearchError::Config(format!("{id} takes no API key")))?;
    config
        .credentials
        .get(name)
        .ok_or_else(|| SearchError::MissingCredential(name.into()))
}
