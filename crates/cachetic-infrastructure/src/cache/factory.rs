//! Provider construction from configuration
//!
//! Maps a [`CacheConfig`] onto a registry request and resolves it against
//! the backends linked into the binary.

use crate::config::CacheConfig;
use cachetic_domain::error::{Error, Result};
use cachetic_domain::ports::providers::cache::CacheProvider;
use cachetic_domain::registry::{
    CacheProviderConfig, is_registered, list_cache_providers, resolve_cache_provider,
};
use cachetic_providers::cache::NullCacheProvider;
use std::sync::Arc;
use tracing::info;

/// Build the provider selected by `config`
///
/// # Errors
/// * `UnsupportedBackend` - the URL scheme is unknown or its backend was not
///   compiled in
/// * `Configuration` - the backend rejected its settings
pub fn create_provider(config: &CacheConfig) -> Result<Arc<dyn CacheProvider>> {
    let location = config.location()?;
    let name = location.provider_name();

    if !is_registered(name) {
        return Err(Error::unsupported_backend(format!(
            "{name} (not compiled in; available: {})",
            available_names().join(", ")
        )));
    }

    let mut provider_config =
        CacheProviderConfig::new(name).with_max_capacity(config.max_capacity);
    if let Some(uri) = location.uri() {
        provider_config = provider_config.with_uri(uri);
    }
    if let Some(path) = location.path() {
        provider_config = provider_config.with_path(path);
    }

    info!(backend = name, location = %location, "Creating cache provider");

    resolve_cache_provider(&provider_config)
        .map_err(|e| Error::config(format!("Failed to resolve cache provider: {e}")))
}

/// Provider that stores nothing, for tests and disabled caching
pub fn create_null() -> Arc<dyn CacheProvider> {
    Arc::new(NullCacheProvider::new())
}

/// Registered backends as `(name, description)` pairs
pub fn list_available() -> Vec<(&'static str, &'static str)> {
    list_cache_providers()
}

fn available_names() -> Vec<&'static str> {
    list_available().into_iter().map(|(name, _)| name).collect()
}
