//! Cache Provider Registry
//!
//! Auto-registration system for cache providers.
//! Providers register themselves into a linkme distributed slice and are
//! discovered at runtime by name.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::ports::providers::cache::CacheProvider;

/// Configuration for cache provider creation
///
/// Contains all configuration options that a cache provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct CacheProviderConfig {
    /// Provider name (e.g., "disk", "redis", "null")
    pub provider: String,
    /// Connection URI (for network caches)
    pub uri: Option<String>,
    /// Storage directory (for the disk cache)
    pub path: Option<PathBuf>,
    /// Maximum cache capacity in bytes (for the memory cache)
    pub max_capacity: Option<u64>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl CacheProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the storage directory
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the max capacity
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for cache providers
///
/// Each cache provider implementation registers itself with this entry
/// using `#[linkme::distributed_slice(CACHE_PROVIDERS)]`.
pub struct CacheProviderEntry {
    /// Unique provider name (e.g., "disk", "redis", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&CacheProviderConfig) -> Result<Arc<dyn CacheProvider>, String>,
}

// Providers submit entries at link time
#[linkme::distributed_slice]
pub static CACHE_PROVIDERS: [CacheProviderEntry] = [..];

/// Resolve cache provider by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn CacheProvider>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_cache_provider(
    config: &CacheProviderConfig,
) -> Result<Arc<dyn CacheProvider>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = CACHE_PROVIDERS.iter().find(|e| e.name == provider_name) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = CACHE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown cache provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// Whether a provider with this name was linked in
pub fn is_registered(name: &str) -> bool {
    CACHE_PROVIDERS.iter().any(|e| e.name == name)
}

/// List all registered cache providers
///
/// Returns a list of (name, description) tuples sorted by name.
pub fn list_cache_providers() -> Vec<(&'static str, &'static str)> {
    let mut providers: Vec<(&'static str, &'static str)> = CACHE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    providers.sort_unstable_by_key(|(name, _)| *name);
    providers
}
