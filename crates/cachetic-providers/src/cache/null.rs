//! Null cache provider for testing
//!
//! A cache provider implementation that doesn't store anything.
//! Useful for testing and disabling caching.

use async_trait::async_trait;
use cachetic_domain::constants::PROVIDER_NULL;
use cachetic_domain::error::Result;
use cachetic_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider, CacheStats};
use std::sync::Arc;
use std::time::Duration;

/// Null cache provider that doesn't store anything
///
/// This provider always returns None for gets and accepts all sets
/// without storing the data.
///
/// # Example
///
/// ```rust
/// use cachetic_providers::cache::NullCacheProvider;
///
/// let provider = NullCacheProvider::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &[u8], _config: CacheEntryConfig) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn expire(&self, _key: &str, _ttl: Option<Duration>) -> Result<bool> {
        Ok(false)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    async fn clear_prefix(&self, _prefix: &str) -> Result<usize> {
        Ok(0)
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::new())
    }

    async fn size(&self) -> Result<usize> {
        Ok(0)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NULL
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use cachetic_domain::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static NULL_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: PROVIDER_NULL,
    description: "No-op cache that stores nothing",
    factory: |_config: &CacheProviderConfig| Ok(Arc::new(NullCacheProvider::new())),
};
