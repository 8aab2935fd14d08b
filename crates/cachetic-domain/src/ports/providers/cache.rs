//! Cache Provider Port
//!
//! Port for cache backend providers. Supports a local disk store, Redis,
//! MongoDB, an in-process memory store and a null provider for testing.
//!
//! Providers deal in raw bytes only. Turning typed values into bytes is the
//! job of the codec layer sitting in front of them.

use crate::error::Result;
use crate::value_objects::CacheTtl;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Entry Configuration
///
/// Configures how a cache entry should be stored. A `ttl` of `None` keeps
/// the entry until it is deleted.
///
/// # Example
///
/// ```
/// use cachetic_domain::ports::providers::cache::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::new().with_ttl(Duration::from_secs(600));
/// assert_eq!(config.ttl, Some(Duration::from_secs(600)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry
    pub ttl: Option<Duration>,
}

impl CacheEntryConfig {
    /// Create a config for an entry that never expires
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the TTL for the cache entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set TTL in seconds
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Some(Duration::from_secs(secs));
        self
    }

    /// Build a config from a TTL policy
    ///
    /// `Disabled` maps to no expiry; callers are expected to skip the
    /// write before it reaches a provider.
    pub fn from_ttl(ttl: CacheTtl) -> Self {
        Self {
            ttl: ttl.duration(),
        }
    }

    /// TTL rounded up to whole seconds, never below one
    pub fn ttl_secs_ceil(&self) -> Option<u64> {
        self.ttl.map(ceil_secs)
    }
}

/// Round a duration up to whole seconds, never below one
pub fn ceil_secs(ttl: Duration) -> u64 {
    let secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    secs.max(1)
}

/// Cache Operation Statistics
///
/// Tracks cache performance metrics including hits, misses, and hit rate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of cache entries
    pub entries: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate hit rate from hits and misses
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Cache Provider Port
///
/// Defines the contract for cache backend providers. Implementations
/// store opaque bytes with optional expiry.
///
/// # Implementations
///
/// - **Disk**: One file per entry under a local directory
/// - **Redis**: Distributed cache over a Redis server
/// - **MongoDB**: Documents in a single collection
/// - **Memory**: In-process Moka cache
/// - **Null**: No-op provider for testing
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache
    ///
    /// # Returns
    /// The stored bytes, or None if not found or expired
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store a value, replacing any previous one
    async fn set(&self, key: &str, value: &[u8], config: CacheEntryConfig) -> Result<()>;

    /// Delete a value from the cache
    ///
    /// # Returns
    /// True if the key was deleted, false if it didn't exist
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Check if a key exists in the cache and hasn't expired
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Change the expiry of an existing entry
    ///
    /// `None` removes any expiry. Returns false when the key is absent.
    async fn expire(&self, key: &str, ttl: Option<Duration>) -> Result<bool>;

    /// Clear all values from the cache
    async fn clear(&self) -> Result<()>;

    /// Remove every key starting with `prefix`
    ///
    /// # Returns
    /// Number of entries removed
    async fn clear_prefix(&self, prefix: &str) -> Result<usize>;

    /// Get cache statistics
    async fn stats(&self) -> Result<CacheStats>;

    /// Get the cache size (number of entries)
    async fn size(&self) -> Result<usize>;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "disk", "redis", "null")
    fn provider_name(&self) -> &str;
}
