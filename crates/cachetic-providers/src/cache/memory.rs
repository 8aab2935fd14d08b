//! Moka in-memory cache provider
//!
//! High-performance, concurrent in-process cache implementation using Moka.
//! Entries vanish with the process; use it for tests and single-instance
//! services that do not need persistence.
//!
//! ## Features
//!
//! - Per-entry TTL through a Moka `Expiry` policy
//! - Capacity measured in bytes (key + value)
//! - Automatic eviction of expired entries
//! - Writes, deletes and expiry changes on one key go through Moka's
//!   per-key compute, so they never interleave
//!
//! ## Example
//!
//! ```ignore
//! use cachetic_providers::cache::MemoryCacheProvider;
//!
//! let provider = MemoryCacheProvider::with_capacity(64 * 1024 * 1024);
//! ```

use crate::utils::HitCounter;
use async_trait::async_trait;
use cachetic_domain::constants::{DEFAULT_MEMORY_CAPACITY, PROVIDER_MEMORY};
use cachetic_domain::error::{Error, Result};
use cachetic_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider, CacheStats};
use moka::Expiry;
use moka::future::Cache;
use moka::ops::compute::{CompResult, Op};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Value stored in the Moka cache
#[derive(Clone)]
struct MemoryEntry {
    bytes: Arc<[u8]>,
    ttl: Option<Duration>,
}

/// Expiry policy reading the TTL carried by each entry
struct EntryExpiry;

impl Expiry<String, MemoryEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &MemoryEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &MemoryEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// Moka-based in-memory cache provider
///
/// Uses the Moka crate for high-performance concurrent caching.
#[derive(Clone)]
pub struct MemoryCacheProvider {
    cache: Cache<String, MemoryEntry>,
    max_capacity: u64,
    counter: Arc<HitCounter>,
}

impl Default for MemoryCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCacheProvider {
    /// Create a new memory cache provider with default settings
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_CAPACITY)
    }

    /// Create a new memory cache provider holding at most `max_capacity` bytes
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .weigher(|key: &String, entry: &MemoryEntry| {
                u32::try_from(key.len() + entry.bytes.len()).unwrap_or(u32::MAX)
            })
            .expire_after(EntryExpiry)
            .build();

        Self {
            cache,
            max_capacity,
            counter: Arc::new(HitCounter::new()),
        }
    }

    /// Get the maximum capacity of the cache in bytes
    pub fn max_capacity(&self) -> u64 {
        self.max_capacity
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self.cache.get(key).await.map(|entry| entry.bytes.to_vec());
        self.counter.record(&value);
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], config: CacheEntryConfig) -> Result<()> {
        let weight = (key.len() + value.len()) as u64;
        if weight > self.max_capacity {
            return Err(Error::cache(format!(
                "Cache value size {weight} exceeds maximum size {}",
                self.max_capacity
            )));
        }

        let entry = MemoryEntry {
            bytes: Arc::from(value),
            ttl: config.ttl,
        };
        self.cache
            .entry_by_ref(key)
            .and_compute_with(|_| async move { Op::Put(entry) })
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let result = self
            .cache
            .entry_by_ref(key)
            .and_compute_with(|current| async move {
                match current {
                    Some(_) => Op::Remove,
                    None => Op::Nop,
                }
            })
            .await;
        Ok(matches!(result, CompResult::Removed(_)))
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn expire(&self, key: &str, ttl: Option<Duration>) -> Result<bool> {
        let result = self
            .cache
            .entry_by_ref(key)
            .and_compute_with(|current| async move {
                match current {
                    Some(current) => Op::Put(MemoryEntry {
                        ttl,
                        ..current.into_value()
                    }),
                    None => Op::Nop,
                }
            })
            .await;
        Ok(matches!(result, CompResult::ReplacedWith(_)))
    }

    async fn clear(&self) -> Result<()> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(())
    }

    async fn clear_prefix(&self, prefix: &str) -> Result<usize> {
        let keys: Vec<Arc<String>> = self
            .cache
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key)
            .collect();

        let mut removed = 0;
        for key in keys {
            if self.delete(key.as_str()).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn stats(&self) -> Result<CacheStats> {
        let entries = self.size().await? as u64;
        Ok(self.counter.snapshot(entries))
    }

    async fn size(&self) -> Result<usize> {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        Ok(usize::try_from(self.cache.entry_count()).unwrap_or(usize::MAX))
    }

    fn provider_name(&self) -> &str {
        PROVIDER_MEMORY
    }
}

impl std::fmt::Debug for MemoryCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheProvider")
            .field("max_capacity", &self.max_capacity)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use cachetic_domain::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static MEMORY_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: PROVIDER_MEMORY,
    description: "Moka high-performance in-memory cache",
    factory: |config: &CacheProviderConfig| {
        let provider = config
            .max_capacity
            .map_or_else(MemoryCacheProvider::new, MemoryCacheProvider::with_capacity);
        Ok(Arc::new(provider))
    },
};
