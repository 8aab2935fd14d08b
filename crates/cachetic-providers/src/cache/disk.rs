//! Local disk cache provider
//!
//! Persistent cache that keeps one file per entry under a directory.
//! This is the default backend when no cache URL is configured.
//!
//! ## Layout
//!
//! - File name: hex SHA-256 of the key, extension `.entry`
//! - Content: JSON `{ "key", "expires_at", "value" }` with `expires_at` in
//!   Unix milliseconds (or null) and `value` base64-encoded
//! - Writes land in a temporary sibling and are renamed into place
//!
//! Expired entries are removed when they are read; `purge_expired` sweeps
//! the whole directory.
//!
//! Within one process, operations on the same key are serialised through a
//! striped lock keyed by the file digest, so `expire` or an expired-entry
//! cleanup never overwrites a concurrent `set`.
//!
//! ## Example
//!
//! ```ignore
//! use cachetic_providers::cache::DiskCacheProvider;
//!
//! let provider = DiskCacheProvider::new("./.cache");
//! ```

use crate::constants::{DISK_ENTRY_EXTENSION, DISK_LOCK_STRIPES, DISK_TEMP_EXTENSION};
use crate::utils::{HitCounter, now_millis};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cachetic_domain::constants::PROVIDER_DISK;
use cachetic_domain::error::{Error, Result};
use cachetic_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider, CacheStats};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Stored form of a single entry
#[derive(Debug, Serialize, Deserialize)]
struct DiskEntry {
    key: String,
    expires_at: Option<i64>,
    value: String,
}

impl DiskEntry {
    fn new(key: &str, value: &[u8], ttl: Option<Duration>) -> Self {
        Self {
            key: key.to_string(),
            expires_at: ttl.map(expiry_from_now),
            value: STANDARD.encode(value),
        }
    }

    fn is_expired(&self, now_ms: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_ms)
    }

    fn decode_value(&self) -> Result<Vec<u8>> {
        STANDARD.decode(&self.value).map_err(|e| {
            Error::infrastructure_with_source(
                format!("Corrupt disk cache entry for key '{}'", self.key),
                e,
            )
        })
    }
}

fn expiry_from_now(ttl: Duration) -> i64 {
    let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
    now_millis().saturating_add(ttl_ms)
}

/// Disk-backed cache provider
///
/// Cloning is cheap; clones share the directory, the key locks and the
/// hit counters.
#[derive(Clone)]
pub struct DiskCacheProvider {
    root: PathBuf,
    locks: Arc<[Mutex<()>]>,
    counter: Arc<HitCounter>,
}

impl DiskCacheProvider {
    /// Create a provider rooted at `root`
    ///
    /// The directory is created on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let locks: Vec<Mutex<()>> = (0..DISK_LOCK_STRIPES).map(|_| Mutex::new(())).collect();
        Self {
            root: root.into(),
            locks: locks.into(),
            counter: Arc::new(HitCounter::new()),
        }
    }

    /// Directory holding the entries
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Remove every expired entry
    ///
    /// # Returns
    /// Number of entries removed
    pub async fn purge_expired(&self) -> Result<usize> {
        let now = now_millis();
        let mut removed = 0;
        for path in self.entry_files().await? {
            let Some(entry) = self.read_entry(&path).await? else {
                continue;
            };
            if !entry.is_expired(now) {
                continue;
            }
            // Re-read under the key lock so a concurrent `set` is not removed
            let _guard = self.lock_key(&entry.key).await;
            let still_expired = self
                .read_entry(&path)
                .await?
                .is_some_and(|current| current.is_expired(now));
            if still_expired && remove_file(&path).await? {
                removed += 1;
            }
        }
        debug!(removed, root = %self.root.display(), "Purged expired disk cache entries");
        Ok(removed)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.root
            .join(format!("{}.{DISK_ENTRY_EXTENSION}", hex::encode(digest)))
    }

    /// Hold the write lock for `key` until the guard is dropped
    async fn lock_key(&self, key: &str) -> MutexGuard<'_, ()> {
        let digest = Sha256::digest(key.as_bytes());
        let stripe = usize::from(digest[0]) % self.locks.len();
        self.locks[stripe].lock().await
    }

    async fn read_entry(&self, path: &Path) -> Result<Option<DiskEntry>> {
        let content = match tokio::fs::read(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read cache entry {}", path.display()),
                    e,
                ));
            }
        };

        match serde_json::from_slice(&content) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Discarding unreadable disk cache entry");
                remove_file(path).await?;
                Ok(None)
            }
        }
    }

    /// Load the live entry for `key`, deleting it if it has expired
    async fn load_live(&self, key: &str) -> Result<Option<(PathBuf, DiskEntry)>> {
        let path = self.entry_path(key);
        let Some(entry) = self.read_entry(&path).await? else {
            return Ok(None);
        };

        if entry.key != key {
            return Ok(None);
        }

        if entry.is_expired(now_millis()) {
            debug!(key, "Disk cache entry expired");
            remove_file(&path).await?;
            return Ok(None);
        }

        Ok(Some((path, entry)))
    }

    async fn write_entry(&self, path: &Path, entry: &DiskEntry) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to create cache directory {}", self.root.display()),
                e,
            )
        })?;

        let content = serde_json::to_vec(entry)?;
        let temp = self
            .root
            .join(format!(".{}.{DISK_TEMP_EXTENSION}", uuid::Uuid::new_v4()));

        tokio::fs::write(&temp, content).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write {}", temp.display()), e)
        })?;

        if let Err(e) = tokio::fs::rename(&temp, path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(Error::io_with_source(
                format!("Failed to move cache entry into {}", path.display()),
                e,
            ));
        }
        Ok(())
    }

    async fn entry_files(&self) -> Result<Vec<PathBuf>> {
        let mut dir = match tokio::fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to list cache directory {}", self.root.display()),
                    e,
                ));
            }
        };

        let mut files = Vec::new();
        while let Some(item) = dir.next_entry().await? {
            let path = item.path();
            if path
                .extension()
                .is_some_and(|ext| ext == DISK_ENTRY_EXTENSION)
            {
                files.push(path);
            }
        }
        Ok(files)
    }
}

async fn remove_file(path: &Path) -> Result<bool> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io_with_source(
            format!("Failed to remove {}", path.display()),
            e,
        )),
    }
}

#[async_trait]
impl CacheProvider for DiskCacheProvider {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let _guard = self.lock_key(key).await;
        let value = match self.load_live(key).await? {
            Some((_, entry)) => Some(entry.decode_value()?),
            None => None,
        };
        self.counter.record(&value);
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], config: CacheEntryConfig) -> Result<()> {
        let entry = DiskEntry::new(key, value, config.ttl);
        let _guard = self.lock_key(key).await;
        self.write_entry(&self.entry_path(key), &entry).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let _guard = self.lock_key(key).await;
        match self.load_live(key).await? {
            Some((path, _)) => remove_file(&path).await,
            None => Ok(false),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let _guard = self.lock_key(key).await;
        Ok(self.load_live(key).await?.is_some())
    }

    async fn expire(&self, key: &str, ttl: Option<Duration>) -> Result<bool> {
        let _guard = self.lock_key(key).await;
        let Some((path, mut entry)) = self.load_live(key).await? else {
            return Ok(false);
        };
        entry.expires_at = ttl.map(expiry_from_now);
        self.write_entry(&path, &entry).await?;
        Ok(true)
    }

    async fn clear(&self) -> Result<()> {
        for path in self.entry_files().await? {
            remove_file(&path).await?;
        }
        Ok(())
    }

    async fn clear_prefix(&self, prefix: &str) -> Result<usize> {
        let mut removed = 0;
        for path in self.entry_files().await? {
            let Some(entry) = self.read_entry(&path).await? else {
                continue;
            };
            if entry.key.starts_with(prefix) && remove_file(&path).await? {
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
        let now = now_millis();
        let mut live = 0;
        for path in self.entry_files().await? {
            if let Some(entry) = self.read_entry(&path).await? {
                if !entry.is_expired(now) {
                    live += 1;
                }
            }
        }
        Ok(live)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_DISK
    }
}

impl std::fmt::Debug for DiskCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskCacheProvider")
            .field("root", &self.root)
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use cachetic_domain::constants::DEFAULT_CACHE_DIR;
use cachetic_domain::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

/// Factory function for creating disk cache provider instances.
fn disk_cache_factory(
    config: &CacheProviderConfig,
) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let root = config
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR));
    tracing::info!("Initializing local cache in {}", root.display());
    Ok(Arc::new(DiskCacheProvider::new(root)))
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static DISK_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: PROVIDER_DISK,
    description: "Local disk cache (one file per entry)",
    factory: disk_cache_factory,
};
