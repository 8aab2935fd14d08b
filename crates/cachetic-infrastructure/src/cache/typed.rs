//! Typed cache facade
//!
//! [`Cachetic`] puts a value type, a codec, a key prefix and a default TTL
//! in front of any [`CacheProvider`].
//!
//! ## TTL rules
//!
//! Seconds are signed. `-1` (or any negative value) stores without expiry,
//! `0` skips the write, a positive value expires after that many seconds.
//! [`Cachetic::set`] applies the configured default; [`Cachetic::set_ex`]
//! overrides it for one write.
//!
//! ## Example
//!
//! ```ignore
//! use cachetic_infrastructure::cache::Cachetic;
//! use cachetic_infrastructure::config::CacheConfig;
//!
//! let cache = Cachetic::<User>::new(CacheConfig::from_url("memory://").with_prefix("app"))?;
//! cache.set("alice", &user).await?;
//! let user = cache.get_required("alice").await?;
//! ```

use super::factory::create_provider;
use crate::codec::{Codec, JsonCodec};
use crate::config::CacheConfig;
use cachetic_domain::error::{Error, Result};
use cachetic_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider, CacheStats};
use cachetic_domain::value_objects::{CacheKey, CacheTtl};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Typed cache over a byte provider
///
/// Cloning is cheap and clones share the provider.
pub struct Cachetic<T, C = JsonCodec> {
    provider: Arc<dyn CacheProvider>,
    codec: C,
    default_ttl: CacheTtl,
    prefix: String,
    _value: PhantomData<fn() -> T>,
}

impl<T> Cachetic<T, JsonCodec>
where
    JsonCodec: Codec<T>,
{
    /// Validate `config`, build its backend and store values as JSON
    pub fn new(config: CacheConfig) -> Result<Self> {
        Self::with_codec(config, JsonCodec)
    }
}

impl<T, C: Codec<T>> Cachetic<T, C> {
    /// Validate `config` and build its backend with a custom codec
    pub fn with_codec(config: CacheConfig, codec: C) -> Result<Self> {
        config.validate()?;
        let provider = create_provider(&config)?;
        Ok(Self::from_provider(
            provider,
            codec,
            config.ttl(),
            config.prefix,
        ))
    }

    /// Wrap an existing provider
    pub fn from_provider(
        provider: Arc<dyn CacheProvider>,
        codec: C,
        default_ttl: impl Into<CacheTtl>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            codec,
            default_ttl: default_ttl.into(),
            prefix: prefix.into(),
            _value: PhantomData,
        }
    }

    /// Key as stored in the backend
    ///
    /// With `with_prefix` the configured prefix is prepended as `prefix:key`.
    pub fn cache_key(&self, key: &str, with_prefix: bool) -> String {
        if with_prefix {
            CacheKey::compose(&self.prefix, key)
        } else {
            key.to_string()
        }
    }

    fn storage_key(&self, key: &str) -> Result<String> {
        CacheKey::validate(key)?;
        let full = self.cache_key(key, true);
        CacheKey::validate(&full)?;
        Ok(full)
    }

    /// Read a value, `None` when absent or expired
    pub async fn get(&self, key: &str) -> Result<Option<T>> {
        let full = self.storage_key(key)?;
        match self.provider.get(&full).await? {
            Some(bytes) => {
                debug!(key = %full, bytes = bytes.len(), "Cache hit");
                self.codec.decode(&bytes).map(Some)
            }
            None => {
                debug!(key = %full, "Cache miss");
                Ok(None)
            }
        }
    }

    /// Read a value that must be present
    ///
    /// # Errors
    /// `CacheNotFound` carrying the caller's key when the entry is absent
    pub async fn get_required(&self, key: &str) -> Result<T> {
        self.get(key)
            .await?
            .ok_or_else(|| Error::cache_not_found(key))
    }

    /// Store a value with the default TTL
    pub async fn set(&self, key: &str, value: &T) -> Result<()> {
        self.write(key, value, self.default_ttl).await
    }

    /// Store a value with an explicit TTL in seconds
    pub async fn set_ex(&self, key: &str, value: &T, ex: i64) -> Result<()> {
        self.write(key, value, CacheTtl::from_seconds(ex)).await
    }

    async fn write(&self, key: &str, value: &T, ttl: CacheTtl) -> Result<()> {
        let full = self.storage_key(key)?;
        if ttl.is_disabled() {
            debug!(key = %full, "TTL is 0, skipping cache write");
            return Ok(());
        }

        let bytes = self.codec.encode(value)?;
        debug!(key = %full, bytes = bytes.len(), ttl = %ttl, codec = self.codec.name(), "Cache set");
        self.provider
            .set(&full, &bytes, CacheEntryConfig::from_ttl(ttl))
            .await
    }

    /// Remove an entry, returning whether it existed
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let full = self.storage_key(key)?;
        self.provider.delete(&full).await
    }

    /// Whether a live entry exists
    pub async fn exists(&self, key: &str) -> Result<bool> {
        let full = self.storage_key(key)?;
        self.provider.exists(&full).await
    }

    /// Change the expiry of an existing entry
    ///
    /// Negative `ex` removes the expiry and `0` deletes the entry.
    /// Returns false when the key is absent.
    pub async fn expire(&self, key: &str, ex: i64) -> Result<bool> {
        let full = self.storage_key(key)?;
        match CacheTtl::from_seconds(ex) {
            CacheTtl::Disabled => self.provider.delete(&full).await,
            ttl => self.provider.expire(&full, ttl.duration()).await,
        }
    }

    /// Remove cached entries
    ///
    /// With a prefix configured only `prefix:*` keys are removed; otherwise
    /// the whole backend namespace is cleared.
    pub async fn clear(&self) -> Result<()> {
        if self.prefix.is_empty() {
            self.provider.clear().await
        } else {
            let removed = self
                .provider
                .clear_prefix(&self.cache_key("", true))
                .await?;
            debug!(prefix = %self.prefix, removed, "Cleared prefixed entries");
            Ok(())
        }
    }

    /// Number of live entries in the backend
    pub async fn size(&self) -> Result<usize> {
        self.provider.size().await
    }

    /// Hit/miss counters of the backend
    pub async fn stats(&self) -> Result<CacheStats> {
        self.provider.stats().await
    }

    /// Underlying byte provider
    pub fn provider(&self) -> &Arc<dyn CacheProvider> {
        &self.provider
    }

    /// TTL applied by `set`
    pub fn default_ttl(&self) -> CacheTtl {
        self.default_ttl
    }

    /// Key prefix (empty when none)
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Codec in use
    pub fn codec(&self) -> &C {
        &self.codec
    }
}

impl<T, C: Clone> Clone for Cachetic<T, C> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            codec: self.codec.clone(),
            default_ttl: self.default_ttl,
            prefix: self.prefix.clone(),
            _value: PhantomData,
        }
    }
}

impl<T, C> fmt::Debug for Cachetic<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cachetic")
            .field("provider", &self.provider.provider_name())
            .field("default_ttl", &self.default_ttl)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
