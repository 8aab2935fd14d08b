//! Cache configuration types

use cachetic_domain::constants::{
    DEFAULT_CACHE_DIR, DEFAULT_CACHE_TTL, DEFAULT_MEMORY_CAPACITY, TTL_NEVER,
};
use cachetic_domain::error::{Error, Result};
use cachetic_domain::value_objects::{CacheLocation, CacheTtl, redact_url};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Cache configuration
///
/// `url` selects the backend; without it entries are stored on disk under
/// `dir`. `default_ttl` is in seconds: `-1` keeps entries forever, `0`
/// disables writes.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Backend URL (`redis://`, `mongodb://`, `memory://`, a path, ...)
    pub url: Option<String>,

    /// Directory of the disk backend
    pub dir: PathBuf,

    /// Default TTL in seconds applied by `set`
    pub default_ttl: i64,

    /// Namespace prepended to every key as `prefix:key`
    pub prefix: String,

    /// Byte capacity of the memory backend
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: None,
            dir: PathBuf::from(DEFAULT_CACHE_DIR),
            default_ttl: DEFAULT_CACHE_TTL,
            prefix: String::new(),
            max_capacity: DEFAULT_MEMORY_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Configuration for the given backend URL, defaults elsewhere
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::default().with_url(url)
    }

    /// Set the backend URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the disk directory
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set the default TTL in seconds
    pub fn with_default_ttl(mut self, seconds: i64) -> Self {
        self.default_ttl = seconds;
        self
    }

    /// Set the key prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the memory backend capacity in bytes
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Backend location selected by `url` and `dir`
    pub fn location(&self) -> Result<CacheLocation> {
        CacheLocation::resolve(self.url.as_deref(), &self.dir)
    }

    /// Default TTL as a policy
    pub fn ttl(&self) -> CacheTtl {
        CacheTtl::from_seconds(self.default_ttl)
    }

    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<()> {
        if self.default_ttl < TTL_NEVER {
            return Err(Error::config(format!(
                "Cache default_ttl must be -1 (never expire), 0 (disabled) or positive, got {}",
                self.default_ttl
            )));
        }

        if self.prefix.chars().any(char::is_control) {
            return Err(Error::config(
                "Cache prefix cannot contain control characters",
            ));
        }

        if self.prefix.ends_with(':') {
            return Err(Error::config(
                "Cache prefix must not end with ':' (the separator is added automatically)",
            ));
        }

        if self.max_capacity == 0 {
            return Err(Error::config("Cache max_capacity cannot be 0"));
        }

        if self.url.is_none() && self.dir.as_os_str().is_empty() {
            return Err(Error::config(
                "Cache dir cannot be empty when no cache url is set",
            ));
        }

        self.location().map_err(|e| {
            Error::config_with_source(format!("Invalid cache url: {e}"), e)
        })?;

        Ok(())
    }
}

impl fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfig")
            .field("url", &self.url.as_deref().map(redact_url))
            .field("dir", &self.dir)
            .field("default_ttl", &self.default_ttl)
            .field("prefix", &self.prefix)
            .field("max_capacity", &self.max_capacity)
            .finish()
    }
}
