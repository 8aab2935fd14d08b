//! Cache key utilities

use crate::constants::{CACHE_KEY_MAX_LENGTH, CACHE_KEY_SEPARATOR};
use crate::error::{Error, Result};

/// Cache key utilities
pub struct CacheKey;

impl CacheKey {
    /// Join a prefix and a key; an empty prefix leaves the key untouched
    pub fn compose(prefix: &str, key: &str) -> String {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}{CACHE_KEY_SEPARATOR}{key}")
        }
    }

    /// Strip `prefix:` from a stored key, if present
    pub fn strip_prefix<'a>(prefix: &str, stored: &'a str) -> &'a str {
        if prefix.is_empty() {
            return stored;
        }
        stored
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(CACHE_KEY_SEPARATOR))
            .unwrap_or(stored)
    }

    /// Validate cache key format
    pub fn validate(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::invalid_argument("Cache key cannot be empty"));
        }

        if key.len() > CACHE_KEY_MAX_LENGTH {
            return Err(Error::invalid_argument(format!(
                "Cache key too long (max {CACHE_KEY_MAX_LENGTH} characters)"
            )));
        }

        if key.chars().any(char::is_control) {
            return Err(Error::invalid_argument(
                "Cache key contains invalid characters",
            ));
        }

        Ok(())
    }
}
