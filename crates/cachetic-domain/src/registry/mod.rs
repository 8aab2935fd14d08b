//! Provider registries
//!
//! Provider crates register factories here at link time; infrastructure
//! resolves them by name.

/// Cache provider registry
pub mod cache;

pub use cache::{
    CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry, is_registered,
    list_cache_providers, resolve_cache_provider,
};
