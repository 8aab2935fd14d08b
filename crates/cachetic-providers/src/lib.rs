// Allow collapsible_if for nested expiry checks
#![allow(clippy::collapsible_if)]

//! # cachetic - Provider Implementations
//!
//! Byte-level cache backends implementing the `CacheProvider` port defined
//! in `cachetic-domain`. Every backend registers itself in the
//! `CACHE_PROVIDERS` registry at link time.
//!
//! ## Backends
//!
//! | Name | Type | Feature |
//! |------|------|---------|
//! | `disk` | `DiskCacheProvider` | always |
//! | `null` | `NullCacheProvider` | always |
//! | `memory` | `MemoryCacheProvider` | `cache-memory` |
//! | `redis` | `RedisCacheProvider` | `cache-redis` |
//! | `mongodb` | `MongoCacheProvider` | `cache-mongo` |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! cachetic-providers = { version = "0.4", default-features = false, features = ["cache-mongo"] }
//! ```

// Re-export cachetic-domain types commonly used with providers
pub use cachetic_domain::error::{Error, Result};
pub use cachetic_domain::ports::providers::CacheProvider;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Cache provider implementations
///
/// Implements `CacheProvider` trait for caching backends.
pub mod cache;
