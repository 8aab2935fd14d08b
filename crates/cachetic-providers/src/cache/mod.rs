//! Cache Provider Implementations
//!
//! Byte-level backends behind the typed cache facade.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`DiskCacheProvider`] | Local | One file per entry (default) |
//! | [`MemoryCacheProvider`] | Local | In-process Moka cache |
//! | [`RedisCacheProvider`] | Distributed | Redis-backed for multi-instance |
//! | `MongoCacheProvider` | Distributed | MongoDB collection (`cache-mongo`) |
//! | [`NullCacheProvider`] | Testing | No-op stub for testing |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: Use `NullCacheProvider` or `MemoryCacheProvider`
//! - **Single Instance**: Use `DiskCacheProvider` to survive restarts
//! - **Multi Instance**: Use `RedisCacheProvider` or `MongoCacheProvider`

pub mod disk;
#[cfg(feature = "cache-memory")]
pub mod memory;
#[cfg(feature = "cache-mongo")]
pub mod mongo;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

// Re-export for convenience
pub use disk::DiskCacheProvider;
#[cfg(feature = "cache-memory")]
pub use memory::MemoryCacheProvider;
#[cfg(feature = "cache-mongo")]
pub use mongo::{MongoCacheProvider, MongoTarget};
pub use null::NullCacheProvider;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheProvider;

// Re-export domain types used by cache providers
pub use cachetic_domain::ports::providers::cache::{CacheEntryConfig, CacheStats};
