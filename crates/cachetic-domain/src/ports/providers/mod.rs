//! External Provider Ports
//!
//! Ports for the storage backends the cache facade delegates to.

/// Cache provider port
pub mod cache;

// Re-export provider ports for convenience
pub use cache::{CacheEntryConfig, CacheProvider, CacheStats};
