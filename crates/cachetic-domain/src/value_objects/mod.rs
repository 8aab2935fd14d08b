//! Value objects shared by the cache layers

/// Backend location parsed from the cache URL
pub mod location;
/// Key composition and validation
pub mod key;
/// Expiration policy
pub mod ttl;

pub use key::CacheKey;
pub use location::{CacheLocation, redact_url};
pub use ttl::CacheTtl;
