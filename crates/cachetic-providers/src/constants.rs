//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants
//! (TTL sentinels, key layout) live in cachetic-domain.

// ============================================================================
// DISK PROVIDER CONSTANTS
// ============================================================================

/// File extension of a stored entry
pub const DISK_ENTRY_EXTENSION: &str = "entry";

/// File extension of an in-flight write
pub const DISK_TEMP_EXTENSION: &str = "tmp";

/// Number of per-key write locks; keys share a lock by digest
pub const DISK_LOCK_STRIPES: usize = 64;

// ============================================================================
// REDIS PROVIDER CONSTANTS
// ============================================================================

/// Default Redis URL when none is configured
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";

/// Keys requested per SCAN round trip
pub const REDIS_SCAN_COUNT: usize = 500;

// ============================================================================
// MONGODB PROVIDER CONSTANTS
// ============================================================================

/// Query parameter naming the collection in a MongoDB cache URL
pub const MONGO_COLLECTION_PARAM: &str = "collection";

/// Document field holding the cache key
pub const MONGO_FIELD_NAME: &str = "name";

/// Document field holding the cached bytes
pub const MONGO_FIELD_VALUE: &str = "value";

/// Document field holding the absolute expiry (Unix seconds) or null
pub const MONGO_FIELD_EXPIRES: &str = "ex";
