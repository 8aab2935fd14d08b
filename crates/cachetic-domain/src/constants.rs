//! Domain constants
//!
//! Values shared by every layer: key layout, TTL sentinels and the
//! defaults of the cache settings object.

// ============================================================================
// KEY CONSTANTS
// ============================================================================

/// Separator placed between the configured prefix and the caller's key
pub const CACHE_KEY_SEPARATOR: &str = ":";

/// Maximum cache key length in bytes (after prefixing)
pub const CACHE_KEY_MAX_LENGTH: usize = 250;

// ============================================================================
// TTL CONSTANTS
// ============================================================================

/// TTL value meaning "never expire"
pub const TTL_NEVER: i64 = -1;

/// TTL value meaning "do not store"
pub const TTL_DISABLED: i64 = 0;

/// Default TTL applied by the settings object
pub const DEFAULT_CACHE_TTL: i64 = TTL_NEVER;

// ============================================================================
// LOCATION CONSTANTS
// ============================================================================

/// Default directory for the disk backend
pub const DEFAULT_CACHE_DIR: &str = "./.cache";

/// Default byte capacity of the in-memory backend (100MB)
pub const DEFAULT_MEMORY_CAPACITY: u64 = 100 * 1024 * 1024;

/// Registry name of the disk backend
pub const PROVIDER_DISK: &str = "disk";

/// Registry name of the Redis backend
pub const PROVIDER_REDIS: &str = "redis";

/// Registry name of the MongoDB backend
pub const PROVIDER_MONGODB: &str = "mongodb";

/// Registry name of the in-memory backend
pub const PROVIDER_MEMORY: &str = "memory";

/// Registry name of the no-op backend
pub const PROVIDER_NULL: &str = "null";

/// Placeholder written over passwords when a URL is logged
pub const REDACTED_PASSWORD: &str = "***";
