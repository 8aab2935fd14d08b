//! Infrastructure constants
//!
//! Names of configuration files, environment variables and logging
//! defaults. Cache defaults (TTL sentinels, directory, capacity) live in
//! `cachetic_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cachetic.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cachetic";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "CACHETIC";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Flat environment variables understood for compatibility
pub const LEGACY_ENV_VARS: &[&str] = &["CACHE_URL", "CACHE_DIR", "CACHE_TTL", "CACHE_PREFIX"];

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "CACHETIC_LOG";

/// File name stem of rolled log files
pub const LOG_FILE_STEM: &str = "cachetic";
