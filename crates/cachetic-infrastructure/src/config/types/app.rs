//! Main application configuration

use super::{CacheConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration object
///
/// Every section falls back to its defaults, so an empty TOML file is a
/// valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cache backend settings
    pub cache: CacheConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}
