//! Configuration management
//!
//! Layered configuration (defaults, TOML file, environment) built with
//! Figment and validated before use.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::{AppConfig, CacheConfig, LoggingConfig};
