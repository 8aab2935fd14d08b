// Clippy allows for nested configuration checks
#![allow(clippy::collapsible_if)]

//! # Infrastructure Layer
//!
//! Everything between the byte-level providers and an application: the
//! typed cache facade, value codecs, configuration loading and logging.
//!
//! ## Module Categories
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | `Cachetic<T>` facade and provider factory |
//! | [`codec`] | JSON, bytes, text, plain and bincode codecs |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML/env configuration |
//! | [`constants`] | File names, env prefixes, log defaults |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

// Force linkme registration of all backends
extern crate cachetic_providers;

// Core infrastructure modules
pub mod cache;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use cache::Cachetic;
pub use codec::{BincodeCodec, BytesCodec, Codec, JsonCodec, PlainCodec, TextCodec};
pub use config::{AppConfig, CacheConfig, ConfigLoader, LoggingConfig};
pub use error_ext::ErrorContext;
