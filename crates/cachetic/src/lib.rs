//! # cachetic
//!
//! A typed cache facade. Configure a backend with one URL (a directory,
//! `redis://`, `mongodb://`, `memory://`), then get and set serde values
//! through [`Cachetic`].
//!
//! ## Example
//!
//! ```ignore
//! use cachetic::{CacheConfig, Cachetic};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let cache = Cachetic::<Person>::new(CacheConfig::from_url("./.cache"))?;
//! cache.set("user:1", &Person { name: "Alice".into(), age: 30 }).await?;
//! let person = cache.get("user:1").await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - provider port, registry, keys, TTLs, locations, errors
//! - `providers` - disk, Redis, MongoDB, memory and null backends
//! - `infrastructure` - typed facade, codecs, configuration, logging
//! - `cli` - the `cachetic` command line tool

/// Domain layer - provider port, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cachetic_domain::*;
}

/// Backend implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use cachetic_providers::*;
}

/// Infrastructure layer - facade, codecs, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cachetic_infrastructure::*;
}

/// Command line interface
pub mod cli;

// Re-export commonly used types at the crate root
pub use domain::{CacheKey, CacheLocation, CacheTtl, Error, Result};
pub use infrastructure::codec::{
    BincodeCodec, BytesCodec, Codec, JsonCodec, PlainCodec, TextCodec,
};
pub use infrastructure::config::{AppConfig, CacheConfig, ConfigLoader};
pub use infrastructure::Cachetic;
