//! # cachetic domain
//!
//! Core types for the cachetic cache facade: the backend port, the
//! provider registry, value objects for keys, TTLs and backend locations,
//! and the shared error type.
//!
//! ## Architecture
//!
//! - `ports` - the `CacheProvider` contract every backend implements
//! - `registry` - link-time registration of backend factories
//! - `value_objects` - `CacheKey`, `CacheTtl`, `CacheLocation`
//! - `error` - `Error` and `Result`

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port interfaces
pub mod ports;
/// Provider registries
pub mod registry;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{CacheEntryConfig, CacheProvider, CacheStats};
pub use value_objects::{CacheKey, CacheLocation, CacheTtl};
