//! Typed caching over the provider registry
//!
//! Cache provider implementations are in the cachetic-providers crate.
//! Types (`CacheEntryConfig`, `CacheStats`, `CacheProvider`) are in
//! cachetic-domain.

pub mod factory;
pub mod typed;

pub use factory::{create_null, create_provider, list_available};
pub use typed::Cachetic;
