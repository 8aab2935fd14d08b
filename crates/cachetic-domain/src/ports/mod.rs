//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and the backend
//! adapters. High-level code depends on these traits; the providers crate
//! implements them.

/// External service provider ports
pub mod providers;

pub use providers::{CacheEntryConfig, CacheProvider, CacheStats};
