//! Shared utilities for provider implementations

/// Hit/miss accounting
pub mod stats;

pub use stats::HitCounter;

/// Current Unix time in milliseconds
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current Unix time in seconds
#[cfg_attr(not(feature = "cache-mongo"), allow(dead_code))]
pub(crate) fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}
