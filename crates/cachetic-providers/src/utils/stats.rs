//! Hit/miss accounting shared by providers

use cachetic_domain::CacheStats;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free hit and miss counters
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl HitCounter {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup outcome
    pub fn record<T>(&self, found: &Option<T>) {
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Build a stats snapshot with the given entry count
    pub fn snapshot(&self, entries: u64) -> CacheStats {
        let mut stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
            hit_rate: 0.0,
        };
        stats.hit_rate = stats.calculate_hit_rate();
        stats
    }
}
