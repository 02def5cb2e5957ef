//! Cache Statistics Module
//!
//! Tracks dedupe cache metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Tracks dedupe cache metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Checks that found a live entry (duplicates)
    pub hits: u64,
    /// Checks on a valid key that recorded a fresh entry
    pub misses: u64,
    /// Checks short-circuited by an invalid key or a disabled cache
    pub rejected: u64,
    /// Entries evicted due to LRU capacity pressure
    pub evictions: u64,
    /// Entries removed by the expiry sweep
    pub expired: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the duplicate rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    /// Rejected checks are not lookups and are left out.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Adds `count` entries removed by a sweep.
    pub fn record_expired(&mut self, count: usize) {
        self.expired += count as u64;
    }

    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
