//! Dedupe Cache Module
//!
//! Main dedupe engine combining LRU ordering with sliding TTL expiration.

use crate::cache::{CacheStats, DedupeEntry, LruTracker};

// == Cache Config ==
/// Fixed configuration for a [`DedupeCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Sliding TTL in milliseconds, `<= 0` disables time-based expiry
    pub ttl_ms: i64,
    /// Maximum number of tracked keys, `0` disables the cache
    pub max_size: usize,
}

impl CacheConfig {
    /// Builds a config, clamping a negative `max_size` to zero.
    pub fn new(ttl_ms: i64, max_size: i64) -> Self {
        Self {
            ttl_ms,
            max_size: usize::try_from(max_size).unwrap_or(0),
        }
    }

    /// Returns true when entries expire after `ttl_ms`.
    pub fn ttl_enabled(&self) -> bool {
        self.ttl_ms > 0
    }

    /// Returns true when `max_size` allows any entry to be retained.
    pub fn is_enabled(&self) -> bool {
        self.max_size > 0
    }
}

// == Dedupe Cache ==
/// Answers "have I already seen this key" under a sliding TTL and an LRU
/// size cap.
///
/// Every timestamp is supplied by the caller in milliseconds; the cache never
/// reads a clock. Expired entries are only swept when a check misses, so
/// [`DedupeCache::size`] keeps counting them until then.
///
/// The cache is a plain single-owner structure. Share it across tasks behind
/// one lock held for the whole `check` call.
#[derive(Debug)]
pub struct DedupeCache {
    /// Tracked keys in recency order
    entries: LruTracker<DedupeEntry>,
    /// Performance statistics
    stats: CacheStats,
    config: CacheConfig,
}

impl DedupeCache {
    // == Constructor ==
    /// Creates a new DedupeCache.
    ///
    /// # Arguments
    /// * `ttl_ms` - Sliding TTL in milliseconds, `<= 0` means no expiry
    /// * `max_size` - Maximum tracked keys, `<= 0` means nothing is retained
    pub fn new(ttl_ms: i64, max_size: i64) -> Self {
        Self::with_config(CacheConfig::new(ttl_ms, max_size))
    }

    /// Creates a new DedupeCache from an existing config.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: LruTracker::new(),
            stats: CacheStats::new(),
            config,
        }
    }

    // == Check ==
    /// Records `key` as seen at `now` and reports whether it was already live.
    ///
    /// Returns `true` on a hit: the entry's expiry slides to `now + ttl_ms` and
    /// it becomes most recently used. Returns `false` on a miss: every expired
    /// entry is swept, `key` is inserted as most recently used, and the least
    /// recently used entry is evicted if the cache is over capacity.
    ///
    /// `None` or an empty key, and a cache with `max_size == 0`, always
    /// return `false` without touching any entry.
    pub fn check<'a>(&mut self, key: impl Into<Option<&'a str>>, now: i64) -> bool {
        let Some(key) = key.into().filter(|k| !k.is_empty()) else {
            self.stats.record_rejected();
            return false;
        };
        if !self.config.is_enabled() {
            self.stats.record_rejected();
            return false;
        }

        let ttl_ms = self.config.ttl_ms;

        if let Some(entry) = self.entries.get_mut(key) {
            if !entry.is_expired(now) {
                entry.refresh(now, ttl_ms);
                self.entries.touch(key);
                self.stats.record_hit();
                return true;
            }
        }

        // Miss: a stale entry for `key` goes out with the sweep
        if self.config.ttl_enabled() {
            let swept = self.entries.retain(|_, entry| !entry.is_expired(now));
            self.stats.record_expired(swept);
        }

        self.entries.insert(key, DedupeEntry::new(now, ttl_ms));

        while self.entries.len() > self.config.max_size {
            if self.entries.evict_oldest().is_none() {
                break;
            }
            self.stats.record_eviction();
        }

        self.stats.record_miss();
        false
    }

    // == Size ==
    /// Returns the number of tracked keys, including expired entries that
    /// have not been swept yet.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Clear ==
    /// Removes every entry. Configuration and counters are kept.
    ///
    /// Returns the number of entries dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }

    /// Returns the configuration fixed at construction.
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Zeroes all counters without touching entries.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::new();
    }
}
