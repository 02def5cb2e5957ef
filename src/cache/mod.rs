//! Cache Module
//!
//! Provides the in-memory dedupe cache with sliding TTL expiration and LRU
//! eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::DedupeEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::{CacheConfig, DedupeCache};

// == Public Constants ==
/// Maximum key length in bytes accepted over HTTP
pub const MAX_KEY_LENGTH: usize = 256;
