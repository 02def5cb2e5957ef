//! Dedupe Cache - A time-and-size-bounded deduplication cache
//!
//! Answers "have I already processed this key" with a sliding TTL and LRU
//! eviction, and serves the same cache over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{CacheConfig, DedupeCache};
pub use config::Config;
