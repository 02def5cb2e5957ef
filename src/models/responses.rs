//! Response DTOs for the dedupe server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheConfig, CacheStats};

/// Response body for the CHECK operation (POST /check)
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    /// The key that was checked
    pub key: Option<String>,
    /// True if the key was already live in the cache
    pub duplicate: bool,
    /// Timestamp the check was evaluated at
    pub now: i64,
}

impl CheckResponse {
    pub fn new(key: Option<String>, duplicate: bool, now: i64) -> Self {
        Self { key, duplicate, now }
    }
}

/// Response body for GET /size
#[derive(Debug, Clone, Serialize)]
pub struct SizeResponse {
    /// Tracked entries, including expired ones not yet swept
    pub size: usize,
}

/// Response body for the CLEAR operation (DELETE /clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries dropped
    pub cleared: usize,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} entries", cleared),
            cleared,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of duplicate checks
    pub hits: u64,
    /// Number of first-seen checks
    pub misses: u64,
    /// Number of checks ignored (invalid key or disabled cache)
    pub rejected: u64,
    /// Number of LRU evictions
    pub evictions: u64,
    /// Number of entries removed by expiry sweeps
    pub expired: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Configured sliding TTL in milliseconds
    pub ttl_ms: i64,
    /// Configured capacity
    pub max_size: usize,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics and configuration
    pub fn new(stats: &CacheStats, config: CacheConfig) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            rejected: stats.rejected,
            evictions: stats.evictions,
            expired: stats.expired,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_ms: config.ttl_ms,
            max_size: config.max_size,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
