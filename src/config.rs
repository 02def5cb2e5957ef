//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::cache::CacheConfig;

const DEFAULT_TTL_MS: i64 = 300_000;
const DEFAULT_MAX_SIZE: i64 = 2000;
const DEFAULT_PORT: u16 = 3000;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sliding TTL in milliseconds, `<= 0` disables expiry
    pub ttl_ms: i64,
    /// Maximum number of tracked keys, `<= 0` disables the cache
    pub max_size: i64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEDUPE_TTL_MS` - Sliding TTL in milliseconds (default: 300000)
    /// - `DEDUPE_MAX_SIZE` - Maximum tracked keys (default: 2000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            ttl_ms: env_or("DEDUPE_TTL_MS", DEFAULT_TTL_MS),
            max_size: env_or("DEDUPE_MAX_SIZE", DEFAULT_MAX_SIZE),
            server_port: env_or("SERVER_PORT", DEFAULT_PORT),
        }
    }

    /// Cache configuration derived from these settings.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::new(self.ttl_ms, self.max_size)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_ms: DEFAULT_TTL_MS,
            max_size: DEFAULT_MAX_SIZE,
            server_port: DEFAULT_PORT,
        }
    }
}

/// Reads and parses `name`, falling back to `default` when unset or invalid.
fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => parse_or(name, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(name: &str, raw: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    raw.trim().parse().unwrap_or_else(|_| {
        warn!("Ignoring invalid {}={:?}, using default {}", name, raw, default);
        default
    })
}
