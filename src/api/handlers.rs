//! API Handlers
//!
//! HTTP request handlers for each dedupe server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};
use tracing::{debug, info};

use crate::cache::DedupeCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    CheckRequest, CheckResponse, ClearResponse, HealthResponse, SizeResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The cache sits behind one lock. `check` and `clear` hold the write lock
/// for the whole operation so lookup, sweep, insert and eviction never
/// interleave with another request.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe dedupe cache
    pub cache: Arc<RwLock<DedupeCache>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: DedupeCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(DedupeCache::with_config(config.cache_config()))
    }
}

/// Current wall-clock time in Unix milliseconds.
pub fn current_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Handler for POST /check
///
/// Records the key and reports whether it was already seen. The server clock
/// is used when the request carries no `now`.
pub async fn check_handler(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let now = req.now.unwrap_or_else(current_timestamp_ms);
    let duplicate = {
        let mut cache = state.cache.write().await;
        cache.check(req.key.as_deref(), now)
    };

    debug!(key = ?req.key, now, duplicate, "dedupe check");

    Ok(Json(CheckResponse::new(req.key, duplicate, now)))
}

/// Handler for GET /size
pub async fn size_handler(State(state): State<AppState>) -> Json<SizeResponse> {
    let cache = state.cache.read().await;
    Json(SizeResponse { size: cache.size() })
}

/// Handler for DELETE /clear
///
/// Drops every tracked key. Configuration and counters are kept.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.cache.write().await.clear();
    info!("Dedupe cache cleared: {} entries dropped", cleared);

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats(), cache.config()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
