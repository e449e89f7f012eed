//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Cache statistics (passive counters, no backend calls)

use axum::{extract::State, http::StatusCode, Json};

use crate::state::AppState;
use crate::storage::cached::CacheStatsSnapshot;

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Cache hit/miss counters.
///
/// Never touches the store or the cache, so it stays fast while a
/// backend is down.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Json<CacheStatsSnapshot> {
    Json(state.cache_stats.snapshot())
}
