//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use roster_service::dto::{HealthResponse, ReadinessResponse};
use roster_service::SnapshotService;

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    // The in-memory repository is always reachable
    let storage_healthy = match state.redis_pool() {
        Some(pool) => pool.health_check().await.is_ok(),
        None => true,
    };

    let snapshot = SnapshotService::new(state.service_context()).status().state;
    let response = ReadinessResponse::ready(storage_healthy, snapshot);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
