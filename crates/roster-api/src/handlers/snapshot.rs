//! Snapshot handlers

use axum::{extract::State, Json};
use roster_service::dto::{RefreshResponse, SnapshotInfo};
use roster_service::SnapshotService;

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /snapshot
pub async fn get_snapshot_status(State(state): State<AppState>) -> Json<SnapshotInfo> {
    Json(SnapshotService::new(state.service_context()).status())
}

/// Reload the snapshot from the data provider
///
/// POST /snapshot/refresh
pub async fn refresh_snapshot(State(state): State<AppState>) -> ApiResult<Json<RefreshResponse>> {
    let service = SnapshotService::new(state.service_context());
    Ok(Json(service.refresh().await?))
}
