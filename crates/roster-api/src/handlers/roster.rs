//! Roster handlers
//!
//! Curated role buckets and raid buff coverage.

use axum::{extract::State, Json};
use roster_service::dto::{AssignMemberRequest, AssignmentResponse, BuffCoverageResponse, RosterResponse};
use roster_service::RosterService;

use crate::extractors::{PathParam, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /roster
pub async fn get_roster(State(state): State<AppState>) -> Json<RosterResponse> {
    Json(RosterService::new(state.service_context()).get_roster())
}

/// Move a member into a bucket
///
/// PUT /roster/{name}
pub async fn assign_member(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
    ValidatedJson(request): ValidatedJson<AssignMemberRequest>,
) -> ApiResult<Json<AssignmentResponse>> {
    let service = RosterService::new(state.service_context());
    Ok(Json(service.assign(&name, request).await?))
}

/// DELETE /roster/{name}
pub async fn remove_member(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
) -> ApiResult<Json<AssignmentResponse>> {
    let service = RosterService::new(state.service_context());
    Ok(Json(service.remove(&name).await?))
}

/// Buff coverage of the raiding buckets
///
/// GET /roster/buffs
pub async fn get_buff_coverage(State(state): State<AppState>) -> Json<BuffCoverageResponse> {
    Json(RosterService::new(state.service_context()).buff_coverage())
}
