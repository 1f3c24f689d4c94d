//! Member handlers
//!
//! Search, filter and inspect members of the current snapshot.

use axum::{extract::State, Json};
use roster_service::dto::{LockoutResponse, MemberListResponse, MemberQuery, MemberResponse};
use roster_service::MemberService;

use crate::extractors::{PathParam, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// List members matching the filter criteria, one page at a time
///
/// GET /members?search&rank&classes&role&min_item_level&special&page&page_size
pub async fn list_members(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<MemberQuery>,
) -> ApiResult<Json<MemberListResponse>> {
    let service = MemberService::new(state.service_context());
    Ok(Json(service.list_members(&query)?))
}

/// GET /members/{name}
pub async fn get_member(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    Ok(Json(service.get_member(&name)?))
}

/// Raid lockout summary for one member
///
/// GET /members/{name}/lockout
pub async fn get_member_lockout(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
) -> ApiResult<Json<LockoutResponse>> {
    let service = MemberService::new(state.service_context());
    Ok(Json(service.member_lockout(&name)?))
}
