//! Dashboard statistics handlers

use axum::{extract::State, Json};
use roster_service::dto::{StatsQuery, StatsResponse};
use roster_service::StatsService;

use crate::extractors::ValidatedQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /stats?rank
pub async fn get_overview(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<StatsQuery>,
) -> ApiResult<Json<StatsResponse>> {
    let service = StatsService::new(state.service_context());
    Ok(Json(service.overview(&query)?))
}
