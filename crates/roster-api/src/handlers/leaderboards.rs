//! Leaderboard handlers

use axum::{extract::State, Json};
use roster_service::dto::{LeaderboardQuery, LeaderboardResponse};
use roster_service::StatsService;

use crate::extractors::{PathParam, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Top members by score (`mplus`, `pvp` or `item-level`)
///
/// GET /leaderboards/{score}?n&rank
pub async fn get_leaderboard(
    State(state): State<AppState>,
    PathParam(score): PathParam<String>,
    ValidatedQuery(query): ValidatedQuery<LeaderboardQuery>,
) -> ApiResult<Json<LeaderboardResponse>> {
    let service = StatsService::new(state.service_context());
    Ok(Json(service.leaderboard(&score, &query)?))
}
