//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{health, leaderboards, members, roster, snapshot, stats};
use crate::state::AppState;

/// Create the main API router (health routes are separate so they bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(member_routes())
        .merge(stats_routes())
        .merge(snapshot_routes())
        .merge(roster_routes())
}

fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members))
        .route("/members/:name", get(members::get_member))
        .route("/members/:name/lockout", get(members::get_member_lockout))
}

fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboards/:score", get(leaderboards::get_leaderboard))
        .route("/stats", get(stats::get_overview))
}

fn snapshot_routes() -> Router<AppState> {
    Router::new()
        .route("/snapshot", get(snapshot::get_snapshot_status))
        .route("/snapshot/refresh", post(snapshot::refresh_snapshot))
}

fn roster_routes() -> Router<AppState> {
    Router::new()
        .route("/roster", get(roster::get_roster))
        .route("/roster/buffs", get(roster::get_buff_coverage))
        .route(
            "/roster/:name",
            put(roster::assign_member).delete(roster::remove_member),
        )
}
