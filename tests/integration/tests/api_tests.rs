//! API Integration Tests
//!
//! Everything runs against in-memory collaborators; no external services are
//! needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use integration_tests::{
    assert_json, assert_status, build_state, get, numbered_members, sample_document,
    sample_members, send, test_app, TestServer,
};
use reqwest::StatusCode;
use roster_cache::{JsonFileSnapshotProvider, MemoryRosterRepository, StaticSnapshotProvider};
use serde_json::{json, Value};
use tower::ServiceExt;

fn names(page: &Value) -> Vec<String> {
    page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = test_app(sample_members()).await.unwrap();
    let (status, body) = get(&app, "/health").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_with_in_memory_storage() {
    let app = test_app(Vec::new()).await.unwrap();
    let (status, body) = get(&app, "/health/ready").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["storage"], "healthy");
    assert_eq!(body["checks"]["snapshot"], "empty");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let app = test_app(Vec::new()).await.unwrap();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_list_members_unfiltered() {
    let app = test_app(sample_members()).await.unwrap();
    let (status, body) = get(&app, "/api/v1/members").await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["state"], "ready");
    assert_eq!(body["snapshot"]["member_count"], 5);
    assert_eq!(body["total_items"], 5);
    assert_eq!(names(&body), ["Thrall", "Varian", "Jaina", "Anduin", "Illidan"]);
}

#[tokio::test]
async fn test_empty_snapshot_is_not_an_error() {
    let app = test_app(Vec::new()).await.unwrap();
    let (status, body) = get(&app, "/api/v1/members").await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["state"], "empty");
    assert_eq!(body["total_items"], 0);
    assert_eq!(body["total_pages"], 0);
}

#[tokio::test]
async fn test_filter_by_role() {
    let app = test_app(sample_members()).await.unwrap();
    let (_, body) = get(&app, "/api/v1/members?role=healers").await.unwrap();
    assert_eq!(names(&body), ["Thrall", "Anduin"]);

    let (_, body) = get(&app, "/api/v1/members?role=all").await.unwrap();
    assert_eq!(body["total_items"], 5);
}

#[tokio::test]
async fn test_missing_enchants_among_mains() {
    let app = test_app(sample_members()).await.unwrap();
    let (_, body) = get(&app, "/api/v1/members?rank=mains&special=missing-enchants")
        .await
        .unwrap();
    assert_eq!(names(&body), ["Varian"]);
    assert_eq!(body["items"][0]["missing_enchant_slots"], json!(["Ring 1"]));
}

#[tokio::test]
async fn test_filter_by_classes_and_item_level() {
    let app = test_app(sample_members()).await.unwrap();

    let (_, body) = get(&app, "/api/v1/members?classes=mage,warrior").await.unwrap();
    assert_eq!(names(&body), ["Varian", "Jaina"]);

    let (_, body) = get(&app, "/api/v1/members?min_item_level=488").await.unwrap();
    assert_eq!(names(&body), ["Thrall", "Jaina"]);

    let (_, body) = get(&app, "/api/v1/members?search=AN").await.unwrap();
    assert_eq!(names(&body), ["Varian", "Anduin", "Illidan"]);
}

#[tokio::test]
async fn test_unknown_class_is_rejected() {
    let app = test_app(sample_members()).await.unwrap();
    let (status, body) = get(&app, "/api/v1/members?classes=mage,bard").await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "UNKNOWN_CLASS");
}

#[tokio::test]
async fn test_unknown_special_predicate_keeps_everyone() {
    let app = test_app(sample_members()).await.unwrap();
    let (status, body) = get(&app, "/api/v1/members?special=has-mount").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 5);
}

#[tokio::test]
async fn test_pagination_last_page() {
    let app = test_app(numbered_members(47)).await.unwrap();
    let (status, body) = get(&app, "/api/v1/members?page=3&page_size=20").await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 47);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["has_next"], false);
    assert_eq!(body["has_previous"], true);
    assert_eq!(names(&body).len(), 7);
    assert_eq!(names(&body)[0], "Member40");
}

#[tokio::test]
async fn test_invalid_member_queries() {
    let app = test_app(sample_members()).await.unwrap();

    let (status, body) = get(&app, "/api/v1/members?rank=officers").await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = get(&app, "/api/v1/members?page_size=500").await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"].get("page_size").is_some());

    let (status, body) = get(&app, "/api/v1/members?page=abc").await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_get_member_case_insensitive() {
    let app = test_app(sample_members()).await.unwrap();
    let (status, body) = get(&app, "/api/v1/members/thrall").await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Thrall");
    assert_eq!(body["role"], "healer");
    assert_eq!(body["bucket"], Value::Null);
    assert_eq!(body["lockout"]["is_locked"], true);
}

#[tokio::test]
async fn test_get_unknown_member() {
    let app = test_app(sample_members()).await.unwrap();
    let (status, body) = get(&app, "/api/v1/members/Garrosh").await.unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_member_lockout() {
    let app = test_app(sample_members()).await.unwrap();
    let (status, body) = get(&app, "/api/v1/members/Thrall/lockout").await.unwrap();

    assert_eq!(status, StatusCode::OK);
    let lockout = &body["lockout"];
    assert_eq!(lockout["locked_difficulties"], json!(["Normal", "Heroic"]));
    assert_eq!(lockout["progress"][1]["display_text"], "Heroic: 3/8");
    assert_eq!(lockout["progress"][1]["tooltip"], "Ulgrax");

    let (_, body) = get(&app, "/api/v1/members/Illidan/lockout").await.unwrap();
    assert_eq!(body["lockout"]["is_locked"], false);
    assert_eq!(body["lockout"]["locked_difficulties"], json!([]));
}

// ============================================================================
// Leaderboard and Stats Tests
// ============================================================================

#[tokio::test]
async fn test_mplus_leaderboard() {
    let app = test_app(sample_members()).await.unwrap();
    let (status, body) = get(&app, "/api/v1/leaderboards/mplus?n=2").await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], "mplus");
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "Jaina");
    assert_eq!(entries[0]["position"], 1);
    assert_eq!(entries[1]["name"], "Thrall");
}

#[tokio::test]
async fn test_item_level_leaderboard_for_alts() {
    let app = test_app(sample_members()).await.unwrap();
    let (_, body) = get(&app, "/api/v1/leaderboards/item-level?rank=alts").await.unwrap();

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "Anduin");
    assert_eq!(entries[0]["score"], 470.0);
    assert_eq!(entries[1]["name"], "Illidan");
}

#[tokio::test]
async fn test_unknown_leaderboard() {
    let app = test_app(sample_members()).await.unwrap();
    let (status, body) = get(&app, "/api/v1/leaderboards/arena").await.unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "UNKNOWN_SCORE_KEY");
}

#[tokio::test]
async fn test_stats_overview() {
    let app = test_app(sample_members()).await.unwrap();
    let (status, body) = get(&app, "/api/v1/stats").await.unwrap();

    assert_eq!(status, StatusCode::OK);
    let overview = &body["overview"];
    assert_eq!(overview["total_members"], 5);
    assert_eq!(overview["roles"], json!({ "tanks": 1, "healers": 2, "dps": 2 }));
    assert_eq!(overview["tier_set_count"], 1);
    assert_eq!(overview["locked_heroic_count"], 1);
    assert_eq!(overview["missing_enchants"], json!({ "all": 2, "mains": 1, "alts": 1 }));
    assert_eq!(overview["classes"]["Demon Hunter"], 1);
    assert_eq!(overview["classes"]["Druid"], 0);

    let (_, body) = get(&app, "/api/v1/stats?rank=alts").await.unwrap();
    assert_eq!(body["overview"]["total_members"], 2);
    assert_eq!(body["overview"]["unknown_specialization_count"], 1);
}

// ============================================================================
// Roster Tests
// ============================================================================

#[tokio::test]
async fn test_roster_assignment_flow() {
    let app = test_app(sample_members()).await.unwrap();

    let (status, body) = send(&app, Method::PUT, "/api/v1/roster/Varian", Some(json!({ "bucket": "tanks" })))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bucket"], "tanks");
    assert_eq!(body["previous_bucket"], Value::Null);

    send(&app, Method::PUT, "/api/v1/roster/Thrall", Some(json!({ "bucket": "healers" })))
        .await
        .unwrap();
    send(&app, Method::PUT, "/api/v1/roster/Jaina", Some(json!({ "bucket": "dps" })))
        .await
        .unwrap();

    // Moving a member reports where it came from
    let (_, body) = send(&app, Method::PUT, "/api/v1/roster/jaina", Some(json!({ "bucket": "substitutes" })))
        .await
        .unwrap();
    assert_eq!(body["previous_bucket"], "dps");

    let (_, roster) = get(&app, "/api/v1/roster").await.unwrap();
    assert_eq!(roster["total"], 3);
    assert_eq!(roster["buckets"]["tanks"], json!(["Varian"]));
    assert_eq!(roster["buckets"]["substitutes"], json!(["jaina"]));
    assert_eq!(roster["buckets"]["dps"], json!([]));

    let (_, member) = get(&app, "/api/v1/members/Varian").await.unwrap();
    assert_eq!(member["bucket"], "tanks");

    let (status, body) = send(&app, Method::DELETE, "/api/v1/roster/Varian", None).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["previous_bucket"], "tanks");
    assert_eq!(body["bucket"], Value::Null);

    let (_, roster) = get(&app, "/api/v1/roster").await.unwrap();
    assert_eq!(roster["total"], 2);
}

#[tokio::test]
async fn test_remove_unassigned_member_is_noop() {
    let app = test_app(sample_members()).await.unwrap();
    let (status, body) = send(&app, Method::DELETE, "/api/v1/roster/Nobody", None).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["previous_bucket"], Value::Null);
}

#[tokio::test]
async fn test_invalid_assignments() {
    let app = test_app(sample_members()).await.unwrap();

    let (status, body) = send(&app, Method::PUT, "/api/v1/roster/Thrall", Some(json!({ "bucket": "bench" })))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "UNKNOWN_BUCKET");

    let (status, body) = send(&app, Method::PUT, "/api/v1/roster/Thrall", Some(json!({ "team": "tanks" })))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_BODY");

    let (status, body) = send(&app, Method::PUT, "/api/v1/roster/%20", Some(json!({ "bucket": "tanks" })))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_MEMBER_NAME");
}

#[tokio::test]
async fn test_buff_coverage() {
    let app = test_app(sample_members()).await.unwrap();
    for (name, bucket) in [("Varian", "tanks"), ("Thrall", "healers"), ("Jaina", "dps"), ("Anduin", "socials")] {
        send(&app, Method::PUT, &format!("/api/v1/roster/{name}"), Some(json!({ "bucket": bucket })))
            .await
            .unwrap();
    }

    let (status, body) = get(&app, "/api/v1/roster/buffs").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["raiders"], 3);
    assert_eq!(body["coverage"]["bloodlust"], 2);
    assert_eq!(body["coverage"]["attackPower"], 1);
    assert_eq!(body["coverage"]["stamina"], 0);
    assert_eq!(body["coverage"].as_object().unwrap().len(), 20);

    let missing = body["missing"].as_array().unwrap();
    assert!(missing.contains(&json!("stamina")));
    assert!(missing.contains(&json!("combatRes")));
    assert!(!missing.contains(&json!("intellect")));
}

#[tokio::test]
async fn test_failed_save_leaves_roster_unchanged() {
    let repo = Arc::new(MemoryRosterRepository::new());
    let state = build_state(repo.clone(), Arc::new(StaticSnapshotProvider::new(sample_members())))
        .await
        .unwrap();
    let app = roster_api::create_app(state);

    repo.set_unavailable(true);
    let (status, body) = send(&app, Method::PUT, "/api/v1/roster/Thrall", Some(json!({ "bucket": "healers" })))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "ASSIGNMENT_NOT_SAVED");

    let (_, roster) = get(&app, "/api/v1/roster").await.unwrap();
    assert_eq!(roster["total"], 0);

    // The store recovers once storage is back
    repo.set_unavailable(false);
    let (status, _) = send(&app, Method::PUT, "/api/v1/roster/Thrall", Some(json!({ "bucket": "healers" })))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
}

// ============================================================================
// Server Tests (real socket)
// ============================================================================

#[tokio::test]
async fn test_roster_survives_restart() {
    let repo = Arc::new(MemoryRosterRepository::new());

    let first = TestServer::start(
        build_state(repo.clone(), Arc::new(StaticSnapshotProvider::new(sample_members())))
            .await
            .unwrap(),
    )
    .await
    .unwrap();
    let response = first
        .put("/api/v1/roster/Varian", &json!({ "bucket": "tanks" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let second = TestServer::start(
        build_state(repo, Arc::new(StaticSnapshotProvider::new(sample_members())))
            .await
            .unwrap(),
    )
    .await
    .unwrap();
    let roster: Value = assert_json(second.get("/api/v1/roster").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(roster["buckets"]["tanks"], json!(["Varian"]));
}

#[tokio::test]
async fn test_snapshot_refresh_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    std::fs::write(&path, json!([{ "name": "Solo", "class": "Rogue", "guildRankIndex": 0 }]).to_string()).unwrap();

    let state = build_state(
        Arc::new(MemoryRosterRepository::new()),
        Arc::new(JsonFileSnapshotProvider::new(&path)),
    )
    .await
    .unwrap();
    let server = TestServer::start(state).await.unwrap();

    let info: Value = assert_json(server.get("/api/v1/snapshot").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(info["member_count"], 1);

    std::fs::write(&path, sample_document().to_string()).unwrap();
    let refreshed: Value = assert_json(server.post("/api/v1/snapshot/refresh").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(refreshed["snapshot"]["member_count"], 5);

    // A broken export keeps the previous snapshot published
    std::fs::write(&path, "{ not json").unwrap();
    let response = server.post("/api/v1/snapshot/refresh").await.unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_GATEWAY).await.unwrap();
    assert_eq!(error["error"]["code"], "SNAPSHOT_UNAVAILABLE");

    let members: Value = assert_json(server.get("/api/v1/members").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(members["total_items"], 5);
}

#[tokio::test]
async fn test_missing_snapshot_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let state = build_state(
        Arc::new(MemoryRosterRepository::new()),
        Arc::new(JsonFileSnapshotProvider::new(dir.path().join("absent.json"))),
    )
    .await
    .unwrap();
    let server = TestServer::start(state).await.unwrap();

    let info: Value = assert_json(server.get("/api/v1/snapshot").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(info["state"], "empty");

    let response = server.delete("/api/v1/roster/Nobody").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
