//! Admin token policy applied to the real router

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

mod common;
use common::TestApp;

const TOKEN: &str = "s3cret-admin";

#[sqlx::test(migrations = "../../migrations")]
async fn test_open_policy_allows_writes(pool: PgPool) {
    let app = TestApp::new(pool);
    let (status, _) = app.post_json("/players", json!({ "name": "Ann", "position": "SS" })).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_viewer_cannot_write(pool: PgPool) {
    let viewer = TestApp::with_admin_token(pool, TOKEN);

    let (status, body) = viewer.post_json("/players", json!({ "name": "Ann", "position": "SS" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Admin access required. Provide a valid bearer token.");

    let (status, _) = viewer.delete("/games/1").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = viewer.upload("/upload-roster", "file", "name,position\nAnn,SS\n").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Reads stay public
    let (status, _) = viewer.get("/players").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = viewer.get("/stats/leaderboard").await;
    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_wrong_token_is_viewer(pool: PgPool) {
    let app = TestApp::with_admin_token(pool, TOKEN).authorized("guess");
    let (status, _) = app.post_json("/games", json!({ "date": "2024-04-01", "opponent": "Rivals" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_admin_can_write(pool: PgPool) {
    let admin = TestApp::with_admin_token(pool, TOKEN).authorized(TOKEN);
    let id = admin.add_player("Ann", "SS").await;

    let (status, _) = admin.delete(&format!("/players/{id}")).await;
    assert_eq!(status, StatusCode::OK);
}
