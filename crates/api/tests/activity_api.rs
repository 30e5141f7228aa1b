//! HTTP-level integration tests for activity detail and administration.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, patch_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /activity/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn activity_detail_returns_the_full_record(pool: PgPool) {
    let response = get(build_test_app(pool), "/activity/water-colors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Explora colores con agua");
    assert_eq!(json["difficulty"], "fácil");
    assert_eq!(json["required_materials"], json!(["paint", "bottles", "water"]));
    assert_eq!(json["duration_minutes"], 20);
    assert!(json["steps"].as_array().is_some_and(|s| s.len() == 4));
    assert!(json["tips"].is_array());
    assert!(json["safety"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_activity_is_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/activity/no-such-slug").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Activity not found");
}

// ---------------------------------------------------------------------------
// Test: PATCH /activity/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_replaces_whitelisted_fields_only(pool: PgPool) {
    let response = patch_json(
        build_test_app(pool.clone()),
        "/activity/water-colors",
        json!({
            "title": "Explora colores",
            "duration_minutes": 25,
            "age_max": 99,          // not whitelisted, ignored
            "secret_field": true,   // unknown, ignored
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Explora colores");
    assert_eq!(updated["duration_minutes"], 25);
    assert_eq!(updated["age_max"], 6);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_with_no_editable_fields_is_204(pool: PgPool) {
    let response = patch_json(
        build_test_app(pool),
        "/activity/water-colors",
        json!({"age_max": 99}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_of_unknown_activity_is_404(pool: PgPool) {
    let response = patch_json(
        build_test_app(pool),
        "/activity/no-such-slug",
        json!({"title": "ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
