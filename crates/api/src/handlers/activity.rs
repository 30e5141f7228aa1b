//! Handlers for activity detail reads and the administrative edit.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use nido_core::error::CoreError;
use nido_db::models::activity::UpdateActivity;
use nido_db::repositories::ActivityRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /activity/{id}
// ---------------------------------------------------------------------------

/// Fetch a full activity record by slug.
pub async fn get_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let activity = ActivityRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Activity" }))?;
    Ok(Json(activity))
}

// ---------------------------------------------------------------------------
// PATCH /activity/{id}
// ---------------------------------------------------------------------------

/// Content-authoring edit over a fixed column whitelist. Unknown body keys
/// are dropped; a body with no editable fields is a 204 no-op.
pub async fn update_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateActivity>,
) -> AppResult<Response> {
    if input.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let activity = ActivityRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Activity" }))?;

    tracing::info!(activity_id = %id, "Activity updated");

    Ok(Json(activity).into_response())
}
