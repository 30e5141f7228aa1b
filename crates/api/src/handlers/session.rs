//! Handlers for the onboarding session lifecycle.
//!
//! A session is created with no input, then patched field by field as the
//! wizard advances. Every read and write after creation is gated on the
//! `(id, secret)` pair; a mismatch is reported as 404 so callers cannot
//! distinguish a wrong secret from a nonexistent session.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use nido_core::error::CoreError;
use nido_core::secret::generate_session_secret;
use nido_core::session::SessionPatch;
use nido_core::types::SessionId;
use nido_db::repositories::SessionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::SessionSecret;
use crate::state::AppState;

/// Response for session creation: the pair the client must hold on to for
/// every later call.
#[derive(Debug, Serialize)]
pub struct CreatedSession {
    pub id: SessionId,
    pub secret: String,
}

/// Parse a path id, mapping malformed values to a 400.
pub(crate) fn parse_session_id(raw: &str) -> Result<SessionId, AppError> {
    raw.parse().map_err(|_| {
        AppError::Core(CoreError::Validation(format!("Invalid session id '{raw}'")))
    })
}

// ---------------------------------------------------------------------------
// POST /session
// ---------------------------------------------------------------------------

/// Allocate a new session with a fresh capability secret.
///
/// Not idempotent: a retry creates a distinct session, so clients must not
/// blindly resubmit on timeout.
pub async fn create_session(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let secret = generate_session_secret();
    let session = SessionRepo::create(&state.pool, &secret).await?;

    tracing::info!(session_id = %session.id, "Onboarding session created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedSession {
            id: session.id,
            secret: session.secret,
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /session/{id}
// ---------------------------------------------------------------------------

/// Fetch the full session record, secret-gated.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    SessionSecret(secret): SessionSecret,
) -> AppResult<impl IntoResponse> {
    let id = parse_session_id(&id)?;
    let session = SessionRepo::find(&state.pool, id, &secret)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Session" }))?;
    Ok(Json(session))
}

// ---------------------------------------------------------------------------
// PATCH /session/{id}
// ---------------------------------------------------------------------------

/// Apply a whitelisted partial update.
///
/// Unknown keys are ignored; a body with no recognized fields is a no-op
/// answered with 204, leaving the row (and `updated_at`) untouched.
/// Concurrent patches are last-write-wins.
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    SessionSecret(secret): SessionSecret,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Response> {
    let id = parse_session_id(&id)?;
    let patch = SessionPatch::from_value(&body)?;

    if patch.is_empty() {
        tracing::debug!(session_id = %id, "Session patch carried no recognized fields");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let session = SessionRepo::update(&state.pool, id, &secret, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Session" }))?;

    tracing::info!(
        session_id = %id,
        completed = session.completed,
        "Onboarding session updated"
    );

    Ok(Json(session).into_response())
}
