//! Handler for session-scoped activity recommendations.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use nido_core::error::CoreError;
use nido_core::recommend::{self, ScoredActivity, DEFAULT_RECOMMENDATION_COUNT};
use nido_db::repositories::{ActivityRepo, SessionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::SessionSecret;
use crate::handlers::session::parse_session_id;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub items: Vec<ScoredActivity>,
}

// ---------------------------------------------------------------------------
// GET /recommendations/{id}
// ---------------------------------------------------------------------------

/// Rank the activity library against a session's context, secret-gated.
///
/// When the activity table is unreachable the built-in fallback set is
/// ranked instead: the request still succeeds over a reduced catalog, and
/// the degradation is visible in the logs only.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(id): Path<String>,
    SessionSecret(secret): SessionSecret,
) -> AppResult<impl IntoResponse> {
    let id = parse_session_id(&id)?;
    let session = SessionRepo::find(&state.pool, id, &secret)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Session" }))?;

    let profile = session.scoring_profile();

    let catalog = match ActivityRepo::list_cards(&state.pool).await {
        Ok(cards) => cards,
        Err(err) => {
            tracing::warn!(
                session_id = %id,
                error = %err,
                "Activity catalog unavailable, ranking built-in fallback set"
            );
            recommend::fallback_catalog()
        }
    };

    let items = recommend::rank(&profile, catalog, DEFAULT_RECOMMENDATION_COUNT);

    tracing::debug!(session_id = %id, count = items.len(), "Computed recommendations");

    Ok(Json(RecommendationsResponse { items }))
}
