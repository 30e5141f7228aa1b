//! Handlers for the static reference catalogs.
//!
//! These have no fallback: the wizard cannot proceed without them, so
//! storage errors propagate as 500s.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use nido_db::models::catalog::{Interest, Material, Space};
use nido_db::repositories::CatalogRepo;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MaterialsResponse {
    pub materials: Vec<Material>,
}

#[derive(Debug, Serialize)]
pub struct InterestsResponse {
    pub interests: Vec<Interest>,
}

#[derive(Debug, Serialize)]
pub struct SpacesResponse {
    pub spaces: Vec<Space>,
}

/// GET /materials
pub async fn list_materials(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let materials = CatalogRepo::list_materials(&state.pool).await?;
    Ok(Json(MaterialsResponse { materials }))
}

/// GET /interests
pub async fn list_interests(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let interests = CatalogRepo::list_interests(&state.pool).await?;
    Ok(Json(InterestsResponse { interests }))
}

/// GET /spaces
pub async fn list_spaces(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let spaces = CatalogRepo::list_spaces(&state.pool).await?;
    Ok(Json(SpacesResponse { spaces }))
}
