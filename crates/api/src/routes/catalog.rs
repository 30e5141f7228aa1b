//! Route definitions for the static catalogs.
//!
//! ```text
//! GET /materials    list_materials
//! GET /interests    list_interests
//! GET /spaces       list_spaces
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/materials", get(catalog::list_materials))
        .route("/interests", get(catalog::list_interests))
        .route("/spaces", get(catalog::list_spaces))
}
