//! Route definition for recommendations.
//!
//! ```text
//! GET /recommendations/{id}    get_recommendations
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::recommendations;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/recommendations/{id}",
        get(recommendations::get_recommendations),
    )
}
