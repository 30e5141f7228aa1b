//! Route definitions for activity detail and administration.
//!
//! ```text
//! GET    /activity/{id}    get_activity
//! PATCH  /activity/{id}    update_activity
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/activity/{id}",
        get(activity::get_activity).patch(activity::update_activity),
    )
}
