pub mod activity;
pub mod catalog;
pub mod health;
pub mod recommendations;
pub mod session;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST   /session                      create session
/// GET    /session/{id}                 get session (secret-gated)
/// PATCH  /session/{id}                 update session (secret-gated)
///
/// GET    /materials                    material catalog
/// GET    /interests                    interest catalog
/// GET    /spaces                       environment catalog
///
/// GET    /activity/{id}                activity detail
/// PATCH  /activity/{id}                administrative activity edit
///
/// GET    /recommendations/{id}         scored activities (secret-gated)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(session::router())
        .merge(catalog::router())
        .merge(activity::router())
        .merge(recommendations::router())
}
