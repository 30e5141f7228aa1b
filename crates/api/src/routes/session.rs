//! Route definitions for the session lifecycle.
//!
//! ```text
//! POST   /session          create_session
//! GET    /session/{id}     get_session
//! PATCH  /session/{id}     update_session
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", post(session::create_session))
        .route(
            "/session/{id}",
            get(session::get_session).patch(session::update_session),
        )
}
