use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the pool is internally reference-counted. The pool's
/// lifecycle is owned by the process entry point, not a hidden singleton.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: nido_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
