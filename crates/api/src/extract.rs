//! Session-secret extraction for secret-gated routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use nido_core::error::CoreError;

use crate::error::AppError;

/// Header carrying the session secret.
pub const SESSION_SECRET_HEADER: &str = "x-session-secret";

/// The per-session capability token, taken from the `x-session-secret`
/// header or, failing that, a `secret` query parameter.
///
/// Possession is authorization. Handlers pair this with the path id in a
/// single conditional query, so a wrong secret surfaces as 404 — the same
/// as an unknown id. A missing secret is the only 401.
#[derive(Debug, Clone)]
pub struct SessionSecret(pub String);

impl<S> FromRequestParts<S> for SessionSecret
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(value) = parts
            .headers
            .get(SESSION_SECRET_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            if !value.is_empty() {
                return Ok(SessionSecret(value.to_string()));
            }
        }

        if let Some(value) = query_param(parts.uri.query().unwrap_or(""), "secret") {
            if !value.is_empty() {
                return Ok(SessionSecret(value));
            }
        }

        Err(AppError::Core(CoreError::Unauthorized(
            "Missing session secret".to_string(),
        )))
    }
}

/// Pull a single parameter out of a raw query string. Secrets are hex, so
/// no percent-decoding is needed.
fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}
