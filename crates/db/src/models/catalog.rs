//! Static catalog reference models.
//!
//! These tables are seeded by migration and treated as immutable
//! configuration for the lifetime of the process.

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `materials` catalog.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub emoji: String,
}

/// A row from the `interests` catalog.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Interest {
    pub id: String,
    pub label: String,
    pub emoji: String,
    pub color: Option<String>,
}

/// A row from the `environments` catalog ("spaces" on the wire).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Space {
    pub id: String,
    pub label: String,
    pub emoji: String,
}
