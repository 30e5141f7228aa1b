//! Read-only accessors for the static catalogs.

use sqlx::PgPool;

use crate::models::catalog::{Interest, Material, Space};

/// Lists the material, interest, and environment catalogs. No pagination:
/// each is a small closed enumeration.
pub struct CatalogRepo;

impl CatalogRepo {
    /// All materials, ordered by display name.
    pub async fn list_materials(pool: &PgPool) -> Result<Vec<Material>, sqlx::Error> {
        sqlx::query_as::<_, Material>("SELECT id, name, emoji FROM materials ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// All interests, ordered by display label.
    pub async fn list_interests(pool: &PgPool) -> Result<Vec<Interest>, sqlx::Error> {
        sqlx::query_as::<_, Interest>(
            "SELECT id, label, emoji, color FROM interests ORDER BY label",
        )
        .fetch_all(pool)
        .await
    }

    /// All environments, ordered by display label.
    pub async fn list_spaces(pool: &PgPool) -> Result<Vec<Space>, sqlx::Error> {
        sqlx::query_as::<_, Space>("SELECT id, label, emoji FROM environments ORDER BY label")
            .fetch_all(pool)
            .await
    }
}
