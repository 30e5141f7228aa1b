//! Repository for the `activities` table.

use nido_core::recommend::ActivityCard;
use sqlx::PgPool;

use crate::models::activity::{Activity, ActivityCardRow, UpdateActivity};

/// Column list for full `activities` queries.
const COLUMNS: &str = "id, title, difficulty, required_materials, optional_materials, \
     interests, environments, objective, duration_minutes, age_min, age_max, \
     steps, tips, safety, image_url";

/// Column subset for the recommendation projection.
const CARD_COLUMNS: &str =
    "id, title, difficulty, required_materials, interests, environments, image_url";

/// Read and (administratively) edit the activity catalog.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Find a full activity record by slug.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load the scoring projection of the whole catalog. Ordered by slug
    /// so tied recommendation scores break deterministically.
    pub async fn list_cards(pool: &PgPool) -> Result<Vec<ActivityCard>, sqlx::Error> {
        let query = format!("SELECT {CARD_COLUMNS} FROM activities ORDER BY id");
        let rows = sqlx::query_as::<_, ActivityCardRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Partial update over the whitelisted columns. Returns `None` when no
    /// row matches the slug.
    ///
    /// Callers gate on `input.is_empty()` first.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateActivity,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let mut set_clauses: Vec<String> = Vec::new();
        let mut param_idx: usize = 2; // $1 is id

        if input.title.is_some() {
            set_clauses.push(format!("title = ${param_idx}"));
            param_idx += 1;
        }
        if input.difficulty.is_some() {
            set_clauses.push(format!("difficulty = ${param_idx}"));
            param_idx += 1;
        }
        if input.objective.is_some() {
            set_clauses.push(format!("objective = ${param_idx}"));
            param_idx += 1;
        }
        if input.duration_minutes.is_some() {
            set_clauses.push(format!("duration_minutes = ${param_idx}"));
            param_idx += 1;
        }
        if input.age_min.is_some() {
            set_clauses.push(format!("age_min = ${param_idx}"));
            param_idx += 1;
        }
        if input.steps.is_some() {
            set_clauses.push(format!("steps = ${param_idx}"));
            param_idx += 1;
        }
        if input.required_materials.is_some() {
            set_clauses.push(format!("required_materials = ${param_idx}"));
            param_idx += 1;
        }
        if input.image_url.is_some() {
            set_clauses.push(format!("image_url = ${param_idx}"));
            let _ = param_idx;
        }

        if set_clauses.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let query = format!(
            "UPDATE activities SET {} WHERE id = $1 RETURNING {COLUMNS}",
            set_clauses.join(", ")
        );

        let mut q = sqlx::query_as::<_, Activity>(&query).bind(id);

        if let Some(ref title) = input.title {
            q = q.bind(title.clone());
        }
        if let Some(ref difficulty) = input.difficulty {
            q = q.bind(difficulty.clone());
        }
        if let Some(ref objective) = input.objective {
            q = q.bind(objective.clone());
        }
        if let Some(duration_minutes) = input.duration_minutes {
            q = q.bind(duration_minutes);
        }
        if let Some(age_min) = input.age_min {
            q = q.bind(age_min);
        }
        if let Some(ref steps) = input.steps {
            q = q.bind(steps.clone());
        }
        if let Some(ref required_materials) = input.required_materials {
            q = q.bind(required_materials.clone());
        }
        if let Some(ref image_url) = input.image_url {
            q = q.bind(image_url.clone());
        }

        q.fetch_optional(pool).await
    }
}
