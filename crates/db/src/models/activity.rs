//! Activity entity model and DTOs.

use nido_core::recommend::ActivityCard;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `activities` table: the full content record served by
/// the activity detail endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub difficulty: String,
    pub required_materials: Vec<String>,
    pub optional_materials: Option<Vec<String>>,
    pub interests: Vec<String>,
    pub environments: Vec<String>,
    pub objective: Option<String>,
    pub duration_minutes: Option<i32>,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub steps: Option<Vec<String>>,
    pub tips: Option<Vec<String>>,
    pub safety: Option<Vec<String>>,
    pub image_url: Option<String>,
}

/// The column subset the recommendation scorer consumes.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityCardRow {
    pub id: String,
    pub title: String,
    pub difficulty: String,
    pub required_materials: Vec<String>,
    pub interests: Vec<String>,
    pub environments: Vec<String>,
    pub image_url: Option<String>,
}

impl From<ActivityCardRow> for ActivityCard {
    fn from(row: ActivityCardRow) -> Self {
        ActivityCard {
            id: row.id,
            title: row.title,
            difficulty: row.difficulty,
            required_materials: row.required_materials,
            interests: row.interests,
            environments: row.environments,
            image_url: row.image_url,
        }
    }
}

/// DTO for the administrative activity PATCH. Only these columns are
/// editable; unknown body keys are dropped by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActivity {
    pub title: Option<String>,
    pub difficulty: Option<String>,
    pub objective: Option<String>,
    pub duration_minutes: Option<i32>,
    pub age_min: Option<i32>,
    pub steps: Option<Vec<String>>,
    pub required_materials: Option<Vec<String>>,
    pub image_url: Option<String>,
}

impl UpdateActivity {
    /// True when no editable field was present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.difficulty.is_none()
            && self.objective.is_none()
            && self.duration_minutes.is_none()
            && self.age_min.is_none()
            && self.steps.is_none()
            && self.required_materials.is_none()
            && self.image_url.is_none()
    }
}
