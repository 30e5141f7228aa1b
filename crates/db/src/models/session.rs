//! Onboarding session entity model.

use nido_core::recommend::ScoringProfile;
use nido_core::session::MaterialEntry;
use nido_core::types::{SessionId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `onboarding_sessions` table.
///
/// The `secret` is serialized in responses: every route that can load a
/// session already required the caller to present it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnboardingSession {
    pub id: SessionId,
    pub secret: String,
    /// Canonicalized `[{id, state}]` entries, stored as JSONB.
    pub materials: serde_json::Value,
    pub environment: Option<String>,
    pub interest: Option<String>,
    pub completed: bool,
    pub child_age: Option<i32>,
    pub child_name: Option<String>,
    pub time_available: Option<String>,
    pub parent_email: Option<String>,
    pub parent_first_name: Option<String>,
    pub parent_last_name: Option<String>,
    pub parent_phone: Option<String>,
    pub parent_context: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OnboardingSession {
    /// Decode the stored materials JSON into typed entries. Rows written
    /// through the PATCH whitelist always decode; anything else yields an
    /// empty list.
    pub fn material_entries(&self) -> Vec<MaterialEntry> {
        serde_json::from_value(self.materials.clone()).unwrap_or_default()
    }

    /// Project the scoring-relevant fields for the recommendation engine.
    pub fn scoring_profile(&self) -> ScoringProfile {
        ScoringProfile::new(
            &self.material_entries(),
            self.interest.clone(),
            self.environment.clone(),
            self.child_age,
            self.time_available.clone(),
        )
    }
}
