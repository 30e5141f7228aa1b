//! Activity recommendation scoring.
//!
//! The scorer is a stateless weighted sum over a session's context and an
//! activity's tags. Material coverage dominates (weight 0.5), interest
//! match adds 0.35, environment match 0.15, and small penalties apply when
//! the activity's difficulty is a poor fit for the child's age or the time
//! the household has available. Ranking is a stable descending sort, so
//! equal scores keep their catalog order and identical inputs always
//! produce identical output.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::session::MaterialEntry;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

const MATERIAL_WEIGHT: f64 = 0.5;
const INTEREST_WEIGHT: f64 = 0.35;
const ENVIRONMENT_WEIGHT: f64 = 0.15;

/// Penalty for an advanced activity when the child is under 4.
const YOUNG_CHILD_ADVANCED_PENALTY: f64 = 0.2;
/// Penalty for an intermediate activity when the child is under 3.
/// Applied independently of the advanced penalty.
const TODDLER_INTERMEDIATE_PENALTY: f64 = 0.1;
/// Penalty for an advanced activity when only a short slot is available.
const SHORT_TIME_ADVANCED_PENALTY: f64 = 0.15;

/// How many recommendations a request returns at most.
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The scoring-relevant slice of a session.
#[derive(Debug, Clone, Default)]
pub struct ScoringProfile {
    /// Ids of materials marked functional or semi-functional.
    pub functional_materials: HashSet<String>,
    pub interest: Option<String>,
    pub environment: Option<String>,
    pub child_age: Option<i32>,
    pub time_available: Option<String>,
}

impl ScoringProfile {
    /// Build a profile from stored session fields.
    pub fn new(
        materials: &[MaterialEntry],
        interest: Option<String>,
        environment: Option<String>,
        child_age: Option<i32>,
        time_available: Option<String>,
    ) -> Self {
        let functional_materials = materials
            .iter()
            .filter(|m| m.is_functional())
            .map(|m| m.id.clone())
            .collect();
        Self {
            functional_materials,
            interest,
            environment,
            child_age,
            time_available,
        }
    }
}

/// The activity fields the scorer consumes, plus the display fields a
/// recommendation response carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityCard {
    pub id: String,
    pub title: String,
    pub difficulty: String,
    pub required_materials: Vec<String>,
    pub interests: Vec<String>,
    pub environments: Vec<String>,
    pub image_url: Option<String>,
}

/// An activity with its computed score, ordered best-first in responses.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredActivity {
    #[serde(flatten)]
    pub activity: ActivityCard,
    pub score: f64,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score one activity against a session profile. Pure and deterministic.
pub fn score(profile: &ScoringProfile, activity: &ActivityCard) -> f64 {
    let material_ratio = if activity.required_materials.is_empty() {
        0.0
    } else {
        let matched = activity
            .required_materials
            .iter()
            .filter(|m| profile.functional_materials.contains(m.as_str()))
            .count();
        matched as f64 / activity.required_materials.len() as f64
    };

    let interest_match = profile
        .interest
        .as_deref()
        .is_some_and(|i| activity.interests.iter().any(|t| t == i));
    let environment_match = profile
        .environment
        .as_deref()
        .is_some_and(|e| activity.environments.iter().any(|t| t == e));

    // Difficulty labels come from content authoring; compare loosely.
    let difficulty = activity.difficulty.to_lowercase();

    let mut age_adjustment = 0.0;
    if let Some(age) = profile.child_age {
        if age < 4 && difficulty == "avanzado" {
            age_adjustment -= YOUNG_CHILD_ADVANCED_PENALTY;
        }
        if age < 3 && difficulty == "medio" {
            age_adjustment -= TODDLER_INTERMEDIATE_PENALTY;
        }
    }

    let mut time_adjustment = 0.0;
    if profile.time_available.as_deref() == Some("short") && difficulty == "avanzado" {
        time_adjustment -= SHORT_TIME_ADVANCED_PENALTY;
    }

    material_ratio * MATERIAL_WEIGHT
        + if interest_match { INTEREST_WEIGHT } else { 0.0 }
        + if environment_match { ENVIRONMENT_WEIGHT } else { 0.0 }
        + age_adjustment
        + time_adjustment
}

/// Score every activity, sort descending, and keep the best `k`.
///
/// The sort is stable: tied activities keep their catalog order, so the
/// same inputs always yield the same output.
pub fn rank(
    profile: &ScoringProfile,
    activities: Vec<ActivityCard>,
    k: usize,
) -> Vec<ScoredActivity> {
    let mut scored: Vec<ScoredActivity> = activities
        .into_iter()
        .map(|activity| ScoredActivity {
            score: score(profile, &activity),
            activity,
        })
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(k);
    scored
}

// ---------------------------------------------------------------------------
// Fallback catalog
// ---------------------------------------------------------------------------

/// Built-in activities used when the primary catalog is unreachable.
///
/// Ranking over this reduced set degrades quality but keeps the
/// recommendation endpoint available.
pub fn fallback_catalog() -> Vec<ActivityCard> {
    vec![
        ActivityCard {
            id: "water-colors".to_string(),
            title: "Explora colores con agua".to_string(),
            difficulty: "fácil".to_string(),
            required_materials: vec!["paint".to_string(), "bottles".to_string()],
            interests: vec!["water_bubbles".to_string(), "art_coloring".to_string()],
            environments: vec!["table".to_string(), "garden".to_string()],
            image_url: Some("/assets/activity-water-colors.jpg".to_string()),
        },
        ActivityCard {
            id: "bottle-sounds".to_string(),
            title: "Crea sonidos con botellas".to_string(),
            difficulty: "fácil".to_string(),
            required_materials: vec!["bottles".to_string(), "sticks".to_string()],
            interests: vec!["sounds_rhythm".to_string(), "discover".to_string()],
            environments: vec!["living_room".to_string(), "garden".to_string()],
            image_url: Some("/assets/activity-sounds.jpg".to_string()),
        },
        ActivityCard {
            id: "cardboard-construction".to_string(),
            title: "Construye con cartón".to_string(),
            difficulty: "medio".to_string(),
            required_materials: vec!["cardboard".to_string(), "scissors".to_string()],
            interests: vec!["building".to_string(), "art_coloring".to_string()],
            environments: vec!["table".to_string(), "floor".to_string()],
            image_url: Some("/assets/activity-building.jpg".to_string()),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
