//! Integration tests for the activity and catalog repositories, against
//! the seeded migration data.

use nido_db::models::activity::UpdateActivity;
use nido_db::repositories::{ActivityRepo, CatalogRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: activity detail lookup
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn find_activity_returns_full_record(pool: PgPool) {
    let activity = ActivityRepo::find_by_id(&pool, "water-colors")
        .await
        .unwrap()
        .expect("seeded activity");

    assert_eq!(activity.title, "Explora colores con agua");
    assert_eq!(activity.difficulty, "fácil");
    assert_eq!(activity.required_materials, ["paint", "bottles", "water"]);
    assert_eq!(activity.age_min, Some(3));
    assert!(activity.steps.as_ref().is_some_and(|s| s.len() == 4));
    assert!(activity.safety.is_some());
}

#[sqlx::test]
async fn find_unknown_activity_returns_none(pool: PgPool) {
    let missing = ActivityRepo::find_by_id(&pool, "no-such-slug").await.unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: card projection
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn list_cards_projects_the_whole_library(pool: PgPool) {
    let cards = ActivityRepo::list_cards(&pool).await.unwrap();
    assert_eq!(cards.len(), 15);

    // Deterministic catalog order: sorted by slug.
    let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    let sorted = {
        let mut s = ids.clone();
        s.sort_unstable();
        s
    };
    assert_eq!(ids, sorted);

    let water = cards.iter().find(|c| c.id == "water-colors").unwrap();
    assert_eq!(water.interests, ["water_bubbles", "art_coloring"]);
    assert_eq!(water.environments, ["table", "garden"]);
}

// ---------------------------------------------------------------------------
// Test: administrative update whitelist
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn update_activity_replaces_whitelisted_fields(pool: PgPool) {
    let input = UpdateActivity {
        title: Some("Explora colores".to_string()),
        duration_minutes: Some(25),
        ..UpdateActivity::default()
    };
    let updated = ActivityRepo::update(&pool, "water-colors", &input)
        .await
        .unwrap()
        .expect("seeded activity");

    assert_eq!(updated.title, "Explora colores");
    assert_eq!(updated.duration_minutes, Some(25));
    // Untouched columns survive.
    assert_eq!(updated.required_materials, ["paint", "bottles", "water"]);
}

#[sqlx::test]
async fn update_unknown_activity_returns_none(pool: PgPool) {
    let input = UpdateActivity {
        title: Some("ghost".to_string()),
        ..UpdateActivity::default()
    };
    let result = ActivityRepo::update(&pool, "no-such-slug", &input).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Test: catalog readers
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn materials_are_listed_by_name(pool: PgPool) {
    let materials = CatalogRepo::list_materials(&pool).await.unwrap();
    assert_eq!(materials.len(), 10);

    let names: Vec<&str> = materials.iter().map(|m| m.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[sqlx::test]
async fn interests_carry_display_metadata(pool: PgPool) {
    let interests = CatalogRepo::list_interests(&pool).await.unwrap();
    assert_eq!(interests.len(), 5);

    let art = interests.iter().find(|i| i.id == "art_coloring").unwrap();
    assert_eq!(art.label, "Colores y arte");
    assert_eq!(art.emoji, "🎨");
    assert_eq!(art.color.as_deref(), Some("coral"));
}

#[sqlx::test]
async fn spaces_cover_the_closed_enumeration(pool: PgPool) {
    let spaces = CatalogRepo::list_spaces(&pool).await.unwrap();
    let mut ids: Vec<&str> = spaces.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, ["floor", "garden", "living_room", "other", "table"]);
}
