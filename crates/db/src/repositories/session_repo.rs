//! Repository for the `onboarding_sessions` table.

use nido_core::session::SessionPatch;
use nido_core::types::SessionId;
use sqlx::PgPool;

use crate::models::session::OnboardingSession;

/// Column list for `onboarding_sessions` queries.
const COLUMNS: &str = "id, secret, materials, environment, interest, completed, \
     child_age, child_name, time_available, parent_email, parent_first_name, \
     parent_last_name, parent_phone, parent_context, created_at, updated_at";

/// Parent contact columns, in the order the patch binds them.
const PARENT_COLUMNS: [&str; 5] = [
    "parent_email",
    "parent_first_name",
    "parent_last_name",
    "parent_phone",
    "parent_context",
];

/// Provides CRUD operations for onboarding sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session with the given secret. Every other column
    /// starts at its schema default.
    pub async fn create(pool: &PgPool, secret: &str) -> Result<OnboardingSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO onboarding_sessions (secret) \
             VALUES ($1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OnboardingSession>(&query)
            .bind(secret)
            .fetch_one(pool)
            .await
    }

    /// Find a session by id and secret. A wrong secret and an unknown id
    /// are indistinguishable: both return `None`.
    pub async fn find(
        pool: &PgPool,
        id: SessionId,
        secret: &str,
    ) -> Result<Option<OnboardingSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM onboarding_sessions \
             WHERE id = $1 AND secret = $2"
        );
        sqlx::query_as::<_, OnboardingSession>(&query)
            .bind(id)
            .bind(secret)
            .fetch_optional(pool)
            .await
    }

    /// Apply a canonicalized partial update as one conditional statement,
    /// refreshing `updated_at`. Returns `None` when `(id, secret)` matches
    /// no row.
    ///
    /// Callers gate on `patch.is_empty()` first; an empty patch falls back
    /// to a plain read so the row is never touched.
    pub async fn update(
        pool: &PgPool,
        id: SessionId,
        secret: &str,
        patch: &SessionPatch,
    ) -> Result<Option<OnboardingSession>, sqlx::Error> {
        let mut set_clauses: Vec<String> = Vec::new();
        let mut param_idx: usize = 3; // $1 is id, $2 is secret

        if patch.materials.is_some() {
            set_clauses.push(format!("materials = ${param_idx}"));
            param_idx += 1;
        }
        if patch.environment.is_some() {
            set_clauses.push(format!("environment = ${param_idx}"));
            param_idx += 1;
        }
        if patch.interest.is_some() {
            set_clauses.push(format!("interest = ${param_idx}"));
            param_idx += 1;
        }
        if patch.completed.is_some() {
            set_clauses.push(format!("completed = ${param_idx}"));
            param_idx += 1;
        }
        if patch.child_age.is_some() {
            set_clauses.push(format!("child_age = ${param_idx}"));
            param_idx += 1;
        }
        if patch.child_name.is_some() {
            set_clauses.push(format!("child_name = ${param_idx}"));
            param_idx += 1;
        }
        if patch.time_available.is_some() {
            set_clauses.push(format!("time_available = ${param_idx}"));
            param_idx += 1;
        }
        if patch.parent_contact.is_some() {
            for column in PARENT_COLUMNS {
                set_clauses.push(format!("{column} = ${param_idx}"));
                param_idx += 1;
            }
        }

        if set_clauses.is_empty() {
            return Self::find(pool, id, secret).await;
        }

        set_clauses.push("updated_at = NOW()".to_string());

        let query = format!(
            "UPDATE onboarding_sessions SET {} \
             WHERE id = $1 AND secret = $2 \
             RETURNING {COLUMNS}",
            set_clauses.join(", ")
        );

        let mut q = sqlx::query_as::<_, OnboardingSession>(&query)
            .bind(id)
            .bind(secret);

        if let Some(ref materials) = patch.materials {
            q = q.bind(serde_json::to_value(materials).unwrap_or_default());
        }
        if let Some(ref environment) = patch.environment {
            q = q.bind(environment.clone());
        }
        if let Some(ref interest) = patch.interest {
            q = q.bind(interest.clone());
        }
        if let Some(completed) = patch.completed {
            q = q.bind(completed);
        }
        if let Some(child_age) = patch.child_age {
            q = q.bind(child_age);
        }
        if let Some(ref child_name) = patch.child_name {
            q = q.bind(child_name.clone());
        }
        if let Some(ref time_available) = patch.time_available {
            q = q.bind(time_available.clone());
        }
        match patch.parent_contact {
            Some(Some(ref contact)) => {
                q = q
                    .bind(contact.email.clone())
                    .bind(contact.first_name.clone())
                    .bind(contact.last_name.clone())
                    .bind(contact.phone.clone())
                    .bind(contact.context.clone());
            }
            Some(None) => {
                for _ in PARENT_COLUMNS {
                    q = q.bind(None::<String>);
                }
            }
            None => {}
        }

        q.fetch_optional(pool).await
    }
}
