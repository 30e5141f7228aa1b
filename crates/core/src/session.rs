//! Session field whitelist and patch canonicalization.
//!
//! Wizard clients send partial updates with inconsistent key spellings
//! (`child_age` vs `childAge`). This module owns the enumerated mapping
//! table that normalizes a raw JSON body into a [`SessionPatch`] of
//! canonical column values, applying the per-field coercion rules before
//! anything reaches the repository layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Material entries
// ---------------------------------------------------------------------------

/// Functional state of a household material within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialState {
    Functional,
    SemiFunctional,
    NotFunctional,
}

/// One material entry as stored in the session's `materials` JSON.
///
/// Clients may send extra display keys (name, emoji); only the id and
/// state survive canonicalization. An absent state means "unset".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    #[serde(alias = "materialId")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<MaterialState>,
}

impl MaterialEntry {
    /// Whether this material counts as usable for activity scoring.
    pub fn is_functional(&self) -> bool {
        matches!(
            self.state,
            Some(MaterialState::Functional) | Some(MaterialState::SemiFunctional)
        )
    }
}

// ---------------------------------------------------------------------------
// Parent contact
// ---------------------------------------------------------------------------

/// Optional parent contact block, stored across the `parent_*` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ParentContact {
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

/// A canonicalized partial update for a session.
///
/// Outer `None` means the field was absent from the request; the inner
/// `Option` (where present) distinguishes "set to null" from a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    pub materials: Option<Vec<MaterialEntry>>,
    pub environment: Option<Option<String>>,
    pub interest: Option<Option<String>>,
    pub completed: Option<bool>,
    pub child_age: Option<Option<i32>>,
    pub child_name: Option<Option<String>>,
    pub time_available: Option<Option<String>>,
    pub parent_contact: Option<Option<ParentContact>>,
}

/// Canonical session field names in the update whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionField {
    Materials,
    Environment,
    Interest,
    Completed,
    ChildAge,
    ChildName,
    TimeAvailable,
    ParentContact,
}

/// The update whitelist: each canonical field with every accepted request
/// spelling, in precedence order. When one request carries two spellings
/// of the same field, the first listed here wins and the duplicate is
/// ignored. Keys not in this table are ignored entirely.
const FIELD_SPELLINGS: &[(SessionField, &[&str])] = &[
    (SessionField::Materials, &["materials"]),
    (SessionField::Environment, &["environment"]),
    (SessionField::Interest, &["interest"]),
    (SessionField::Completed, &["completed"]),
    (SessionField::ChildAge, &["child_age", "childAge"]),
    (SessionField::ChildName, &["child_name", "childName"]),
    (SessionField::TimeAvailable, &["time_available", "timeAvailable"]),
    (SessionField::ParentContact, &["parent_contact", "parentContact"]),
];

impl SessionPatch {
    /// Canonicalize a raw JSON request body.
    ///
    /// Walks the whitelist table, coercing each present field. Unknown
    /// keys never error; malformed values for recognized fields do.
    pub fn from_value(body: &Value) -> Result<Self, CoreError> {
        let obj = body.as_object().ok_or_else(|| {
            CoreError::Validation("Request body must be a JSON object".to_string())
        })?;

        let mut patch = SessionPatch::default();
        for (field, spellings) in FIELD_SPELLINGS {
            let Some(raw) = spellings.iter().find_map(|s| obj.get(*s)) else {
                continue;
            };
            match field {
                SessionField::Materials => patch.materials = Some(parse_materials(raw)?),
                SessionField::Environment => {
                    patch.environment = Some(parse_nullable_string(raw, "environment")?);
                }
                SessionField::Interest => {
                    patch.interest = Some(parse_nullable_string(raw, "interest")?);
                }
                SessionField::Completed => patch.completed = Some(truthy(raw)),
                SessionField::ChildAge => patch.child_age = Some(parse_child_age(raw)?),
                SessionField::ChildName => {
                    patch.child_name = Some(parse_nullable_string(raw, "child_name")?);
                }
                SessionField::TimeAvailable => {
                    patch.time_available = Some(parse_nullable_string(raw, "time_available")?);
                }
                SessionField::ParentContact => {
                    patch.parent_contact = Some(parse_parent_contact(raw)?);
                }
            }
        }

        Ok(patch)
    }

    /// True when no recognized field was present ("nothing to update").
    pub fn is_empty(&self) -> bool {
        self.materials.is_none()
            && self.environment.is_none()
            && self.interest.is_none()
            && self.completed.is_none()
            && self.child_age.is_none()
            && self.child_name.is_none()
            && self.time_available.is_none()
            && self.parent_contact.is_none()
    }
}

// ---------------------------------------------------------------------------
// Coercions
// ---------------------------------------------------------------------------

fn parse_materials(raw: &Value) -> Result<Vec<MaterialEntry>, CoreError> {
    serde_json::from_value(raw.clone())
        .map_err(|e| CoreError::Validation(format!("Invalid materials: {e}")))
}

fn parse_nullable_string(raw: &Value, field: &str) -> Result<Option<String>, CoreError> {
    match raw {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(CoreError::Validation(format!(
            "Field '{field}' must be a string or null"
        ))),
    }
}

/// Loose boolean cast: null and zero are false; any non-empty string
/// (including "false") is true.
fn truthy(raw: &Value) -> bool {
    match raw {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Integer-or-null cast for the child age. Numeric strings are accepted;
/// anything non-integral is a validation error.
fn parse_child_age(raw: &Value) -> Result<Option<i32>, CoreError> {
    let invalid = || CoreError::Validation("Field 'child_age' must be a positive integer or null".to_string());
    let age = match raw {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_i64().ok_or_else(invalid)?,
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };
    if !(1..=i64::from(i32::MAX)).contains(&age) {
        return Err(invalid());
    }
    Ok(Some(age as i32))
}

fn parse_parent_contact(raw: &Value) -> Result<Option<ParentContact>, CoreError> {
    if raw.is_null() {
        return Ok(None);
    }
    let contact: ParentContact = serde_json::from_value(raw.clone())
        .map_err(|e| CoreError::Validation(format!("Invalid parent_contact: {e}")))?;
    contact
        .validate()
        .map_err(|e| CoreError::Validation(format!("Invalid parent_contact: {e}")))?;
    Ok(Some(contact))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
