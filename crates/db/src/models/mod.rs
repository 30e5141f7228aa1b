//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row, plus the `Deserialize` DTOs used for
//! partial updates.

pub mod activity;
pub mod catalog;
pub mod session;
