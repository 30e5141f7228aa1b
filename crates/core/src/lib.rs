//! Domain logic for the Nido onboarding service.
//!
//! Everything here is pure: no database handles, no HTTP. The `nido-db`
//! and `nido-api` crates depend on this crate for the error taxonomy,
//! session field canonicalization, secret generation, and the activity
//! recommendation scorer.

pub mod error;
pub mod recommend;
pub mod secret;
pub mod session;
pub mod types;
