//! healthiq-core
//!
//! Pure domain types and decision logic for the HealthIQ mood pipeline:
//! the assessment question bank, Likert score aggregation, the final-mood
//! consensus rules, and the persisted-record/key conventions.
//! No AWS or ML dependency — this is the shared vocabulary of the system.

pub mod consensus;
pub mod error;
pub mod models;
pub mod questions;
pub mod s3_keys;
pub mod scoring;
