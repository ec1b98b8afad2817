//! healthiq-storage
//!
//! Append-only mood-log persistence. Thin wrapper around the AWS S3 SDK;
//! the record shape and key conventions live in healthiq-core.

pub mod client;
pub mod error;
pub mod mood_logs;
