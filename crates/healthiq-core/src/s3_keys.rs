//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of mood-log records in the HealthIQ bucket.

use uuid::Uuid;

pub fn mood_log(user_id: &str, record_id: Uuid) -> String {
    format!("mood_logs/{user_id}/{record_id}.json")
}

pub fn mood_logs_prefix(user_id: &str) -> String {
    format!("mood_logs/{user_id}/")
}
