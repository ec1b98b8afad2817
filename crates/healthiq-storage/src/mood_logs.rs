//! Append-only mood-log operations over the document store.

use std::time::Duration;

use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use tracing::info;
use uuid::Uuid;

use healthiq_core::models::checkin::MoodLogRecord;
use healthiq_core::s3_keys;

use crate::error::StorageError;

/// Append one mood-log record under the user's prefix. Returns the
/// store-assigned key.
///
/// Each write is a single independent put — no read-modify-write. The call
/// is bounded by `timeout`; on expiry the caller gets
/// [`StorageError::Timeout`] and should retry the whole check-in (the
/// computed decision itself is not lost, only its durable copy).
pub async fn append(
    client: &Client,
    bucket: &str,
    record: &MoodLogRecord,
    timeout: Duration,
) -> Result<String, StorageError> {
    let key = s3_keys::mood_log(&record.user_id, Uuid::new_v4());
    let body = serde_json::to_vec(record)?;

    let put = client
        .put_object()
        .bucket(bucket)
        .key(&key)
        .content_type("application/json")
        .body(ByteStream::from(body))
        .send();

    tokio::time::timeout(timeout, put)
        .await
        .map_err(|_| StorageError::Timeout(timeout))?
        .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

    info!(user_id = %record.user_id, key = %key, "mood log appended");
    Ok(key)
}

/// List a user's mood-log records, newest first.
pub async fn list_for_user(
    client: &Client,
    bucket: &str,
    user_id: &str,
) -> Result<Vec<MoodLogRecord>, StorageError> {
    let prefix = s3_keys::mood_logs_prefix(user_id);
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let mut req = client.list_objects_v2().bucket(bucket).prefix(&prefix);
        if let Some(token) = &continuation_token {
            req = req.continuation_token(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

        for obj in resp.contents() {
            if let Some(key) = obj.key() {
                keys.push(key.to_string());
            }
        }

        if resp.is_truncated() == Some(true) {
            continuation_token = resp.next_continuation_token().map(|s| s.to_string());
        } else {
            break;
        }
    }

    let mut records = Vec::with_capacity(keys.len());
    for key in &keys {
        let resp = client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::GetObject(e.into_service_error().to_string()))?;
        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| StorageError::GetObject(e.to_string()))?
            .into_bytes();
        let record: MoodLogRecord = serde_json::from_slice(&body)?;
        records.push(record);
    }

    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(records)
}
