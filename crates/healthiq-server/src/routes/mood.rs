use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use serde::Deserialize;
use serde_json::{Value, json};

use healthiq_core::consensus;
use healthiq_core::models::checkin::{FinalCheckin, MoodLogRecord};
use healthiq_storage::mood_logs;
use healthiq_text::TextMoodResult;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TextMoodRequest {
    text: String,
}

pub async fn classify_text(
    State(state): State<AppState>,
    Json(req): Json<TextMoodRequest>,
) -> Result<Json<TextMoodResult>, ApiError> {
    if req.text.is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }
    let result = state.text.classify(&req.text)?;
    Ok(Json(result))
}

/// Accepted upload content types, mapped to a container extension hint for
/// the decoder.
fn audio_extension(content_type: &str) -> Option<&'static str> {
    match content_type {
        "audio/wav" | "audio/x-wav" | "audio/wave" => Some("wav"),
        "audio/mpeg" | "audio/mp3" => Some("mp3"),
        _ => None,
    }
}

pub async fn classify_voice(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let extension = audio_extension(content_type).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "unsupported content type '{content_type}' (expected wav or mp3)"
        ))
    })?;
    if body.is_empty() {
        return Err(ApiError::BadRequest(
            "audio body must not be empty".to_string(),
        ));
    }

    // Decoding and inference are CPU-bound; keep them off the async runtime.
    let voice = Arc::clone(&state.voice);
    let mood = tokio::task::spawn_blocking(move || voice.classify(&body, Some(extension)))
        .await
        .map_err(|e| ApiError::Internal(format!("voice classification task failed: {e}")))??;

    Ok(Json(json!({ "mood": mood })))
}

pub async fn final_checkin(
    State(state): State<AppState>,
    Json(checkin): Json<FinalCheckin>,
) -> Result<Json<Value>, ApiError> {
    checkin.validate()?;

    let decision = consensus::evaluate(&checkin);
    let record = MoodLogRecord::new(&checkin, &decision);

    if let Err(e) =
        mood_logs::append(&state.s3, &state.bucket, &record, state.persist_timeout).await
    {
        return Err(ApiError::DecisionNotPersisted {
            decision,
            detail: e.to_string(),
        });
    }

    Ok(Json(json!({
        "status": "saved",
        "user_id": checkin.user_id,
        "decision": decision,
    })))
}

pub async fn mood_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<MoodLogRecord>>, ApiError> {
    let records = mood_logs::list_for_user(&state.s3, &state.bucket, &user_id).await?;
    Ok(Json(records))
}
