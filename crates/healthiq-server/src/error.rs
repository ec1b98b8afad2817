use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use healthiq_core::models::checkin::FinalDecision;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
    /// The consensus decision was computed but could not be durably
    /// recorded. The decision rides along in the error payload so callers
    /// can tell "computed but not saved" apart from a computation failure
    /// and retry the whole check-in.
    DecisionNotPersisted {
        decision: FinalDecision,
        detail: String,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": msg })),
                )
                    .into_response()
            }
            ApiError::DecisionNotPersisted { decision, detail } => {
                tracing::error!("decision computed but not saved: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": format!("mood computed but not saved, retry the check-in: {detail}"),
                        "code": "persistence_failed",
                        "decision": decision,
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl From<healthiq_core::error::QuestionBankError> for ApiError {
    fn from(e: healthiq_core::error::QuestionBankError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<healthiq_core::error::ScoreError> for ApiError {
    fn from(e: healthiq_core::error::ScoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<healthiq_core::error::CheckinError> for ApiError {
    fn from(e: healthiq_core::error::CheckinError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<healthiq_text::error::TextModelError> for ApiError {
    fn from(e: healthiq_text::error::TextModelError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<healthiq_voice::error::VoiceModelError> for ApiError {
    fn from(e: healthiq_voice::error::VoiceModelError) -> Self {
        match e {
            healthiq_voice::error::VoiceModelError::UnsupportedFormat(msg) => {
                ApiError::BadRequest(format!("unsupported audio format: {msg}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<healthiq_storage::error::StorageError> for ApiError {
    fn from(e: healthiq_storage::error::StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use healthiq_core::consensus;
    use healthiq_core::models::checkin::FinalCheckin;

    use super::ApiError;

    #[tokio::test]
    async fn persistence_failure_returns_the_computed_decision() {
        let checkin = FinalCheckin {
            user_id: "user-1".to_string(),
            psych_score: 3,
            text_mood: "Positive".to_string(),
            voice_mood: "calm".to_string(),
        };
        let decision = consensus::evaluate(&checkin);

        let response = ApiError::DecisionNotPersisted {
            decision: decision.clone(),
            detail: "mood log write timed out after 10s".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["code"], "persistence_failed");
        assert_eq!(payload["decision"]["final_mood"], "Positive");
        assert_eq!(
            payload["decision"]["ai_consensus_score"],
            decision.ai_consensus_score
        );
        assert_eq!(payload["decision"]["psych_score"], 3);
        assert_eq!(payload["decision"]["suggestion"], decision.suggestion);
        assert!(
            payload["error"]
                .as_str()
                .unwrap()
                .contains("timed out after 10s")
        );
    }
}
