use std::collections::HashMap;

use axum::Json;
use axum::extract::State;

use healthiq_core::models::question::QuestionPrompt;
use healthiq_core::scoring::{self, ScoreMode, ScoreSummary};

use crate::error::ApiError;
use crate::state::AppState;

/// Number of questions served per check-in.
pub const QUESTIONS_PER_CHECKIN: usize = 5;

pub async fn sample_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionPrompt>>, ApiError> {
    let prompts = state.questions.sample(QUESTIONS_PER_CHECKIN)?;
    Ok(Json(prompts))
}

pub async fn score_answers(
    State(state): State<AppState>,
    Json(submission): Json<HashMap<String, i64>>,
) -> Result<Json<ScoreSummary>, ApiError> {
    let summary = scoring::score(&state.questions, &submission, ScoreMode::Lenient)?;
    Ok(Json(summary))
}
