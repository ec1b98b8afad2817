//! Likert answer aggregation into a psychological-distress score.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::questions::QuestionBank;

/// Valid answer range for a single Likert item.
pub const MIN_ANSWER: i64 = 0;
pub const MAX_ANSWER: i64 = 3;

/// How unknown question ids are treated during aggregation.
///
/// The reference behavior is [`ScoreMode::Lenient`]: an unknown id is counted
/// toward `answered_count` and `max_possible` but contributes nothing to the
/// total. `Strict` rejects the submission instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreMode {
    #[default]
    Lenient,
    Strict,
}

/// Aggregated result of scoring one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub total_score: i64,
    pub answered_count: usize,
    pub max_possible: i64,
}

/// Sum the validated answers of a submission.
///
/// Every value is range-checked first: any value outside `[0, 3]` aborts the
/// whole computation with [`ScoreError::InvalidAnswer`] naming the offending
/// id — no partial score is returned. An empty submission scores zero.
pub fn score(
    bank: &QuestionBank,
    submission: &HashMap<String, i64>,
    mode: ScoreMode,
) -> Result<ScoreSummary, ScoreError> {
    let mut total = 0i64;
    let mut answered = 0usize;

    for (id, &value) in submission {
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            return Err(ScoreError::InvalidAnswer {
                id: id.clone(),
                value,
            });
        }
        if bank.contains(id) {
            total += value;
        } else if mode == ScoreMode::Strict {
            return Err(ScoreError::UnknownQuestion(id.clone()));
        }
        answered += 1;
    }

    Ok(ScoreSummary {
        total_score: total,
        answered_count: answered,
        max_possible: answered as i64 * MAX_ANSWER,
    })
}
