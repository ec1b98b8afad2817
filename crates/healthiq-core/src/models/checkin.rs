use serde::{Deserialize, Serialize};

use crate::error::CheckinError;
use crate::models::mood::FinalMood;

/// Upper bound of the psychological-distress score a check-in may carry
/// (five answers, 0..=3 each).
pub const MAX_PSYCH_SCORE: i64 = 15;

/// Input to the consensus engine: one completed check-in.
///
/// `text_mood` and `voice_mood` arrive as the labels the two classifiers
/// produced. Unrecognized labels are legal — they contribute zero weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalCheckin {
    pub user_id: String,
    pub psych_score: i64,
    pub text_mood: String,
    pub voice_mood: String,
}

impl FinalCheckin {
    pub fn validate(&self) -> Result<(), CheckinError> {
        if self.user_id.trim().is_empty() {
            return Err(CheckinError::EmptyUserId);
        }
        if self.psych_score < 0 || self.psych_score > MAX_PSYCH_SCORE {
            return Err(CheckinError::PsychScoreOutOfRange(self.psych_score));
        }
        Ok(())
    }
}

/// Output of the consensus engine. Immutable once computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalDecision {
    pub final_mood: FinalMood,
    pub suggestion: String,
    pub ai_consensus_score: i64,
    pub psych_score: i64,
}

/// The persisted mood-log record: one per check-in, append-only, never
/// mutated. Field names are the store's logical schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodLogRecord {
    pub user_id: String,
    pub timestamp: jiff::Timestamp,
    pub date_string: String,
    pub final_mood: FinalMood,
    pub suggestion: String,
    pub text_mood: String,
    pub voice_mood: String,
    pub psych_score: i64,
    pub ai_consensus_score: i64,
}

impl MoodLogRecord {
    /// Build the record for a computed decision, stamped with the current
    /// server time.
    pub fn new(checkin: &FinalCheckin, decision: &FinalDecision) -> Self {
        let now = jiff::Timestamp::now();
        MoodLogRecord {
            user_id: checkin.user_id.clone(),
            timestamp: now,
            date_string: now.to_string(),
            final_mood: decision.final_mood,
            suggestion: decision.suggestion.clone(),
            text_mood: checkin.text_mood.clone(),
            voice_mood: checkin.voice_mood.clone(),
            psych_score: decision.psych_score,
            ai_consensus_score: decision.ai_consensus_score,
        }
    }
}
