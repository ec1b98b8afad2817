use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestionBankError {
    #[error("requested {requested} questions but the pool only has {available}")]
    InsufficientPool { requested: usize, available: usize },
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("answer for '{id}' is out of range: {value} (expected 0..=3)")]
    InvalidAnswer { id: String, value: i64 },

    #[error("unknown question id: {0}")]
    UnknownQuestion(String),
}

#[derive(Debug, Error)]
pub enum CheckinError {
    #[error("user_id must not be empty")]
    EmptyUserId,

    #[error("psych_score {0} is out of range (expected 0..=15)")]
    PsychScoreOutOfRange(i64),
}
