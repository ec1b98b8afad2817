use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceModelError {
    #[error("failed to load voice model component {path}: {detail}")]
    ModelLoad { path: PathBuf, detail: String },

    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("voice prediction failed: {0}")]
    Prediction(String),
}
