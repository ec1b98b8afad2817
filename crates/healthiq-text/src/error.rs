use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextModelError {
    #[error("text model is not loaded")]
    ModelUnavailable,

    #[error("failed to read artifact {path}: {source}")]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    ArtifactParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("vectorizer dimension {vectorizer} does not match classifier dimension {model}")]
    DimensionMismatch { vectorizer: usize, model: usize },

    #[error("vocabulary has {vocabulary} terms but {idf} idf weights")]
    InconsistentVectorizer { vocabulary: usize, idf: usize },

    #[error("vocabulary index {index} is out of range for {dimension} idf weights")]
    BadVocabularyIndex { index: usize, dimension: usize },

    #[error("prediction failed: {0}")]
    Prediction(String),
}
