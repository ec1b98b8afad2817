//! healthiq-text
//!
//! Text sentiment classification over pre-fitted trained artifacts: a TF-IDF
//! vectorizer and a linear classifier, both deserialized from JSON at
//! startup. Artifact-load failure degrades gracefully — the classifier stays
//! in an unloaded state and every inference call reports
//! [`error::TextModelError::ModelUnavailable`] instead of crashing the
//! process.

pub mod artifacts;
pub mod error;
pub mod preprocess;

use std::path::Path;

use serde::Serialize;
use tracing::info;

use healthiq_core::models::mood::TextMood;

use crate::artifacts::{SentimentModel, TfidfVectorizer};
use crate::error::TextModelError;
pub use crate::preprocess::preprocess;

/// Artifact filenames, resolved against the configured model directory.
pub const VECTORIZER_FILE: &str = "text_vectorizer.json";
pub const MODEL_FILE: &str = "text_sentiment_model.json";

/// A single text classification result.
///
/// Serialized field names match the API wire shape: `mood`, `confidence`,
/// `label_code`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMoodResult {
    #[serde(rename = "mood")]
    pub label: TextMood,
    pub confidence: f64,
    #[serde(rename = "label_code")]
    pub raw_class_code: u8,
}

#[derive(Debug)]
struct LoadedArtifacts {
    vectorizer: TfidfVectorizer,
    model: SentimentModel,
}

/// The text mood classifier. Immutable after construction; safe to share
/// across concurrent requests.
#[derive(Debug)]
pub struct TextMoodClassifier {
    inner: Option<LoadedArtifacts>,
}

impl TextMoodClassifier {
    /// Load both artifacts from the model directory.
    pub fn load(model_dir: &Path) -> Result<Self, TextModelError> {
        let vectorizer = TfidfVectorizer::from_file(&model_dir.join(VECTORIZER_FILE))?;
        let model = SentimentModel::from_file(&model_dir.join(MODEL_FILE))?;
        let classifier = TextMoodClassifier::from_parts(vectorizer, model)?;
        info!(
            dimension = classifier.dimension().unwrap_or(0),
            "text sentiment model loaded"
        );
        Ok(classifier)
    }

    /// Build a classifier from already-constructed artifacts.
    pub fn from_parts(
        vectorizer: TfidfVectorizer,
        model: SentimentModel,
    ) -> Result<Self, TextModelError> {
        if vectorizer.dimension() != model.dimension() {
            return Err(TextModelError::DimensionMismatch {
                vectorizer: vectorizer.dimension(),
                model: model.dimension(),
            });
        }
        Ok(TextMoodClassifier {
            inner: Some(LoadedArtifacts { vectorizer, model }),
        })
    }

    /// A classifier whose artifacts failed to load. Inference calls fail
    /// with [`TextModelError::ModelUnavailable`].
    pub fn unloaded() -> Self {
        TextMoodClassifier { inner: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.is_some()
    }

    pub fn dimension(&self) -> Option<usize> {
        self.inner.as_ref().map(|a| a.vectorizer.dimension())
    }

    /// Classify raw text.
    ///
    /// Text that is empty after cleaning short-circuits to Neutral with
    /// confidence 0.5 — a documented fallback, not an error. Otherwise the
    /// confidence is the predicted class's probability, rounded to four
    /// decimal places.
    pub fn classify(&self, text: &str) -> Result<TextMoodResult, TextModelError> {
        let loaded = self.inner.as_ref().ok_or(TextModelError::ModelUnavailable)?;

        let cleaned = preprocess(text);
        if cleaned.is_empty() {
            return Ok(TextMoodResult {
                label: TextMood::Neutral,
                confidence: 0.5,
                raw_class_code: TextMood::Neutral.class_code(),
            });
        }

        let x = loaded.vectorizer.transform(&cleaned);
        let probabilities = loaded.model.predict_proba(&x);
        let class: u8 = if probabilities[1] > probabilities[0] { 1 } else { 0 };
        let confidence = round4(f64::from(probabilities[usize::from(class)]));

        Ok(TextMoodResult {
            label: TextMood::from_class_code(class),
            confidence,
            raw_class_code: class,
        })
    }
}

fn round4(p: f64) -> f64 {
    (p * 10_000.0).round() / 10_000.0
}
