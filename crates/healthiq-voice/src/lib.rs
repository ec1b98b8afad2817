//! healthiq-voice
//!
//! Voice emotion classification: decode raw audio bytes, extract a
//! fixed-length MFCC feature vector, standardize it with the training-time
//! scaler, and run the pre-trained network via ONNX Runtime. Unlike the text
//! classifier, a load failure here is fatal to the owning process.

pub mod artifacts;
pub mod decode;
pub mod error;
pub mod features;

use std::path::Path;
use std::sync::Mutex;

use ndarray::Array3;
use ort::session::Session;
use ort::value::Tensor;
use tracing::info;

use crate::artifacts::FeatureScaler;
use crate::error::VoiceModelError;

/// Artifact filenames, resolved against the configured model directory.
pub const MODEL_FILE: &str = "voice_mood_model.onnx";
pub const SCALER_FILE: &str = "voice_scaler.json";
pub const LABELS_FILE: &str = "voice_mood_labels.json";

/// The voice emotion classifier: ONNX session, fitted scaler, and the
/// ordered output label list. The session requires `&mut` to run, so it
/// sits behind a mutex; everything else is read-only after load.
pub struct VoiceMoodClassifier {
    session: Mutex<Session>,
    scaler: FeatureScaler,
    labels: Vec<String>,
}

impl VoiceMoodClassifier {
    /// Load the network, scaler, and label list from the model directory.
    ///
    /// Callers must treat any error as a startup failure: serving requests
    /// with a half-loaded voice model would mislabel every prediction.
    pub fn load(model_dir: &Path) -> Result<Self, VoiceModelError> {
        let model_path = model_dir.join(MODEL_FILE);
        let session = Session::builder()
            .and_then(|b| Ok(b.with_intra_threads(1)?))
            .and_then(|mut b| b.commit_from_file(&model_path))
            .map_err(|e| VoiceModelError::ModelLoad {
                path: model_path.clone(),
                detail: e.to_string(),
            })?;

        let scaler = FeatureScaler::from_file(&model_dir.join(SCALER_FILE))?;
        let labels = artifacts::load_labels(&model_dir.join(LABELS_FILE))?;

        info!(labels = ?labels, "voice emotion model loaded");

        Ok(VoiceMoodClassifier {
            session: Mutex::new(session),
            scaler,
            labels,
        })
    }

    /// The output categories, in network output index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Classify raw audio bytes into one of the trained emotion labels.
    ///
    /// The extension hint (derived from the request content type) guides the
    /// container probe. Undecodable input reports
    /// [`VoiceModelError::UnsupportedFormat`]; everything after decoding
    /// reports [`VoiceModelError::Prediction`] with the underlying cause.
    pub fn classify(
        &self,
        audio: &[u8],
        extension: Option<&str>,
    ) -> Result<String, VoiceModelError> {
        let waveform = decode::decode_to_waveform(audio, extension)?;
        let feature_vec = features::feature_vector(&waveform);
        let scaled = self.scaler.apply(&feature_vec)?;

        // The network expects rank-3 input: [batch, feature length, 1 channel].
        let input = Array3::from_shape_vec((1, features::FEATURE_LEN, 1), scaled)
            .map_err(|e| VoiceModelError::Prediction(e.to_string()))?;
        let tensor =
            Tensor::from_array(input).map_err(|e| VoiceModelError::Prediction(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| VoiceModelError::Prediction("model session poisoned".to_string()))?;
        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| VoiceModelError::Prediction(e.to_string()))?;

        let (_, value) = outputs
            .iter()
            .next()
            .ok_or_else(|| VoiceModelError::Prediction("model produced no output".to_string()))?;
        let (_shape, probabilities) = value
            .try_extract_tensor::<f32>()
            .map_err(|e| VoiceModelError::Prediction(e.to_string()))?;

        let predicted = argmax(probabilities).ok_or_else(|| {
            VoiceModelError::Prediction("model produced an empty output tensor".to_string())
        })?;

        self.labels.get(predicted).cloned().ok_or_else(|| {
            VoiceModelError::Prediction(format!(
                "predicted index {predicted} has no label (have {})",
                self.labels.len()
            ))
        })
    }
}

fn argmax(values: &[f32]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}
