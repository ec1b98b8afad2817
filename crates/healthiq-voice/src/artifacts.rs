//! Pre-fitted companions of the voice network: the feature scaler and the
//! ordered emotion label list. Both are produced by the offline training
//! pipeline and deserialized from JSON at startup.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::VoiceModelError;
use crate::features::FEATURE_LEN;

/// A fitted standard scaler: per-dimension mean and scale, applied to the
/// feature vector before inference — the same transform used at training.
#[derive(Debug, Deserialize)]
pub struct FeatureScaler {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

impl FeatureScaler {
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Result<Self, VoiceModelError> {
        if mean.len() != scale.len() {
            return Err(VoiceModelError::Prediction(format!(
                "scaler mean length {} does not match scale length {}",
                mean.len(),
                scale.len()
            )));
        }
        // A zero or non-finite scale entry would turn division into inf/NaN
        // and poison the network input without any visible failure.
        if let Some(i) = scale.iter().position(|s| !s.is_finite() || *s == 0.0) {
            return Err(VoiceModelError::Prediction(format!(
                "scale entry {i} is {}, expected finite and nonzero",
                scale[i]
            )));
        }
        if let Some(i) = mean.iter().position(|m| !m.is_finite()) {
            return Err(VoiceModelError::Prediction(format!(
                "mean entry {i} is {}, expected finite",
                mean[i]
            )));
        }
        Ok(FeatureScaler { mean, scale })
    }

    pub fn from_file(path: &Path) -> Result<Self, VoiceModelError> {
        let raw = fs::read(path).map_err(|e| VoiceModelError::ModelLoad {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        let scaler: FeatureScaler =
            serde_json::from_slice(&raw).map_err(|e| VoiceModelError::ModelLoad {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;
        if scaler.mean.len() != scaler.scale.len() || scaler.mean.len() != FEATURE_LEN {
            return Err(VoiceModelError::ModelLoad {
                path: path.to_path_buf(),
                detail: format!(
                    "scaler dimensions {}x{} do not match feature length {FEATURE_LEN}",
                    scaler.mean.len(),
                    scaler.scale.len()
                ),
            });
        }
        FeatureScaler::new(scaler.mean, scaler.scale).map_err(|e| VoiceModelError::ModelLoad {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    pub fn dimension(&self) -> usize {
        self.mean.len()
    }

    /// Standardize a feature vector: `(x - mean) / scale` per dimension.
    pub fn apply(&self, features: &[f32]) -> Result<Vec<f32>, VoiceModelError> {
        if features.len() != self.mean.len() {
            return Err(VoiceModelError::Prediction(format!(
                "feature length {} does not match scaler dimension {}",
                features.len(),
                self.mean.len()
            )));
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(&x, (&m, &s))| (x - m) / s)
            .collect())
    }
}

/// Load the ordered emotion label list. Category order must match the
/// network's output index order; any mismatch silently mislabels every
/// prediction, so an empty list is rejected here.
pub fn load_labels(path: &Path) -> Result<Vec<String>, VoiceModelError> {
    let raw = fs::read(path).map_err(|e| VoiceModelError::ModelLoad {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    let labels: Vec<String> =
        serde_json::from_slice(&raw).map_err(|e| VoiceModelError::ModelLoad {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
    if labels.is_empty() {
        return Err(VoiceModelError::ModelLoad {
            path: path.to_path_buf(),
            detail: "label list is empty".to_string(),
        });
    }
    Ok(labels)
}
