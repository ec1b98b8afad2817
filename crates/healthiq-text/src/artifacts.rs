//! Pre-fitted trained artifacts: the TF-IDF vectorizer and the linear
//! sentiment classifier. Both are produced by the offline training pipeline
//! and deserialized from JSON at startup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ndarray::{Array1, ArrayView1};
use serde::Deserialize;

use crate::error::TextModelError;

#[derive(Debug, Deserialize)]
struct VectorizerFile {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

/// A fitted TF-IDF vectorizer: term vocabulary plus inverse-document-frequency
/// weights, one per vocabulary index.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    pub fn new(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f32>,
    ) -> Result<Self, TextModelError> {
        if vocabulary.len() != idf.len() {
            return Err(TextModelError::InconsistentVectorizer {
                vocabulary: vocabulary.len(),
                idf: idf.len(),
            });
        }
        if let Some(&index) = vocabulary.values().find(|&&i| i >= idf.len()) {
            return Err(TextModelError::BadVocabularyIndex {
                index,
                dimension: idf.len(),
            });
        }
        Ok(TfidfVectorizer { vocabulary, idf })
    }

    pub fn from_file(path: &Path) -> Result<Self, TextModelError> {
        let raw = fs::read(path).map_err(|source| TextModelError::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })?;
        let file: VectorizerFile =
            serde_json::from_slice(&raw).map_err(|source| TextModelError::ArtifactParse {
                path: path.to_path_buf(),
                source,
            })?;
        TfidfVectorizer::new(file.vocabulary, file.idf)
    }

    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Vectorize cleaned text: term counts weighted by idf, L2-normalized.
    /// Tokens are whitespace-separated runs of at least two characters, and
    /// the feature space covers both unigrams and adjacent-token bigrams
    /// (space-joined), matching the training-time tokenization.
    pub fn transform(&self, cleaned: &str) -> Array1<f32> {
        let mut x = Array1::<f32>::zeros(self.idf.len());
        let tokens: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|t| t.len() >= 2)
            .collect();
        for token in &tokens {
            if let Some(&index) = self.vocabulary.get(*token) {
                x[index] += 1.0;
            }
        }
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            if let Some(&index) = self.vocabulary.get(&bigram) {
                x[index] += 1.0;
            }
        }
        for (value, idf) in x.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        let norm = x.dot(&x).sqrt();
        if norm > 0.0 {
            x.mapv_inplace(|v| v / norm);
        }
        x
    }
}

/// A fitted binary logistic-regression sentiment classifier over the
/// vectorizer's feature space. Class 0 is Negative, class 1 is Positive.
#[derive(Debug, Deserialize)]
pub struct SentimentModel {
    coefficients: Vec<f32>,
    intercept: f32,
}

impl SentimentModel {
    pub fn new(coefficients: Vec<f32>, intercept: f32) -> Self {
        SentimentModel {
            coefficients,
            intercept,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, TextModelError> {
        let raw = fs::read(path).map_err(|source| TextModelError::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&raw).map_err(|source| TextModelError::ArtifactParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    /// Class probabilities `[negative, positive]`.
    pub fn predict_proba(&self, x: &Array1<f32>) -> [f32; 2] {
        let w = ArrayView1::from(self.coefficients.as_slice());
        let z = w.dot(x) + self.intercept;
        let positive = 1.0 / (1.0 + (-z).exp());
        [1.0 - positive, positive]
    }
}
