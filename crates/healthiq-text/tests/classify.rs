use std::collections::HashMap;

use healthiq_core::models::mood::TextMood;
use healthiq_text::artifacts::{SentimentModel, TfidfVectorizer};
use healthiq_text::error::TextModelError;
use healthiq_text::{TextMoodClassifier, preprocess};

/// Two-term classifier: "love" pushes positive, "hate" pushes negative.
fn tiny_classifier() -> TextMoodClassifier {
    let vocabulary: HashMap<String, usize> =
        [("love".to_string(), 0), ("hate".to_string(), 1)].into();
    let vectorizer = TfidfVectorizer::new(vocabulary, vec![1.0, 1.0]).unwrap();
    let model = SentimentModel::new(vec![2.0, -2.0], 0.0);
    TextMoodClassifier::from_parts(vectorizer, model).unwrap()
}

#[test]
fn preprocess_strips_mentions_links_and_symbols() {
    assert_eq!(
        preprocess("I love today! :) http://x.com @bob"),
        "i love today"
    );
    assert_eq!(preprocess("@Alice @Bob hi"), "hi");
    assert_eq!(preprocess("see https://example.com/a?b=1 now"), "see  now");
    assert_eq!(preprocess("Numbers123 and CAPS"), "numbers and caps");
    assert_eq!(preprocess("!!! ??? :)"), "");
}

#[test]
fn empty_text_falls_back_to_neutral_without_the_model() {
    let classifier = tiny_classifier();
    for input in ["", "   ", "!!! :)", "@bob http://x.com"] {
        let result = classifier.classify(input).unwrap();
        assert_eq!(result.label, TextMood::Neutral);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.raw_class_code, 2);
    }
}

#[test]
fn positive_text_classifies_positive() {
    let classifier = tiny_classifier();
    let result = classifier.classify("I love today").unwrap();
    assert_eq!(result.label, TextMood::Positive);
    assert_eq!(result.raw_class_code, 1);
    // sigmoid(2.0) = 0.88079707..., rounded to 4 decimals.
    assert_eq!(result.confidence, 0.8808);
}

#[test]
fn negative_text_classifies_negative() {
    let classifier = tiny_classifier();
    let result = classifier.classify("hate hate").unwrap();
    assert_eq!(result.label, TextMood::Negative);
    assert_eq!(result.raw_class_code, 0);
    assert_eq!(result.confidence, 0.8808);
}

#[test]
fn mentions_and_links_do_not_reach_the_vectorizer() {
    let classifier = tiny_classifier();
    let with_noise = classifier
        .classify("I love today! :) http://x.com @bob")
        .unwrap();
    let clean = classifier.classify("i love today").unwrap();
    assert_eq!(with_noise, clean);
    assert_eq!(with_noise.label, TextMood::Positive);
}

#[test]
fn bigram_vocabulary_terms_activate() {
    let vocabulary: HashMap<String, usize> =
        [("love today".to_string(), 0), ("hate".to_string(), 1)].into();
    let vectorizer = TfidfVectorizer::new(vocabulary, vec![1.0, 1.0]).unwrap();
    let x = vectorizer.transform("love today");
    assert!(x[0] > 0.0);
    assert_eq!(x[1], 0.0);
}

#[test]
fn unigrams_and_bigrams_share_the_feature_space() {
    let vocabulary: HashMap<String, usize> =
        [("love".to_string(), 0), ("love today".to_string(), 1)].into();
    let vectorizer = TfidfVectorizer::new(vocabulary, vec![1.0, 1.0]).unwrap();
    let x = vectorizer.transform("love today");
    // Both features fire once; L2 normalization makes them equal.
    assert!(x[0] > 0.0);
    assert!((x[0] - x[1]).abs() < 1e-6);
    assert!((x.dot(&x) - 1.0).abs() < 1e-6);
}

#[test]
fn bigrams_only_pair_adjacent_tokens() {
    let vocabulary: HashMap<String, usize> = [("love today".to_string(), 0)].into();
    let vectorizer = TfidfVectorizer::new(vocabulary, vec![1.0]).unwrap();
    let x = vectorizer.transform("love this today");
    assert_eq!(x[0], 0.0);
}

#[test]
fn classification_is_idempotent() {
    let classifier = tiny_classifier();
    let first = classifier.classify("I love this, I love it").unwrap();
    let second = classifier.classify("I love this, I love it").unwrap();
    assert_eq!(first, second);
}

#[test]
fn unloaded_classifier_reports_model_unavailable() {
    let classifier = TextMoodClassifier::unloaded();
    assert!(!classifier.is_loaded());
    let err = classifier.classify("hello world").unwrap_err();
    assert!(matches!(err, TextModelError::ModelUnavailable));
}

#[test]
fn mismatched_artifact_dimensions_are_rejected() {
    let vocabulary: HashMap<String, usize> = [("love".to_string(), 0)].into();
    let vectorizer = TfidfVectorizer::new(vocabulary, vec![1.0]).unwrap();
    let model = SentimentModel::new(vec![2.0, -2.0], 0.0);
    let err = TextMoodClassifier::from_parts(vectorizer, model).unwrap_err();
    assert!(matches!(err, TextModelError::DimensionMismatch { .. }));
}

#[test]
fn bad_vocabulary_index_is_rejected() {
    let vocabulary: HashMap<String, usize> = [("love".to_string(), 5)].into();
    let err = TfidfVectorizer::new(vocabulary, vec![1.0]).unwrap_err();
    assert!(matches!(err, TextModelError::BadVocabularyIndex { .. }));
}
