use healthiq_voice::artifacts::FeatureScaler;
use healthiq_voice::error::VoiceModelError;
use healthiq_voice::features::{FEATURE_LEN, N_MFCC, feature_vector, pad_or_truncate};

/// A short 440 Hz tone at the pipeline sample rate.
fn tone(samples: usize) -> Vec<f32> {
    (0..samples)
        .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 22_050.0).sin() * 0.5)
        .collect()
}

#[test]
fn feature_vector_has_the_fixed_length() {
    for len in [100, 1024, 4000, 8192] {
        let features = feature_vector(&tone(len));
        assert_eq!(features.len(), FEATURE_LEN);
    }
}

#[test]
fn mean_pooled_coefficients_are_zero_padded() {
    let features = feature_vector(&tone(4000));
    // Only the first N_MFCC slots carry pooled coefficients; the pad is zero.
    assert!(features[..N_MFCC].iter().any(|&v| v != 0.0));
    assert!(features[N_MFCC..].iter().all(|&v| v == 0.0));
}

#[test]
fn feature_vector_is_deterministic() {
    let waveform = tone(4000);
    assert_eq!(feature_vector(&waveform), feature_vector(&waveform));
}

#[test]
fn inputs_shorter_than_one_frame_still_produce_features() {
    let features = feature_vector(&tone(64));
    assert_eq!(features.len(), FEATURE_LEN);
}

#[test]
fn pad_or_truncate_both_directions() {
    let short = pad_or_truncate(vec![1.0, 2.0], 5);
    assert_eq!(short, vec![1.0, 2.0, 0.0, 0.0, 0.0]);

    let long = pad_or_truncate(vec![1.0, 2.0, 3.0, 4.0, 5.0], 3);
    assert_eq!(long, vec![1.0, 2.0, 3.0]);
}

#[test]
fn scaler_standardizes_each_dimension() {
    let scaler = FeatureScaler::new(vec![1.0, 2.0], vec![2.0, 4.0]).unwrap();
    let scaled = scaler.apply(&[3.0, 2.0]).unwrap();
    assert_eq!(scaled, vec![1.0, 0.0]);
}

#[test]
fn scaler_rejects_mismatched_feature_length() {
    let scaler = FeatureScaler::new(vec![0.0; 3], vec![1.0; 3]).unwrap();
    let err = scaler.apply(&[0.0; 4]).unwrap_err();
    assert!(matches!(err, VoiceModelError::Prediction(_)));
}

#[test]
fn scaler_rejects_mismatched_mean_and_scale() {
    assert!(FeatureScaler::new(vec![0.0; 3], vec![1.0; 2]).is_err());
}

#[test]
fn scaler_rejects_degenerate_scale_entries() {
    assert!(FeatureScaler::new(vec![0.0; 2], vec![1.0, 0.0]).is_err());
    assert!(FeatureScaler::new(vec![0.0; 2], vec![1.0, f32::NAN]).is_err());
    assert!(FeatureScaler::new(vec![0.0; 2], vec![f32::INFINITY, 1.0]).is_err());
}

#[test]
fn scaler_rejects_non_finite_mean_entries() {
    assert!(FeatureScaler::new(vec![0.0, f32::NAN], vec![1.0; 2]).is_err());
}
