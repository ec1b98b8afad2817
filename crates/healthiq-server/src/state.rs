use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::Client as S3Client;

use healthiq_core::questions::QuestionBank;
use healthiq_text::TextMoodClassifier;
use healthiq_voice::VoiceMoodClassifier;

/// Shared application state, injected into all route handlers via Axum state.
///
/// All model state is read-only after startup; concurrent requests share it
/// without coordination.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub questions: Arc<QuestionBank>,
    pub text: Arc<TextMoodClassifier>,
    pub voice: Arc<VoiceMoodClassifier>,
    pub persist_timeout: Duration,
}
