use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use healthiq_core::questions::QuestionBank;
use state::AppState;

/// Upload cap for voice clips.
const MAX_AUDIO_BYTES: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("HEALTHIQ_BUCKET").unwrap_or_else(|_| "healthiq".to_string());
    let model_dir =
        PathBuf::from(env::var("HEALTHIQ_MODEL_DIR").unwrap_or_else(|_| "models".to_string()));
    let addr = env::var("HEALTHIQ_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let persist_timeout = env::var("HEALTHIQ_PERSIST_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(10));

    // Text model absence degrades per-call: the endpoint reports the
    // classifier as unavailable instead of the process dying here.
    let text = match healthiq_text::TextMoodClassifier::load(&model_dir) {
        Ok(classifier) => classifier,
        Err(e) => {
            tracing::warn!("text model failed to load, serving degraded: {e}");
            healthiq_text::TextMoodClassifier::unloaded()
        }
    };

    // Voice model absence is fatal: fail fast before accepting any traffic.
    let voice = healthiq_voice::VoiceMoodClassifier::load(&model_dir)?;

    let s3 = healthiq_storage::client::build_client().await;

    let state = AppState {
        s3,
        bucket,
        questions: Arc::new(QuestionBank::builtin()),
        text: Arc::new(text),
        voice: Arc::new(voice),
        persist_timeout,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/assessment/questions",
            post(routes::assessment::sample_questions),
        )
        .route(
            "/assessment/answers",
            post(routes::assessment::score_answers),
        )
        .route("/mood/text", post(routes::mood::classify_text))
        .route("/mood/voice", post(routes::mood::classify_voice))
        .route("/mood/final_checkin", post(routes::mood::final_checkin))
        .route("/mood/history/{user_id}", get(routes::mood::mood_history))
        .layer(DefaultBodyLimit::max(MAX_AUDIO_BYTES))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state);

    tracing::info!(%addr, "healthiq backend listening");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
