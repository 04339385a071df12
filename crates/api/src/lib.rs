//! Activity Feature Drivers
//!
//! CLI and HTTP front ends for the motion feature engine.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use feature_engine::{FeatureExtractor, FeatureSet};
use sensor_input::load_samples;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod cli;
pub mod config;
pub mod error;
pub mod predictors;
mod routes;

pub use self::config::{AppConfig, LoggingConfig, ServerConfig};
pub use error::ApiError;
pub use predictors::format_predictors;

/// Application state shared across handlers
pub struct AppState {
    /// Feature extractor
    pub extractor: FeatureExtractor,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(extractor: FeatureExtractor) -> Self {
        Self {
            extractor,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub min_samples: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/features", post(routes::features::extract_features))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        min_samples: state.extractor.config().min_samples,
    })
}

/// Initialize logging. Output goes to stderr so stdout carries only results.
pub fn init_logging(config: &LoggingConfig) {
    let level = config.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.expect("Failed to set tracing subscriber");
}

/// Read a sensor file and reduce it to features
pub fn run_extract(path: &Path, config: &AppConfig) -> Result<FeatureSet, ApiError> {
    let samples = load_samples(path, &config.parser)?;
    let features = FeatureExtractor::new(config.extractor).extract(&samples)?;
    info!("Extracted features from {} samples in {}", samples.len(), path.display());
    Ok(features)
}

/// Run the server
pub async fn run_server(config: &AppConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(FeatureExtractor::new(config.extractor)));
    let app = create_router(state);

    info!("Starting API server on {}", config.server.addr);

    let listener = tokio::net::TcpListener::bind(&config.server.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
