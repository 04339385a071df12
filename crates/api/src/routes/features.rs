//! Feature Extraction Routes

use axum::{extract::State, Json};
use feature_engine::FeatureSet;
use sensor_input::SampleValidator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::predictors::format_predictors;
use crate::AppState;

/// Request body: one `[x, y, z]` row per sample
#[derive(Debug, Deserialize)]
pub struct FeatureRequest {
    pub rows: Vec<Vec<f64>>,
}

/// Response for the features endpoint
#[derive(Debug, Serialize)]
pub struct FeatureResponse {
    /// Feature map; non-finite values serialize as null
    pub features: FeatureSet,
    /// Same features in scoring service format
    pub predictors: String,
    pub samples: usize,
}

/// Extract features from posted rows
pub async fn extract_features(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FeatureRequest>,
) -> Result<Json<FeatureResponse>, ApiError> {
    let samples = SampleValidator::new().validate(&request.rows)?;
    let features = state.extractor.extract(&samples)?;

    info!("Extracted features from {} posted samples", samples.len());

    Ok(Json(FeatureResponse {
        predictors: format_predictors(&features),
        features,
        samples: samples.len(),
    }))
}
