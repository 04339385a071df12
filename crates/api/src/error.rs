//! API Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use feature_engine::FeatureError;
use sensor_input::InputError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the CLI and HTTP drivers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input could not be read or shaped into samples
    #[error(transparent)]
    Input(#[from] InputError),

    /// Samples could not be reduced to features
    #[error(transparent)]
    Feature(#[from] FeatureError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Input(InputError::Io(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Input(_) | ApiError::Feature(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
