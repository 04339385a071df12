//! Predictor String Formatting
//!
//! Renders a feature set as the `key:value,key:value` line consumed by the
//! scoring service.

use feature_engine::FeatureSet;

/// Format all features in vocabulary order
pub fn format_predictors(features: &FeatureSet) -> String {
    features
        .entries()
        .iter()
        .map(|(key, value)| format!("{}:{}", key, format_value(*value)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Shortest round-trip decimal, never in exponent form
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "+Inf" } else { "-Inf" }.to_string()
    } else {
        value.to_string()
    }
}
