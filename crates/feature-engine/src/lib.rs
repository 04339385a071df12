//! Motion Feature Engine
//!
//! Reduces a tri-axial motion sensor series to the fixed feature vector used
//! by the activity classifier: per-axis moments and quartiles plus pairwise
//! axis correlations.

mod correlation;
mod error;
mod features;
mod sample;
mod statistics;

pub use correlation::pearson_correlation;
pub use error::FeatureError;
pub use features::{
    extract_features, AxisFeatures, ExtractorConfig, FeatureExtractor, FeatureSet,
    FEATURE_DIMENSION, FEATURE_NAMES,
};
pub use sample::{columnize, Axis, AxisSeries, Sample, AXIS_COUNT};
pub use statistics::{AxisStatistics, Moments, Quartiles};
