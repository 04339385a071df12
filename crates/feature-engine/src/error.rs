//! Feature Extraction Error Types

use thiserror::Error;

/// Errors raised while building or reducing a sample set
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Sample row does not have one value per axis
    #[error("sample row has {found} values, expected {expected}")]
    InputShape { expected: usize, found: usize },

    /// Two series that must be index-aligned have different lengths
    #[error("series lengths disagree: {left} vs {right}")]
    SeriesLength { left: usize, right: usize },

    /// Too few samples to produce the requested statistics
    #[error("{samples} samples supplied, at least {required} required")]
    DegenerateStatistic { samples: usize, required: usize },
}
