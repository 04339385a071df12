//! Statistical Features Computation

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Central tendency, dispersion and shape of a series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (N-1 divisor)
    pub std_dev: f64,
    /// Third central moment over variance^1.5, both with the N-1 divisor
    pub skewness: f64,
}

impl Moments {
    /// Compute mean, standard deviation and skewness.
    ///
    /// Degenerate inputs are not guarded: a constant series yields a NaN
    /// skewness (0/0), and a single value yields NaN standard deviation and
    /// skewness because the N-1 divisor is zero.
    pub fn compute(values: &[f64]) -> Self {
        let n = values.len() as f64;

        let mean = values.iter().sum::<f64>() / n;

        let mut m2 = 0.0;
        let mut m3 = 0.0;
        for &v in values {
            let d = v - mean;
            m2 += d.powi(2);
            m3 += d.powi(3);
        }

        let variance = m2 / (n - 1.0);
        let third = m3 / (n - 1.0);
        let std_dev = variance.sqrt();

        Self {
            mean,
            std_dev,
            skewness: third / variance / std_dev,
        }
    }
}

/// 25th and 75th percentiles by truncated rank
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q25: f64,
    pub q75: f64,
}

impl Quartiles {
    /// Pick the values at `floor(0.25 * N)` and `floor(0.75 * N)` of a sorted
    /// copy. No interpolation; the caller's slice is left untouched.
    pub fn compute(values: &[f64]) -> Result<Self, FeatureError> {
        if values.is_empty() {
            return Err(FeatureError::DegenerateStatistic {
                samples: 0,
                required: 1,
            });
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(nan_first);

        Ok(Self {
            q25: sorted[rank_index(0.25, sorted.len())],
            q75: sorted[rank_index(0.75, sorted.len())],
        })
    }
}

/// Truncated rank, clamped to the last element
fn rank_index(fraction: f64, len: usize) -> usize {
    ((fraction * len as f64) as usize).min(len - 1)
}

/// Ascending order with NaN ahead of every number
fn nan_first(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Per-axis statistics shared by the aggregator and the correlation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisStatistics {
    pub moments: Moments,
    pub quartiles: Quartiles,
}

impl AxisStatistics {
    /// Compute moments and quartiles for one axis series
    pub fn compute(values: &[f64]) -> Result<Self, FeatureError> {
        Ok(Self {
            moments: Moments::compute(values),
            quartiles: Quartiles::compute(values)?,
        })
    }
}
