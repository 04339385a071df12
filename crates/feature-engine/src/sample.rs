//! Motion Samples and Per-Axis Series

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};

/// Number of sensor axes in a sample
pub const AXIS_COUNT: usize = 3;

/// Sensor axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in column order
    pub const ALL: [Axis; AXIS_COUNT] = [Axis::X, Axis::Y, Axis::Z];

    /// Lowercase axis name used in feature keys
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// One tri-axial reading (accelerometer or gyroscope)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    /// Create a sample from its three components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a sample from a parsed row, which must be exactly three wide
    pub fn from_row(row: &[f64]) -> Result<Self, FeatureError> {
        match *row {
            [x, y, z] => Ok(Self { x, y, z }),
            _ => Err(FeatureError::InputShape {
                expected: AXIS_COUNT,
                found: row.len(),
            }),
        }
    }

    /// Component for a single axis
    pub fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl From<[f64; 3]> for Sample {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Sample> for [f64; 3] {
    fn from(sample: Sample) -> Self {
        [sample.x, sample.y, sample.z]
    }
}

/// Index-aligned per-axis series of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisSeries {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl AxisSeries {
    /// Build from already separated columns
    pub fn from_columns(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, FeatureError> {
        for other in [&y, &z] {
            if other.len() != x.len() {
                return Err(FeatureError::SeriesLength {
                    left: x.len(),
                    right: other.len(),
                });
            }
        }
        Ok(Self { x, y, z })
    }

    /// Series for one axis
    pub fn series(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Number of samples (shared by all axes)
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if there are no samples
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Split row-major samples into x, y and z series, preserving order
pub fn columnize(samples: &[Sample]) -> AxisSeries {
    let mut series = AxisSeries {
        x: Vec::with_capacity(samples.len()),
        y: Vec::with_capacity(samples.len()),
        z: Vec::with_capacity(samples.len()),
    };

    for sample in samples {
        series.x.push(sample.x);
        series.y.push(sample.y);
        series.z.push(sample.z);
    }

    series
}
