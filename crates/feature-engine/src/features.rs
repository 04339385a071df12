//! Feature Set Assembly

use crate::correlation::pearson_correlation;
use crate::error::FeatureError;
use crate::sample::{columnize, Axis, AxisSeries, Sample};
use crate::statistics::AxisStatistics;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Number of features in a feature set
pub const FEATURE_DIMENSION: usize = 18;

/// Feature keys expected by the activity classifier, in output order.
///
/// The last pair is named `corr-z-y` although it correlates y with z; the
/// name is part of the downstream model schema.
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "x-axis-mean",
    "x-axis-sd",
    "x-axis-skew",
    "y-axis-mean",
    "y-axis-sd",
    "y-axis-skew",
    "z-axis-mean",
    "z-axis-sd",
    "z-axis-skew",
    "x-axis-q25",
    "x-axis-q75",
    "y-axis-q25",
    "y-axis-q75",
    "z-axis-q25",
    "z-axis-q75",
    "corr-x-y",
    "corr-x-z",
    "corr-z-y",
];

/// Per-axis slice of the feature set
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisFeatures {
    pub mean: f64,
    pub sd: f64,
    pub skew: f64,
    pub q25: f64,
    pub q75: f64,
}

impl From<AxisStatistics> for AxisFeatures {
    fn from(stats: AxisStatistics) -> Self {
        Self {
            mean: stats.moments.mean,
            sd: stats.moments.std_dev,
            skew: stats.moments.skewness,
            q25: stats.quartiles.q25,
            q75: stats.quartiles.q75,
        }
    }
}

/// Fixed 18-entry feature vector for one sample set
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeatureSet {
    pub x: AxisFeatures,
    pub y: AxisFeatures,
    pub z: AxisFeatures,
    pub corr_x_y: f64,
    pub corr_x_z: f64,
    /// Correlation of the y and z series
    pub corr_z_y: f64,
}

impl FeatureSet {
    /// Key/value pairs in `FEATURE_NAMES` order
    pub fn entries(&self) -> [(&'static str, f64); FEATURE_DIMENSION] {
        let values = self.values();
        let mut entries = [("", 0.0); FEATURE_DIMENSION];
        for (entry, (name, value)) in entries.iter_mut().zip(FEATURE_NAMES.iter().zip(values)) {
            *entry = (*name, value);
        }
        entries
    }

    /// Raw values in `FEATURE_NAMES` order
    #[rustfmt::skip]
    pub fn values(&self) -> [f64; FEATURE_DIMENSION] {
        let (x, y, z) = (&self.x, &self.y, &self.z);
        [
            x.mean, x.sd, x.skew,
            y.mean, y.sd, y.skew,
            z.mean, z.sd, z.skew,
            x.q25, x.q75,
            y.q25, y.q75,
            z.q25, z.q75,
            self.corr_x_y, self.corr_x_z, self.corr_z_y,
        ]
    }

    /// Look up a feature by key
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Generic key/value map for serialization layers
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.entries()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    /// Number of NaN or infinite features
    pub fn non_finite_count(&self) -> usize {
        self.values().iter().filter(|v| !v.is_finite()).count()
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_DIMENSION))?;
        for (key, value) in self.entries() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

/// Extractor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Smallest accepted sample count. Values below 1 are treated as 1.
    pub min_samples: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self { min_samples: 1 }
    }
}

impl ExtractorConfig {
    /// Reject inputs whose standard deviation would be undefined
    pub fn strict() -> Self {
        Self { min_samples: 2 }
    }
}

/// Reduces sample sets to feature sets
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    config: ExtractorConfig,
}

impl FeatureExtractor {
    /// Create a new feature extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extractor configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract features from row-major samples
    pub fn extract(&self, samples: &[Sample]) -> Result<FeatureSet, FeatureError> {
        self.extract_series(&columnize(samples))
    }

    /// Extract features from already columnized series
    pub fn extract_series(&self, series: &AxisSeries) -> Result<FeatureSet, FeatureError> {
        let required = self.config.min_samples.max(1);
        if series.len() < required {
            return Err(FeatureError::DegenerateStatistic {
                samples: series.len(),
                required,
            });
        }

        debug!("Extracting features from {} samples", series.len());

        let x = AxisStatistics::compute(series.series(Axis::X))?;
        let y = AxisStatistics::compute(series.series(Axis::Y))?;
        let z = AxisStatistics::compute(series.series(Axis::Z))?;

        let corr = |a: Axis, sa: &AxisStatistics, b: Axis, sb: &AxisStatistics| {
            pearson_correlation(series.series(a), series.series(b), &sa.moments, &sb.moments)
        };

        let features = FeatureSet {
            x: x.into(),
            y: y.into(),
            z: z.into(),
            corr_x_y: corr(Axis::X, &x, Axis::Y, &y)?,
            corr_x_z: corr(Axis::X, &x, Axis::Z, &z)?,
            corr_z_y: corr(Axis::Y, &y, Axis::Z, &z)?,
        };

        let non_finite = features.non_finite_count();
        if non_finite > 0 {
            warn!(
                samples = series.len(),
                non_finite, "Feature set contains non-finite values"
            );
        }

        Ok(features)
    }
}

/// Extract features with the default configuration
pub fn extract_features(samples: &[Sample]) -> Result<FeatureSet, FeatureError> {
    FeatureExtractor::default().extract(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn ramp() -> Vec<Sample> {
        vec![
            Sample::new(1.0, 2.0, 3.0),
            Sample::new(2.0, 3.0, 4.0),
            Sample::new(3.0, 4.0, 5.0),
            Sample::new(4.0, 5.0, 6.0),
        ]
    }

    #[test]
    fn test_feature_extraction() {
        let features = extract_features(&ramp()).unwrap();

        assert_eq!(features.x.mean, 2.5);
        assert!((features.x.sd - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(features.x.skew, 0.0);
        assert_eq!(features.x.q25, 2.0);
        assert_eq!(features.x.q75, 4.0);

        assert_eq!(features.y.mean, 3.5);
        assert_eq!(features.z.q25, 4.0);
        assert_eq!(features.z.q75, 6.0);

        // mixed divisors: (N-1)/N for co-linear series
        for corr in [features.corr_x_y, features.corr_x_z, features.corr_z_y] {
            assert!((corr - 0.75).abs() < 1e-12);
        }
        assert_eq!(features.non_finite_count(), 0);
    }

    #[test]
    fn test_entries_follow_vocabulary() {
        let features = extract_features(&ramp()).unwrap();
        let entries = features.entries();

        let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, FEATURE_NAMES);
        assert_eq!(features.get("x-axis-q75"), Some(4.0));
        assert_eq!(features.get("z-axis-mean"), Some(4.5));
        assert_eq!(features.get("corr-y-z"), None);

        let unique: HashSet<&str> = keys.into_iter().collect();
        assert_eq!(unique.len(), FEATURE_DIMENSION);
    }

    #[test]
    fn test_corr_z_y_uses_y_and_z() {
        let samples = vec![
            Sample::new(0.0, 1.0, 4.0),
            Sample::new(5.0, 2.0, 3.0),
            Sample::new(1.0, 3.0, 2.0),
            Sample::new(4.0, 4.0, 1.0),
        ];
        let features = extract_features(&samples).unwrap();
        // y rises while z falls
        assert!((features.corr_z_y + 0.75).abs() < 1e-12);
        assert!(features.corr_x_y != features.corr_z_y);
    }

    #[test]
    fn test_constant_axis_keeps_all_keys() {
        let samples: Vec<Sample> = (0..5).map(|i| Sample::new(i as f64, 1.0, 2.0 * i as f64)).collect();
        let features = extract_features(&samples).unwrap();

        assert_eq!(features.y.mean, 1.0);
        assert_eq!(features.y.sd, 0.0);
        assert!(features.y.skew.is_nan());
        assert!(features.corr_x_y.is_nan());
        assert!(features.corr_z_y.is_nan());
        assert!(features.corr_x_z.is_finite());
        assert_eq!(features.to_map().len(), FEATURE_DIMENSION);
        assert_eq!(features.non_finite_count(), 3);
    }

    #[test]
    fn test_single_sample_propagates() {
        let features = extract_features(&[Sample::new(1.0, 2.0, 3.0)]).unwrap();
        assert_eq!(features.x.mean, 1.0);
        assert_eq!(features.x.q25, 1.0);
        assert!(features.x.sd.is_nan());
        assert!(features.corr_x_y.is_nan());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(
            extract_features(&[]),
            Err(FeatureError::DegenerateStatistic {
                samples: 0,
                required: 1
            })
        );
    }

    #[test]
    fn test_strict_config_rejects_single_sample() {
        let extractor = FeatureExtractor::new(ExtractorConfig::strict());
        assert_eq!(
            extractor.extract(&[Sample::new(1.0, 2.0, 3.0)]),
            Err(FeatureError::DegenerateStatistic {
                samples: 1,
                required: 2
            })
        );
        assert!(extractor.extract(&ramp()).is_ok());
    }

    #[test]
    fn test_serialize_flat_map() {
        let features = extract_features(&ramp()).unwrap();
        let json = serde_json::to_value(features).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), FEATURE_DIMENSION);
        assert_eq!(object["x-axis-mean"], 2.5);
        assert_eq!(object["y-axis-q25"], 3.0);
    }

    proptest! {
        #[test]
        fn prop_always_eighteen_keys(rows in prop::collection::vec(prop::array::uniform3(-50.0f64..50.0), 1..40)) {
            let samples: Vec<Sample> = rows.into_iter().map(Sample::from).collect();
            let features = extract_features(&samples).unwrap();
            let map = features.to_map();
            prop_assert_eq!(map.len(), FEATURE_DIMENSION);
            for name in FEATURE_NAMES {
                prop_assert!(map.contains_key(name));
            }
        }
    }
}
