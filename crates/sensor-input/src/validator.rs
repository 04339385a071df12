//! Sample Shape Validator

use crate::error::InputError;
use crate::parser::{ParserConfig, RowParser};
use feature_engine::Sample;
use std::path::Path;
use tracing::debug;

/// Converts parsed rows into samples, rejecting rows that are not three wide
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleValidator;

impl SampleValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate every row. The first malformed row aborts with its index.
    pub fn validate(&self, rows: &[Vec<f64>]) -> Result<Vec<Sample>, InputError> {
        rows.iter()
            .enumerate()
            .map(|(row, values)| {
                Sample::from_row(values).map_err(|source| InputError::Shape { row, source })
            })
            .collect()
    }
}

/// Read a delimited file and convert it into samples
pub fn load_samples(path: &Path, config: &ParserConfig) -> Result<Vec<Sample>, InputError> {
    let rows = RowParser::new(*config).read_file(path)?;
    let samples = SampleValidator::new().validate(&rows)?;
    debug!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
