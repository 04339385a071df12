//! Input Error Types

use feature_engine::FeatureError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading or shaping raw sensor rows
#[derive(Debug, Error)]
pub enum InputError {
    /// Underlying read failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Row that cannot become a sample
    #[error("Row {row}: {source}")]
    Shape {
        row: usize,
        #[source]
        source: FeatureError,
    },

    /// File contained no numeric rows
    #[error("No numeric rows in {}", path.display())]
    Empty { path: PathBuf },
}
