//! Sensor Input Parsing and Validation
//!
//! Turns delimited text files of accelerometer or gyroscope readings into
//! validated motion samples.

mod error;
mod parser;
mod validator;

pub use error::InputError;
pub use parser::{ParserConfig, RowParser};
pub use validator::{load_samples, SampleValidator};
