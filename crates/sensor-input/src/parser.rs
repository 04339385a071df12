//! Delimited Row Parser

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Field delimiter
    pub delimiter: char,
    /// Quote character stripped from around a field
    pub quote: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }
}

/// Parses delimited text into rows of numbers.
///
/// Tokens that are not valid floating point numbers are dropped without
/// error, so a row keeps only its numeric fields. Bytes that are not UTF-8
/// only spoil the token they appear in. Quotes are stripped from a token
/// after splitting, not parsed, so a quoted delimiter still splits the field.
#[derive(Debug, Clone, Default)]
pub struct RowParser {
    config: ParserConfig,
}

impl RowParser {
    /// Create a new parser
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a single line, skipping non-numeric tokens
    pub fn parse_line(&self, line: &str) -> Vec<f64> {
        line.split(self.config.delimiter)
            .filter_map(|token| self.parse_token(token))
            .collect()
    }

    fn parse_token(&self, token: &str) -> Option<f64> {
        let token = token.trim();
        let token = token
            .strip_prefix(self.config.quote)
            .and_then(|t| t.strip_suffix(self.config.quote))
            .unwrap_or(token);
        token.trim().parse().ok()
    }

    /// Parse every line of a reader. Lines without a numeric token are skipped.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Vec<f64>>, InputError> {
        let mut rows = Vec::new();
        let mut skipped = 0usize;

        for line in reader.split(b'\n') {
            let line = line?;
            let line = String::from_utf8_lossy(&line);
            let row = self.parse_line(line.strip_suffix('\r').unwrap_or(&*line));
            if row.is_empty() {
                skipped += 1;
            } else {
                rows.push(row);
            }
        }

        debug!("Parsed {} rows, skipped {} non-numeric lines", rows.len(), skipped);
        Ok(rows)
    }

    /// Read and parse a file
    pub fn read_file(&self, path: &Path) -> Result<Vec<Vec<f64>>, InputError> {
        let file = File::open(path)?;
        let rows = self.parse_reader(BufReader::new(file))?;
        if rows.is_empty() {
            return Err(InputError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(rows)
    }
}
