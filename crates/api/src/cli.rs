//! Command-Line Interface

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Motion feature extraction for activity classification
#[derive(Parser, Debug)]
#[command(name = "activity-features")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract features from a CSV file of x,y,z rows
    Extract {
        /// Input sensor file
        #[arg(short, long)]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Predictors)]
        format: OutputFormat,
    },

    /// Serve the HTTP feature endpoint
    Serve {
        /// Listen address (overrides config)
        #[arg(short, long)]
        addr: Option<String>,
    },
}

/// Rendering of an extracted feature set
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `key:value` pairs joined by commas
    Predictors,
    /// JSON object
    Json,
}
