//! Activity Feature Extraction - Main Entry Point

use activity_api::cli::{Cli, Commands, OutputFormat};
use activity_api::{format_predictors, init_logging, run_extract, run_server, AppConfig};
use anyhow::Context;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    init_logging(&config.logging);

    info!("=== Activity Features v{} ===", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Extract { file, format } => {
            let features = run_extract(&file, &config)
                .with_context(|| format!("Failed to extract features from {}", file.display()))?;
            match format {
                OutputFormat::Predictors => println!("{}", format_predictors(&features)),
                OutputFormat::Json => println!("{}", serde_json::to_string(&features)?),
            }
        }
        Commands::Serve { addr } => {
            if let Some(addr) = addr {
                config.server.addr = addr;
            }
            run_server(&config).await?;
        }
    }

    Ok(())
}
