//! Warrant quote board - entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Live warrant quote board
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via WARRANT_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Replay a JSON Lines file of warrant_update payloads
    #[arg(short, long)]
    replay: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    warrant_board::logging::init_logging()?;

    info!("Starting warrant-board v{}", env!("CARGO_PKG_VERSION"));

    // Config path: CLI arg > WARRANT_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("WARRANT_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");
    let config = warrant_board::AppConfig::load(&config_path)?;

    let app = warrant_board::Application::new(config);
    app.run(args.replay).await?;

    Ok(())
}
