//! DataShow Server
//!
//! Run with: cargo run --bin datashow [-- --config path/to/config.toml]
//!
//! # Configuration
//!
//! A TOML file (see `datashow-cli config`) found in the usual locations,
//! overridden by environment variables:
//! - `DATASHOW_HOST`: Host to bind to (default: 0.0.0.0)
//! - `DATASHOW_PORT`: Port to listen on (default: 8084)
//! - `DATASHOW_DIST_DIR`: Built bundle directory (default: ./datashow-ui/dist)
//! - `DATASHOW_BASE_URL`: URL prefix of the application (default: /)
//! - `DATASHOW_LOG_LEVEL`, `DATASHOW_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter, wins over the configured level

use clap::Parser;
use datashow::config::Config;
use datashow::server::{serve, AppState};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datashow")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the DataShow charting application")]
struct Args {
    /// Config file (default: search the usual locations)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    datashow::logging::init(&config.logging);

    tracing::info!("Starting DataShow server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Bundle directory: {:?}", config.server.dist_dir);
    tracing::info!("Base URL: {}", config.server.base_url);

    let state = AppState::new(config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("DataShow server stopped");
    Ok(())
}
