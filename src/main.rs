//! Launch Dash Server
//!
//! Run with: cargo run --bin launch-dash
//!
//! # Configuration
//!
//! Settings come from `--config`, else the default config locations, then
//! environment variables, then the flags below.
//!
//! - `LAUNCH_DASH_DATA`: Path to the launch CSV (default: spacex_launch_dash.csv)
//! - `LAUNCH_DASH_HOST`: Host to bind to (default: 127.0.0.1)
//! - `LAUNCH_DASH_PORT`: Port to listen on (default: 8060)
//! - `RUST_LOG`: Log filter (overrides the configured level)

use anyhow::Context;
use clap::Parser;
use launch_dash::api::{serve, AppState};
use launch_dash::config::Config;
use launch_dash::dataset::Dataset;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SpaceX launch records dashboard")]
struct Args {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch records CSV
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(data) = args.data {
        config.data.path = data;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    launch_dash::logging::init(&config.logging);

    tracing::info!("Starting Launch Dash v{}", env!("CARGO_PKG_VERSION"));

    let dataset = Dataset::load(&config.data.path)
        .with_context(|| format!("loading launch dataset {:?}", config.data.path))?;
    tracing::info!("Dataset: {}", dataset.summary());

    let state = AppState::new(Arc::new(dataset), config.server.clone());
    serve(state).await?;

    tracing::info!("Launch Dash stopped");
    Ok(())
}
