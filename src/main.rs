//! Hail: a tiny greeting service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file, captures the host identity from the
//! environment, sets up the Axum router, and starts the HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hail::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use hail::env::ProcessEnv;
use hail::http::server::start_server;
use hail::routes::create_router;
use hail::state::AppState;

/// Hail: a greeting service for container deployments
#[derive(Parser, Debug)]
#[command(name = "hail", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "hail=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (missing file falls back to built-in defaults)
    let config = AppConfig::load_or_default(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Loaded configuration");

    // Create application state, capturing the host identity once
    let state = AppState::new(config.clone(), Arc::new(ProcessEnv));
    tracing::info!(hostname = %state.hostname, "Captured host identity");

    // Create router
    let app = create_router(state);

    // Start server (blocks until shutdown)
    start_server(app, &config).await?;

    Ok(())
}
