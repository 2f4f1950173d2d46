//! cloud-status: runtime identity service.
//!
//! This is the application entry point. It parses arguments, loads the
//! optional TOML configuration, initializes tracing, builds the Axum router,
//! and runs the HTTP server until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cloud_status::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use cloud_status::http::start_server;
use cloud_status::{create_router, AppState};

/// cloud-status: reports hostname and cloud provider over HTTP
#[derive(Parser, Debug)]
#[command(name = "cloud-status", version, about)]
struct Args {
    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "cloud_status=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Bind host, overrides http.host
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides http.port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }
    config.validate()?;

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    tracing::info!(
        config = args.config.as_deref().unwrap_or("<defaults>"),
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
