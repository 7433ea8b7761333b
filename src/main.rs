//! echo-server entry point.
//!
//! Parses the command line, loads configuration, initializes tracing, builds a
//! tokio runtime sized to the worker pool, and serves until SIGINT/SIGTERM.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use echo_server::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use echo_server::http::start_server;
use echo_server::AppState;

/// echo-server: echoes POST bodies and answers health checks
#[derive(Parser, Debug)]
#[command(name = "echo-server", version, about)]
struct Args {
    /// Optional TOML configuration file; built-in defaults are used without it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "echo_server=debug,hyper=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        config = ?args.config,
        host = %config.http.host,
        port = config.http.port,
        workers = config.http.workers,
        "Loaded configuration"
    );

    // One runtime thread per worker; the pool bounds requests in flight
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.http.workers)
        .thread_name("echo-server-worker")
        .enable_all()
        .build()?;

    runtime.block_on(run(config))
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    start_server(AppState::new(&config), &config.http).await?;

    Ok(())
}
