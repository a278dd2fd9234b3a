//! Healthcheck API entry point.
//!
//! Startup order: tracing → configuration → metrics recorder → database
//! pool (initialize or continue degraded) → probe registry → listener.
//! Shutdown order: drain the HTTP server, then close the pool.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthcheck_api::config;
use healthcheck_api::health::HealthAggregator;
use healthcheck_api::http::HttpServer;
use healthcheck_api::lifecycle::{wait_for_signal, Shutdown};
use healthcheck_api::observability::metrics;
use healthcheck_api::{ConnectionPool, ProbeRegistry};

#[derive(Parser)]
#[command(name = "healthcheck-api")]
#[command(about = "Liveness aggregator for service dependencies", long_about = None)]
struct Args {
    /// Path to the TOML configuration file. Without it, defaults plus
    /// environment overrides are used.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let app_config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::from_env()?,
    };

    // Initialize tracing subscriber; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "healthcheck_api={},tower_http=info",
                    app_config.observability.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("healthcheck-api v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %app_config.listener.bind_address,
        probe_timeout_ms = app_config.probes.timeout_ms,
        external_apis = app_config.external_apis.len(),
        "Configuration loaded"
    );

    let metrics_handle = if app_config.observability.metrics_enabled {
        Some(metrics::install_recorder()?)
    } else {
        None
    };

    // One process-owned pool; probes hold references. Initialization failure
    // leaves the service running degraded: the database probe reports error
    // until the process is restarted against a reachable database.
    let pool = Arc::new(ConnectionPool::new());
    if let Err(e) = pool.initialize(&app_config.database).await {
        tracing::warn!(error = %e, "Database pool unavailable, continuing degraded");
    }

    let registry = Arc::new(ProbeRegistry::from_config(&app_config, pool.clone()));
    let aggregator = Arc::new(HealthAggregator::new(
        registry,
        Duration::from_millis(app_config.probes.timeout_ms),
    ));

    let listener = TcpListener::bind(&app_config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(&app_config, aggregator, metrics_handle);
    server.run(listener, server_shutdown).await?;

    pool.shutdown().await;

    tracing::info!("Shutdown complete");
    Ok(())
}
