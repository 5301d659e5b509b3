//! Ad placement service.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────────┐
//!                        │               PLACEMENT SERVICE                  │
//!                        │                                                  │
//!   POST LoadFromFile    │  ┌────────┐   ┌─────────┐   ┌────────────────┐  │
//!   ─────────────────────┼─▶│  http  │──▶│  feed   │──▶│     index      │  │
//!                        │  │ server │   │ parser  │   │ (ArcSwap swap) │  │
//!   GET Search           │  └────────┘   └─────────┘   └───────┬────────┘  │
//!   ─────────────────────┼─────▶│                              │           │
//!                        │      └──────── lock-free read ◀─────┘           │
//!                        │                                                  │
//!   feed file ───────────┼─▶ feed watcher (notify) ──▶ full reload          │
//!                        │                                                  │
//!                        │  config · observability · admin · lifecycle      │
//!                        └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use placement_service::config::{load_config, resolve_config, ConfigOverrides, ServiceConfig};
use placement_service::lifecycle::{signals, startup, Shutdown};
use placement_service::observability::{logging, metrics};
use placement_service::HttpServer;

#[derive(Parser)]
#[command(name = "placement-service")]
#[command(about = "Serves ad placements by location prefix", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Feed file to load at startup (overrides config).
    #[arg(short, long)]
    feed: Option<PathBuf>,

    /// Reload the feed file when it changes.
    #[arg(short, long)]
    watch: bool,

    /// Bind address (overrides config).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    let config = resolve_config(
        file_config,
        ConfigOverrides {
            feed: cli.feed,
            watch: cli.watch,
            bind: cli.bind,
        },
    )?;

    logging::init_logging(&config.observability)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "placement-service starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        feed = ?config.feed.path,
        watch = config.feed.watch,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let service = startup::build_service(&config);
    let _watcher = startup::start_feed_watcher(&config, &service);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Arc::new(Shutdown::new());
    signals::spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config, service);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
