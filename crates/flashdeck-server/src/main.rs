//! Flashdeck Server
//!
//! HTTP JSON API for decks, cards and the review pile.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use flashdeck_core::config::load_config;
use flashdeck_core::tracing_init::init_tracing;
use flashdeck_server::api::{build_router, AppState};
use flashdeck_server::storage::FlashcardDatabase;

#[derive(Parser, Debug)]
#[command(name = "flashdeck-server")]
#[command(version, about = "Flashdeck server - decks, cards and the review pile over HTTP")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "FLASHDECK_ADDR")]
    addr: Option<String>,

    /// Path to SQLite database file.
    #[arg(long, env = "FLASHDECK_DATABASE")]
    db_path: Option<PathBuf>,

    /// Maximum request body size in bytes (images are sent inline).
    #[arg(long)]
    max_body_bytes: Option<usize>,

    /// Output logs as JSON (for structured log aggregation).
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = load_config()?.server;

    if let Some(addr) = args.addr {
        config.addr = addr;
    }
    if let Some(path) = args.db_path {
        config.database_path = Some(path);
    }
    if let Some(limit) = args.max_body_bytes {
        config.max_body_bytes = limit;
    }
    config.log_json |= args.log_json;

    init_tracing(
        &format!("flashdeck_server={}", config.log_level),
        config.log_json,
    );

    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.addr,
        "Starting flashdeck-server"
    );

    let db_path = config
        .resolved_database_path()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine database path; pass --db-path"))?;
    info!(path = %db_path.display(), "Opening flashcard database");
    let db = FlashcardDatabase::open(&db_path).await?;

    let app = build_router(AppState {
        db,
        max_body_bytes: config.max_body_bytes,
    });

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!(addr = %config.addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => {
            warn!(error = %e, "Cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
