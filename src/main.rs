//! Bookshelf - A book-discovery server
//!
//! Aggregates trending works from Open Library into a cached catalog and
//! serves it alongside user favorites and reviews.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf::api::{create_router, AppState};
use bookshelf::{spawn_warmup_task, Config};

/// Main entry point for the bookshelf server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the catalog client, aggregator, account and library stores
/// 4. Optionally start the catalog warm-up task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bookshelf server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: catalog={}, trending_limit={}, page_batch_size={}, port={}, timeout={}s",
        config.catalog_base_url,
        config.trending_limit,
        config.page_batch_size,
        config.server_port,
        config.upstream_timeout
    );

    if std::env::var_os("JWT_SECRET").is_none() {
        warn!("JWT_SECRET not set, using a random secret; tokens will not survive a restart");
    }

    let state = AppState::from_config(&config).context("failed to build application state")?;
    info!("Catalog aggregator initialized");

    let warmup_handle = if config.warm_catalog {
        Some(spawn_warmup_task(state.catalog.clone()))
    } else {
        None
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(warmup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// Aborts the warm-up task if it is still running.
async fn shutdown_signal(warmup_handle: Option<tokio::task::JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = warmup_handle {
        if !handle.is_finished() {
            handle.abort();
            warn!("Catalog warm-up aborted");
        }
    }
}
