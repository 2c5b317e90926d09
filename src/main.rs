//! Exporter binary.
//!
//! Wires the pieces of the `hyperliquid-exporter` library together:
//!
//! - reads configuration from the environment,
//! - creates the metrics registry and the JSON-RPC client,
//! - spawns the background poll loop,
//! - serves `GET /metrics` and `GET /health` until shutdown.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::signal;

use hyperliquid_exporter::config::ExporterConfig;
use hyperliquid_exporter::metrics::MetricsRegistry;
use hyperliquid_exporter::poller::run_poll_loop;
use hyperliquid_exporter::routes::{health, metrics};
use hyperliquid_exporter::rpc::HttpRpcClient;
use hyperliquid_exporter::state::{AppState, SharedState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "hyperliquid_exporter=info".to_string()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cfg = ExporterConfig::from_env()?;
    tracing::info!("starting Hyperliquid exporter, RPC URL: {}", cfg.rpc_url);

    let registry = Arc::new(
        MetricsRegistry::new().map_err(|e| format!("failed to initialise metrics registry: {e}"))?,
    );

    // Poll loop, spawned exactly once for the process lifetime.
    let rpc = HttpRpcClient::new(&cfg, registry.rpc.clone())
        .map_err(|e| format!("failed to create RPC client: {e}"))?;
    tokio::spawn(run_poll_loop(rpc, registry.rpc.clone(), cfg.poll_interval));

    let app_state: SharedState = Arc::new(AppState {
        metrics: registry.clone(),
    });

    let app = Router::new()
        .route("/metrics", get(metrics::metrics))
        .route("/health", get(health::health))
        .with_state(app_state);

    tracing::info!("exporter listening on http://{}", cfg.listen_addr);

    let listener = tokio::net::TcpListener::bind(cfg.listen_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", cfg.listen_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("HTTP server error: {e}"))?;

    Ok(())
}

/// Waits for Ctrl-C and returns, used for graceful shutdown.
async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
