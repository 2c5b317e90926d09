//! Hyperliquid EVM RPC exporter library.
//!
//! This crate provides the building blocks for a small Prometheus exporter
//! that polls an EVM JSON-RPC endpoint for chain-health indicators:
//!
//! - exporter configuration from the environment (`config`),
//! - Prometheus-backed metrics (`metrics`),
//! - a JSON-RPC client behind a trait seam (`rpc`),
//! - the background poll loop (`poller`),
//! - axum route handlers and shared state (`routes`, `state`).
//!
//! The `hyperliquid-exporter` binary composes these pieces; see
//! `src/main.rs`.

pub mod config;
pub mod metrics;
pub mod poller;
pub mod routes;
pub mod rpc;
pub mod state;

pub use config::ExporterConfig;
pub use metrics::{MetricsRegistry, RpcMetrics};
pub use poller::{SyncStatus, run_poll_loop};
pub use rpc::{EthRpc, HttpRpcClient, RpcError};
pub use state::{AppState, SharedState};
