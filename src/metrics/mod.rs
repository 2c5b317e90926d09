//! Metrics and instrumentation for the exporter.
//!
//! This module defines the Prometheus-compatible metric set published on
//! `/metrics`: chain-health gauges fed by the poll loop and a cumulative
//! RPC error counter.
//!
//! Typical usage:
//!
//! ```ignore
//! use std::sync::Arc;
//! use hyperliquid_exporter::metrics::MetricsRegistry;
//!
//! let registry = Arc::new(MetricsRegistry::new()?);
//!
//! // Poll loop side:
//! registry.rpc.block_number.set(4_521_009);
//! registry.rpc.rpc_up.set(1);
//!
//! // HTTP side:
//! let body = registry.gather_text();
//! ```

pub mod prometheus;

pub use prometheus::{MetricsRegistry, RpcMetrics};
