//! Prometheus-backed metric definitions.
//!
//! This module defines a [`MetricsRegistry`] that owns a Prometheus
//! registry and the strongly-typed chain-health metrics updated by the
//! poll loop and served on `/metrics`.

use prometheus::{Encoder, Gauge, IntCounter, IntGauge, Opts, Registry, TextEncoder};

/// Chain-health metrics fed by the poll loop.
///
/// All fields are cheap to clone; clones share the same underlying metric
/// cells, so a clone handed to the RPC client or the poll loop updates the
/// same series the HTTP surface renders.
#[derive(Clone)]
pub struct RpcMetrics {
    /// Latest block number observed via `eth_blockNumber`.
    pub block_number: IntGauge,
    /// Latest gas price in wei observed via `eth_gasPrice`.
    pub gas_price: Gauge,
    /// 1 if the node reports it is syncing, 0 otherwise.
    pub syncing: IntGauge,
    /// 1 if the RPC endpoint answered the last block-number query, 0 otherwise.
    pub rpc_up: IntGauge,
    /// Total RPC failures (transport, RPC-level and decode) since start.
    pub rpc_errors_total: IntCounter,
}

impl RpcMetrics {
    /// Registers the chain-health metrics into the given `Registry`.
    pub fn register(registry: &Registry) -> Result<Self, prometheus::Error> {
        let block_number = IntGauge::with_opts(Opts::new(
            "block_number",
            "Current block number of the Hyperliquid EVM",
        ))?;
        registry.register(Box::new(block_number.clone()))?;

        let gas_price = Gauge::with_opts(Opts::new("gas_price", "Current gas price in wei"))?;
        registry.register(Box::new(gas_price.clone()))?;

        let syncing = IntGauge::with_opts(Opts::new(
            "syncing",
            "1 if the node is syncing, 0 otherwise",
        ))?;
        registry.register(Box::new(syncing.clone()))?;

        let rpc_up = IntGauge::with_opts(Opts::new(
            "rpc_up",
            "1 if the RPC endpoint is reachable, 0 otherwise",
        ))?;
        registry.register(Box::new(rpc_up.clone()))?;

        let rpc_errors_total = IntCounter::with_opts(Opts::new(
            "rpc_errors_total",
            "Total number of RPC errors encountered",
        ))?;
        registry.register(Box::new(rpc_errors_total.clone()))?;

        Ok(Self {
            block_number,
            gas_price,
            syncing,
            rpc_up,
            rpc_errors_total,
        })
    }
}

/// Wrapper around a Prometheus registry and the exporter metrics.
///
/// This is the main handle passed around the process. It can be wrapped in
/// an [`std::sync::Arc`] and shared between the poll loop and the HTTP
/// handlers.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Registry,
    pub rpc: RpcMetrics,
}

impl MetricsRegistry {
    /// Creates a fresh registry under the `hyperliquid` namespace and
    /// registers the chain-health metrics.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("hyperliquid".to_string()), None)?;
        let rpc = RpcMetrics::register(&registry)?;
        Ok(Self { registry, rpc })
    }

    /// Encodes all metrics in this registry into the Prometheus text format.
    pub fn gather_text(&self) -> String {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            tracing::error!("failed to encode Prometheus metrics: {e}");
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_metrics_register_and_record() {
        let registry = Registry::new();
        let metrics = RpcMetrics::register(&registry).expect("register metrics");

        metrics.block_number.set(16);
        metrics.gas_price.set(1_000_000_000.0);
        metrics.syncing.set(0);
        metrics.rpc_up.set(1);
        metrics.rpc_errors_total.inc();

        let metric_families = registry.gather();
        assert_eq!(metric_families.len(), 5);
    }

    #[test]
    fn gather_text_carries_namespace_and_help() {
        let registry = MetricsRegistry::new().expect("create metrics registry");
        registry.rpc.block_number.set(4242);
        let text = registry.gather_text();

        assert!(text.contains("hyperliquid_block_number 4242"));
        assert!(text.contains("hyperliquid_gas_price"));
        assert!(text.contains("hyperliquid_syncing"));
        assert!(text.contains("hyperliquid_rpc_up"));
        assert!(text.contains("hyperliquid_rpc_errors_total"));
        assert!(text.contains("# HELP hyperliquid_gas_price Current gas price in wei"));
    }

    #[test]
    fn clones_share_underlying_cells() {
        let registry = MetricsRegistry::new().expect("create metrics registry");
        let handle = registry.rpc.clone();
        handle.rpc_errors_total.inc();
        handle.rpc_errors_total.inc();
        assert_eq!(registry.rpc.rpc_errors_total.get(), 2);
    }
}
