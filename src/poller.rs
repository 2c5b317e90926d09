//! Background poll loop.
//!
//! On every tick the loop issues three JSON-RPC queries in a fixed order
//! (`eth_blockNumber`, `eth_gasPrice`, `eth_syncing`), interprets the
//! results and updates the shared gauges. Each query is attempted once per
//! tick with no retry or backoff; the next chance to succeed is the next
//! tick. A failed or malformed tick is logged and absorbed, the loop runs
//! until process exit.

use std::time::Duration;

use serde_json::Value;

use crate::metrics::RpcMetrics;
use crate::rpc::{EthRpc, RpcError};

/// Sync state reported by `eth_syncing`, whose result is polymorphic: the
/// boolean `false` when the node is caught up, or a progress object while
/// it is syncing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncStatus {
    /// The node reports it is not syncing (`false`).
    NotSyncing,
    /// The node reports sync progress (`true` or a non-empty object).
    Syncing,
    /// The result carried no usable signal; leave the gauge untouched.
    Unknown,
}

impl SyncStatus {
    /// Classifies a raw `eth_syncing` result.
    ///
    /// Only the boolean `false` means "not syncing"; any other truthy value
    /// means "syncing". Empty or null-ish values give no signal.
    pub fn from_value(value: &Value) -> SyncStatus {
        match value {
            Value::Bool(false) => SyncStatus::NotSyncing,
            Value::Bool(true) => SyncStatus::Syncing,
            Value::Object(fields) if !fields.is_empty() => SyncStatus::Syncing,
            Value::Array(items) if !items.is_empty() => SyncStatus::Syncing,
            Value::String(s) if !s.is_empty() => SyncStatus::Syncing,
            Value::Number(n) if n.as_f64() != Some(0.0) => SyncStatus::Syncing,
            _ => SyncStatus::Unknown,
        }
    }
}

/// Decodes an EVM quantity, a `"0x"`-prefixed hexadecimal string.
pub fn parse_hex_quantity(value: &Value) -> Result<u64, RpcError> {
    let s = value
        .as_str()
        .ok_or_else(|| RpcError::Decode(format!("expected hex string, got {value}")))?;
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| RpcError::Decode(format!("missing 0x prefix in {s:?}")))?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| RpcError::Decode(format!("invalid hex quantity {s:?}: {e}")))
}

/// Runs one tick: the three queries in order, updating gauges as results
/// arrive.
///
/// Reachability is gated on the block-number query alone; gas-price and
/// sync-status failures do not move `rpc_up`. A decode error aborts the
/// rest of the tick and propagates to [`poll_once`].
async fn run_tick<R: EthRpc>(rpc: &R, metrics: &RpcMetrics) -> Result<(), RpcError> {
    match rpc.call("eth_blockNumber", Vec::new()).await {
        Ok(result) => {
            let block = parse_hex_quantity(&result)?;
            metrics.block_number.set(block as i64);
            metrics.rpc_up.set(1);
        }
        // The client already logged and counted the failure.
        Err(_) => metrics.rpc_up.set(0),
    }

    if let Ok(result) = rpc.call("eth_gasPrice", Vec::new()).await {
        let gas = parse_hex_quantity(&result)?;
        metrics.gas_price.set(gas as f64);
    }

    if let Ok(result) = rpc.call("eth_syncing", Vec::new()).await {
        match SyncStatus::from_value(&result) {
            SyncStatus::NotSyncing => metrics.syncing.set(0),
            SyncStatus::Syncing => metrics.syncing.set(1),
            SyncStatus::Unknown => {}
        }
    }

    Ok(())
}

/// Runs one tick and absorbs anything that escapes it.
///
/// An escaped error (a malformed payload discovered mid-tick) is counted
/// once, forces `rpc_up` to 0 and leaves the loop ready for the next tick.
pub async fn poll_once<R: EthRpc>(rpc: &R, metrics: &RpcMetrics) {
    if let Err(e) = run_tick(rpc, metrics).await {
        tracing::error!("error in fetch loop: {e}");
        metrics.rpc_errors_total.inc();
        metrics.rpc_up.set(0);
    }
}

/// Polls the endpoint forever, sleeping `interval` between ticks.
///
/// Intended to be spawned once at startup onto the Tokio runtime. Ticks
/// never overlap: the next tick starts only after the previous one and the
/// sleep have both completed.
pub async fn run_poll_loop<R: EthRpc>(rpc: R, metrics: RpcMetrics, interval: Duration) {
    tracing::info!("poll loop running with interval {}s", interval.as_secs());
    loop {
        poll_once(&rpc, &metrics).await;
        tokio::time::sleep(interval).await;
    }
}
