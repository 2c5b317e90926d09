//! JSON-RPC client for the Hyperliquid EVM endpoint.
//!
//! This module defines a trait [`EthRpc`] that abstracts over the remote
//! JSON-RPC endpoint, and a concrete [`HttpRpcClient`] that talks to it
//! over HTTPS. The poll loop is written against the trait so tests can
//! script responses without a network.

use std::fmt;

use serde_json::Value;

pub mod http;

pub use http::HttpRpcClient;

/// Errors that can occur while issuing a JSON-RPC call.
#[derive(Debug)]
pub enum RpcError {
    /// Transport-level failure (connection error, timeout, non-2xx status).
    Transport(String),
    /// The endpoint answered with a JSON-RPC `error` object.
    RpcLevel(String),
    /// The response (or a result payload) could not be interpreted.
    Decode(String),
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcError::Transport(msg) => write!(f, "transport error: {msg}"),
            RpcError::RpcLevel(msg) => write!(f, "rpc error: {msg}"),
            RpcError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for RpcError {}

/// Abstract JSON-RPC caller used by the poll loop.
///
/// Contract for implementations: log each failure with method context and
/// increment the shared `rpc_errors_total` counter exactly once per failed
/// call. Counting lives here, in the single place failures are classified,
/// so no caller double-counts.
#[async_trait::async_trait]
pub trait EthRpc: Send + Sync {
    /// Issues `method` with the given positional parameters and returns the
    /// raw `result` value. Interpretation of its shape is up to the caller.
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError>;
}
