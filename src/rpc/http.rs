//! HTTP-based JSON-RPC client.
//!
//! Each call POSTs a JSON-RPC 2.0 envelope to the configured endpoint:
//!
//! ```json
//! {"jsonrpc": "2.0", "method": "eth_blockNumber", "params": [], "id": 1}
//! ```
//!
//! and expects either a `result` member (returned untouched) or an `error`
//! member (reported as [`RpcError::RpcLevel`]). Every failure path bumps
//! the shared error counter exactly once, per the [`EthRpc`] contract.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{ExporterConfig, RPC_TIMEOUT};
use crate::metrics::RpcMetrics;
use crate::rpc::{EthRpc, RpcError};

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Vec<Value>,
    id: u32,
}

impl<'a> RpcRequest<'a> {
    fn new(method: &'a str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        }
    }
}

/// JSON-RPC 2.0 response envelope.
///
/// Exactly one of `result` and `error` is expected to be present.
#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<Value>,
}

/// JSON-RPC client backed by a pooled `reqwest` client.
///
/// Thread-safe (`Send + Sync`); the underlying client is created once and
/// reused across poll ticks.
pub struct HttpRpcClient {
    url: String,
    client: Client,
    metrics: RpcMetrics,
}

impl HttpRpcClient {
    /// Builds a client for the endpoint in `cfg`, with the fixed
    /// per-request timeout and the configured TLS-verification policy.
    pub fn new(cfg: &ExporterConfig, metrics: RpcMetrics) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(RPC_TIMEOUT)
            .danger_accept_invalid_certs(cfg.disable_ssl_verify)
            .build()
            .map_err(|e| RpcError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: cfg.rpc_url.clone(),
            client,
            metrics,
        })
    }

    async fn call_inner(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let resp = self
            .client
            .post(&self.url)
            .json(&RpcRequest::new(method, params))
            .send()
            .await
            .map_err(|e| RpcError::Transport(format!("HTTP POST {} failed: {e}", self.url)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RpcError::Transport(format!(
                "endpoint returned HTTP status {status}"
            )));
        }

        let body = resp
            .json::<RpcResponse>()
            .await
            .map_err(|e| RpcError::Decode(format!("failed to parse JSON-RPC response: {e}")))?;

        if let Some(error) = body.error {
            return Err(RpcError::RpcLevel(error.to_string()));
        }

        body.result
            .ok_or_else(|| RpcError::Decode("response carries neither result nor error".into()))
    }
}

#[async_trait::async_trait]
impl EthRpc for HttpRpcClient {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        match self.call_inner(method, params).await {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::error!("RPC call {method} failed: {e}");
                self.metrics.rpc_errors_total.inc();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_envelope_matches_wire_shape() {
        let json = serde_json::to_value(RpcRequest::new("eth_blockNumber", Vec::new()))
            .expect("request should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "jsonrpc": "2.0",
                "method": "eth_blockNumber",
                "params": [],
                "id": 1,
            })
        );
    }

    #[test]
    fn response_with_result_deserializes() {
        let resp: RpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":"0x10"}"#)
                .expect("response should parse");
        assert_eq!(resp.result, Some(Value::String("0x10".into())));
        assert!(resp.error.is_none());
    }

    #[test]
    fn response_with_error_deserializes() {
        let resp: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#,
        )
        .expect("response should parse");
        assert!(resp.result.is_none());
        assert!(resp.error.is_some());
    }

    #[test]
    fn error_display_names_the_failure_class() {
        let e = RpcError::Transport("connection refused".into());
        assert_eq!(e.to_string(), "transport error: connection refused");
        let e = RpcError::Decode("bad hex".into());
        assert_eq!(e.to_string(), "decode error: bad hex");
    }
}
