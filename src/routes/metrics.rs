use axum::extract::State;
use axum::http::header;

use crate::state::SharedState;

/// Content type of the Prometheus text exposition format.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// `GET /metrics`
///
/// Renders a snapshot of the registry in the Prometheus text format. Reads
/// may interleave with poll-loop writes; each metric cell is read
/// atomically, so a scrape mid-tick sees a consistent per-metric value.
pub async fn metrics(State(state): State<SharedState>) -> ([(header::HeaderName, &'static str); 1], String) {
    let body = state.metrics.gather_text();
    ([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], body)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::metrics::MetricsRegistry;
    use crate::state::AppState;

    #[tokio::test]
    async fn metrics_endpoint_renders_registry_snapshot() {
        let registry = Arc::new(MetricsRegistry::new().expect("create metrics registry"));
        registry.rpc.block_number.set(16);
        registry.rpc.rpc_up.set(1);
        let state: SharedState = Arc::new(AppState {
            metrics: registry,
        });

        let (headers, body) = metrics(State(state)).await;

        assert_eq!(headers[0].1, EXPOSITION_CONTENT_TYPE);
        assert!(body.contains("hyperliquid_block_number 16"));
        assert!(body.contains("hyperliquid_rpc_up 1"));
    }
}
