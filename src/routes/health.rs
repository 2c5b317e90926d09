use axum::Json;
use serde::Serialize;

/// Simple health-check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /health`
///
/// Always answers `{"status":"ok"}` with 200. This reflects process
/// liveness only, never the state of the polled RPC endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_body_is_fixed_ok() {
        let Json(body) = health().await;
        let json = serde_json::to_string(&body).expect("health response should serialize");
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
