//! Exporter configuration.
//!
//! All settings are read once from the environment at startup and are
//! immutable afterwards. Nothing is re-read while the process runs.

use std::net::SocketAddr;
use std::time::Duration;

/// Default RPC endpoint queried when `HYPERLIQUID_RPC_URL` is unset.
pub const DEFAULT_RPC_URL: &str = "https://rpc.hyperliquid.xyz/evm";

/// Per-request timeout applied to every outbound RPC call.
pub const RPC_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the exporter process.
#[derive(Clone, Debug)]
pub struct ExporterConfig {
    /// Base URL of the EVM JSON-RPC endpoint.
    pub rpc_url: String,
    /// Delay between poll ticks.
    pub poll_interval: Duration,
    /// Skip TLS certificate verification on outbound RPC calls.
    pub disable_ssl_verify: bool,
    /// Address to bind the HTTP server (`/metrics`, `/health`) to.
    pub listen_addr: SocketAddr,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        // Safe to unwrap: fixed, valid address literal. Bind to all
        // interfaces so a container port mapping is reachable from the host.
        let addr: SocketAddr = "0.0.0.0:8000"
            .parse()
            .expect("hard-coded listen address should parse");
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            poll_interval: Duration::from_secs(5),
            disable_ssl_verify: false,
            listen_addr: addr,
        }
    }
}

impl ExporterConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Recognised variables:
    ///
    /// - `HYPERLIQUID_RPC_URL` — RPC endpoint URL.
    /// - `POLL_INTERVAL` — seconds between ticks.
    /// - `DISABLE_SSL_VERIFY` — `"true"` disables TLS verification.
    /// - `LISTEN_ADDR` — HTTP bind address, e.g. `0.0.0.0:8000`.
    ///
    /// Unset variables fall back to defaults; a set-but-malformed value is
    /// an unrecoverable startup error.
    pub fn from_env() -> Result<Self, String> {
        let mut cfg = Self::default();

        if let Ok(url) = std::env::var("HYPERLIQUID_RPC_URL") {
            cfg.rpc_url = url;
        }

        if let Ok(raw) = std::env::var("POLL_INTERVAL") {
            let secs: u64 = raw
                .parse()
                .map_err(|e| format!("invalid POLL_INTERVAL {raw:?}: {e}"))?;
            cfg.poll_interval = Duration::from_secs(secs);
        }

        if let Ok(raw) = std::env::var("DISABLE_SSL_VERIFY") {
            cfg.disable_ssl_verify = raw.eq_ignore_ascii_case("true");
        }

        if let Ok(raw) = std::env::var("LISTEN_ADDR") {
            cfg.listen_addr = raw
                .parse()
                .map_err(|e| format!("invalid LISTEN_ADDR {raw:?}: {e}"))?;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = ExporterConfig::default();
        assert_eq!(cfg.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(cfg.poll_interval, Duration::from_secs(5));
        assert!(!cfg.disable_ssl_verify);
        assert_eq!(cfg.listen_addr.port(), 8000);
    }
}
