//! Shared application state for the HTTP surface.

use std::sync::Arc;

use crate::metrics::MetricsRegistry;

/// State held by the HTTP handlers.
///
/// This is wrapped in an [`Arc`] and passed to request handlers via Axum's
/// `State` extractor. The registry inside is the same one the poll loop
/// writes to.
pub struct AppState {
    /// Metrics registry shared between the poll loop and the API.
    pub metrics: Arc<MetricsRegistry>,
}

/// Thread-safe alias for `AppState`.
pub type SharedState = Arc<AppState>;
