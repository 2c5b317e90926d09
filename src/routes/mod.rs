//! HTTP route handlers for the exporter surface.

pub mod health;
pub mod metrics;
