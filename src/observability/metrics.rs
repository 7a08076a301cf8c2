//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): requests by handler, status
//! - `site_request_duration_seconds` (histogram): latency distribution
//! - `site_edge_header_injections_total` (counter): requests annotated by the edge rule
//! - `site_config_reloads_total` (counter): config reloads by result
//!
//! Recording is a no-op until a recorder is installed with [`init_metrics`].

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed request.
pub fn record_request(handler: &'static str, status: u16, start: Instant) {
    let status = status.to_string();
    counter!("site_requests_total", "handler" => handler, "status" => status.clone()).increment(1);
    histogram!("site_request_duration_seconds", "handler" => handler, "status" => status)
        .record(start.elapsed().as_secs_f64());
}

/// Record one request annotated by the edge header rule.
pub fn record_header_injected(matcher: &str) {
    counter!("site_edge_header_injections_total", "matcher" => matcher.to_string()).increment(1);
}

/// Record a config file reload attempt.
pub fn record_config_reload(accepted: bool) {
    let result = if accepted { "accepted" } else { "rejected" };
    counter!("site_config_reloads_total", "result" => result).increment(1);
}
