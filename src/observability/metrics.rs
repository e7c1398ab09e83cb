//! Metrics collection and exposition.
//!
//! # Metrics
//! - `tenant_resolutions_total` (counter): requests seen by the tenant layer,
//!   labelled by `outcome` (`rewrite`, `pass_through`, `asset`)
//! - `gateway_upstream_errors_total` (counter): failed upstream requests
//! - `gateway_request_duration_seconds` (histogram): end-to-end latency by status

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with an HTTP scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter")
        }
    }
}

/// Count one tenant-layer outcome.
pub fn record_resolution(outcome: &'static str) {
    counter!("tenant_resolutions_total", "outcome" => outcome).increment(1);
}

/// Count a failed upstream request.
pub fn record_upstream_error() {
    counter!("gateway_upstream_errors_total").increment(1);
}

/// Record end-to-end request latency.
pub fn record_request(status: u16, start: Instant) {
    histogram!("gateway_request_duration_seconds", "status" => status.to_string())
        .record(start.elapsed().as_secs_f64());
}
