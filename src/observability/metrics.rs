//! Metrics collection and exposition.
//!
//! # Metrics
//! - `placement_loads_total` (counter): feed loads by outcome
//! - `placement_skipped_lines_total` (counter): malformed feed lines
//! - `placement_records` (gauge): records in the current snapshot
//! - `placement_searches_total` (counter): location queries served
//! - `placement_search_duration_seconds` (histogram): query latency
//! - `placement_http_requests_total` (counter): requests by route, status
//!
//! Without an installed recorder every call below is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_load(outcome: &'static str, skipped: usize, records: usize) {
    metrics::counter!("placement_loads_total", "outcome" => outcome).increment(1);
    if outcome == "success" {
        metrics::counter!("placement_skipped_lines_total").increment(skipped as u64);
        metrics::gauge!("placement_records").set(records as f64);
    }
}

pub fn record_search(matches: usize, start: Instant) {
    metrics::counter!("placement_searches_total").increment(1);
    metrics::histogram!("placement_search_duration_seconds").record(start.elapsed().as_secs_f64());
    tracing::trace!(matches, "Search recorded");
}

pub fn record_request(route: &'static str, status: u16) {
    metrics::counter!(
        "placement_http_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
}
