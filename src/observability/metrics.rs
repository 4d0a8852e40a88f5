//! Metrics collection and exposition.
//!
//! # Metrics
//! - `tracker_requests_total` (counter): requests by method, route, status
//! - `tracker_request_duration_seconds` (histogram): latency by route
//! - `tracker_users_total` (gauge): registered users
//! - `tracker_exercises_total` (counter): recorded exercises
//! - `tracker_validation_failures_total` (counter): rejected input by reason

use ::metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener on `addr`.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed HTTP request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    counter!(
        "tracker_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("tracker_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_user_count(count: usize) {
    gauge!("tracker_users_total").set(count as f64);
}

pub fn record_exercise_added() {
    counter!("tracker_exercises_total").increment(1);
}

pub fn record_validation_failure(reason: &'static str) {
    counter!("tracker_validation_failures_total", "reason" => reason).increment(1);
}
