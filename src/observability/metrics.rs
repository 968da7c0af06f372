//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sample_requests_total` (counter): requests by service, method, status
//! - `sample_request_duration_seconds` (histogram): handler latency by service
//! - `relay_upstream_calls_total` (counter): upstream calls by outcome
//! - `relay_upstream_duration_seconds` (histogram): upstream call latency
//! - `relay_open_upstream_bodies` (gauge): upstream bodies currently held

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with an HTTP scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a served request.
pub fn record_request(service: &'static str, method: &str, status: u16, start: Instant) {
    counter!(
        "sample_requests_total",
        "service" => service,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("sample_request_duration_seconds", "service" => service)
        .record(start.elapsed().as_secs_f64());
}

/// Record one upstream call by the relay. `outcome` is `ok` or an error kind.
pub fn record_upstream_call(outcome: &'static str, start: Instant) {
    counter!("relay_upstream_calls_total", "outcome" => outcome).increment(1);
    histogram!("relay_upstream_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Publish the number of upstream bodies currently held.
pub fn set_open_upstream_bodies(count: u64) {
    gauge!("relay_open_upstream_bodies").set(count as f64);
}
