//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Install the Prometheus recorder and hand its render handle to the
//!   HTTP layer
//! - Record probe outcomes and request counts
//!
//! # Metrics
//! - `healthcheck_probe_total` (counter): probe executions by probe, status
//! - `healthcheck_probe_duration_seconds` (histogram): probe latency
//! - `healthcheck_requests_total` (counter): HTTP requests by path, status
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Exposition happens in-process on the main router, not a side listener

use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use crate::health::ProbeStatus;

/// Install the global Prometheus recorder.
///
/// Returns the handle the /metrics endpoint renders. Fails if a recorder is
/// already installed in this process.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(
        "healthcheck_probe_total",
        "Probe executions by probe name and status"
    );
    describe_histogram!(
        "healthcheck_probe_duration_seconds",
        "Probe execution latency in seconds"
    );
    describe_counter!(
        "healthcheck_requests_total",
        "HTTP requests by path and response status"
    );

    Ok(handle)
}

/// Record one probe execution.
pub fn record_probe(name: &str, status: ProbeStatus, elapsed: Duration) {
    counter!(
        "healthcheck_probe_total",
        "probe" => name.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "healthcheck_probe_duration_seconds",
        "probe" => name.to_string()
    )
    .record(elapsed.as_secs_f64());
}

/// Record one handled HTTP request.
pub fn record_request(path: &'static str, status: u16) {
    counter!(
        "healthcheck_requests_total",
        "path" => path,
        "status" => status.to_string()
    )
    .increment(1);
}
