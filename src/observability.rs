use std::net::SocketAddr;

// ── Write-path metrics ──────────────────────────────────────────

/// Counter: bookings created.
pub const BOOKINGS_CREATED_TOTAL: &str = "nightbook_bookings_created_total";

/// Counter: bookings rejected by the overlap check.
pub const BOOKINGS_REJECTED_TOTAL: &str = "nightbook_bookings_rejected_total";

/// Counter: bookings canceled.
pub const BOOKINGS_CANCELED_TOTAL: &str = "nightbook_bookings_canceled_total";

// ── Read-path metrics ───────────────────────────────────────────

/// Counter: reports computed. Labels: kind.
pub const REPORTS_TOTAL: &str = "nightbook_reports_total";

/// Histogram: report computation latency in seconds.
pub const REPORT_DURATION_SECONDS: &str = "nightbook_report_duration_seconds";

/// Gauge: number of active tenants (loaded stores).
pub const TENANTS_ACTIVE: &str = "nightbook_tenants_active";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
