//! Prometheus metrics: recorder install, series descriptions, and the
//! `/metrics` route. Counters are incremented at the HTTP edge; nothing in
//! the pure scan path touches global state.

use axum::{routing::get, Router};
use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::engine::SCAM_PROBABILITY_THRESHOLD;
use crate::verdict::RiskTier;

/// One-time metrics registration (so series show up on /metrics).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("scan_requests_total", "Scan requests received.");
        describe_counter!(
            "scan_verdicts_total",
            "Verdicts issued, labeled by risk tier."
        );
        describe_counter!(
            "scan_rejected_total",
            "Requests rejected before scoring, labeled by reason."
        );
        describe_gauge!(
            "scam_probability_threshold",
            "Fixed decision threshold of the tabular model."
        );
    });
}

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Initialize the Prometheus recorder and expose the fixed threshold as
    /// a static gauge. Called once at startup.
    pub fn init() -> anyhow::Result<Self> {
        // Use default buckets to avoid API differences across crate versions.
        let builder = PrometheusBuilder::new();
        let handle = builder
            .install_recorder()
            .map_err(|e| anyhow::anyhow!("prometheus: install recorder: {e}"))?;

        ensure_metrics_described();
        gauge!("scam_probability_threshold").set(SCAM_PROBABILITY_THRESHOLD);

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

pub fn record_request() {
    counter!("scan_requests_total").increment(1);
}

pub fn record_verdict(tier: RiskTier) {
    counter!("scan_verdicts_total", "tier" => tier.as_str()).increment(1);
}

pub fn record_rejected(reason: &'static str) {
    counter!("scan_rejected_total", "reason" => reason).increment(1);
}
