//! Prometheus metrics for the dual-ledger subsystems.
//!
//! All metrics follow the naming convention: `dl_<subsystem>_<metric>[_unit]`

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, IntGauge, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // RECONCILER
    // =========================================================================

    /// Base units burned from the pooled module account at reconciliation
    pub static ref RECONCILER_BURNED: Counter = Counter::new(
        "dl_reconciler_burned_total",
        "Base units burned from the EVM module account during balance reconciliation"
    ).expect("metric creation failed");

    /// Balance mutation and reconciliation errors by kind
    pub static ref RECONCILER_ERRORS: CounterVec = CounterVec::new(
        Opts::new("dl_reconciler_errors_total", "Balance errors by kind"),
        &["kind"]  // user_recoverable / internal_invariant / consistency_fatal
    ).expect("metric creation failed");

    /// Conservation counter exceeded the pooled balance
    pub static ref CONSERVATION_VIOLATIONS: Counter = Counter::new(
        "dl_reconciler_conservation_violations_total",
        "Reconciliations that found more unassociated balance than the module pool holds"
    ).expect("metric creation failed");

    // =========================================================================
    // SEQUENCER
    // =========================================================================

    /// In-flight pending nonce records across all accounts
    pub static ref SEQUENCER_PENDING_NONCES: IntGauge = IntGauge::new(
        "dl_sequencer_pending_nonces",
        "Pending nonce records currently tracked"
    ).expect("metric creation failed");

    /// Next-nonce scans that hit the configured step bound
    pub static ref SEQUENCER_SCAN_LIMIT_HITS: Counter = Counter::new(
        "dl_sequencer_scan_limit_hits_total",
        "Next-nonce calculations aborted by the scan bound"
    ).expect("metric creation failed");

    // =========================================================================
    // BRIDGE
    // =========================================================================

    /// Bank precompile invocations
    pub static ref BRIDGE_CALLS: CounterVec = CounterVec::new(
        Opts::new("dl_bridge_calls_total", "Bank precompile calls by method and outcome"),
        &["method", "outcome"]
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry. Idempotent.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(RECONCILER_BURNED.clone()),
        Box::new(RECONCILER_ERRORS.clone()),
        Box::new(CONSERVATION_VIOLATIONS.clone()),
        Box::new(SEQUENCER_PENDING_NONCES.clone()),
        Box::new(SEQUENCER_SCAN_LIMIT_HITS.clone()),
        Box::new(BRIDGE_CALLS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
