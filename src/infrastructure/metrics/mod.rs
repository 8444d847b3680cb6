//! Prometheus metrics for the connection directory.
//!
//! - Request metrics (per operation and outcome)
//! - Sync update metrics
//! - Stored connection gauges, refreshed on scrape

mod helpers;

pub use helpers::{encode_metrics, DirectoryMetrics, Operation, Outcome};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, register_int_gauge,
    HistogramVec, IntCounter, IntCounterVec, IntGauge,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "cds";

lazy_static! {
    // ============================================================================
    // Request Metrics
    // ============================================================================

    /// Directory requests by operation and outcome
    pub static ref REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_requests_total", METRIC_PREFIX),
        "Total connection directory requests",
        &["operation", "outcome"]
    ).unwrap();

    /// Time spent inside the store per operation
    pub static ref STORE_OPERATION_LATENCY: HistogramVec = register_histogram_vec!(
        format!("{}_store_operation_latency_seconds", METRIC_PREFIX),
        "Connection store operation latency in seconds",
        &["operation"],
        vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01]
    ).unwrap();

    // ============================================================================
    // Sync Metrics
    // ============================================================================

    /// Successful lastSyncAt updates
    pub static ref SYNC_UPDATES_TOTAL: IntCounter = register_int_counter!(
        format!("{}_sync_updates_total", METRIC_PREFIX),
        "Total successful lastSyncAt updates"
    ).unwrap();

    // ============================================================================
    // Store Metrics
    // ============================================================================

    /// Number of stored connections
    pub static ref CONNECTIONS_STORED: IntGauge = register_int_gauge!(
        format!("{}_connections_stored", METRIC_PREFIX),
        "Number of stored connections"
    ).unwrap();

    /// Number of connections that have been synced at least once
    pub static ref CONNECTIONS_SYNCED: IntGauge = register_int_gauge!(
        format!("{}_connections_synced", METRIC_PREFIX),
        "Number of connections with a lastSyncAt value"
    ).unwrap();
}
