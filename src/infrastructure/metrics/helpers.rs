//! Metrics helper structs for convenient metric recording

use std::time::Instant;

use prometheus::{Encoder, TextEncoder};

use crate::datasource::DirectoryStats;

use super::{
    CONNECTIONS_STORED, CONNECTIONS_SYNCED, REQUESTS_TOTAL, STORE_OPERATION_LATENCY,
    SYNC_UPDATES_TOTAL,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Directory operation label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    UpdateLastSync,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::UpdateLastSync => "update_last_sync",
        }
    }
}

/// Request outcome label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    NotFound,
    Invalid,
    Error,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::NotFound => "not_found",
            Outcome::Invalid => "invalid",
            Outcome::Error => "error",
        }
    }
}

/// Helper struct for recording directory metrics
pub struct DirectoryMetrics;

impl DirectoryMetrics {
    /// Record a handled request
    pub fn record_request(operation: Operation, outcome: Outcome) {
        REQUESTS_TOTAL
            .with_label_values(&[operation.as_str(), outcome.as_str()])
            .inc();

        if operation == Operation::UpdateLastSync && outcome == Outcome::Ok {
            SYNC_UPDATES_TOTAL.inc();
        }
    }

    /// Record time spent in the store since `started`
    pub fn observe_store_latency(operation: Operation, started: Instant) {
        STORE_OPERATION_LATENCY
            .with_label_values(&[operation.as_str()])
            .observe(started.elapsed().as_secs_f64());
    }

    /// Refresh the stored-connection gauges
    pub fn set_store_stats(stats: &DirectoryStats) {
        CONNECTIONS_STORED.set(stats.total as i64);
        CONNECTIONS_SYNCED.set(stats.synced as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_request() {
        let before = SYNC_UPDATES_TOTAL.get();
        DirectoryMetrics::record_request(Operation::UpdateLastSync, Outcome::Ok);
        DirectoryMetrics::record_request(Operation::UpdateLastSync, Outcome::NotFound);
        DirectoryMetrics::record_request(Operation::Get, Outcome::Ok);
        assert!(SYNC_UPDATES_TOTAL.get() >= before + 1);
    }

    #[test]
    fn test_store_stats_gauges() {
        DirectoryMetrics::set_store_stats(&DirectoryStats {
            total: 3,
            synced: 2,
            never_synced: 1,
        });
        assert_eq!(CONNECTIONS_STORED.get(), 3);
        assert_eq!(CONNECTIONS_SYNCED.get(), 2);
    }

    #[test]
    fn test_encode_metrics() {
        DirectoryMetrics::record_request(Operation::List, Outcome::Ok);
        DirectoryMetrics::observe_store_latency(Operation::List, Instant::now());
        let output = encode_metrics().unwrap();
        assert!(output.contains("cds_requests_total"));
        assert!(output.contains("cds_store_operation_latency_seconds"));
    }
}
