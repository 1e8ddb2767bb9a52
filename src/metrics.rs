use crate::error::ParseResult;
use anyhow::{Context, Result};
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::atomic::{AtomicU64, Ordering};

const COUNTER_PARSED_TOTAL: &str = "inapp_content_parsed_total";
const COUNTER_FAILURES_TOTAL: &str = "inapp_content_failures_total";

/// Install the global Prometheus recorder and return a handle for rendering.
pub fn install_prometheus_recorder() -> Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")
}

/// Prometheus metrics for parse outcomes
pub struct ParseMetrics {
    parsed: AtomicU64,
    failed: AtomicU64,
}

impl ParseMetrics {
    pub fn new() -> Self {
        describe_counter!(
            COUNTER_PARSED_TOTAL,
            "Payloads decoded into content, by content type"
        );
        describe_counter!(
            COUNTER_FAILURES_TOTAL,
            "Payloads rejected by the parser, by failure kind"
        );
        Self {
            parsed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Record the outcome of one parse
    pub fn record(&self, result: &ParseResult) {
        match result {
            Ok(content) => {
                self.parsed.fetch_add(1, Ordering::Relaxed);
                counter!(COUNTER_PARSED_TOTAL, "content_type" => content.content_type().as_str())
                    .increment(1);
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                counter!(COUNTER_FAILURES_TOTAL, "reason" => e.kind()).increment(1);
            }
        }
    }

    pub fn parsed(&self) -> u64 {
        self.parsed.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }
}

impl Default for ParseMetrics {
    fn default() -> Self {
        Self::new()
    }
}
