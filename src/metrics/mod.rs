//! Basic metrics instrumentation for tracking submissions.
//!
//! Provides counters and duration tracking for insert requests and for the
//! outcomes of submit triggers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector shared by the storage client and the controller.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of insert requests made
    insert_requests_total: Arc<AtomicU64>,

    /// Total number of failed insert requests
    insert_errors_total: Arc<AtomicU64>,

    /// Total duration of all insert requests in milliseconds
    insert_duration_total_ms: Arc<AtomicU64>,

    /// Submissions that passed validation and reached storage
    submissions_accepted_total: Arc<AtomicU64>,

    /// Submissions blocked by field errors
    submissions_rejected_total: Arc<AtomicU64>,

    /// Submit triggers ignored while a request was pending
    submissions_ignored_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            insert_requests_total: Arc::new(AtomicU64::new(0)),
            insert_errors_total: Arc::new(AtomicU64::new(0)),
            insert_duration_total_ms: Arc::new(AtomicU64::new(0)),
            submissions_accepted_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
            submissions_ignored_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an insert request with duration.
    pub fn record_insert_request(&self, duration: Duration) {
        self.insert_requests_total.fetch_add(1, Ordering::Relaxed);
        self.insert_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed insert.
    pub fn record_insert_error(&self) {
        self.insert_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_accepted(&self) {
        self.submissions_accepted_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_rejected(&self) {
        self.submissions_rejected_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_ignored(&self) {
        self.submissions_ignored_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total insert requests.
    pub fn insert_requests_total(&self) -> u64 {
        self.insert_requests_total.load(Ordering::Relaxed)
    }

    /// Get total insert errors.
    pub fn insert_errors_total(&self) -> u64 {
        self.insert_errors_total.load(Ordering::Relaxed)
    }

    /// Get average insert duration in milliseconds.
    pub fn insert_duration_avg_ms(&self) -> f64 {
        let total = self.insert_duration_total_ms.load(Ordering::Relaxed);
        let count = self.insert_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn submissions_accepted_total(&self) -> u64 {
        self.submissions_accepted_total.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected_total(&self) -> u64 {
        self.submissions_rejected_total.load(Ordering::Relaxed)
    }

    pub fn submissions_ignored_total(&self) -> u64 {
        self.submissions_ignored_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            insert_requests_total: self.insert_requests_total(),
            insert_errors_total: self.insert_errors_total(),
            insert_duration_avg_ms: self.insert_duration_avg_ms(),
            submissions_accepted_total: self.submissions_accepted_total(),
            submissions_rejected_total: self.submissions_rejected_total(),
            submissions_ignored_total: self.submissions_ignored_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSummary {
    pub insert_requests_total: u64,
    pub insert_errors_total: u64,
    pub insert_duration_avg_ms: f64,
    pub submissions_accepted_total: u64,
    pub submissions_rejected_total: u64,
    pub submissions_ignored_total: u64,
}
