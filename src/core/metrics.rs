//! Logger metrics for observability
//!
//! Counters for delivered messages, file writes and failed file writes.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use tinted_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_logged();
/// metrics.record_failed_write();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.failed_writes(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Messages printed to the console
    total_logged: AtomicU64,

    /// Successful appends to file sinks
    file_writes: AtomicU64,

    /// Appends that failed
    failed_writes: AtomicU64,

    /// Reports written through the console-only failure path
    self_reports: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            file_writes: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
            self_reports: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_writes(&self) -> u64 {
        self.file_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn self_reports(&self) -> u64 {
        self.self_reports.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) {
        self.total_logged.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_file_write(&self) {
        self.file_writes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_failed_write(&self) {
        self.failed_writes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_self_report(&self) {
        self.self_reports.fetch_add(1, Ordering::Relaxed);
    }

    /// Percentage of file appends that failed
    pub fn failure_rate(&self) -> f64 {
        let ok = self.file_writes();
        let failed = self.failed_writes();
        let total = ok + failed;
        if total == 0 {
            0.0
        } else {
            (failed as f64 / total as f64) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.file_writes.store(0, Ordering::Relaxed);
        self.failed_writes.store(0, Ordering::Relaxed);
        self.self_reports.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
