//! Request counters
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters shared by all handlers.
///
/// Relaxed ordering is enough; counters are never used to synchronize.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    catalog_reads: AtomicU64,
    admin_reads: AtomicU64,
    contacts_submitted: AtomicU64,
    enrollments_submitted: AtomicU64,
    submissions_rejected: AtomicU64,
    internal_errors: AtomicU64,
}

/// Point-in-time copy of every counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub catalog_reads: u64,
    pub admin_reads: u64,
    pub contacts_submitted: u64,
    pub enrollments_submitted: u64,
    pub submissions_rejected: u64,
    pub internal_errors: u64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Course, instructor or testimonial listing served
    pub fn increment_catalog_reads(&self) {
        self.catalog_reads.fetch_add(1, Ordering::Relaxed);
    }

    /// Contact or enrollment listing served
    pub fn increment_admin_reads(&self) {
        self.admin_reads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_contacts_submitted(&self) {
        self.contacts_submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_enrollments_submitted(&self) {
        self.enrollments_submitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Write body failed validation
    pub fn increment_submissions_rejected(&self) {
        self.submissions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_internal_errors(&self) {
        self.internal_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            catalog_reads: self.catalog_reads.load(Ordering::Relaxed),
            admin_reads: self.admin_reads.load(Ordering::Relaxed),
            contacts_submitted: self.contacts_submitted.load(Ordering::Relaxed),
            enrollments_submitted: self.enrollments_submitted.load(Ordering::Relaxed),
            submissions_rejected: self.submissions_rejected.load(Ordering::Relaxed),
            internal_errors: self.internal_errors.load(Ordering::Relaxed),
        }
    }
}
