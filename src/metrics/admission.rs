//! K-Admission Cache Metrics
//!
//! Metrics specific to the K-admission gate: how many keys are being
//! tracked, how many have been admitted, and how many writes were withheld
//! from the primary cache.

extern crate alloc;

use super::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Admission-gate metrics.
///
/// The wrapped primary cache keeps its own hit/miss counters; the gate only
/// counts admission decisions. [`CacheMetrics::metrics`] on the wrapper
/// merges both views.
#[derive(Debug, Default, Clone)]
pub struct KAdmissionCacheMetrics {
    /// Number of keys promoted into the primary cache so far.
    pub admissions: u64,

    /// Number of `put` calls withheld because the key was still below the
    /// admission threshold.
    pub rejected_puts: u64,
}

impl KAdmissionCacheMetrics {
    /// Creates a zeroed metric set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a promotion into the primary cache.
    #[inline]
    pub fn record_admission(&mut self) {
        self.admissions += 1;
    }

    /// Records a `put` that only advanced the visit counter.
    #[inline]
    pub fn record_rejected_put(&mut self) {
        self.rejected_puts += 1;
    }

    /// Converts admission metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        metrics.insert("admissions".to_string(), self.admissions as f64);
        metrics.insert("rejected_puts".to_string(), self.rejected_puts as f64);
        metrics
    }
}

impl CacheMetrics for KAdmissionCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "K-Admission"
    }
}
