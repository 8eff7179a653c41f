//! Aged LFU Cache Metrics
//!
//! Metrics specific to the aged LFU cache algorithm: the LFU counters plus
//! the aging state (running total/average and decay-pass count).

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Aged-LFU-specific metrics (extends [`CoreCacheMetrics`]).
#[derive(Debug, Default, Clone)]
pub struct AgedLfuCacheMetrics {
    /// Core metrics common to all cache algorithms.
    pub core: CoreCacheMetrics,

    /// Total number of frequency increments.
    pub frequency_increments: u64,

    /// Number of decay passes performed so far.
    pub decay_passes: u64,

    /// Running sum of all live frequency counters.
    pub current_total: u64,

    /// Running average frequency (total / live entries), 0 when empty.
    pub current_average: u64,
}

impl AgedLfuCacheMetrics {
    /// Creates a zeroed metric set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frequency increment.
    #[inline]
    pub fn record_frequency_increment(&mut self) {
        self.frequency_increments += 1;
    }

    /// Records a completed decay pass.
    #[inline]
    pub fn record_decay_pass(&mut self) {
        self.decay_passes += 1;
    }

    /// Refreshes the running total/average gauges.
    #[inline]
    pub fn update_average(&mut self, total: u64, average: u64) {
        self.current_total = total;
        self.current_average = average;
    }

    /// Converts aged-LFU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert(
            "frequency_increments".to_string(),
            self.frequency_increments as f64,
        );
        metrics.insert("decay_passes".to_string(), self.decay_passes as f64);
        metrics.insert("current_total".to_string(), self.current_total as f64);
        metrics.insert("current_average".to_string(), self.current_average as f64);
        if self.core.requests > 0 {
            metrics.insert(
                "decay_pass_rate".to_string(),
                self.decay_passes as f64 / self.core.requests as f64,
            );
        }
        metrics
    }
}

impl CacheMetrics for AgedLfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "AgedLFU"
    }
}
