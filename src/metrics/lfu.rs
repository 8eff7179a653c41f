//! LFU Cache Metrics
//!
//! Metrics specific to the LFU (Least Frequently Used) cache algorithm.
//! LFU tracks a frequency counter per entry, so these metrics focus on the
//! frequency distribution.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LFU-specific metrics (extends [`CoreCacheMetrics`]).
#[derive(Debug, Default, Clone)]
pub struct LfuCacheMetrics {
    /// Core metrics common to all cache algorithms.
    pub core: CoreCacheMetrics,

    /// Total number of frequency increments (every hit and update-put
    /// increments the touched entry's counter).
    pub frequency_increments: u64,

    /// Current minimum frequency across live entries; 0 when empty.
    pub min_frequency: u64,

    /// Current maximum frequency across live entries; 0 when empty.
    pub max_frequency: u64,

    /// Number of distinct frequency values currently in use.
    pub active_frequency_levels: u64,
}

impl LfuCacheMetrics {
    /// Creates a zeroed metric set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frequency increment.
    #[inline]
    pub fn record_frequency_increment(&mut self) {
        self.frequency_increments += 1;
    }

    /// Refreshes the frequency-distribution gauges from the bucket state.
    pub fn update_frequency_levels(&mut self, min: u64, max: u64, levels: usize) {
        self.min_frequency = min;
        self.max_frequency = max;
        self.active_frequency_levels = levels as u64;
    }

    /// Frequency range (max - min) across live entries.
    pub fn frequency_range(&self) -> u64 {
        self.max_frequency.saturating_sub(self.min_frequency)
    }

    /// Converts LFU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("min_frequency".to_string(), self.min_frequency as f64);
        metrics.insert("max_frequency".to_string(), self.max_frequency as f64);
        metrics.insert("frequency_range".to_string(), self.frequency_range() as f64);
        metrics.insert(
            "frequency_increments".to_string(),
            self.frequency_increments as f64,
        );
        metrics.insert(
            "active_frequency_levels".to_string(),
            self.active_frequency_levels as f64,
        );
        metrics
    }
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}
