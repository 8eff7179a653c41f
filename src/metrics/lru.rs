//! LRU Cache Metrics
//!
//! Metrics for the LRU (Least Recently Used) cache algorithm. LRU has no
//! per-entry bookkeeping beyond list position, so the core counters are the
//! whole story.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// LRU metrics: just the core counters.
#[derive(Debug, Default, Clone)]
pub struct LruCacheMetrics {
    /// Core metrics common to all cache algorithms.
    pub core: CoreCacheMetrics,
}

impl LruCacheMetrics {
    /// Creates a zeroed metric set.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
