//! Cache Metrics System
//!
//! Provides a flexible metrics system for cache algorithms using
//! BTreeMap-based metrics reporting. Each cache algorithm tracks its own
//! specific counters while implementing a common [`CacheMetrics`] trait,
//! which is what a benchmark driver reads to compute hit rates.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap is used instead of HashMap for several reasons:
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Essential for testing and benchmark comparisons
//! - **Better debugging**: Consistent output makes logs more readable
//!
//! The performance difference (O(log n) vs O(1)) is negligible with ~10
//! metric keys, but the deterministic behavior matters to anything that
//! diffs two metric reports.
//!
//! All counters are operation counts. Hits and misses are recorded inside
//! `get`; insertions and evictions inside `put`.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod admission;
pub mod aged_lfu;
pub mod lfu;
pub mod lru;

pub use admission::KAdmissionCacheMetrics;
pub use aged_lfu::AgedLfuCacheMetrics;
pub use lfu::LfuCacheMetrics;
pub use lru::LruCacheMetrics;

/// Common counters tracked by all cache algorithms.
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of lookups made against the cache.
    pub requests: u64,

    /// Number of lookups that found their key.
    pub cache_hits: u64,

    /// Number of new entries written into the cache.
    pub insertions: u64,

    /// Number of entries evicted due to capacity pressure.
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cache hit.
    #[inline]
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a cache miss.
    #[inline]
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records the insertion of a new entry.
    #[inline]
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records a capacity eviction.
    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Number of lookups that missed.
    #[inline]
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Hit rate in [0.0, 1.0]; 0.0 before any request.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Miss rate in [0.0, 1.0]; 0.0 before any request.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the core counters to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());
        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }
        metrics
    }
}

/// Trait implemented by every cache for metrics reporting.
///
/// Provides a uniform interface for retrieving metrics from any cache
/// implementation, so a driver can collect and compare hit rates across
/// algorithms without knowing their concrete types.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g., "LRU", "LFU").
    fn algorithm_name(&self) -> &'static str;
}
