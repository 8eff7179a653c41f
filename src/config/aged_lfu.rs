//! Configuration for the aged LFU cache.
//!
//! # Examples
//!
//! ```
//! use evict_rs::config::AgedLfuCacheConfig;
//! use evict_rs::AgedLfuCache;
//!
//! let config = AgedLfuCacheConfig {
//!     capacity: 100,
//!     max_average: 10,
//! };
//! let cache: AgedLfuCache<String, i32> = AgedLfuCache::init(config, None);
//! ```

use core::fmt;

/// Configuration for an aged LFU cache.
///
/// The aged variant keeps a running average of all access-frequency
/// counters. When the average exceeds `max_average`, every counter is
/// reduced by `max_average / 2` (floored at 1) and entries are re-bucketed,
/// so long-gone hot entries cannot keep newcomers out of the cache forever.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. A capacity
///   of 0 disables the cache.
/// - `max_average`: Ceiling for the running average frequency. Larger
///   values make decay passes rarer but more expensive — a throughput /
///   latency trade-off. A value of 0 disables aging entirely.
#[derive(Clone, Copy)]
pub struct AgedLfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
    /// Average-frequency ceiling that triggers a decay pass; 0 disables
    /// aging.
    pub max_average: u64,
}

impl fmt::Debug for AgedLfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgedLfuCacheConfig")
            .field("capacity", &self.capacity)
            .field("max_average", &self.max_average)
            .finish()
    }
}
