//! Configuration for the K-admission cache.
//!
//! # Examples
//!
//! ```
//! use evict_rs::config::KAdmissionCacheConfig;
//! use evict_rs::KLruCache;
//!
//! let config = KAdmissionCacheConfig {
//!     capacity: 100,
//!     history_capacity: 1000,
//!     k: 2,
//! };
//! let cache: KLruCache<String, i32> = KLruCache::init(config, None);
//! ```

use core::fmt;

/// Configuration for a K-admission cache.
///
/// A key must be observed `k` times in the history tracker before it is
/// admitted into the bounded primary cache. The history tracker is itself
/// a bounded LRU cache of `history_capacity` visit counters, which makes
/// the gate a sliding admission window: a key whose counter falls out of
/// the window starts over.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries in the primary cache. A capacity
///   of 0 disables the primary cache.
/// - `history_capacity`: Maximum number of keys tracked while below the
///   admission threshold.
/// - `k`: Number of observations required before a key is admitted. With
///   `k <= 1`, the first `put` admits immediately and the gate degenerates
///   to the primary cache's own policy.
#[derive(Clone, Copy)]
pub struct KAdmissionCacheConfig {
    /// Maximum number of key-value pairs the primary cache can hold.
    pub capacity: usize,
    /// Maximum number of keys tracked in the admission history.
    pub history_capacity: usize,
    /// Visit count at which a key is promoted into the primary cache.
    pub k: u64,
}

impl fmt::Debug for KAdmissionCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KAdmissionCacheConfig")
            .field("capacity", &self.capacity)
            .field("history_capacity", &self.history_capacity)
            .field("k", &self.k)
            .finish()
    }
}
