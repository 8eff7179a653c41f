//! Configuration for the Least Frequently Used (LFU) cache.
//!
//! # Examples
//!
//! ```
//! use evict_rs::config::LfuCacheConfig;
//! use evict_rs::LfuCache;
//!
//! let config = LfuCacheConfig { capacity: 100 };
//! let cache: LfuCache<String, i32> = LfuCache::init(config, None);
//! ```

use core::fmt;

/// Configuration for an LFU (Least Frequently Used) cache.
///
/// LFU tracks an access-frequency counter per entry and evicts the entry
/// with the lowest counter when the cache reaches capacity, breaking ties
/// by age within the lowest-frequency tier.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. A capacity
///   of 0 disables the cache.
#[derive(Clone, Copy)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
