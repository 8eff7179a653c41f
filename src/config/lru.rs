//! Configuration for the Least Recently Used (LRU) cache.
//!
//! # Examples
//!
//! ```
//! use evict_rs::config::LruCacheConfig;
//! use evict_rs::LruCache;
//!
//! let config = LruCacheConfig { capacity: 100 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//!
//! // Capacity 0 configures a permanently empty cache.
//! let disabled: LruCache<String, i32> = LruCache::init(LruCacheConfig { capacity: 0 }, None);
//! ```

use core::fmt;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed entry when the cache reaches
/// capacity.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. A capacity
///   of 0 disables the cache: every operation is a no-op and every lookup
///   misses.
#[derive(Clone, Copy)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
