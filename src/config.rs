//! Cache Configuration Module
//!
//! This module provides configuration structures for all cache algorithm
//! implementations. Each cache type has its own dedicated configuration
//! struct with public fields.
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: All parameters must be provided at construction
//! - **No boilerplate**: No constructors or builder methods needed
//!
//! A `capacity` of 0 is valid everywhere it appears: it configures a
//! permanently empty cache whose operations are no-ops and whose lookups
//! always miss.
//!
//! # Cache Configs
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | `LfuCacheConfig` | [`LfuCache`](crate::LfuCache) | Least Frequently Used |
//! | `AgedLfuCacheConfig` | [`AgedLfuCache`](crate::AgedLfuCache) | LFU with frequency aging |
//! | `KAdmissionCacheConfig` | [`KAdmissionCache`](crate::KAdmissionCache) | K-admission gate |
//!
//! # Sharded Cache Config (requires `concurrent` feature)
//!
//! Use `ShardedCacheConfig<C>` to wrap any base config with a shard count.
//!
//! # Examples
//!
//! ```
//! use evict_rs::config::LruCacheConfig;
//! use evict_rs::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! ```

pub mod admission;
pub mod aged_lfu;
pub mod lfu;
pub mod lru;

pub use admission::KAdmissionCacheConfig;
pub use aged_lfu::AgedLfuCacheConfig;
pub use lfu::LfuCacheConfig;
pub use lru::LruCacheConfig;

/// Generic configuration wrapper for sharded caches.
///
/// Wraps any base cache configuration and adds the `shards` field for
/// controlling the number of independently locked instances the key space
/// is partitioned across.
///
/// # Type Parameter
///
/// - `C`: The base cache configuration type (e.g., `LruCacheConfig`)
///
/// # Fields
///
/// - `base`: The underlying single-instance cache configuration. Its
///   `capacity` is the *total* capacity; each shard receives
///   `ceil(capacity / shards)`.
/// - `shards`: Number of independent shards (more shards = less contention)
///
/// # Example
///
/// ```ignore
/// use evict_rs::config::{LruCacheConfig, ShardedCacheConfig, ShardedLruCacheConfig};
///
/// let config: ShardedLruCacheConfig = ShardedCacheConfig {
///     base: LruCacheConfig { capacity: 10_000 },
///     shards: 16,
/// };
/// ```
#[cfg(feature = "concurrent")]
#[derive(Clone, Copy)]
pub struct ShardedCacheConfig<C> {
    /// Base configuration for the underlying cache algorithm
    pub base: C,
    /// Number of shards the key space is partitioned across
    pub shards: usize,
}

#[cfg(feature = "concurrent")]
impl<C: core::fmt::Debug> core::fmt::Debug for ShardedCacheConfig<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShardedCacheConfig")
            .field("base", &self.base)
            .field("shards", &self.shards)
            .finish()
    }
}

#[cfg(feature = "concurrent")]
/// Configuration for a sharded LRU cache.
/// Type alias for `ShardedCacheConfig<LruCacheConfig>`.
pub type ShardedLruCacheConfig = ShardedCacheConfig<LruCacheConfig>;

#[cfg(feature = "concurrent")]
/// Configuration for a sharded LFU cache.
/// Type alias for `ShardedCacheConfig<LfuCacheConfig>`.
pub type ShardedLfuCacheConfig = ShardedCacheConfig<LfuCacheConfig>;

#[cfg(feature = "concurrent")]
/// Configuration for a sharded K-admission LRU cache.
/// Type alias for `ShardedCacheConfig<KAdmissionCacheConfig>`.
pub type ShardedKLruCacheConfig = ShardedCacheConfig<KAdmissionCacheConfig>;
