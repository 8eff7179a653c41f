//! Least Frequently Used Cache Implementation.
//!
//! The LFU (Least Frequently Used) cache evicts the least frequently
//! accessed items when the cache reaches capacity. Each entry carries an
//! access-frequency counter, starting at 1 on insertion; entries are kept
//! in per-frequency buckets so that every operation, including eviction,
//! is O(1).
//!
//! When several entries share the lowest frequency, the one that has been
//! in that frequency tier the longest is evicted first — LRU ordering
//! within the LFU tier.
//!
//! This policy suits workloads where certain items are persistently more
//! popular than others, as it protects frequently accessed items from
//! eviction by one-time scans.
//!
//! # Thread Safety
//!
//! Not thread-safe by itself; wrap in a `Mutex` or use
//! [`ShardedLfuCache`](crate::ShardedLfuCache).

extern crate alloc;

use crate::arena::EntryRef;
use crate::buckets::FreqBuckets;
use crate::config::LfuCacheConfig;
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Internal LFU segment containing the actual cache algorithm.
///
/// This is shared between `LfuCache` (single-owner) and the sharded cache
/// (one segment per shard).
///
/// The lookup table maps each key to the handle of its entry in the
/// frequency buckets; a key is present in the table if and only if its
/// entry is linked in exactly one bucket.
pub(crate) struct LfuSegment<K, V, S = DefaultHashBuilder> {
    config: LfuCacheConfig,
    buckets: FreqBuckets<K, V>,
    map: HashMap<K, EntryRef, S>,
    metrics: LfuCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuSegment<K, V, S> {
    pub(crate) fn with_hasher(config: LfuCacheConfig, hash_builder: S) -> Self {
        let map_capacity = config.capacity.next_power_of_two();
        LfuSegment {
            config,
            buckets: FreqBuckets::with_capacity(config.capacity),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            metrics: LfuCacheMetrics::new(),
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.config.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &LfuCacheMetrics {
        &self.metrics
    }

    /// Refreshes the frequency-distribution gauges after a bucket change.
    fn refresh_frequency_gauges(&mut self) {
        self.metrics.update_frequency_levels(
            self.buckets.min_freq().unwrap_or(0),
            self.buckets.max_freq().unwrap_or(0),
            self.buckets.active_levels(),
        );
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(node) => {
                self.buckets.touch(node);
                self.metrics.record_frequency_increment();
                self.metrics.core.record_hit();
                self.refresh_frequency_gauges();
                self.buckets.value(node)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(node) => {
                self.buckets.touch(node);
                self.metrics.record_frequency_increment();
                self.metrics.core.record_hit();
                self.refresh_frequency_gauges();
                self.buckets.value_mut(node)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    pub(crate) fn put(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        if self.config.capacity == 0 {
            return None;
        }

        if let Some(&node) = self.map.get(&key) {
            let old = self.buckets.replace_value(node, value);
            self.buckets.touch(node);
            self.metrics.record_frequency_increment();
            self.refresh_frequency_gauges();
            return old.map(|old_value| (key, old_value));
        }

        let mut evicted = None;
        if self.len() >= self.config.capacity {
            if let Some((old_key, old_value, _freq)) = self.buckets.pop_min() {
                self.map.remove(&old_key);
                self.metrics.core.record_eviction();
                evicted = Some((old_key, old_value));
            }
        }

        // New entries start at frequency 1, which also resets the minimum.
        let node = self.buckets.insert(key.clone(), value);
        self.map.insert(key, node);
        self.metrics.core.record_insertion();
        self.refresh_frequency_gauges();

        evicted
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        let (_, value, _) = self.buckets.remove(node)?;
        self.refresh_frequency_gauges();
        Some(value)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.buckets.clear();
        self.refresh_frequency_gauges();
    }
}

impl<K, V, S> core::fmt::Debug for LfuSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LfuSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .field("min_frequency", &self.buckets.min_freq())
            .finish()
    }
}

/// An implementation of a Least Frequently Used (LFU) cache.
///
/// The cache tracks the frequency of access for each item and evicts the
/// least frequently used items when the cache reaches capacity. In case of
/// a tie in frequency, the entry that entered the lowest-frequency tier
/// earliest is evicted. A capacity of 0 disables the cache.
///
/// # Examples
///
/// ```
/// use evict_rs::LfuCache;
///
/// let mut cache = LfuCache::new(2);
///
/// cache.put("a", 1);
/// cache.put("b", 2);
///
/// // Access "a" to raise its frequency above "b".
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// // "b" has the lowest frequency and is evicted.
/// cache.put("c", 3);
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.get(&"a"), Some(&1));
/// ```
#[derive(Debug)]
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    segment: LfuSegment<K, V, S>,
}

impl<K: Hash + Eq, V> LfuCache<K, V> {
    /// Creates a new LFU cache that holds at most `capacity` entries.
    pub fn new(capacity: usize) -> LfuCache<K, V, DefaultHashBuilder> {
        LfuCache::init(LfuCacheConfig { capacity }, None)
    }

    /// Creates a new LFU cache from a configuration with an optional hasher.
    pub fn init(config: LfuCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: LfuSegment::with_hasher(config, hasher.unwrap_or_default()),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Creates a new LFU cache with the specified capacity and hash builder.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            segment: LfuSegment::with_hasher(LfuCacheConfig { capacity }, hash_builder),
        }
    }

    /// Returns the maximum number of key-value pairs the cache can hold.
    #[inline]
    pub fn cap(&self) -> usize {
        self.segment.cap()
    }

    /// Returns the current number of key-value pairs in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Returns `true` if the cache contains no key-value pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// Accessing an item increments its frequency counter and migrates it
    /// to the next frequency bucket.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// Accessing an item increments its frequency counter.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns `true` if the cache holds the key, without counting an
    /// access.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains(key)
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the key was already present, the value is replaced, the entry's
    /// frequency is incremented, and the old pair is returned. Otherwise,
    /// if the cache is at capacity, the least frequently used entry (oldest
    /// within the lowest tier) is evicted and returned. New entries start
    /// at frequency 1.
    #[inline]
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.segment.put(key, value)
    }

    /// Removes a key from the cache, returning its value if the key was
    /// present. Absent keys are a no-op.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.remove(key)
    }

    /// Purges the cache: removes all entries and all frequency buckets.
    ///
    /// Afterwards the cache behaves as freshly constructed.
    #[inline]
    pub fn purge(&mut self) {
        self.segment.clear()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}
