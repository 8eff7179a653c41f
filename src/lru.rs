//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a memory-efficient LRU cache implementation with
//! O(1) operations for all common cache operations. LRU is one of the most
//! widely used cache eviction algorithms due to its simplicity and good
//! performance for workloads with temporal locality.
//!
//! # Algorithm
//!
//! The LRU cache maintains items in order of recency of use, evicting the
//! least recently used item when capacity is reached. This works on the
//! principle of temporal locality: items that have been accessed recently
//! are likely to be accessed again soon.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!
//! # When to Use
//!
//! LRU caches are ideal for:
//! - General-purpose caching where access patterns exhibit temporal locality
//! - Simple implementation with predictable performance
//! - Caching with a fixed entry budget
//!
//! They are less suitable for:
//! - Workloads where frequency of access is more important than recency
//! - Scanning patterns where a large set of items is accessed once in sequence
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe by itself. For concurrent access,
//! wrap the cache in a `Mutex`, or use
//! [`ShardedLruCache`](crate::ShardedLruCache) which partitions the key
//! space across independently locked shards.

extern crate alloc;

use crate::arena::EntryRef;
use crate::config::LruCacheConfig;
use crate::list::List;
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::mem;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Internal LRU segment containing the actual cache algorithm.
///
/// This is shared between `LruCache` (single-owner) and the sharded cache
/// (one segment per shard). All algorithm logic is implemented here to
/// avoid code duplication.
///
/// The lookup table maps each key to the handle of its node in the recency
/// list; a key is present in the table if and only if its node is linked in
/// the list.
pub(crate) struct LruSegment<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<(K, V)>,
    map: HashMap<K, EntryRef, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LruSegment<K, V, S> {
    pub(crate) fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        let map_capacity = config.capacity.next_power_of_two();
        LruSegment {
            config,
            list: List::with_capacity(config.capacity),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            metrics: LruCacheMetrics::new(),
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
    pub(crate) fn metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(node) => {
                self.list.move_to_back(node);
                self.metrics.core.record_hit();
                self.list.get(node).map(|(_, v)| v)
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
                self.list.move_to_back(node);
                self.metrics.core.record_hit();
                self.list.get_mut(node).map(|(_, v)| v)
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
            self.list.move_to_back(node);
            let old = self
                .list
                .get_mut(node)
                .map(|slot| mem::replace(&mut slot.1, value));
            return old.map(|old_value| (key, old_value));
        }

        let mut evicted = None;
        if self.map.len() >= self.config.capacity {
            if let Some((old_key, old_value)) = self.list.pop_front() {
                self.map.remove(&old_key);
                self.metrics.core.record_eviction();
                evicted = Some((old_key, old_value));
            }
        }

        let node = self.list.push_back((key.clone(), value));
        self.map.insert(key, node);
        self.metrics.core.record_insertion();

        evicted
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        self.list.remove(node).map(|(_, value)| value)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }
}

impl<K, V, S> core::fmt::Debug for LruSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When the cache reaches
/// capacity, the least recently used entry is evicted to make room for new
/// entries. A capacity of 0 disables the cache: every operation is a no-op
/// and every lookup misses.
///
/// # Examples
///
/// ```
/// use evict_rs::LruCache;
///
/// let mut cache = LruCache::new(2);
///
/// // Add items to the cache
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    segment: LruSegment<K, V, S>,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a new LRU cache that holds at most `capacity` entries.
    pub fn new(capacity: usize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::init(LruCacheConfig { capacity }, None)
    }

    /// Creates a new LRU cache from a configuration with an optional hasher.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: LruSegment::with_hasher(config, hasher.unwrap_or_default()),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            segment: LruSegment::with_hasher(LruCacheConfig { capacity }, hash_builder),
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

    /// Returns a reference to the value corresponding to the key, marking
    /// the entry as most recently used.
    ///
    /// The key may be any borrowed form of the cache's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for the
    /// key type.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key,
    /// marking the entry as most recently used.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns `true` if the cache holds the key, without updating recency.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains(key)
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the key was already present, its value is replaced, the entry
    /// becomes most recently used, and the old pair is returned. If the
    /// insertion evicts the least recently used entry, the evicted pair is
    /// returned instead.
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

    /// Clears the cache, removing all key-value pairs.
    #[inline]
    pub fn clear(&mut self) {
        self.segment.clear()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}
