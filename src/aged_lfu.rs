//! Aged LFU Cache Implementation
//!
//! Plain LFU has a pollution problem: an entry that was hot long ago keeps
//! a high frequency counter forever, so newly inserted entries (which start
//! at frequency 1) are always the eviction candidates even when the old
//! entry will never be accessed again.
//!
//! The aged variant counters this by tracking the running average of all
//! frequency counters. Whenever an access pushes the average above the
//! configured `max_average` ceiling, a **decay pass** runs: every live
//! entry's counter is reduced by `max_average / 2` (never below 1), all
//! entries are re-bucketed, and the minimum frequency is recomputed by a
//! full re-scan. Once-popular entries drift back toward the newcomers and
//! have to re-earn their standing.
//!
//! The decay pass is O(n) in the number of live entries and is amortized
//! against the ceiling: a larger `max_average` makes passes rarer but each
//! pass more expensive — a throughput / latency trade-off for the caller.
//!
//! # Bookkeeping
//!
//! - Every frequency increment (hit, update-put, insertion of a fresh
//!   counter at 1) adds 1 to the running total.
//! - Every eviction or removal subtracts the departing entry's counter.
//! - After a decay pass the total is recomputed from the decayed counters,
//!   so the average always describes the live population.
//!
//! # Thread Safety
//!
//! Not thread-safe by itself; wrap in a `Mutex` for concurrent access.

extern crate alloc;

use crate::arena::EntryRef;
use crate::buckets::FreqBuckets;
use crate::config::AgedLfuCacheConfig;
use crate::metrics::{AgedLfuCacheMetrics, CacheMetrics};
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

/// Internal aged-LFU segment containing the actual cache algorithm.
///
/// Extends the LFU structure with the running frequency total that drives
/// decay decisions. Only this variant maintains the total; plain LFU has no
/// use for it.
pub(crate) struct AgedLfuSegment<K, V, S = DefaultHashBuilder> {
    config: AgedLfuCacheConfig,
    buckets: FreqBuckets<K, V>,
    map: HashMap<K, EntryRef, S>,
    /// Running sum of all live frequency counters.
    total: u64,
    metrics: AgedLfuCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> AgedLfuSegment<K, V, S> {
    pub(crate) fn with_hasher(config: AgedLfuCacheConfig, hash_builder: S) -> Self {
        let map_capacity = config.capacity.next_power_of_two();
        AgedLfuSegment {
            config,
            buckets: FreqBuckets::with_capacity(config.capacity),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            total: 0,
            metrics: AgedLfuCacheMetrics::new(),
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
    pub(crate) fn metrics(&self) -> &AgedLfuCacheMetrics {
        &self.metrics
    }

    /// Running average frequency over live entries; 0 when empty.
    #[inline]
    pub(crate) fn current_average(&self) -> u64 {
        let len = self.map.len() as u64;
        if len == 0 {
            0
        } else {
            self.total / len
        }
    }

    /// Accounts for one frequency increment and decays if the average has
    /// crossed the ceiling.
    fn note_increment(&mut self) {
        self.total += 1;
        self.metrics.record_frequency_increment();

        if self.config.max_average > 0 && self.current_average() > self.config.max_average {
            // Clamp the decrement to at least 1 so a pass always makes
            // progress; each counter floors at 1.
            let decrement = (self.config.max_average / 2).max(1);
            self.total = self.buckets.decay(decrement);
            self.metrics.record_decay_pass();
        }
        let average = self.current_average();
        self.metrics.update_average(self.total, average);
    }

    /// Accounts for an entry leaving the cache with frequency `freq`.
    fn note_departure(&mut self, freq: u64) {
        self.total = self.total.saturating_sub(freq);
        let average = self.current_average();
        self.metrics.update_average(self.total, average);
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(node) => {
                self.buckets.touch(node);
                self.metrics.core.record_hit();
                self.note_increment();
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
                self.metrics.core.record_hit();
                self.note_increment();
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
            self.note_increment();
            return old.map(|old_value| (key, old_value));
        }

        let mut evicted = None;
        if self.len() >= self.config.capacity {
            if let Some((old_key, old_value, freq)) = self.buckets.pop_min() {
                self.map.remove(&old_key);
                self.metrics.core.record_eviction();
                self.note_departure(freq);
                evicted = Some((old_key, old_value));
            }
        }

        let node = self.buckets.insert(key.clone(), value);
        self.map.insert(key, node);
        self.metrics.core.record_insertion();
        // The fresh counter went from 0 to 1: that is an increment too.
        self.note_increment();

        evicted
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        let (_, value, freq) = self.buckets.remove(node)?;
        self.note_departure(freq);
        Some(value)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.buckets.clear();
        self.total = 0;
        self.metrics.update_average(0, 0);
    }
}

impl<K, V, S> core::fmt::Debug for AgedLfuSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AgedLfuSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .field("total", &self.total)
            .field("max_average", &self.config.max_average)
            .finish()
    }
}

/// An LFU cache whose frequency counters age.
///
/// Behaves like [`LfuCache`](crate::LfuCache) until the running average of
/// all frequency counters exceeds the configured `max_average`; then every
/// counter decays by `max_average / 2` (floored at 1) and entries are
/// re-bucketed, keeping newly inserted entries competitive with entries
/// that were popular long ago.
///
/// # Examples
///
/// ```
/// use evict_rs::AgedLfuCache;
///
/// let mut cache = AgedLfuCache::new(2, 10);
///
/// cache.put("a", 1);
/// cache.put("b", 2);
///
/// // Heavy access inflates "a"'s counter, but the average stays bounded:
/// // once it crosses 10, counters decay and "a" must re-earn its standing.
/// for _ in 0..25 {
///     cache.get(&"a");
/// }
/// ```
#[derive(Debug)]
pub struct AgedLfuCache<K, V, S = DefaultHashBuilder> {
    segment: AgedLfuSegment<K, V, S>,
}

impl<K: Hash + Eq, V> AgedLfuCache<K, V> {
    /// Creates a new aged LFU cache holding at most `capacity` entries,
    /// decaying whenever the average frequency exceeds `max_average`.
    pub fn new(capacity: usize, max_average: u64) -> AgedLfuCache<K, V, DefaultHashBuilder> {
        AgedLfuCache::init(
            AgedLfuCacheConfig {
                capacity,
                max_average,
            },
            None,
        )
    }

    /// Creates a new aged LFU cache from a configuration with an optional
    /// hasher.
    pub fn init(config: AgedLfuCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: AgedLfuSegment::with_hasher(config, hasher.unwrap_or_default()),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> AgedLfuCache<K, V, S> {
    /// Creates a new aged LFU cache with the specified configuration and
    /// hash builder.
    pub fn with_hasher(config: AgedLfuCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: AgedLfuSegment::with_hasher(config, hash_builder),
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

    /// Returns the running average frequency over live entries.
    #[inline]
    pub fn current_average(&self) -> u64 {
        self.segment.current_average()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// Accessing an item increments its frequency counter and may trigger
    /// a decay pass.
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
    /// Accessing an item increments its frequency counter and may trigger
    /// a decay pass.
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

impl<K: Hash + Eq + Clone, V, S: BuildHasher> AgedLfuCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// Same contract as [`LfuCache::put`](crate::LfuCache::put); the
    /// insertion counts toward the running average and may trigger a decay
    /// pass.
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

    /// Purges the cache: removes all entries, buckets, and aging state.
    ///
    /// Afterwards the cache behaves as freshly constructed.
    #[inline]
    pub fn purge(&mut self) {
        self.segment.clear()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for AgedLfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}
