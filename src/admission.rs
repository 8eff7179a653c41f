//! K-Admission Cache Implementation
//!
//! A two-tier scheme that keeps one-hit wonders out of the cache entirely.
//! Keys are not cached on first contact: a separate history tracker counts
//! how often each key has been seen, and only once a key's count reaches
//! the threshold `k` is it *admitted* — inserted into the bounded primary
//! cache, where the primary's own eviction policy takes over.
//!
//! # Per-Key State Machine
//!
//! ```text
//! Unseen ──visit──▶ Tracked(count) ──count == k──▶ Admitted
//!                        │                             │
//!                        │ counter evicted from        │ evicted by the
//!                        │ the history window          │ primary's policy
//!                        ▼                             ▼
//!                      Unseen                        Unseen
//! ```
//!
//! Keys below the threshold never occupy a primary slot and are therefore
//! never evicted by it — eviction pressure applies only post-admission.
//! When a key is admitted, its history entry is discarded; admitted keys
//! are served by the primary alone and are not re-counted.
//!
//! # Bounded History Window
//!
//! The history tracker is itself a bounded LRU cache (`history_capacity`
//! visit counters), so rarely seen keys eventually fall out of the window
//! and lose their progress. That is intended: the gate exists to resist
//! scans, and an unbounded tracker would grow with every key ever seen.
//!
//! # Composition
//!
//! `KAdmissionCache<K, V, C>` wraps any primary implementing
//! [`BoundedCache`]; [`KLruCache`] and [`KLfuCache`] are the common
//! instantiations.
//!
//! # Thread Safety
//!
//! The wrapper adds no lock of its own. Each constituent cache keeps
//! itself consistent, but the check-then-promote sequence is not atomic
//! across the two — under external sharing (e.g. one shard of a sharded
//! cache), the whole wrapper is protected by the shard's lock.

extern crate alloc;

use crate::config::KAdmissionCacheConfig;
use crate::lfu::LfuCache;
use crate::lru::LruCache;
use crate::metrics::{CacheMetrics, KAdmissionCacheMetrics};
use crate::traits::BoundedCache;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::hash::Hash;
use core::marker::PhantomData;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// K-admission cache over an LRU primary.
pub type KLruCache<K, V> = KAdmissionCache<K, V, LruCache<K, V>>;

/// K-admission cache over an LFU primary.
pub type KLfuCache<K, V> = KAdmissionCache<K, V, LfuCache<K, V>>;

/// A bounded cache guarded by a K-visit admission gate.
///
/// Lookups and insertions for unadmitted keys only advance a visit counter
/// in the history tracker; the `k`-th observation promotes the key into
/// the primary cache. See the [module docs](self) for the full state
/// machine.
///
/// # Examples
///
/// ```
/// use evict_rs::KLruCache;
///
/// // Admit keys on their second observation.
/// let mut cache = KLruCache::new(10, 100, 2);
///
/// cache.put("seen-once", 1);
/// assert_eq!(cache.get(&"seen-once"), None); // not admitted yet
///
/// cache.put("seen-once", 1);
/// assert_eq!(cache.get(&"seen-once"), Some(&1)); // admitted
/// ```
pub struct KAdmissionCache<K, V, C = LruCache<K, V>> {
    primary: C,
    history: LruCache<K, u64>,
    k: u64,
    metrics: KAdmissionCacheMetrics,
    _value: PhantomData<V>,
}

impl<K: Hash + Eq + Clone, V> KLruCache<K, V> {
    /// Creates a K-admission cache with an LRU primary of `capacity`
    /// entries, a history window of `history_capacity` counters, and an
    /// admission threshold of `k` observations.
    pub fn new(capacity: usize, history_capacity: usize, k: u64) -> Self {
        KAdmissionCache::with_primary(LruCache::new(capacity), history_capacity, k)
    }

    /// Creates a K-admission LRU cache from a configuration with an
    /// optional hasher (shared by the primary and the history tracker).
    pub fn init(config: KAdmissionCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        let primary = LruCache::init(
            crate::config::LruCacheConfig {
                capacity: config.capacity,
            },
            hasher.clone(),
        );
        let history = LruCache::init(
            crate::config::LruCacheConfig {
                capacity: config.history_capacity,
            },
            hasher,
        );
        KAdmissionCache {
            primary,
            history,
            k: config.k,
            metrics: KAdmissionCacheMetrics::new(),
            _value: PhantomData,
        }
    }
}

impl<K: Hash + Eq + Clone, V> KLfuCache<K, V> {
    /// Creates a K-admission cache with an LFU primary of `capacity`
    /// entries, a history window of `history_capacity` counters, and an
    /// admission threshold of `k` observations.
    pub fn new(capacity: usize, history_capacity: usize, k: u64) -> Self {
        KAdmissionCache::with_primary(LfuCache::new(capacity), history_capacity, k)
    }
}

impl<K: Hash + Eq + Clone, V, C: BoundedCache<K, V>> KAdmissionCache<K, V, C> {
    /// Wraps a pre-built primary cache with an admission gate.
    pub fn with_primary(primary: C, history_capacity: usize, k: u64) -> Self {
        KAdmissionCache {
            primary,
            history: LruCache::new(history_capacity),
            k,
            metrics: KAdmissionCacheMetrics::new(),
            _value: PhantomData,
        }
    }

    /// Returns the admission threshold.
    #[inline]
    pub fn k(&self) -> u64 {
        self.k
    }

    /// Returns the number of admitted entries in the primary cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    /// Returns `true` if the primary cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Returns the primary cache's capacity.
    #[inline]
    pub fn cap(&self) -> usize {
        self.primary.capacity()
    }

    /// Returns the number of keys currently tracked below the threshold.
    #[inline]
    pub fn tracked_len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if the key has been admitted into the primary cache.
    #[inline]
    pub fn is_admitted(&self, key: &K) -> bool {
        self.primary.contains(key)
    }

    /// Looks up `key` in the primary cache.
    ///
    /// For an unadmitted key this records a visit in the history tracker
    /// and reports a miss — a miss never promotes by itself.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if !self.primary.contains(key) {
            self.record_visit(key);
        }
        self.primary.get(key)
    }

    /// Looks up `key` in the primary cache for in-place mutation.
    ///
    /// Counts a visit for unadmitted keys, exactly like
    /// [`get`](Self::get).
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        if !self.primary.contains(key) {
            self.record_visit(key);
        }
        self.primary.get_mut(key)
    }

    /// Inserts or updates `key`.
    ///
    /// An admitted key is updated in the primary directly. Otherwise the
    /// visit counter advances; once it reaches the threshold the key is
    /// dropped from the history and inserted into the primary with the
    /// supplied value. Returns whatever entry the primary displaced, or
    /// `None` when the write was withheld by the gate.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.primary.contains(&key) {
            return self.primary.put(key, value);
        }

        let count = self.record_visit(&key);
        if count >= self.k {
            self.history.remove(&key);
            self.metrics.record_admission();
            self.primary.put(key, value)
        } else {
            self.metrics.record_rejected_put();
            None
        }
    }

    /// Removes `key` from the primary cache and forgets any admission
    /// progress it had. Returns the primary's value if the key was
    /// admitted.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.history.remove(key);
        self.primary.remove(key)
    }

    /// Clears the primary cache and the history tracker; every key reverts
    /// to Unseen.
    pub fn clear(&mut self) {
        self.history.clear();
        self.primary.clear();
    }

    /// Advances the visit counter for `key`, inserting it at 1 if unseen,
    /// and returns the new count.
    fn record_visit(&mut self, key: &K) -> u64 {
        let count = self.history.get(key).copied().unwrap_or(0) + 1;
        self.history.put(key.clone(), count);
        count
    }
}

impl<K: Hash + Eq + Clone, V, C: BoundedCache<K, V>> BoundedCache<K, V>
    for KAdmissionCache<K, V, C>
{
    fn get(&mut self, key: &K) -> Option<&V> {
        KAdmissionCache::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        KAdmissionCache::get_mut(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        KAdmissionCache::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        KAdmissionCache::remove(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        self.primary.contains(key)
    }

    fn len(&self) -> usize {
        KAdmissionCache::len(self)
    }

    fn capacity(&self) -> usize {
        self.cap()
    }

    fn clear(&mut self) {
        KAdmissionCache::clear(self)
    }
}

impl<K: Hash + Eq + Clone, V, C: BoundedCache<K, V> + CacheMetrics> CacheMetrics
    for KAdmissionCache<K, V, C>
{
    /// Merges the primary cache's metrics with the gate's own counters.
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.primary.metrics();
        for (key, value) in self.metrics.to_btreemap() {
            metrics.insert(key, value);
        }
        metrics.insert("tracked_keys".to_string(), self.history.len() as f64);
        metrics
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K: Hash + Eq, V, C: core::fmt::Debug> core::fmt::Debug for KAdmissionCache<K, V, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KAdmissionCache")
            .field("primary", &self.primary)
            .field("tracked", &self.history.len())
            .field("k", &self.k)
            .finish()
    }
}
