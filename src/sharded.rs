//! Hash-Sharded Cache Implementation
//!
//! A thread-safe cache built from N independent bounded-cache instances,
//! each protected by its own lock. Keys are partitioned across the shards
//! by hash, so operations on keys that land in different shards never
//! contend — global throughput scales with the shard count.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                         ShardedCache                                 │
//! │                                                                      │
//! │  hash(key) % N  ──▶  Shard Selection                                 │
//! │                                                                      │
//! │  ┌──────────────┐ ┌──────────────┐     ┌──────────────┐              │
//! │  │   Shard 0    │ │   Shard 1    │ ... │   Shard N-1  │              │
//! │  │  ┌────────┐  │ │  ┌────────┐  │     │  ┌────────┐  │              │
//! │  │  │ Mutex  │  │ │  │ Mutex  │  │     │  │ Mutex  │  │              │
//! │  │  └────┬───┘  │ │  └────┬───┘  │     │  └────┬───┘  │              │
//! │  │       │      │ │       │      │     │       │      │              │
//! │  │  ┌────▼───┐  │ │  ┌────▼───┐  │     │  ┌────▼───┐  │              │
//! │  │  │ Cache  │  │ │  │ Cache  │  │     │  │ Cache  │  │              │
//! │  │  └────────┘  │ │  └────────┘  │     │  └────────┘  │              │
//! │  └──────────────┘ └──────────────┘     └──────────────┘              │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Mutex Instead of RwLock?
//!
//! Every cache in this crate requires **mutable access even for reads**:
//! a `get()` moves the entry in the recency list (LRU) or migrates it
//! between frequency buckets (LFU family). Since `get()` is inherently a
//! write, `RwLock` would provide no read parallelism — `Mutex` has less
//! overhead and makes the exclusivity explicit. Concurrency comes from
//! **sharding** instead: different keys proceed in parallel as long as
//! they hash to different shards.
//!
//! ## Locking Model
//!
//! Each public operation acquires exactly one shard's lock for the
//! operation's full duration; the guard is released on every exit path,
//! including misses. There is no cross-shard lock and therefore no
//! cross-shard atomicity: aggregate views like [`len`](ShardedCache::len)
//! lock shards one at a time and may be stale under concurrent writers.
//!
//! ## Trade-offs
//!
//! Eviction order is maintained **per shard**, not globally: a shard
//! evicts its own least-valuable entry even if another shard holds a
//! globally colder one. With a reasonable hash this approximation is
//! excellent in practice.
//!
//! ## Shard Assignment
//!
//! The shard table is fixed at construction: `shard(key) = hash(key) % N`
//! with the cache's own `BuildHasher`, so a key maps to the same shard for
//! the cache's entire lifetime and is only ever stored there.

extern crate alloc;

use crate::config::{
    ShardedKLruCacheConfig, ShardedLfuCacheConfig, ShardedLruCacheConfig,
};
use crate::lfu::LfuCache;
use crate::lru::LruCache;
use crate::metrics::CacheMetrics;
use crate::traits::BoundedCache;
use crate::KLruCache;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// Sharded cache over LRU instances.
pub type ShardedLruCache<K, V> = ShardedCache<K, V, LruCache<K, V>>;

/// Sharded cache over LFU instances.
pub type ShardedLfuCache<K, V> = ShardedCache<K, V, LfuCache<K, V>>;

/// Sharded cache over K-admission-gated LRU instances.
pub type ShardedKLruCache<K, V> = ShardedCache<K, V, KLruCache<K, V>>;

/// A thread-safe cache that partitions keys across independently locked
/// bounded-cache instances.
///
/// `C` is any [`BoundedCache`] implementation; each shard is one instance
/// of it with capacity `ceil(total_capacity / shard_count)`, created once
/// at construction and never resized.
///
/// # Example
///
/// ```
/// use evict_rs::ShardedLruCache;
/// use std::sync::Arc;
/// use std::thread;
///
/// let cache = Arc::new(ShardedLruCache::new(1024, 8));
///
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let cache = Arc::clone(&cache);
///         thread::spawn(move || {
///             for i in 0..100 {
///                 let key = format!("key-{}-{}", t, i);
///                 cache.put(key.clone(), i);
///                 let _ = cache.get(&key);
///             }
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert!(!cache.is_empty());
/// ```
pub struct ShardedCache<K, V, C, S = DefaultHashBuilder> {
    shards: Box<[Mutex<C>]>,
    hash_builder: S,
    _marker: PhantomData<(K, V)>,
}

impl<K: Hash + Eq + Clone, V> ShardedLruCache<K, V> {
    /// Creates a sharded LRU cache with `total_capacity` entries spread
    /// over `shard_count` shards.
    ///
    /// # Panics
    ///
    /// Panics if `shard_count` is 0.
    pub fn new(total_capacity: usize, shard_count: usize) -> Self {
        Self::init(
            ShardedLruCacheConfig {
                base: crate::config::LruCacheConfig {
                    capacity: total_capacity,
                },
                shards: shard_count,
            },
            None,
        )
    }

    /// Creates a sharded LRU cache from a configuration with an optional
    /// hasher (shared by shard selection and the shard lookup tables).
    pub fn init(config: ShardedLruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        let hash_builder = hasher.unwrap_or_default();
        let shard_capacity = shard_capacity(config.base.capacity, config.shards);
        let shards: Vec<_> = (0..config.shards)
            .map(|_| {
                Mutex::new(LruCache::with_hasher(shard_capacity, hash_builder.clone()))
            })
            .collect();
        Self::assemble(shards, hash_builder)
    }
}

impl<K: Hash + Eq + Clone, V> ShardedLfuCache<K, V> {
    /// Creates a sharded LFU cache with `total_capacity` entries spread
    /// over `shard_count` shards.
    ///
    /// # Panics
    ///
    /// Panics if `shard_count` is 0.
    pub fn new(total_capacity: usize, shard_count: usize) -> Self {
        Self::init(
            ShardedLfuCacheConfig {
                base: crate::config::LfuCacheConfig {
                    capacity: total_capacity,
                },
                shards: shard_count,
            },
            None,
        )
    }

    /// Creates a sharded LFU cache from a configuration with an optional
    /// hasher.
    pub fn init(config: ShardedLfuCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        let hash_builder = hasher.unwrap_or_default();
        let shard_capacity = shard_capacity(config.base.capacity, config.shards);
        let shards: Vec<_> = (0..config.shards)
            .map(|_| {
                Mutex::new(LfuCache::with_hasher(shard_capacity, hash_builder.clone()))
            })
            .collect();
        Self::assemble(shards, hash_builder)
    }
}

impl<K: Hash + Eq + Clone, V> ShardedKLruCache<K, V> {
    /// Creates a sharded K-admission LRU cache.
    ///
    /// Both the primary capacity and the history window are split across
    /// the shards, so the aggregate bounds match the unsharded
    /// configuration.
    ///
    /// # Panics
    ///
    /// Panics if `shard_count` is 0.
    pub fn new(total_capacity: usize, history_capacity: usize, k: u64, shard_count: usize) -> Self {
        Self::init(
            ShardedKLruCacheConfig {
                base: crate::config::KAdmissionCacheConfig {
                    capacity: total_capacity,
                    history_capacity,
                    k,
                },
                shards: shard_count,
            },
            None,
        )
    }

    /// Creates a sharded K-admission LRU cache from a configuration with
    /// an optional hasher.
    pub fn init(config: ShardedKLruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        let hash_builder = hasher.unwrap_or_default();
        let shard_cap = shard_capacity(config.base.capacity, config.shards);
        let shard_history = shard_capacity(config.base.history_capacity, config.shards);
        let shards: Vec<_> = (0..config.shards)
            .map(|_| {
                Mutex::new(KLruCache::init(
                    crate::config::KAdmissionCacheConfig {
                        capacity: shard_cap,
                        history_capacity: shard_history,
                        k: config.base.k,
                    },
                    Some(hash_builder.clone()),
                ))
            })
            .collect();
        Self::assemble(shards, hash_builder)
    }
}

/// Per-shard capacity: `ceil(total / shards)`.
///
/// # Panics
///
/// Panics if `shards` is 0 — a shard table cannot be empty.
fn shard_capacity(total: usize, shards: usize) -> usize {
    assert!(shards > 0, "shard count must be non-zero");
    total.div_ceil(shards)
}

impl<K, V, C> ShardedCache<K, V, C, DefaultHashBuilder> {
    /// Builds a sharded cache from pre-constructed shard instances.
    ///
    /// Use this with the generic form when the per-shard cache needs
    /// construction arguments the typed `init` constructors don't cover.
    ///
    /// # Panics
    ///
    /// Panics if `shards` is empty.
    pub fn from_shards(shards: Vec<C>) -> Self {
        assert!(!shards.is_empty(), "shard count must be non-zero");
        let shards: Vec<_> = shards.into_iter().map(Mutex::new).collect();
        Self::assemble(shards, DefaultHashBuilder::default())
    }
}

impl<K, V, C, S> ShardedCache<K, V, C, S> {
    fn assemble(shards: Vec<Mutex<C>>, hash_builder: S) -> Self {
        ShardedCache {
            shards: shards.into_boxed_slice(),
            hash_builder,
            _marker: PhantomData,
        }
    }

    /// Returns the number of shards in the cache.
    #[inline]
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}

impl<K, V, C, S> ShardedCache<K, V, C, S>
where
    K: Hash + Eq + Clone,
    C: BoundedCache<K, V>,
    S: BuildHasher,
{
    /// Returns the shard index for the given key.
    ///
    /// Deterministic for the lifetime of the cache: the hasher and the
    /// shard count are both fixed at construction.
    #[inline]
    fn shard_index(&self, key: &K) -> usize {
        (self.hash_builder.hash_one(key) as usize) % self.shards.len()
    }

    /// Returns the total capacity across all shards.
    pub fn capacity(&self) -> usize {
        self.shards.iter().map(|s| s.lock().capacity()).sum()
    }

    /// Returns the total number of entries across all shards.
    ///
    /// Locks each shard in turn, so the value may be slightly stale under
    /// concurrent writers.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.lock().len()).sum()
    }

    /// Returns `true` if every shard is empty.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.lock().is_empty())
    }

    /// Retrieves a clone of the value for `key` from its shard.
    ///
    /// Cloning happens under the shard lock; the lock is released before
    /// returning. For reads that don't need ownership, prefer
    /// [`get_with`](Self::get_with).
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let mut shard = self.shards[self.shard_index(key)].lock();
        shard.get(key).cloned()
    }

    /// Applies `f` to the value for `key` while holding the shard lock.
    ///
    /// Avoids cloning the value; the lock is released after `f` returns.
    pub fn get_with<F, R>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        let mut shard = self.shards[self.shard_index(key)].lock();
        shard.get(key).map(f)
    }

    /// Applies `f` to the value for `key` for in-place mutation while
    /// holding the shard lock.
    pub fn get_mut_with<F, R>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> R,
    {
        let mut shard = self.shards[self.shard_index(key)].lock();
        shard.get_mut(key).map(f)
    }

    /// Inserts a key-value pair into the key's shard, returning whatever
    /// entry the shard displaced.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        let idx = self.shard_index(&key);
        let mut shard = self.shards[idx].lock();
        shard.put(key, value)
    }

    /// Removes `key` from its shard, returning its value if present.
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut shard = self.shards[self.shard_index(key)].lock();
        shard.remove(key)
    }

    /// Returns `true` if the key's shard holds it, without touching policy
    /// bookkeeping.
    pub fn contains_key(&self, key: &K) -> bool {
        let shard = self.shards[self.shard_index(key)].lock();
        shard.contains(key)
    }

    /// Removes all entries from all shards, locking each in turn.
    pub fn clear(&self) {
        for shard in self.shards.iter() {
            shard.lock().clear();
        }
    }
}

impl<K, V, C, S> CacheMetrics for ShardedCache<K, V, C, S>
where
    K: Hash + Eq + Clone,
    C: BoundedCache<K, V> + CacheMetrics,
    S: BuildHasher,
{
    /// Aggregates metrics across all shards by summing matching counters.
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut aggregated = BTreeMap::new();
        for shard in self.shards.iter() {
            for (key, value) in shard.lock().metrics() {
                *aggregated.entry(key).or_insert(0.0) += value;
            }
        }
        aggregated
    }

    fn algorithm_name(&self) -> &'static str {
        "Sharded"
    }
}

impl<K, V, C, S> core::fmt::Debug for ShardedCache<K, V, C, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShardedCache")
            .field("shard_count", &self.shards.len())
            .finish()
    }
}
