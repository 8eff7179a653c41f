//! Correctness Tests for Cache Algorithms
//!
//! This module validates the fundamental correctness of each cache
//! algorithm using simple, predictable access patterns. Each test
//! explicitly validates which specific key gets evicted when a put causes
//! an eviction.
//!
//! ## Test Strategy
//! - Small cache sizes (1-5 entries) for predictable behavior
//! - Simple, deterministic access patterns
//! - Each test validates the core eviction policy of the algorithm
//! - Explicit checks for which key was evicted after each put

use evict_rs::config::{AgedLfuCacheConfig, KAdmissionCacheConfig, LfuCacheConfig, LruCacheConfig};
use evict_rs::metrics::CacheMetrics;
use evict_rs::{AgedLfuCache, KLfuCache, KLruCache, LfuCache, LruCache};

// ============================================================================
// HELPER FUNCTIONS FOR CACHE CREATION
// ============================================================================

/// Helper to create an LruCache with the given capacity
fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    LruCache::init(LruCacheConfig { capacity: cap }, None)
}

/// Helper to create an LfuCache with the given capacity
fn make_lfu<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LfuCache<K, V> {
    LfuCache::init(LfuCacheConfig { capacity: cap }, None)
}

/// Helper to create an AgedLfuCache with the given capacity and ceiling
fn make_aged_lfu<K: std::hash::Hash + Eq + Clone, V>(
    cap: usize,
    max_average: u64,
) -> AgedLfuCache<K, V> {
    AgedLfuCache::init(
        AgedLfuCacheConfig {
            capacity: cap,
            max_average,
        },
        None,
    )
}

/// Helper to create a KLruCache with the given shape
fn make_klru<K: std::hash::Hash + Eq + Clone, V>(
    cap: usize,
    history_cap: usize,
    k: u64,
) -> KLruCache<K, V> {
    KLruCache::init(
        KAdmissionCacheConfig {
            capacity: cap,
            history_capacity: history_cap,
            k,
        },
        None,
    )
}

// ============================================================================
// CAPACITY BOUND
// ============================================================================
// For every sequence of puts, the number of live entries never exceeds
// the configured capacity.

#[test]
fn test_lru_capacity_bound_holds_throughout() {
    let mut cache = make_lru(5);
    for i in 0..1000 {
        cache.put(i, i);
        assert!(cache.len() <= 5);
    }
}

#[test]
fn test_lfu_capacity_bound_holds_throughout() {
    let mut cache = make_lfu(5);
    for i in 0..1000 {
        cache.put(i, i);
        // Revisit a few keys so frequencies differ.
        if i % 3 == 0 {
            let _ = cache.get(&i);
        }
        assert!(cache.len() <= 5);
    }
}

#[test]
fn test_aged_lfu_capacity_bound_holds_through_decay() {
    let mut cache = make_aged_lfu(5, 3);
    for i in 0..1000 {
        cache.put(i % 40, i);
        let _ = cache.get(&(i % 7));
        assert!(cache.len() <= 5);
    }
}

// ============================================================================
// LRU EVICTION ORDER
// ============================================================================

#[test]
fn test_lru_evicts_least_recently_touched() {
    // capacity 2: put 1, put 2, get 1, put 3 => 2 evicted, {1, 3} remain.
    let mut cache = make_lru(2);
    cache.put(1, "a");
    cache.put(2, "b");
    assert_eq!(cache.get(&1), Some(&"a"));

    let evicted = cache.put(3, "c");
    assert_eq!(evicted, Some((2, "b")));
    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&1), Some(&"a"));
    assert_eq!(cache.get(&3), Some(&"c"));
}

#[test]
fn test_lru_eviction_follows_insertion_order_without_touches() {
    let mut cache = make_lru(3);
    cache.put(1, ());
    cache.put(2, ());
    cache.put(3, ());
    assert_eq!(cache.put(4, ()), Some((1, ())));
    assert_eq!(cache.put(5, ()), Some((2, ())));
    assert_eq!(cache.put(6, ()), Some((3, ())));
}

#[test]
fn test_lru_distinct_puts_without_eviction_keep_everything() {
    let mut cache = make_lru(8);
    for i in 0..8 {
        assert_eq!(cache.put(i, i * 10), None);
    }
    for i in 0..8 {
        assert_eq!(cache.get(&i), Some(&(i * 10)));
    }
}

// ============================================================================
// LFU EVICTION AND TIE-BREAKING
// ============================================================================

#[test]
fn test_lfu_tie_break_evicts_earliest_insertion() {
    // capacity 2: put 1, put 2 (both frequency 1), put 3 => 1 evicted.
    let mut cache = make_lfu(2);
    cache.put(1, "a");
    cache.put(2, "b");
    let evicted = cache.put(3, "c");
    assert_eq!(evicted, Some((1, "a")));
    assert_eq!(cache.get(&2), Some(&"b"));
    assert_eq!(cache.get(&3), Some(&"c"));
}

#[test]
fn test_lfu_protects_frequent_entries() {
    let mut cache = make_lfu(3);
    cache.put("hot", 1);
    cache.put("warm", 2);
    cache.put("cold", 3);

    for _ in 0..5 {
        cache.get(&"hot");
    }
    cache.get(&"warm");

    let evicted = cache.put("new", 4);
    assert_eq!(evicted.unwrap().0, "cold");
    assert_eq!(cache.get(&"hot"), Some(&1));
    assert_eq!(cache.get(&"warm"), Some(&2));
}

#[test]
fn test_lfu_min_frequency_resets_on_insert() {
    let mut cache = make_lfu(2);
    cache.put(1, ());
    cache.get(&1);
    cache.get(&1);
    // Key 2 enters at frequency 1; it is the candidate, not key 1.
    cache.put(2, ());
    let evicted = cache.put(3, ());
    assert_eq!(evicted.unwrap().0, 2);
}

#[test]
fn test_lfu_purge_resets_frequency_standing() {
    let mut cache = make_lfu(2);
    cache.put(1, ());
    for _ in 0..10 {
        cache.get(&1);
    }
    cache.purge();
    assert!(cache.is_empty());

    // After purge, key 1's old standing is gone.
    cache.put(1, ());
    cache.put(2, ());
    cache.get(&2);
    let evicted = cache.put(3, ());
    assert_eq!(evicted.unwrap().0, 1);
}

// ============================================================================
// FREQUENCY MONOTONICITY (observed through eviction order)
// ============================================================================

#[test]
fn test_lfu_frequency_only_grows() {
    // Two entries: one touched often early, one touched lightly later.
    // Without decay, the early accumulation must still dominate.
    let mut cache = make_lfu(2);
    cache.put("early", 1);
    for _ in 0..10 {
        cache.get(&"early");
    }
    cache.put("late", 2);
    cache.get(&"late");
    cache.get(&"late");

    let evicted = cache.put("new", 3);
    assert_eq!(evicted.unwrap().0, "late");
    assert_eq!(cache.get(&"early"), Some(&1));
}

// ============================================================================
// AGED LFU: DECAY TRIGGER AND CONVERGENCE
// ============================================================================

#[test]
fn test_aged_lfu_average_never_settles_above_ceiling() {
    let mut cache = make_aged_lfu(2, 4);
    cache.put("a", 1);
    cache.put("b", 2);
    for _ in 0..200 {
        cache.get(&"a");
        assert!(cache.current_average() <= 4);
    }
}

#[test]
fn test_aged_lfu_decay_pass_count_grows_with_pressure() {
    let mut cache = make_aged_lfu(2, 4);
    cache.put("a", 1);
    cache.put("b", 2);
    for _ in 0..100 {
        cache.get(&"a");
    }
    let metrics = cache.metrics();
    let passes = *metrics.get("decay_passes").unwrap();
    assert!(passes >= 1.0);
    // Decay is amortized: far fewer passes than accesses.
    assert!(passes < 100.0);
}

#[test]
fn test_aged_lfu_old_favorite_ages_out() {
    let mut cache = make_aged_lfu(2, 2);
    cache.put("old", 1);
    for _ in 0..50 {
        cache.get(&"old");
    }

    // New traffic decays "old" back toward the floor.
    cache.put("new1", 2);
    for _ in 0..10 {
        cache.get(&"new1");
    }

    let evicted = cache.put("new2", 3);
    assert_eq!(evicted.unwrap().0, "old");
}

#[test]
fn test_aged_lfu_without_pressure_matches_lfu() {
    // A huge ceiling means decay never fires; behavior must equal LFU.
    let mut aged = make_aged_lfu(3, u64::MAX / 2);
    let mut lfu = make_lfu(3);

    let ops: &[(u32, bool)] = &[
        (1, true),
        (2, true),
        (3, true),
        (1, false),
        (1, false),
        (2, false),
        (4, true),
        (5, true),
        (1, false),
        (6, true),
    ];
    for &(key, is_put) in ops {
        if is_put {
            let a = aged.put(key, key);
            let b = lfu.put(key, key);
            assert_eq!(a, b);
        } else {
            assert_eq!(aged.get(&key), lfu.get(&key));
        }
    }
    assert_eq!(aged.len(), lfu.len());
}

// ============================================================================
// K-ADMISSION GATE
// ============================================================================

#[test]
fn test_k_admission_gate_put_side() {
    // capacity 1, K = 3: two puts leave x absent, the third admits it.
    let mut cache = make_klru(1, 16, 3);
    cache.put("x", 1);
    cache.put("x", 2);
    assert!(!cache.is_admitted(&"x"));
    assert_eq!(cache.len(), 0);

    cache.put("x", 3);
    assert!(cache.is_admitted(&"x"));
    assert_eq!(cache.get(&"x"), Some(&3));
}

#[test]
fn test_k_admission_gate_get_side_counts_identically() {
    let mut cache = make_klru(1, 16, 3);
    assert_eq!(cache.get(&"x"), None);
    assert_eq!(cache.get(&"x"), None);
    assert!(!cache.is_admitted(&"x"));

    // Third observation carries a value and admits.
    cache.put("x", 9);
    assert_eq!(cache.get(&"x"), Some(&9));
}

#[test]
fn test_k_admission_below_threshold_keys_never_evict_admitted_ones() {
    let mut cache: KLruCache<String, i32> = make_klru(1, 64, 2);
    let resident = "resident".to_string();
    cache.put(resident.clone(), 1);
    cache.put(resident.clone(), 1);
    assert!(cache.is_admitted(&resident));

    // A scan of one-time keys cannot displace the resident.
    for i in 0..100 {
        cache.put(format!("scan_{i}"), i);
    }
    assert!(cache.is_admitted(&resident));
    assert_eq!(cache.get(&resident), Some(&1));
}

#[test]
fn test_k_admission_over_lfu_primary() {
    let mut cache: KLfuCache<&str, i32> = KLfuCache::new(1, 16, 2);
    cache.put("x", 1);
    assert_eq!(cache.len(), 0);
    cache.put("x", 1);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"x"), Some(&1));
}

// ============================================================================
// ROUND-TRIP AND DEGENERATE MODES
// ============================================================================

#[test]
fn test_round_trip_immediately_after_put() {
    let mut lru = make_lru(4);
    let mut lfu = make_lfu(4);
    let mut aged = make_aged_lfu(4, 10);
    for i in 0..4 {
        lru.put(i, i * 2);
        lfu.put(i, i * 2);
        aged.put(i, i * 2);
        assert_eq!(lru.get(&i), Some(&(i * 2)));
        assert_eq!(lfu.get(&i), Some(&(i * 2)));
        assert_eq!(aged.get(&i), Some(&(i * 2)));
    }
}

#[test]
fn test_zero_capacity_caches_always_miss() {
    let mut lru = make_lru(0);
    let mut lfu = make_lfu(0);
    let mut aged = make_aged_lfu(0, 10);

    for i in 0..10 {
        lru.put(i, i);
        lfu.put(i, i);
        aged.put(i, i);
    }
    assert!(lru.is_empty());
    assert!(lfu.is_empty());
    assert!(aged.is_empty());
    assert_eq!(lru.get(&1), None);
    assert_eq!(lfu.get(&1), None);
    assert_eq!(aged.get(&1), None);
}

#[test]
fn test_remove_is_noop_for_absent_keys() {
    let mut cache = make_lru(4);
    cache.put(1, "a");
    assert_eq!(cache.remove(&2), None);
    assert_eq!(cache.remove(&1), Some("a"));
    assert_eq!(cache.remove(&1), None);
    assert!(cache.is_empty());
}

// ============================================================================
// METRICS SURFACE
// ============================================================================

#[test]
fn test_hit_rate_reporting_for_driver() {
    let mut cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.get(&"a");
    cache.get(&"a");
    cache.get(&"missing");
    cache.get(&"also-missing");

    let metrics = cache.metrics();
    assert_eq!(*metrics.get("requests").unwrap(), 4.0);
    assert_eq!(*metrics.get("cache_hits").unwrap(), 2.0);
    assert_eq!(*metrics.get("cache_misses").unwrap(), 2.0);
    assert_eq!(*metrics.get("hit_rate").unwrap(), 0.5);
}

#[test]
fn test_algorithm_names_are_distinct() {
    let lru = make_lru::<u32, u32>(2);
    let lfu = make_lfu::<u32, u32>(2);
    let aged = make_aged_lfu::<u32, u32>(2, 4);
    let klru = make_klru::<u32, u32>(2, 8, 2);

    let names = [
        lru.algorithm_name(),
        lfu.algorithm_name(),
        aged.algorithm_name(),
        klru.algorithm_name(),
    ];
    for (i, a) in names.iter().enumerate() {
        for b in names.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
