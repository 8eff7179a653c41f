//! no_std exercise of every cache type.
//!
//! Compiles the public API in a `#![no_std]` binary crate context to make
//! sure nothing sneaks in a `std` dependency outside the gated features.

#![no_std]
extern crate alloc;
extern crate evict_rs;

use alloc::string::String;
use alloc::vec::Vec;
use evict_rs::config::{AgedLfuCacheConfig, KAdmissionCacheConfig, LfuCacheConfig, LruCacheConfig};
use evict_rs::{AgedLfuCache, KLruCache, LfuCache, LruCache};

fn make_lru<K: core::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    LruCache::init(LruCacheConfig { capacity: cap }, None)
}

fn make_lfu<K: core::hash::Hash + Eq + Clone, V>(cap: usize) -> LfuCache<K, V> {
    LfuCache::init(LfuCacheConfig { capacity: cap }, None)
}

fn make_aged_lfu<K: core::hash::Hash + Eq + Clone, V>(
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

#[test]
fn test_lru_without_std() {
    let mut cache = make_lru(2);
    cache.put(1u32, 10u32);
    cache.put(2, 20);
    assert_eq!(cache.get(&1), Some(&10));
    cache.put(3, 30);
    assert_eq!(cache.get(&2), None);
}

#[test]
fn test_lfu_without_std() {
    let mut cache = make_lfu(2);
    cache.put(1u32, 10u32);
    cache.put(2, 20);
    cache.get(&1);
    cache.put(3, 30);
    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&1), Some(&10));
}

#[test]
fn test_aged_lfu_without_std() {
    let mut cache = make_aged_lfu(2, 4);
    cache.put(1u32, 10u32);
    cache.put(2, 20);
    for _ in 0..50 {
        cache.get(&1);
    }
    assert!(cache.current_average() <= 4);
}

#[test]
fn test_k_admission_without_std() {
    let mut cache: KLruCache<u32, u32> = KLruCache::init(
        KAdmissionCacheConfig {
            capacity: 2,
            history_capacity: 8,
            k: 2,
        },
        None,
    );
    cache.put(1, 10);
    assert_eq!(cache.get(&1), None);
    cache.put(1, 10);
    assert_eq!(cache.get(&1), Some(&10));
}

#[test]
fn test_alloc_keys_and_values() {
    let mut cache = make_lru(4);
    let mut keys = Vec::new();
    for i in 0..4 {
        let key = alloc::format!("key_{}", i);
        keys.push(key.clone());
        cache.put(key, String::from("value"));
    }
    for key in &keys {
        assert!(cache.get(key).is_some());
    }
}
