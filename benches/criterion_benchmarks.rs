use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evict_rs::config::{AgedLfuCacheConfig, KAdmissionCacheConfig, LfuCacheConfig, LruCacheConfig};
use evict_rs::{AgedLfuCache, KLruCache, LfuCache, LruCache};

// Benchmark configuration
const CACHE_SIZE: usize = 1_000;

// Helper functions to create caches with the init pattern
fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    LruCache::init(LruCacheConfig { capacity: cap }, None)
}

fn make_lfu<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LfuCache<K, V> {
    LfuCache::init(LfuCacheConfig { capacity: cap }, None)
}

fn make_aged_lfu<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> AgedLfuCache<K, V> {
    AgedLfuCache::init(
        AgedLfuCacheConfig {
            capacity: cap,
            max_average: 64,
        },
        None,
    )
}

fn make_klru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> KLruCache<K, V> {
    KLruCache::init(
        KAdmissionCacheConfig {
            capacity: cap,
            history_capacity: cap * 4,
            k: 2,
        },
        None,
    )
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cache Operations");

    // LRU benchmarks
    {
        let mut cache = make_lru(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("LRU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i + CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU put existing", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.put(i % CACHE_SIZE, i));
                }
            });
        });

        group.bench_function("LRU put evicting", |b| {
            let mut counter = CACHE_SIZE;
            b.iter(|| {
                for _ in 0..100 {
                    counter += 1;
                    black_box(cache.put(counter, counter));
                }
            });
        });
    }

    // LFU benchmarks
    {
        let mut cache = make_lfu(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("LFU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LFU put evicting", |b| {
            let mut counter = CACHE_SIZE;
            b.iter(|| {
                for _ in 0..100 {
                    counter += 1;
                    black_box(cache.put(counter, counter));
                }
            });
        });
    }

    // Aged LFU benchmarks
    {
        let mut cache = make_aged_lfu(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("AgedLFU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });
    }

    // K-admission benchmarks
    {
        let mut cache = make_klru(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
            cache.put(i, i);
        }

        group.bench_function("K-LRU get admitted", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("K-LRU put unadmitted", |b| {
            let mut counter = CACHE_SIZE;
            b.iter(|| {
                for _ in 0..100 {
                    counter += 1;
                    black_box(cache.put(counter, counter));
                }
            });
        });
    }

    group.finish();
}

#[cfg(feature = "concurrent")]
pub fn sharded_benchmark(c: &mut Criterion) {
    use evict_rs::ShardedLruCache;
    use std::sync::Arc;
    use std::thread;

    let mut group = c.benchmark_group("Sharded Cache");

    group.bench_function("ShardedLRU 4-thread mixed", |b| {
        let cache: Arc<ShardedLruCache<usize, usize>> = Arc::new(ShardedLruCache::new(10_000, 16));
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let cache = Arc::clone(&cache);
                    thread::spawn(move || {
                        for i in 0..250 {
                            let key = t * 10_000 + i;
                            cache.put(key, i);
                            black_box(cache.get(&key));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

#[cfg(feature = "concurrent")]
criterion_group!(benches, criterion_benchmark, sharded_benchmark);
#[cfg(not(feature = "concurrent"))]
criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
