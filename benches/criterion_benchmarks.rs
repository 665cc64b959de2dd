use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lru_arena::config::LruCacheConfig;
use lru_arena::LruCache;

fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    LruCache::init(LruCacheConfig { capacity: cap }, None).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("Cache Operations");

    {
        let mut cache = make_lru(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("LRU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    let _ = black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    let _ = black_box(cache.get(&(i + CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU peek", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.peek(&(i % CACHE_SIZE)));
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
    }

    {
        let mut cache = make_lru(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }
        let mut next = CACHE_SIZE;

        group.bench_function("LRU put evicting", |b| {
            b.iter(|| {
                for _ in 0..100 {
                    black_box(cache.put(next, next));
                    next += 1;
                }
            });
        });
    }

    {
        let mut cache = make_lru(CACHE_SIZE);
        group.bench_function("LRU remove and reinsert", |b| {
            b.iter(|| {
                for i in 0..100 {
                    cache.put(i, i);
                    black_box(cache.remove(&i));
                }
            });
        });
    }

    group.finish();
}

/// Mixed workload where the key space exceeds the capacity by a growing factor
pub fn miss_ratio_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("Key Space Pressure");

    for factor in [1usize, 2, 4, 8] {
        let key_space = CACHE_SIZE * factor;
        group.bench_with_input(BenchmarkId::new("LRU", factor), &key_space, |b, &keys| {
            let mut cache = make_lru(CACHE_SIZE);
            let mut step = 0u64;
            b.iter(|| {
                for _ in 0..100 {
                    // Cheap LCG spread over the key space
                    step = step.wrapping_mul(6364136223846793005).wrapping_add(1);
                    let key = (step >> 33) as usize % keys;
                    if cache.get(&key).is_err() {
                        black_box(cache.put(key, key));
                    }
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark, miss_ratio_benchmark);
criterion_main!(benches);
