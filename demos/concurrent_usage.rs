//! Concurrent Cache Usage Examples
//!
//! This example demonstrates multi-threaded usage of the concurrent LRU cache.
//!
//! Run with: cargo run --example concurrent_usage --features concurrent

extern crate lru_arena;

use lru_arena::config::{ConcurrentLruCacheConfig, LruCacheConfig};
use lru_arena::ConcurrentLruCache;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn main() {
    println!("Concurrent Cache Usage Examples");
    println!("================================\n");

    basic_concurrent_usage();
    read_heavy_workload();
    borrowing_values();
}

fn basic_concurrent_usage() {
    println!("--- Basic concurrent usage ---");

    let config = ConcurrentLruCacheConfig::new(LruCacheConfig::new(100));
    let cache: Arc<ConcurrentLruCache<String, usize>> =
        Arc::new(ConcurrentLruCache::init(config, None).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..50 {
                    cache.put(format!("thread{}-key{}", t, i), i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // 200 inserts into a cache of 100: the oldest half was evicted
    println!("len after 200 inserts: {}", cache.len());
    println!("capacity: {}\n", cache.capacity());
}

fn read_heavy_workload() {
    println!("--- Read heavy workload ---");

    let cache: Arc<ConcurrentLruCache<usize, usize>> =
        Arc::new(ConcurrentLruCache::new(1_000).unwrap());
    for i in 0..1_000 {
        cache.put(i, i * 2);
    }

    let start = Instant::now();
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let mut hits = 0usize;
                for i in 0..10_000 {
                    if cache.get(&((t * 131 + i) % 1_200)).is_ok() {
                        hits += 1;
                    }
                }
                hits
            })
        })
        .collect();

    let hits: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    println!("hits: {} / 80000 in {:?}\n", hits, start.elapsed());
}

fn borrowing_values() {
    println!("--- Reading without cloning ---");

    let cache: ConcurrentLruCache<&str, Vec<u8>> = ConcurrentLruCache::new(4).unwrap();
    cache.put("blob", vec![0u8; 4096]);

    // The closure runs under the lock, so the value is never copied out
    let size = cache.get_with(&"blob", |v| v.len()).unwrap();
    println!("blob is {} bytes", size);

    let _ = cache.get_mut_with(&"blob", |v| v.truncate(16));
    println!("blob is now {} bytes", cache.get_with(&"blob", Vec::len).unwrap());
}
