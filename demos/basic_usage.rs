//! Basic LRU Cache Usage
//!
//! Walks through construction, lookups, updates, eviction and removal.
//!
//! Run with: cargo run --example basic_usage

extern crate lru_arena;

use lru_arena::config::LruCacheConfig;
use lru_arena::{CacheError, LruCache};

fn main() {
    println!("LRU Cache Basic Usage");
    println!("=====================\n");

    construction();
    lookups_and_eviction();
    updates_and_removal();
}

fn construction() {
    println!("--- Construction ---");

    match LruCache::<&str, u32>::new(0) {
        Err(e @ CacheError::InvalidCapacity) => println!("capacity 0 rejected: {}", e),
        other => println!("unexpected: {:?}", other.map(|c| c.capacity())),
    }

    let config = LruCacheConfig::new(3);
    let cache: LruCache<&str, u32> = LruCache::init(config, None).unwrap();
    println!("created {:?}\n", cache);
}

fn lookups_and_eviction() {
    println!("--- Lookups and eviction ---");

    let mut cache = LruCache::new(3).unwrap();
    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);

    // Reading "apple" makes it the most recently used entry
    if let Ok(v) = cache.get(&"apple") {
        println!("apple -> {}", v);
    }

    if let Some((key, value)) = cache.put("date", 4) {
        println!("evicted {} -> {}", key, value);
    }

    match cache.get(&"banana") {
        Ok(v) => println!("banana -> {}", v),
        Err(e) => println!("banana: {}", e),
    }

    let order: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
    println!("most to least recent: {:?}\n", order);
}

fn updates_and_removal() {
    println!("--- Updates and removal ---");

    let mut cache = LruCache::new(2).unwrap();
    cache.put("a", String::from("first"));
    cache.put("b", String::from("second"));

    // Updating an existing key never evicts
    assert!(cache.put("a", String::from("replaced")).is_none());
    println!("a -> {}", cache.get(&"a").unwrap());

    if let Ok(v) = cache.get_mut(&"b") {
        v.push_str(" (edited)");
    }
    println!("b -> {}", cache.peek(&"b").unwrap());

    println!("remove a: {}", cache.remove(&"a"));
    println!("remove a again: {}", cache.remove(&"a"));
    println!("len {} / capacity {}", cache.len(), cache.capacity());
}
