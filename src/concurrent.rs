//! Concurrent Cache Implementations
//!
//! This module provides a thread-safe facade for the LRU cache. The core
//! [`LruCache`](crate::LruCache) stays single-threaded and lock-free; thread
//! safety is layered on top by guarding the whole cache with one
//! `parking_lot::Mutex`.
//!
//! ## Why Mutex Instead of RwLock?
//!
//! LRU requires **mutable access even for read operations**. Every `get()` moves the
//! accessed item to the front of the recency list, so a `get()` is a write. An
//! `RwLock` would hand out exclusive locks for every access anyway, and `Mutex`
//! has less bookkeeping.
//!
//! ## Why One Lock?
//!
//! A single lock keeps one global recency order, so the entry evicted is always the
//! least recently used entry across all threads. Striping the key space over several
//! locks would scale better but only approximates LRU per stripe.
//!
//! # Available Concurrent Caches
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ConcurrentLruCache`] | Thread-safe LRU cache behind a single lock |
//!
//! # Thread Safety
//!
//! `ConcurrentLruCache` is `Send + Sync` whenever its keys, values and hasher are
//! `Send`, so it can be shared across threads through an `Arc`.

mod lru;

pub use self::lru::ConcurrentLruCache;
