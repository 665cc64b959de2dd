#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Operation | Method | Result | Recency |
//! |-----------|--------|--------|---------|
//! | Construct | [`LruCache::new`] | `Err(InvalidCapacity)` for 0 | - |
//! | Look up | [`LruCache::get`] | `Err(NotFound)` on miss | moves to front |
//! | Insert / update | [`LruCache::put`] | evicted entry, if any | moves to front |
//! | Remove | [`LruCache::remove`] | `true` if removed | - |
//! | Inspect | [`LruCache::peek`], [`LruCache::iter`] | - | unchanged |
//! | Size | [`LruCache::len`], [`LruCache::capacity`] | - | unchanged |
//!
//! ## Performance Characteristics
//!
//! | Operation | Time | Allocation |
//! |-----------|------|------------|
//! | get       | O(1) | none |
//! | put       | O(1) | none once the arena has held `capacity` entries |
//! | remove    | O(1) | none |
//!
//! ## Code Examples
//!
//! ```rust
//! use lru_arena::{CacheError, LruCache};
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! let _ = cache.get(&"a");   // "a" becomes most recently used
//! cache.put("c", 3);         // "b" evicted (least recently used)
//! assert_eq!(cache.get(&"b"), Err(CacheError::NotFound));
//! assert!(cache.remove(&"a"));
//! assert_eq!(cache.len(), 1);
//! ```
//!
//! ## Concurrent Cache
//!
//! Enable the `concurrent` feature for a thread-safe facade:
//!
//! ```toml
//! [dependencies]
//! lru-arena = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ```rust,ignore
//! use lru_arena::ConcurrentLruCache;
//! use std::sync::Arc;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(10_000).unwrap());
//!
//! let cache_clone = Arc::clone(&cache);
//! std::thread::spawn(move || {
//!     cache_clone.put("key".to_string(), 42);
//! });
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`config`]: Configuration structures
//! - [`error`]: Error type returned by constructors and lookups
//! - `concurrent`: Thread-safe cache facade (requires `concurrent` feature)

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

#[cfg(test)]
extern crate scoped_threadpool;

/// Error type for cache construction and lookups.
pub mod error;

/// Arena-backed doubly linked list with sentinel slots.
///
/// Internal infrastructure for the recency order of [`LruCache`]; not part
/// of the public API.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Concurrent cache implementations.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use error::{CacheError, Result};
pub use lru::LruCache;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
