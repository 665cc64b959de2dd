//! Concurrent LRU Cache Implementation
//!
//! A thread-safe facade over [`LruCache`](crate::LruCache): one
//! `parking_lot::Mutex` guards the whole cache, so every thread observes a
//! single, global recency order.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │          ConcurrentLruCache          │
//! │                                      │
//! │   get / put / remove / clear / len   │
//! │                  │                   │
//! │             ┌────▼────┐              │
//! │             │  Mutex  │              │
//! │             └────┬────┘              │
//! │             ┌────▼────┐              │
//! │             │LruCache │              │
//! │             └─────────┘              │
//! └──────────────────────────────────────┘
//! ```
//!
//! # Trade-offs
//!
//! - **Pros**: Exact LRU semantics across all threads; eviction always removes the
//!   globally least recently used entry
//! - **Cons**: All operations serialize on one lock, so throughput does not scale
//!   with thread count
//!
//! # Values Leave by Clone
//!
//! [`ConcurrentLruCache::get`] returns a clone of the stored value, never a reference
//! into the cache, so the lock is released before the caller uses the value. For
//! cheap reads of large values use [`ConcurrentLruCache::get_with`], which runs a
//! closure while the lock is held.
//!
//! # Example
//!
//! ```
//! use lru_arena::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(10_000).unwrap());
//!
//! let handles: Vec<_> = (0..4).map(|i| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for j in 0..1000 {
//!             cache.put(format!("key-{}-{}", i, j), j);
//!         }
//!     })
//! }).collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(cache.len(), 4000);
//! ```

use crate::config::ConcurrentLruCacheConfig;
use crate::error::Result;
use crate::lru::LruCache;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LRU cache guarded by a single lock.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq + Clone`.
/// - `V`: Value type. Must implement `Clone` for [`get`](Self::get).
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// The cache is `Send + Sync` whenever `K`, `V` and `S` are `Send`, and can be
/// shared through an `Arc`.
///
/// # Example
///
/// ```
/// use lru_arena::{CacheError, ConcurrentLruCache};
///
/// let cache = ConcurrentLruCache::new(2).unwrap();
/// cache.put("a", 1);
/// cache.put("b", 2);
/// assert_eq!(cache.get(&"a"), Ok(1));
/// cache.put("c", 3);
/// assert_eq!(cache.get(&"b"), Err(CacheError::NotFound));
/// ```
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<LruCache<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLruCache<K, V, DefaultHashBuilder> {
    /// Creates a concurrent LRU cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        LruCache::new(capacity).map(Self::from_cache)
    }

    /// Creates a concurrent LRU cache from a configuration with an optional hasher.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if the configured capacity is zero.
    pub fn init(
        config: ConcurrentLruCacheConfig,
        hasher: Option<DefaultHashBuilder>,
    ) -> Result<Self> {
        LruCache::init(config.base, hasher).map(Self::from_cache)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Creates a concurrent LRU cache with a custom hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self> {
        LruCache::with_hasher(capacity, hash_builder).map(Self::from_cache)
    }

    /// Creates a concurrent LRU cache from a configuration and a custom hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if the configured capacity is zero.
    pub fn init_with_hasher(config: ConcurrentLruCacheConfig, hash_builder: S) -> Result<Self> {
        LruCache::init_with_hasher(config.base, hash_builder).map(Self::from_cache)
    }

    /// Wraps an existing cache, keeping its contents and recency order.
    pub fn from_cache(cache: LruCache<K, V, S>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Consumes the facade and returns the guarded cache.
    pub fn into_inner(self) -> LruCache<K, V, S> {
        self.inner.into_inner()
    }

    /// Returns the maximum number of entries the cache can hold.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Returns the number of entries currently in the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Retrieves a clone of the value for `key` and marks it as most recently used.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`](crate::CacheError::NotFound) if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Retrieves a value and applies a function to it while holding the lock.
    ///
    /// The entry becomes most recently used. The lock is released after `f` returns.
    ///
    /// ```
    /// use lru_arena::ConcurrentLruCache;
    ///
    /// let cache = ConcurrentLruCache::new(4).unwrap();
    /// cache.put("key", String::from("hello world"));
    /// assert_eq!(cache.get_with(&"key", |v| v.len()), Ok(11));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`](crate::CacheError::NotFound) if the key is absent.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Result<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.inner.lock().get(key).map(f)
    }

    /// Applies a function to a mutable reference to the value while holding the lock.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`](crate::CacheError::NotFound) if the key is absent.
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Result<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.lock().get_mut(key).map(f)
    }

    /// Returns a clone of the value for `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Returns `true` if the cache holds `key`. Does not change recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains(key)
    }

    /// Removes `key`, returning `true` if an entry was removed.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Removes `key` and returns its value.
    pub fn pop<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().pop(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lru()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Inserts or updates a key-value pair and marks it as most recently used.
    ///
    /// Returns the evicted entry if the insertion pushed the least recently
    /// used entry out.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().put(key, value)
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner.try_lock() {
            Some(cache) => f
                .debug_struct("ConcurrentLruCache")
                .field("inner", &*cache)
                .finish(),
            None => f
                .debug_struct("ConcurrentLruCache")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}
