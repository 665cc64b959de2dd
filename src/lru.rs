//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a bounded LRU cache with O(1) operations for all common
//! cache operations. LRU is one of the most widely used cache eviction algorithms
//! due to its simplicity and good performance for workloads with temporal locality.
//!
//! # Algorithm
//!
//! The cache maintains items in order of recency of use, evicting the least recently
//! used item when an insertion would exceed capacity. Two structures are kept in
//! lock-step:
//!
//! ```text
//!   index: HashMap<K, slot>
//!        │
//!        ▼
//!   ┌────────┐   ┌────────┐   ┌────────┐   ┌────────┐
//!   │ FRONT  │◀─▶│ (k, v) │◀─▶│ (k, v) │◀─▶│  BACK  │
//!   │ slot 0 │   │  MRU   │   │  LRU   │   │ slot 1 │
//!   └────────┘   └────────┘   └────────┘   └────────┘
//! ```
//!
//! Entries live in a single arena and link to each other by slot index. The two
//! sentinel slots are never removed, so the most and least recently used entries
//! are always one hop away. Vacated slots are recycled through a free list.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache, reserved at construction
//!   - Keys are stored twice (index and entry), so `K: Clone` is required for insertion
//!
//! # When to Use
//!
//! LRU caches are ideal for:
//! - General-purpose caching where access patterns exhibit temporal locality
//! - Caching with a fixed entry budget
//!
//! They are less suitable for:
//! - Workloads where frequency of access is more important than recency
//! - Scanning patterns where a large set of items is accessed once in sequence
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. Every operation, including [`LruCache::get`],
//! takes `&mut self` because lookups reorder the recency list. For concurrent access,
//! wrap the cache in a `Mutex` (not an `RwLock`: reads are writes here), or enable the
//! `concurrent` feature and use `ConcurrentLruCache`.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::{CacheError, Result};
use crate::list::{self, List};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::num::NonZeroUsize;
use log::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and removing entries. When the cache reaches capacity,
/// the least recently used entry is evicted to make room for new entries.
///
/// # Examples
///
/// ```
/// use lru_arena::{CacheError, LruCache};
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// // Add items to the cache
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Ok(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// assert_eq!(cache.put("cherry", 3), Some(("banana", 2)));
/// assert_eq!(cache.get(&"banana"), Err(CacheError::NotFound));
/// assert_eq!(cache.get(&"apple"), Ok(&1));
/// assert_eq!(cache.get(&"cherry"), Ok(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    list: List<(K, V)>,
    map: HashMap<K, usize, S>,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a new LRU cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lru_arena::{CacheError, LruCache};
    ///
    /// let cache: LruCache<&str, i32> = LruCache::new(3).unwrap();
    /// assert_eq!(cache.capacity(), 3);
    /// assert!(cache.is_empty());
    ///
    /// assert_eq!(
    ///     LruCache::<&str, i32>::new(0).unwrap_err(),
    ///     CacheError::InvalidCapacity
    /// );
    /// ```
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a new LRU cache whose capacity is already known to be positive.
    pub fn from_non_zero(cap: NonZeroUsize) -> Self {
        Self::with_hasher_non_zero(cap, DefaultHashBuilder::default())
    }

    /// Creates a new LRU cache from a configuration with an optional hasher.
    ///
    /// If `hasher` is `None`, uses `DefaultHashBuilder`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if `config.capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lru_arena::config::LruCacheConfig;
    /// use lru_arena::LruCache;
    ///
    /// let config = LruCacheConfig { capacity: 100 };
    /// let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Result<Self> {
        Self::with_hasher(config.capacity, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified capacity and hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self> {
        let cap = NonZeroUsize::new(capacity).ok_or(CacheError::InvalidCapacity)?;
        Ok(Self::with_hasher_non_zero(cap, hash_builder))
    }

    /// Creates a new LRU cache from a configuration and a custom hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if `config.capacity` is zero.
    pub fn init_with_hasher(config: LruCacheConfig, hash_builder: S) -> Result<Self> {
        Self::with_hasher(config.capacity, hash_builder)
    }

    fn with_hasher_non_zero(cap: NonZeroUsize, hash_builder: S) -> Self {
        debug!("creating LRU cache with capacity {}", cap);
        LruCache {
            list: List::new(cap),
            map: HashMap::with_capacity_and_hasher(cap.get(), hash_builder),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.list.cap().get()
    }

    /// Returns the number of entries currently in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the value for `key` and marks it as most recently used.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`] if the key is absent. A miss leaves the
    /// cache untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = *self.map.get(key).ok_or(CacheError::NotFound)?;
        self.list.move_to_front(idx);
        self.list
            .get(idx)
            .map(|(_, v)| v)
            .ok_or(CacheError::NotFound)
    }

    /// Returns a mutable reference to the value for `key` and marks it as most
    /// recently used.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NotFound`] if the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = *self.map.get(key).ok_or(CacheError::NotFound)?;
        self.list.move_to_front(idx);
        self.list
            .get_mut(idx)
            .map(|(_, v)| v)
            .ok_or(CacheError::NotFound)
    }

    /// Returns the value for `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = *self.map.get(key)?;
        self.list.get(idx).map(|(_, v)| v)
    }

    /// Returns `true` if the cache holds `key`. Does not change recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the entry that the next eviction would remove, without
    /// changing its recency.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let idx = self.list.back()?;
        self.list.get(idx).map(|(k, v)| (k, v))
    }

    /// Removes `key` from the cache.
    ///
    /// Returns `true` if an entry was removed, `false` if the key was absent.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.pop(key).is_some()
    }

    /// Removes `key` from the cache and returns its value.
    pub fn pop<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.map.remove(key)?;
        let (_, value) = self.list.remove(idx)?;
        trace!("removed entry from slot {}", idx);
        Some(value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let idx = self.list.back()?;
        let (key, value) = self.list.remove(idx)?;
        self.map.remove(&key);
        trace!("evicted least recently used entry from slot {}", idx);
        Some((key, value))
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        debug!("clearing LRU cache of {} entries", self.map.len());
        self.map.clear();
        self.list.clear();
    }

    /// Iterates entries from most to least recently used.
    ///
    /// Iteration does not change recency.
    ///
    /// # Examples
    ///
    /// ```
    /// use lru_arena::LruCache;
    ///
    /// let mut cache = LruCache::new(3).unwrap();
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.put("c", 3);
    /// let _ = cache.get(&"a");
    ///
    /// let keys: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, ["a", "c", "b"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Checks that the index and the recency list describe the same entries.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> bool {
        self.map.len() == self.list.len()
            && self.list.len() <= self.capacity()
            && self.list.check_links()
            && self
                .map
                .iter()
                .all(|(key, &idx)| self.list.get(idx).is_some_and(|(k, _)| k == key))
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or updates a key-value pair and marks it as most recently used.
    ///
    /// If `key` is already present its value is replaced (the old value is
    /// dropped) and the entry count is unchanged. If `key` is new and the cache
    /// is full, the least recently used entry is evicted first.
    ///
    /// # Returns
    ///
    /// - `Some((evicted_key, evicted_value))` if an entry was evicted to make room
    /// - `None` otherwise
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(entry) = self.list.get_mut(idx) {
                entry.1 = value;
            }
            self.list.move_to_front(idx);
            return None;
        }

        let evicted = if self.list.is_full() {
            self.pop_lru()
        } else {
            None
        };

        if let Some(idx) = self.list.push_front((key.clone(), value)) {
            self.map.insert(key, idx);
        }

        evicted
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.list.cap())
            .field("len", &self.list.len())
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// An iterator over the entries of an [`LruCache`], from most to least
/// recently used.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
