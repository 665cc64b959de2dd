//! Configuration for the concurrent Least Recently Used (LRU) cache.
//!
//! The concurrent cache guards a single LRU cache with one lock, so its
//! configuration is the base LRU configuration wrapped in
//! [`ConcurrentCacheConfig`](super::ConcurrentCacheConfig).
//!
//! # Examples
//!
//! ```
//! use lru_arena::config::{ConcurrentLruCacheConfig, LruCacheConfig};
//! use lru_arena::ConcurrentLruCache;
//!
//! let config = ConcurrentLruCacheConfig::new(LruCacheConfig::new(10_000));
//! let cache: ConcurrentLruCache<String, i32> = ConcurrentLruCache::init(config, None).unwrap();
//! assert_eq!(cache.capacity(), 10_000);
//! ```

use super::{ConcurrentCacheConfig, LruCacheConfig};

/// Configuration for a concurrent LRU cache.
/// Type alias for `ConcurrentCacheConfig<LruCacheConfig>`.
pub type ConcurrentLruCacheConfig = ConcurrentCacheConfig<LruCacheConfig>;

impl ConcurrentLruCacheConfig {
    /// Returns the total entry capacity of the guarded cache.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.base.capacity
    }
}
