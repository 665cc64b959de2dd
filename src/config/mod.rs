//! Cache Configuration Module
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Validated once**: Values are checked when the cache is built, and an
//!   invalid configuration yields [`CacheError`](crate::CacheError) instead of a cache
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | `ConcurrentLruCacheConfig` | `ConcurrentLruCache` | Lock-guarded LRU (requires `concurrent`) |
//!
//! # Examples
//!
//! ```
//! use lru_arena::config::LruCacheConfig;
//! use lru_arena::{CacheError, LruCache};
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None).unwrap();
//! assert!(cache.is_empty());
//!
//! let bad = LruCacheConfig { capacity: 0 };
//! assert_eq!(
//!     LruCache::<String, i32>::init(bad, None).unwrap_err(),
//!     CacheError::InvalidCapacity
//! );
//! ```

pub mod lru;

#[cfg(feature = "concurrent")]
pub mod concurrent_lru;

pub use lru::LruCacheConfig;

#[cfg(feature = "concurrent")]
pub use concurrent_lru::ConcurrentLruCacheConfig;

/// Generic configuration wrapper for concurrent caches.
///
/// Wraps a base cache configuration. The concurrent facade guards the whole
/// cache with one lock, so `base` fully describes the guarded cache.
#[cfg(feature = "concurrent")]
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcurrentCacheConfig<C> {
    /// Base configuration for the underlying cache algorithm
    pub base: C,
}

#[cfg(feature = "concurrent")]
impl<C> ConcurrentCacheConfig<C> {
    /// Wraps a base configuration.
    pub const fn new(base: C) -> Self {
        Self { base }
    }
}

#[cfg(feature = "concurrent")]
impl<C: core::fmt::Debug> core::fmt::Debug for ConcurrentCacheConfig<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentCacheConfig")
            .field("base", &self.base)
            .finish()
    }
}
