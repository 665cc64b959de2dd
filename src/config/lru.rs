//! Configuration for the Least Recently Used (LRU) cache.
//!
//! # Sizing Guidelines
//!
//! `capacity` is the maximum number of entries. The cache reserves its arena
//! and index for exactly that many entries up front, so memory use is roughly:
//!
//! ```text
//! Total Memory ≈ capacity × (size_of::<K>() * 2 + size_of::<V>() + overhead_per_entry)
//! overhead_per_entry ≈ 24-40 bytes (two links, slot tag, index bucket)
//! ```
//!
//! Keys are stored twice (once in the index, once in the entry), so prefer
//! cheap-to-clone keys such as integers, `Arc<str>` or small strings.
//!
//! # Examples
//!
//! ```
//! use lru_arena::config::LruCacheConfig;
//! use lru_arena::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None).unwrap();
//! assert_eq!(cache.capacity(), 1000);
//! ```

use core::fmt;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed item when an insertion would
/// exceed `capacity`.
///
/// A capacity of zero is representable here but rejected by
/// [`LruCache::init`](crate::LruCache::init) with
/// [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity).
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Creates a configuration with the given entry capacity.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_config_creation() {
        let config = LruCacheConfig::new(1000);
        assert_eq!(config.capacity, 1000);
        assert_eq!(config, LruCacheConfig { capacity: 1000 });
    }

    #[test]
    fn test_lru_config_default_is_zero() {
        // Zero is rejected at init time, not here
        assert_eq!(LruCacheConfig::default().capacity, 0);
    }
}
