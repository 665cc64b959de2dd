//! Error types for cache operations.
//!
//! Only two conditions are reported as errors:
//!
//! - [`CacheError::InvalidCapacity`] is returned by the constructors when the
//!   requested capacity is zero. No cache is produced.
//! - [`CacheError::NotFound`] is returned by lookups that miss. The cache is
//!   left exactly as it was before the call.
//!
//! Insertion never fails once a cache exists, and removal reports absence
//! through its `bool` result rather than an error.

use thiserror::Error;

/// Errors returned by [`LruCache`](crate::LruCache) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheError {
    /// The requested capacity was not a positive number of entries.
    #[error("capacity must be greater than 0")]
    InvalidCapacity,

    /// The requested key is not present in the cache.
    #[error("key not found")]
    NotFound,
}

/// Result type alias for cache operations.
pub type Result<T> = core::result::Result<T, CacheError>;
