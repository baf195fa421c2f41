//! Cache service trait and error types.

use crate::domain::entities::Product;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// These exist so implementations can report failures as ordinary values
/// instead of suppressing exceptions internally; callers are expected to
/// treat any of them as a cache miss.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching product entities.
///
/// The cache is never a source of truth: entries are derived from the store
/// on read misses and evicted (not updated) on writes. Implementations must
/// be thread-safe and fail-open — cache failures degrade to store lookups
/// and must never disrupt a request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached product by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(product))` on cache hit
    /// - `Ok(None)` on cache miss, connection failure, or a corrupt entry
    ///   (fail-open behavior)
    ///
    /// # Errors
    ///
    /// Should not return errors in production implementations. Errors are
    /// logged and treated as cache misses.
    async fn get_product(&self, id: &str) -> CacheResult<Option<Product>>;

    /// Stores a product in cache with optional TTL.
    ///
    /// # Arguments
    ///
    /// - `product` - The entity to cache, keyed by its id
    /// - `ttl_seconds` - Optional TTL in seconds (implementation-specific default if None)
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations should log errors
    /// and return `Ok(())` to avoid disrupting the request flow.
    async fn set_product(&self, product: &Product, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Removes a cached product entry.
    ///
    /// Used when a product is created, updated, or deleted so the next read
    /// repopulates from the authoritative store.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn invalidate(&self, id: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;
}
