//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::Product;
use async_trait::async_trait;
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Redis cache implementation for fast product lookups.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Entries are JSON-encoded [`Product`]s stored under `product:{id}`
/// keys with a TTL, so expiry is handled by Redis itself.
///
/// All operations are fail-open: errors are logged but don't propagate to
/// callers. A GET that fails to connect or returns an undecodable payload is
/// indistinguishable from a miss.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// The connection carries its own connect/response timeouts so a slow or
    /// unreachable Redis stalls only the cache call, which then degrades to a
    /// miss, never the whole request.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied to cached entries when
    ///   [`CacheService::set_product`] is called with `ttl_seconds = None`;
    ///   controlled via `CACHE_TTL_SECONDS` env var
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let config = ConnectionManagerConfig::new()
            .set_connection_timeout(Some(Duration::from_secs(5)))
            .set_response_timeout(Some(Duration::from_secs(2)));

        let manager = ConnectionManager::new_with_config(client, config)
            .await
            .map_err(|e| {
                CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
            })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "product:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    ///
    /// The same construction serves get, set, and invalidate, which is what
    /// guarantees a write-path eviction hits the entry a read populated.
    fn build_key(&self, id: &str) -> String {
        format!("{}{}", self.key_prefix, id)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_product(&self, id: &str) -> CacheResult<Option<Product>> {
        let key = self.build_key(id);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(payload)) => match serde_json::from_str::<Product>(&payload) {
                Ok(product) => {
                    debug!("Cache HIT: {}", id);
                    Ok(Some(product))
                }
                Err(e) => {
                    // Corrupt entry: treat as a miss and let the next
                    // populate overwrite it.
                    warn!("Cache entry for {} is not a valid product: {}", id, e);
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", id);
                Ok(None)
            }
            Err(e) => {
                warn!("Redis GET error for {}: {}", id, e);
                Ok(None)
            }
        }
    }

    async fn set_product(&self, product: &Product, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let key = self.build_key(&product.id);
        let mut conn = self.client.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        let payload = match serde_json::to_string(product) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize product {} for cache: {}", product.id, e);
                return Ok(());
            }
        };

        match conn.set_ex::<_, _, ()>(&key, payload, ttl).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", product.id, ttl);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", product.id, e);
                Ok(())
            }
        }
    }

    async fn invalidate(&self, id: &str) -> CacheResult<()> {
        let key = self.build_key(id);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&key).await {
            Ok(deleted) => {
                if deleted > 0 {
                    debug!("Cache INVALIDATE: {}", id);
                }
                Ok(())
            }
            Err(e) => {
                warn!("Redis DEL error for {}: {}", id, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
