//! Product CRUD service implementing the cache-aside protocol.

use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

/// Attribute fields for a product to be created.
///
/// The service generates the id itself, so callers only supply attributes.
#[derive(Debug, Clone)]
pub struct NewProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i32,
}

/// Service orchestrating the product store and cache.
///
/// The store is authoritative; the cache is a read-through derivative.
/// Reads try the cache first and populate it on a store hit. Writes go to
/// the store and then evict (never update) the cached copy, so the next
/// read repopulates from fresh data. Cache failures of any kind degrade to
/// store lookups and are invisible to callers; store failures always
/// propagate.
///
/// Both collaborators are injected as trait objects so tests can drive the
/// service (and the HTTP layer above it) with in-memory fakes.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    cache: Arc<dyn CacheService>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(repository: Arc<dyn ProductRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Creates a product with a freshly generated id.
    ///
    /// The returned entity is the row as read back from the store, so any
    /// store-assigned defaults are reflected. An invalidation is issued for
    /// the new id even though nothing can be cached for it yet; the call is
    /// unconditional on every write path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on an id collision,
    /// [`AppError::Internal`] on database errors.
    pub async fn create_product(&self, input: NewProductInput) -> Result<Product, AppError> {
        let new_product = NewProduct {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            price: input.price,
            stock_quantity: input.stock_quantity,
        };

        let product = self.repository.insert(new_product).await?;

        self.invalidate_entry(&product.id).await;

        Ok(product)
    }

    /// Retrieves a product by id, serving from cache when possible.
    ///
    /// # Read path
    ///
    /// 1. Cache hit → return immediately (fast path).
    /// 2. Cache miss, unavailable, or corrupt → query the store.
    /// 3. Store miss → `Ok(None)`, cache untouched.
    /// 4. Store hit → populate the cache with the default TTL (failure to
    ///    populate is logged, not surfaced) and return the entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Cache errors never
    /// surface here.
    pub async fn get_product(&self, id: &str) -> Result<Option<Product>, AppError> {
        match self.cache.get_product(id).await {
            Ok(Some(product)) => return Ok(Some(product)),
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, id, "Cache lookup failed, falling back to store");
            }
        }

        let Some(product) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Err(e) = self.cache.set_product(&product, None).await {
            warn!(error = %e, id, "Failed to populate cache");
        }

        Ok(Some(product))
    }

    /// Applies a partial update to an existing product.
    ///
    /// Read-modify-write against the store: only fields present in the patch
    /// are changed, `Some(0)` counts as present. The cache entry is evicted
    /// strictly after the store write succeeds; if the store write fails,
    /// the error propagates and no invalidation runs, so the cache is never
    /// cleared for a write that did not commit.
    ///
    /// Returns `Ok(None)` when no row exists for `id`, including the race
    /// where the row disappears between the read and the write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_product(
        &self,
        id: &str,
        patch: ProductPatch,
    ) -> Result<Option<Product>, AppError> {
        let Some(mut product) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        product.apply(patch);

        let Some(updated) = self.repository.update(&product).await? else {
            return Ok(None);
        };

        self.invalidate_entry(id).await;

        Ok(Some(updated))
    }

    /// Deletes a product by id.
    ///
    /// Returns whether a row was actually removed. The cache entry is
    /// evicted only after the store confirms a removal; deleting a
    /// nonexistent id leaves both store and cache untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_product(&self, id: &str) -> Result<bool, AppError> {
        if !self.repository.delete(id).await? {
            return Ok(false);
        }

        self.invalidate_entry(id).await;

        Ok(true)
    }

    /// Counts products in the store.
    ///
    /// Used by the health check to probe database connectivity.
    pub async fn count_products(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Inserts sample products when the table is empty.
    ///
    /// Runs once at startup so a fresh deployment has data to serve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn seed_if_empty(&self) -> Result<(), AppError> {
        if self.repository.count().await? > 0 {
            return Ok(());
        }

        debug!("Products table is empty, seeding sample data");

        for (name, description, price, stock_quantity) in [
            ("Sample Product A", "Seed product A", Decimal::new(1999, 2), 50),
            ("Sample Product B", "Seed product B", Decimal::new(2999, 2), 30),
            ("Sample Product C", "Seed product C", Decimal::new(3999, 2), 10),
        ] {
            self.repository
                .insert(NewProduct {
                    id: Uuid::new_v4().to_string(),
                    name: name.to_string(),
                    description: description.to_string(),
                    price,
                    stock_quantity,
                })
                .await?;
        }

        Ok(())
    }

    /// Evicts the cache entry for `id`, logging (not raising) failures.
    async fn invalidate_entry(&self, id: &str) {
        if let Err(e) = self.cache.invalidate(id).await {
            warn!(error = %e, id, "Failed to invalidate cache");
        }
    }
}
