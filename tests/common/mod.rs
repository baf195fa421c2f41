#![allow(dead_code)]

//! In-memory fakes for driving the service and HTTP layer without
//! PostgreSQL or Redis.

use async_trait::async_trait;
use product_catalog::AppState;
use product_catalog::application::services::ProductService;
use product_catalog::domain::entities::{NewProduct, Product};
use product_catalog::domain::repositories::ProductRepository;
use product_catalog::error::AppError;
use product_catalog::infrastructure::cache::{CacheError, CacheResult, CacheService};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory product store keyed by id.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<HashMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Reads a row directly, bypassing the service and cache.
    pub fn row(&self, id: &str) -> Option<Product> {
        self.rows.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let product = Product::new(
            new_product.id,
            new_product.name,
            new_product.description,
            new_product.price,
            new_product.stock_quantity,
        );

        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&product.id) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                serde_json::json!({ "id": product.id }),
            ));
        }
        rows.insert(product.id.clone(), product.clone());

        Ok(product)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&product.id) {
            return Ok(None);
        }
        rows.insert(product.id.clone(), product.clone());

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.rows.lock().unwrap().remove(id).is_some())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

/// In-memory cache that records entries so tests can observe population and
/// invalidation. Health is settable to exercise the degraded health path.
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, Product>>,
    healthy: AtomicBool,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            healthy: AtomicBool::new(true),
        }
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.lock().unwrap().contains_key(id)
    }

    /// Reads a cached entry directly, without going through the service.
    pub fn entry(&self, id: &str) -> Option<Product> {
        self.entries.lock().unwrap().get(id).cloned()
    }

    /// Plants an entry directly, simulating a previously populated cache.
    pub fn insert(&self, product: Product) {
        self.entries
            .lock()
            .unwrap()
            .insert(product.id.clone(), product);
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get_product(&self, id: &str) -> CacheResult<Option<Product>> {
        Ok(self.entries.lock().unwrap().get(id).cloned())
    }

    async fn set_product(&self, product: &Product, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        self.insert(product.clone());
        Ok(())
    }

    async fn invalidate(&self, id: &str) -> CacheResult<()> {
        self.entries.lock().unwrap().remove(id);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}

/// Cache whose every operation fails, simulating an unreachable Redis.
pub struct UnavailableCache;

#[async_trait]
impl CacheService for UnavailableCache {
    async fn get_product(&self, _id: &str) -> CacheResult<Option<Product>> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn set_product(&self, _product: &Product, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn invalidate(&self, _id: &str) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Builds a service over fresh fakes, returning the fake handles for
/// inspection.
pub fn create_test_service() -> (
    ProductService,
    Arc<InMemoryProductRepository>,
    Arc<InMemoryCache>,
) {
    let repository = Arc::new(InMemoryProductRepository::new());
    let cache = Arc::new(InMemoryCache::new());
    let service = ProductService::new(repository.clone(), cache.clone());

    (service, repository, cache)
}

/// Builds application state over fresh fakes for HTTP-level tests.
pub fn create_test_state() -> (AppState, Arc<InMemoryProductRepository>, Arc<InMemoryCache>) {
    let repository = Arc::new(InMemoryProductRepository::new());
    let cache = Arc::new(InMemoryCache::new());
    let service = Arc::new(ProductService::new(repository.clone(), cache.clone()));

    (AppState::new(service, cache.clone()), repository, cache)
}

/// Builds application state whose cache always fails.
pub fn create_degraded_state() -> (AppState, Arc<InMemoryProductRepository>) {
    let repository = Arc::new(InMemoryProductRepository::new());
    let cache = Arc::new(UnavailableCache);
    let service = Arc::new(ProductService::new(repository.clone(), cache.clone()));

    (AppState::new(service, cache), repository)
}

/// Creates a product in the store through the repository fake.
pub async fn seed_product(
    repository: &InMemoryProductRepository,
    id: &str,
    name: &str,
    price: Decimal,
    stock_quantity: i32,
) -> Product {
    repository
        .insert(NewProduct {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            price,
            stock_quantity,
        })
        .await
        .unwrap()
}
