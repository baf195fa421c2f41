//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ProductService;
use crate::infrastructure::cache::CacheService;

/// Shared state available to all request handlers.
///
/// Cloning is cheap: everything inside is reference-counted. The cache
/// handle is kept alongside the service so the health endpoint can probe it
/// directly.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Creates application state from its shared components.
    pub fn new(product_service: Arc<ProductService>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            product_service,
            cache,
        }
    }
}
