//! Repository trait for product data access.

use crate::domain::entities::{NewProduct, Product};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the authoritative product store.
///
/// The store is the single source of truth: cached copies are derived from it
/// and never written back. All operations are single-row CRUD by primary key.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts a new product row.
    ///
    /// Returns the entity as stored, so store-assigned defaults are reflected
    /// in the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the generated id collides with an
    /// existing row. Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Finds a product by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError>;

    /// Writes a full merged row back to the store.
    ///
    /// Returns `Ok(None)` when the row no longer exists (deleted between the
    /// caller's read and this write).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, product: &Product) -> Result<Option<Product>, AppError>;

    /// Deletes a product row by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Counts all product rows.
    ///
    /// Used by startup seeding and the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
