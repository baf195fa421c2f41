//! Product entity representing a catalog item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product with immutable identity and mutable attributes.
///
/// The `id` is assigned once at creation and never reassigned. All other
/// fields change only through [`ProductPatch`]. Serde derives exist because
/// cached copies are stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i32,
}

impl Product {
    /// Creates a new Product instance.
    pub fn new(
        id: String,
        name: String,
        description: String,
        price: Decimal,
        stock_quantity: i32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock_quantity,
        }
    }

    /// Applies a partial update, overwriting only the fields the patch carries.
    ///
    /// Zero values are applied like any other value: `stock_quantity: Some(0)`
    /// sets the stock to zero, while `None` leaves it untouched.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock_quantity) = patch.stock_quantity {
            self.stock_quantity = stock_quantity;
        }
    }
}

/// Input data for creating a new product.
///
/// Carries the identifier already generated by the service, so inserting
/// never needs a store round-trip to mint an id.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i32,
}

/// Partial update for an existing product.
///
/// `None` fields are left unchanged. Every product attribute is non-nullable,
/// so a single `Option` per field distinguishes "not provided" from
/// "set to this value".
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
}

impl ProductPatch {
    /// Returns true when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock_quantity.is_none()
    }
}
