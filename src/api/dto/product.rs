//! DTOs for product endpoints.

use crate::application::services::NewProductInput;
use crate::domain::entities::{Product, ProductPatch};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Validates that a price is strictly positive.
///
/// `validator`'s `range` rule does not cover `Decimal`, so the bound is
/// enforced with a custom function.
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("price_not_positive");
        err.message = Some("Price must be greater than 0".into());
        Err(err)
    }
}

/// Request body for `POST /products`.
///
/// All fields are required; the id is generated server-side.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    /// Price as a JSON number, parsed exactly into a decimal.
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    #[validate(range(min = 0, message = "Stock quantity must not be negative"))]
    pub stock_quantity: i32,
}

impl From<CreateProductRequest> for NewProductInput {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            stock_quantity: req.stock_quantity,
        }
    }
}

/// Request body for `PUT /products/{id}`.
///
/// All fields are optional — only provided fields are changed. An explicit
/// zero is a value, not an omission: `{"stock_quantity": 0}` sets the stock
/// to zero, while leaving the key out keeps the current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom(function = "validate_price"))]
    pub price: Option<Decimal>,

    #[validate(range(min = 0, message = "Stock quantity must not be negative"))]
    pub stock_quantity: Option<i32>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            stock_quantity: req.stock_quantity,
        }
    }
}

/// JSON representation of a product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock_quantity: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock_quantity: product.stock_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_request_valid() {
        let req = CreateProductRequest {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: dec!(19.99),
            stock_quantity: 50,
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let req = CreateProductRequest {
            name: String::new(),
            description: "A widget".to_string(),
            price: dec!(19.99),
            stock_quantity: 50,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_nonpositive_price() {
        let req = CreateProductRequest {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: Decimal::ZERO,
            stock_quantity: 50,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_negative_stock() {
        let req = CreateProductRequest {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: dec!(19.99),
            stock_quantity: -1,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_absent_fields_deserialize_to_none() {
        let req: UpdateProductRequest = serde_json::from_str(r#"{"price": 25.0}"#).unwrap();

        assert_eq!(req.price, Some(dec!(25.0)));
        assert!(req.name.is_none());
        assert!(req.description.is_none());
        assert!(req.stock_quantity.is_none());
    }

    #[test]
    fn test_update_request_explicit_zero_stock_is_present() {
        let req: UpdateProductRequest =
            serde_json::from_str(r#"{"stock_quantity": 0}"#).unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.stock_quantity, Some(0));

        let patch: ProductPatch = req.into();
        assert_eq!(patch.stock_quantity, Some(0));
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_update_request_empty_body_is_empty_patch() {
        let req: UpdateProductRequest = serde_json::from_str("{}").unwrap();

        let patch: ProductPatch = req.into();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_update_request_validates_present_fields_only() {
        let req: UpdateProductRequest = serde_json::from_str(r#"{"price": -1.0}"#).unwrap();

        assert!(req.validate().is_err());
    }
}
