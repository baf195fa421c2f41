//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without I/O concerns.
//!
//! # Entity Types
//!
//! - [`Product`] - A catalog item
//! - [`NewProduct`] - Input for creating a product
//! - [`ProductPatch`] - Partial update where `None` means "leave unchanged"

pub mod product;

pub use product::{NewProduct, Product, ProductPatch};
