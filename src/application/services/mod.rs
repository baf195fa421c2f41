//! Business logic services for the application layer.

pub mod product_service;

pub use product_service::{NewProductInput, ProductService};
