//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository and
//! cache calls. Services consume the domain traits and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::product_service::ProductService`] - Product CRUD with cache-aside caching

pub mod services;
