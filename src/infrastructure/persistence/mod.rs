//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgProductRepository`] - Product storage and retrieval

pub mod pg_product_repository;

pub use pg_product_repository::PgProductRepository;
