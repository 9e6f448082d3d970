//! Built-in product catalog.
//!
//! - [`StaticCatalog`] - In-memory [`crate::domain::repositories::CatalogRepository`]
//! - [`builder`] - Fluent constructors used by the catalog tables and tests

pub mod builder;
mod data;
mod static_catalog;

pub use static_catalog::{CatalogError, StaticCatalog};
