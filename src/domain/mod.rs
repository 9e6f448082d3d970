//! Domain layer containing the catalog model and view-state logic.
//!
//! The domain layer has no dependencies on the web or infrastructure layers.
//!
//! # Architecture
//!
//! - [`entities`] - Products, categories, news and other content records
//! - [`repositories`] - Catalog and contact trait definitions
//! - [`variant_selector`] - Active-variant tracking and display-field derivation
//! - [`carousel`] - Wrapping slide positions and their background ticker
//! - [`contact`] - Contact inquiries and form state
//!
//! # Lookup Flow
//!
//! 1. A request carries a category identifier (`?product=<slug>`)
//! 2. [`crate::application::services::CatalogService`] resolves it, falling back to the default category
//! 3. [`repositories::CatalogRepository`] returns the ordered product list
//! 4. One [`variant_selector::VariantSelector`] per product derives what is displayed

pub mod carousel;
pub mod contact;
pub mod entities;
pub mod repositories;
pub mod variant_selector;
