//! # ScientificSquare
//!
//! Product catalog and brochure site for a laboratory-equipment distributor,
//! built with Axum and Askama.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Catalog entities, variant selection, carousels, contact form
//! - **Application Layer** ([`application`]) - Category resolution, content queries, rotation
//! - **Infrastructure Layer** ([`infrastructure`]) - Built-in catalog and content tables, contact gateway
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered pages
//!
//! ## Features
//!
//! - Catalog categories with per-product model selection
//! - Unknown category identifiers fall back to the default category
//! - Home page carousels rotating in the background
//! - Validated, rate-limited contact form
//! - News & Events with category filtering
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # Browse the catalog from the terminal
//! cargo run --bin catalog -- categories
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CatalogService, ContactService, ContentService, DEFAULT_CATEGORY, RotationService,
    };
    pub use crate::domain::contact::ContactSubmission;
    pub use crate::domain::entities::{Category, NewsCategory, NewsItem, ProductRecord};
    pub use crate::domain::variant_selector::VariantSelector;
    pub use crate::error::AppError;
    pub use crate::infrastructure::catalog::StaticCatalog;
    pub use crate::state::AppState;
}
