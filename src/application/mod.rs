//! Application layer services implementing the site's behavior.
//!
//! Services consume repository traits and expose a small API to the HTTP
//! handlers and the catalog CLI.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Category resolution and catalog reads
//! - [`services::category_browser::CategoryBrowser`] - Product detail view state
//! - [`services::content_service::ContentService`] - Page content and the news feed
//! - [`services::contact_service::ContactService`] - Contact inquiry validation and delivery
//! - [`services::rotation_service::RotationService`] - Timed carousel rotation

pub mod services;
