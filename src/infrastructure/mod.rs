//! Infrastructure layer for data sources and external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`catalog`] - Built-in product catalog ([`crate::domain::repositories::CatalogRepository`])
//! - [`content`] - Built-in site content tables
//! - [`contact`] - Contact inquiry gateway ([`crate::domain::repositories::ContactGateway`])

pub mod catalog;
pub mod contact;
pub mod content;
