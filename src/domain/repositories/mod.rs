//! Repository and gateway trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure`.
//!
//! # Available Traits
//!
//! - [`CatalogRepository`] - Read-only product catalog
//! - [`ContactGateway`] - Delivery of contact inquiries

pub mod catalog_repository;
pub mod contact_gateway;

pub use catalog_repository::CatalogRepository;
pub use contact_gateway::{ContactError, ContactGateway, ContactReceipt};

#[cfg(test)]
pub use contact_gateway::MockContactGateway;
