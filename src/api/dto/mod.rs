//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod health;
pub mod news;
