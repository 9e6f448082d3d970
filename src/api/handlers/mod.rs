//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod carousels;
pub mod catalog;
pub mod contact;
pub mod health;
pub mod news;

pub use carousels::carousel_handler;
pub use catalog::{
    category_handler, category_list_handler, resolve_category_handler, variant_handler,
};
pub use contact::contact_handler;
pub use health::health_handler;
pub use news::news_list_handler;
