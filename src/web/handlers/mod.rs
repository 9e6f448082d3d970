//! HTML page handlers.
//!
//! Templates borrow from the shared state, so handlers render them before
//! returning.

mod about;
mod contact;
mod home;
mod news;
mod product_detail;

pub use about::about_handler;
pub use contact::{contact_page_handler, contact_submit_handler};
pub use home::home_handler;
pub use news::news_handler;
pub use product_detail::product_detail_handler;
