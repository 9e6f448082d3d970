//! Built-in site content tables.

mod static_content;

pub use static_content::builtin_content;
