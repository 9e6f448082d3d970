//! Core domain entities representing the site's data model.
//!
//! Entities are plain data structures, immutable once the catalog and the
//! content tables are built at startup.
//!
//! # Entity Types
//!
//! - [`ProductRecord`] / [`VariantRecord`] - Catalog products and their selectable models
//! - [`Category`] - A catalog category and its ordered product list
//! - [`NewsItem`] - A news or event entry
//! - [`SiteContent`] - Display-only records (partners, slides, stats, ...)
//! - [`IconKind`] - Icon identifiers used as data

pub mod category;
pub mod content;
pub mod icon;
pub mod news;
pub mod product;

pub use category::{Category, CategorySummary};
pub use content::{
    ContactChannel, CoreValue, Highlight, Industry, NavProduct, PartnerRef, ShowcaseItem,
    SiteContent, Slide, Stat, Testimonial,
};
pub use icon::IconKind;
pub use news::{NewsCategory, NewsItem, UnknownNewsCategory};
pub use product::{DisplayFields, Feature, ProductRecord, VariantRecord};
