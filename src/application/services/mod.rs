//! Business logic services for the application layer.

pub mod catalog_service;
pub mod category_browser;
pub mod contact_service;
pub mod content_service;
pub mod rotation_service;

pub use catalog_service::{CatalogService, DEFAULT_CATEGORY, Resolution};
pub use category_browser::CategoryBrowser;
pub use contact_service::ContactService;
pub use content_service::ContentService;
pub use rotation_service::{CarouselName, RotationService, RotationSpec};
