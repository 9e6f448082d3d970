//! Shared application state passed to all handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{
    CatalogService, ContactService, ContentService, RotationService, RotationSpec,
};
use crate::config::Config;
use crate::infrastructure::catalog::StaticCatalog;
use crate::infrastructure::contact::LoggingContactGateway;
use crate::infrastructure::content::builtin_content;

/// Values the templates need from the configuration.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub name: String,
    pub contact_reset: Duration,
}

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService<StaticCatalog>>,
    pub content_service: Arc<ContentService>,
    pub contact_service: Arc<ContactService<LoggingContactGateway>>,
    pub rotation_service: Arc<RotationService>,
    pub site: Arc<SiteSettings>,
}

impl AppState {
    /// Builds the state from the built-in catalog and content.
    ///
    /// The carousels are idle until [`RotationService::start`] is called.
    pub fn new(config: &Config) -> Self {
        let content = Arc::new(builtin_content());

        let rotation_service = RotationService::new(
            RotationSpec {
                slides: content.hero_slides.len(),
                cadence: config.hero_rotation(),
            },
            RotationSpec {
                slides: content.showcase_images.len(),
                cadence: config.showcase_rotation(),
            },
        );

        Self {
            catalog_service: Arc::new(CatalogService::new(Arc::new(StaticCatalog::builtin()))),
            content_service: Arc::new(ContentService::new(content)),
            contact_service: Arc::new(ContactService::new(Arc::new(LoggingContactGateway::new()))),
            rotation_service: Arc::new(rotation_service),
            site: Arc::new(SiteSettings {
                name: config.site_name.clone(),
                contact_reset: config.contact_reset(),
            }),
        }
    }
}
