//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::application::services::CarouselName;
use crate::domain::entities::{SiteContent, Slide};
use crate::state::AppState;
use crate::web::view::{CarouselView, Layout, parse_index};

/// Query parameters of the home page.
///
/// Each parameter pins a carousel to one slide for this view only. Values
/// that are not slide indexes are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    #[serde(default)]
    pub slide: Option<String>,

    #[serde(default)]
    pub showcase: Option<String>,
}

/// Template for the home page.
///
/// Renders `templates/home.html`:
/// - Hero with rotating slides and headline stats
/// - "Why choose us" highlights beside the showcase image carousel
/// - Featured products
/// - Industries served and partner logos
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub layout: Layout,
    pub content: &'a SiteContent,
    pub hero: CarouselView,
    pub hero_slide: Option<&'a Slide>,
    pub showcase: CarouselView,
    pub showcase_image: Option<&'a str>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /[?slide=<n>][&showcase=<n>]`
///
/// Without parameters both carousels show the shared rotation position.
pub async fn home_handler(
    State(state): State<AppState>,
    Query(params): Query<HomeParams>,
) -> Response {
    let content = state.content_service.content();
    let rotation = &state.rotation_service;

    let hero = CarouselView::new(
        rotation.position(CarouselName::Hero),
        parse_index("slide", params.slide.as_deref()),
    );
    let showcase = CarouselView::new(
        rotation.position(CarouselName::Showcase),
        parse_index("showcase", params.showcase.as_deref()),
    );

    HomeTemplate {
        layout: Layout::new(&state, "Home", "home"),
        content,
        hero_slide: content.hero_slides.get(hero.current),
        hero,
        showcase_image: content
            .showcase_images
            .get(showcase.current)
            .map(String::as_str),
        showcase,
    }
    .into_response()
}
