//! About page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::domain::entities::SiteContent;
use crate::state::AppState;
use crate::web::view::Layout;

/// Founder story, company stats and core values.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub layout: Layout,
    pub content: &'a SiteContent,
}

/// Renders the about page.
///
/// # Endpoint
///
/// `GET /about`
pub async fn about_handler(State(state): State<AppState>) -> Response {
    AboutTemplate {
        layout: Layout::new(&state, "About Us", "about"),
        content: state.content_service.content(),
    }
    .into_response()
}
