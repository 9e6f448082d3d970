//! News & Events page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::domain::entities::{NewsCategory, NewsItem};
use crate::state::AppState;
use crate::web::view::Layout;

/// Query parameters of the news page.
#[derive(Debug, Default, Deserialize)]
pub struct NewsPageParams {
    #[serde(default)]
    pub category: Option<String>,
}

/// A category filter link.
#[derive(Debug, Clone)]
pub struct FilterLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Template for the news page: one featured article, then the rest in a grid.
#[derive(Template, WebTemplate)]
#[template(path = "news_events.html")]
pub struct NewsTemplate<'a> {
    pub layout: Layout,
    pub featured: Option<&'a NewsItem>,
    pub items: Vec<&'a NewsItem>,
    pub filters: Vec<FilterLink>,
}

/// Renders the news page.
///
/// # Endpoint
///
/// `GET /news-events[?category=<label>]`
///
/// An unrecognised category shows every entry.
pub async fn news_handler(
    State(state): State<AppState>,
    Query(params): Query<NewsPageParams>,
) -> Response {
    let category = NewsCategory::parse_filter(params.category.as_deref()).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Ignoring news category filter");
        None
    });

    let mut items = state.content_service.news(category);
    let featured = (!items.is_empty()).then(|| items.remove(0));

    NewsTemplate {
        layout: Layout::new(&state, "News & Events", "news"),
        featured,
        items,
        filters: filter_links(category),
    }
    .into_response()
}

fn filter_links(active: Option<NewsCategory>) -> Vec<FilterLink> {
    let all = FilterLink {
        label: "All",
        href: "/news-events".to_string(),
        active: active.is_none(),
    };

    std::iter::once(all)
        .chain(NewsCategory::ALL.into_iter().map(|category| FilterLink {
            label: category.label(),
            href: format!(
                "/news-events?category={}",
                category.label().to_ascii_lowercase().replace(' ', "-")
            ),
            active: active == Some(category),
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_links() {
        let links = filter_links(Some(NewsCategory::ProductLaunch));
        assert_eq!(links.len(), NewsCategory::ALL.len() + 1);
        assert!(!links[0].active);

        let launch = links.iter().find(|l| l.active).unwrap();
        assert_eq!(launch.label, "Product Launch");
        assert_eq!(launch.href, "/news-events?category=product-launch");
        assert!(launch.href.trim_start_matches("/news-events?category=").parse::<NewsCategory>().is_ok());
    }
}
