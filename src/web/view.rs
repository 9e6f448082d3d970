//! Shared page chrome and small view helpers.

use chrono::{Datelike, Utc};
use url::form_urlencoded;

use crate::domain::carousel::Carousel;
use crate::domain::entities::NavProduct;
use crate::state::AppState;

/// Header and footer data rendered by `base.html`.
#[derive(Debug, Clone)]
pub struct Layout {
    pub site_name: String,
    pub page_title: String,
    /// Key of the highlighted navigation entry.
    pub active: &'static str,
    pub nav_products: Vec<NavProduct>,
    pub contact_email: String,
    pub year: i32,
}

impl Layout {
    pub fn new(state: &AppState, page_title: impl Into<String>, active: &'static str) -> Self {
        let content = state.content_service.content();
        Self {
            site_name: state.site.name.clone(),
            page_title: page_title.into(),
            active,
            nav_products: content.nav_products.clone(),
            contact_email: content.contact_email.clone(),
            year: Utc::now().year(),
        }
    }

    /// Link to the product page for a menu entry.
    pub fn product_href(&self, slug: &str) -> String {
        product_detail_href(slug, None)
    }
}

/// `/products/detail?product=<slug>`, optionally with a variant selection.
pub fn product_detail_href(slug: &str, selection: Option<(usize, &str)>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("product", slug);
    if let Some((item, variant)) = selection {
        query.append_pair("item", &item.to_string());
        query.append_pair("variant", variant);
    }
    format!("/products/detail?{}", query.finish())
}

/// Parses a zero-based index from a query value.
///
/// Blank and malformed values count as absent so that a bad link still
/// renders the page.
pub fn parse_index(param: &'static str, raw: Option<&str>) -> Option<usize> {
    let value = raw.map(str::trim).filter(|s| !s.is_empty())?;
    value
        .parse()
        .inspect_err(|e| tracing::debug!(param, value, error = %e, "Ignoring malformed index"))
        .ok()
}

/// A carousel as rendered for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub current: usize,
    pub prev: usize,
    pub next: usize,
    /// One entry per slide; true for the current one.
    pub indicators: Vec<bool>,
}

impl CarouselView {
    /// Uses `requested` when it names a slide, otherwise the shared position.
    pub fn new(shared: Carousel, requested: Option<usize>) -> Self {
        let mut carousel = shared;
        if let Some(index) = requested
            && carousel.go_to(index).is_err()
        {
            tracing::debug!(index, len = carousel.len(), "Ignoring out-of-range slide");
        }

        Self {
            current: carousel.current(),
            prev: carousel.peek_prev(),
            next: carousel.peek_next(),
            indicators: (0..carousel.len()).map(|i| i == carousel.current()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_detail_href() {
        assert_eq!(
            product_detail_href("electrolyzers", None),
            "/products/detail?product=electrolyzers"
        );
        assert_eq!(
            product_detail_href("electrolyzer-test-stations", Some((0, "pts-10"))),
            "/products/detail?product=electrolyzer-test-stations&item=0&variant=pts-10"
        );
        assert_eq!(
            product_detail_href("a b", None),
            "/products/detail?product=a+b"
        );
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("item", Some("2")), Some(2));
        assert_eq!(parse_index("item", Some(" 0 ")), Some(0));
        assert_eq!(parse_index("item", None), None);
        assert_eq!(parse_index("item", Some("")), None);
        assert_eq!(parse_index("slide", Some("-1")), None);
        assert_eq!(parse_index("slide", Some("abc")), None);
    }

    #[test]
    fn test_carousel_view_override() {
        let shared = Carousel::at(4, 2);

        let view = CarouselView::new(shared, None);
        assert_eq!((view.prev, view.current, view.next), (1, 2, 3));

        let view = CarouselView::new(shared, Some(3));
        assert_eq!((view.prev, view.current, view.next), (2, 3, 0));
        assert_eq!(view.indicators, [false, false, false, true]);

        let view = CarouselView::new(shared, Some(9));
        assert_eq!(view.current, 2);
    }

    #[test]
    fn test_empty_carousel_view() {
        let view = CarouselView::new(Carousel::new(0), Some(0));
        assert_eq!(view.current, 0);
        assert!(view.indicators.is_empty());
    }
}
