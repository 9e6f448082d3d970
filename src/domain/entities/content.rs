//! Display-only site content records.
//!
//! These records carry no behaviour beyond listing order. They are grouped in
//! [`SiteContent`], which is built once at startup and shared read-only.

use serde::Serialize;

use crate::domain::entities::{IconKind, NewsItem};

/// A manufacturer the company distributes for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerRef {
    pub name: String,
    pub logo_ref: String,
}

/// An industry served, shown in the partners section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Industry {
    pub icon: IconKind,
    pub title: String,
    pub desc: String,
}

/// A "why choose us" highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub icon: IconKind,
    pub title: String,
    pub description: String,
}

/// A headline number such as `30+ Years Experience`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub icon: Option<IconKind>,
    pub value: u32,
    pub suffix: String,
    pub label: String,
}

/// A carousel image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub image_ref: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreValue {
    pub icon: IconKind,
    pub title: String,
    pub desc: String,
}

/// A quote attributed to a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

/// A contact card on the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub icon: IconKind,
    pub title: String,
    pub primary: String,
    pub secondary: Option<String>,
}

/// A featured product on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowcaseItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_ref: String,
    pub partner: String,
}

/// An entry of the header's product menu.
///
/// The slug is passed verbatim as the `product` query parameter; it does not
/// have to be a catalog key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavProduct {
    pub name: String,
    pub slug: String,
}

/// All static content of the site.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub hero_slides: Vec<Slide>,
    pub hero_stats: Vec<Stat>,
    pub highlights: Vec<Highlight>,
    pub showcase_images: Vec<String>,
    pub showcase: Vec<ShowcaseItem>,
    pub partners: Vec<PartnerRef>,
    pub industries: Vec<Industry>,
    pub news: Vec<NewsItem>,
    pub company_stats: Vec<Stat>,
    pub core_values: Vec<CoreValue>,
    pub founder: Option<Testimonial>,
    pub contact_channels: Vec<ContactChannel>,
    pub contact_email: String,
    pub nav_products: Vec<NavProduct>,
}
