//! Built-in site content: slides, stats, partners, news and contact details.

use chrono::NaiveDate;

use crate::domain::entities::{
    ContactChannel, CoreValue, Highlight, IconKind, Industry, NavProduct, NewsCategory, NewsItem,
    PartnerRef, ShowcaseItem, SiteContent, Slide, Stat, Testimonial,
};

/// Builds the content tables shipped with the site.
pub fn builtin_content() -> SiteContent {
    SiteContent {
        hero_slides: hero_slides(),
        hero_stats: vec![
            stat(None, 30, "+", "Years Experience"),
            stat(None, 7, "+", "Global Partners"),
            stat(None, 100, "%", "Application Support"),
        ],
        highlights: highlights(),
        showcase_images: vec![
            "https://static.vecteezy.com/system/resources/thumbnails/039/302/250/small/ai-generated-back-to-school-science-lab-excitement-highlight-the-excitement-of-a-science-experiment-in-a-laboratory-setting-background-image-generative-ai-photo.jpg".to_string(),
            "https://images.unsplash.com/photo-1628595351029-c2bf17511435?w=600&q=80".to_string(),
            "https://images.unsplash.com/photo-1581093588401-fbb62a02f120?w=600&q=80".to_string(),
        ],
        showcase: showcase(),
        partners: partners(),
        industries: industries(),
        news: news(),
        company_stats: vec![
            stat(Some(IconKind::Award), 30, "+", "Years of Founder Expertise"),
            stat(Some(IconKind::Globe), 7, "+", "Global Tech Partners"),
            stat(Some(IconKind::Microscope), 4, "", "Core Scientific Disciplines"),
            stat(Some(IconKind::HeartHandshake), 100, "%", "Commitment to Service"),
        ],
        core_values: core_values(),
        founder: Some(Testimonial {
            quote: "Experience is not just about the years you serve, but the problems you solve."
                .to_string(),
            author: "Rajeev Tyagi".to_string(),
            role: "Founder & CEO".to_string(),
        }),
        contact_channels: contact_channels(),
        contact_email: "info@scientificsquare.in".to_string(),
        nav_products: nav_products(),
    }
}

fn stat(icon: Option<IconKind>, value: u32, suffix: &str, label: &str) -> Stat {
    Stat {
        icon,
        value,
        suffix: suffix.to_string(),
        label: label.to_string(),
    }
}

fn hero_slides() -> Vec<Slide> {
    [
        ("https://images.unsplash.com/photo-1582719471384-894fbb16e074?w=800&q=80", "Laboratory Equipment"),
        ("https://images.unsplash.com/photo-1532187863486-abf9dbad1b69?w=800&q=80", "Microscope Analysis"),
        ("https://images.unsplash.com/photo-1576086213369-97a306d36557?w=800&q=80", "Lab Research"),
        ("https://images.unsplash.com/photo-1579684385127-1ef15d508118?w=800&q=80", "Scientific Instruments"),
    ]
    .into_iter()
    .map(|(image_ref, alt)| Slide {
        image_ref: image_ref.to_string(),
        alt: alt.to_string(),
    })
    .collect()
}

fn highlights() -> Vec<Highlight> {
    [
        (IconKind::TrendingUp, "Tailored Solution", "Custom equipment configurations to meet your specific lab requirements"),
        (IconKind::Target, "Scientific Precision", "Industry-leading accuracy in all measurements and calibrations"),
        (IconKind::BadgeCheck, "High Reliability", "Durable equipment built to perform consistently under demanding conditions"),
        (IconKind::Headphones, "Expert Support", "24/7 technical assistance from our team of specialists"),
    ]
    .into_iter()
    .map(|(icon, title, description)| Highlight {
        icon,
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn showcase() -> Vec<ShowcaseItem> {
    [
        ("product-a", "Water Quality Analyzer", "A versatile unit capable of measuring pH, Conductivity, and TOC simultaneously. The ultimate all-in-one solution for lab water diagnostics.", "https://www.bluesen.com/en/images/sub/product/img_aqua2000_5x.png", "BLUESEN"),
        ("product-b", "Hand Held Raman Spectrometer", "Bring the lab to the sample. Rugged, lightweight, and fast, perfect for incoming raw material verification and field testing.", "https://www.jinsptech.com/uploads/products-1.jpg", "JINSP"),
        ("product-c", "Hydrogen Generators", "Large scale electrolysis stacks designed for industrial hydrogen applications and energy storage.", "https://leancatwe.com/wp-content/uploads/2025/03/rack_new-1024x1024.png", "Leancat Electrolyzers"),
        ("product-d", "Fuel Cell Test Stations", "Complete test stations for characterization of PEM and SOFC fuel cells.", "https://lean-cat.com/wp-content/uploads/2022/03/P1180271_transparent1-2-1229x1536.png", "LEANCAT"),
    ]
    .into_iter()
    .map(|(id, name, description, image_ref, partner)| ShowcaseItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_ref: image_ref.to_string(),
        partner: partner.to_string(),
    })
    .collect()
}

fn partners() -> Vec<PartnerRef> {
    [
        ("JINSP", "/JINSP.png"),
        ("Berrytec", "/Berrytec.png"),
        ("4 more Labor", "/4more.png"),
        ("Leancat Electrolyzers", "/LeancatElectro.png"),
        ("LEANCAT", "/LEANCAT.png"),
        ("Kolibrik", "/Kolibrik.png"),
        ("Bluesen", "/Bluesen.png"),
    ]
    .into_iter()
    .map(|(name, logo_ref)| PartnerRef {
        name: name.to_string(),
        logo_ref: logo_ref.to_string(),
    })
    .collect()
}

fn industries() -> Vec<Industry> {
    [
        (IconKind::FlaskConical, "Pharmaceuticals", "Ensuring compliance and purity with advanced TOC analysis and water systems."),
        (IconKind::Zap, "Green Energy", "Supporting the hydrogen revolution with electrolyzer testing stations."),
        (IconKind::GraduationCap, "Academic Research", "Empowering universities with precision spectroscopy and electrochemical tools."),
        (IconKind::Atom, "Material Science", "High-resolution Raman spectroscopy for advanced material characterization."),
        (IconKind::Factory, "Industrial QA/QC", "Robust instruments designed for rigorous quality control environments."),
        (IconKind::Droplets, "Environmental", "Precise water quality analysis for sustainable environmental monitoring."),
    ]
    .into_iter()
    .map(|(icon, title, desc)| Industry {
        icon,
        title: title.to_string(),
        desc: desc.to_string(),
    })
    .collect()
}

fn news() -> Vec<NewsItem> {
    let entries = [
        (1, "Scientific Square Partners with Shimadzu for Advanced Spectroscopy Solutions", "A new strategic partnership brings cutting-edge spectroscopy technology to research laboratories across India.", (2024, 1, 15), NewsCategory::Partnership, "https://images.unsplash.com/photo-1582719471384-894fbb16e074?w=600&q=80", "5 min read"),
        (2, "Launching New PCR Thermal Cycler Series for Molecular Diagnostics", "Our latest addition to the molecular biology range offers unprecedented accuracy and speed for DNA amplification.", (2024, 1, 10), NewsCategory::ProductLaunch, "https://images.unsplash.com/photo-1579684385127-1ef15d508118?w=600&q=80", "4 min read"),
        (3, "Scientific Square Exhibits at Analytica India 2024", "Visit our booth at India's premier exhibition for analysis, laboratory technology, and biotechnology.", (2024, 1, 5), NewsCategory::Event, "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=600&q=80", "3 min read"),
        (4, "Workshop: Best Practices in Laboratory Equipment Maintenance", "Join our expert technicians for a comprehensive workshop on extending the life of your lab equipment.", (2023, 12, 20), NewsCategory::Workshop, "https://images.unsplash.com/photo-1576086213369-97a306d36557?w=600&q=80", "6 min read"),
        (5, "Achieving ISO 9001:2015 Recertification", "Scientific Square proudly announces successful recertification, reaffirming our commitment to quality management.", (2023, 12, 15), NewsCategory::Achievement, "https://images.unsplash.com/photo-1581093458791-9d58246e8c4b?w=600&q=80", "3 min read"),
        (6, "Expanding Our Service Network Across South India", "New service centers in Bangalore, Chennai, and Hyderabad ensure faster support for our customers.", (2023, 12, 1), NewsCategory::Expansion, "https://images.unsplash.com/photo-1628595351029-c2bf17511435?w=600&q=80", "4 min read"),
    ];

    entries
        .into_iter()
        .filter_map(|(id, title, excerpt, (y, m, d), category, image_ref, read_time)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(NewsItem {
                id,
                title: title.to_string(),
                excerpt: excerpt.to_string(),
                date,
                category,
                image_ref: image_ref.to_string(),
                read_time: read_time.to_string(),
            })
        })
        .collect()
}

fn core_values() -> Vec<CoreValue> {
    [
        (IconKind::Lightbulb, "Innovation First", "We don't just sell equipment; we curate the latest technological advancements from around the globe to solve local challenges."),
        (IconKind::ShieldCheck, "Uncompromising Quality", "Every partner we choose and every product we deliver undergoes rigorous vetting to ensure it meets the highest scientific standards."),
        (IconKind::Rocket, "Future Ready", "Born in 2024, we are built for the modern lab, focusing on digitalization, automation, and sustainable technologies like Green Hydrogen."),
    ]
    .into_iter()
    .map(|(icon, title, desc)| CoreValue {
        icon,
        title: title.to_string(),
        desc: desc.to_string(),
    })
    .collect()
}

fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            icon: IconKind::Mail,
            title: "Email Us".to_string(),
            primary: "info@scientificsquare.in".to_string(),
            secondary: None,
        },
        ContactChannel {
            icon: IconKind::MapPin,
            title: "Visit Us".to_string(),
            primary: "123 Science Park Road".to_string(),
            secondary: Some("New Delhi, India 110001".to_string()),
        },
        ContactChannel {
            icon: IconKind::Clock,
            title: "Working Hours".to_string(),
            primary: "Mon - Fri: 9:00 AM - 6:00 PM".to_string(),
            secondary: Some("Sat: 10:00 AM - 2:00 PM".to_string()),
        },
    ]
}

fn nav_products() -> Vec<NavProduct> {
    [
        ("Lab Water Purification System", "lab-water-purification-system"),
        ("Online TOC Analyzer BerryPURE TOC", "online-toc-analyzer-berrypure-toc"),
        ("Water Quality Analyzer", "water-quality-analyzer"),
        ("Battery and Fuel Cell Test Systems", "battery-fuel-cell-test-systems"),
        ("Electrolyzers", "electrolyzers"),
        ("Electrolyzer Test Stations", "electrolyzer-test-stations"),
        ("Raman Spectroscopy", "raman-spectroscopy"),
        ("Lab Furniture", "lab-furniture"),
    ]
    .into_iter()
    .map(|(name, slug)| NavProduct {
        name: name.to_string(),
        slug: slug.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_counts() {
        let content = builtin_content();
        assert_eq!(content.hero_slides.len(), 4);
        assert_eq!(content.showcase_images.len(), 3);
        assert_eq!(content.partners.len(), 7);
        assert_eq!(content.industries.len(), 6);
        assert_eq!(content.news.len(), 6);
        assert_eq!(content.nav_products.len(), 8);
    }

    #[test]
    fn test_every_news_category_is_used() {
        let content = builtin_content();
        for category in NewsCategory::ALL {
            assert!(content.news.iter().any(|n| n.category == category));
        }
    }
}
