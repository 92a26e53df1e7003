//! Testing utilities for facetr
//!
//! Provides the sample catalog fixture (the twelve demo products the
//! catalog site ships with) and a minimal item constructor for unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, CatalogItem, FacetValue};

/// Minimal item: id, slug, category, everything else empty
#[must_use]
pub fn item(id: u64, slug: &str, category: &str) -> CatalogItem {
    CatalogItem {
        id,
        slug: slug.to_string(),
        title: slug.to_string(),
        category: category.to_string(),
        ..Default::default()
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u64,
    slug: &str,
    title: &str,
    category: &str,
    long_summary: &str,
    short_summary: &str,
    platforms: &[&str],
    features: &[&str],
) -> CatalogItem {
    CatalogItem {
        id,
        slug: slug.to_string(),
        title: title.to_string(),
        short_summary: short_summary.to_string(),
        long_summary: long_summary.to_string(),
        category: category.to_string(),
        tags: Vec::new(),
        platforms: platforms.iter().map(ToString::to_string).collect(),
        features: features.iter().map(ToString::to_string).collect(),
        download_url: Some(format!("https://{slug}.example/download")),
        learn_more_url: Some(format!("https://{slug}.example")),
        usage_instructions: Vec::new(),
        screenshots: Vec::new(),
    }
}

fn category(id: &str, name: &str, color: &str) -> FacetValue {
    FacetValue {
        id: id.to_string(),
        name: name.to_string(),
        color: Some(color.to_string()),
    }
}

/// The twelve-product sample catalog, in display order
///
/// # Panics
/// Panics if the fixture violates catalog invariants (it never does).
#[must_use]
pub fn sample_catalog() -> Catalog {
    let categories = vec![
        category("ticketing", "Ticketing", "#4F7DF3"),
        category("marketing", "Marketing", "#FF6B6B"),
        category("analytics", "Analytics", "#4ECDC4"),
        category("booking", "Booking", "#A855F7"),
        category("admin", "Admin", "#F59E0B"),
        category("websites", "Websites", "#10B981"),
    ];

    let platforms = vec![
        FacetValue::new("web", "Web"),
        FacetValue::new("ios", "iOS"),
        FacetValue::new("android", "Android"),
    ];

    let features = vec![
        FacetValue::new("ai-powered", "AI-Powered"),
        FacetValue::new("automation", "Automation"),
        FacetValue::new("reporting", "Reporting"),
        FacetValue::new("integrations", "Integrations"),
        FacetValue::new("realtime", "Real-time"),
        FacetValue::new("collaboration", "Collaboration"),
    ];

    let items = vec![
        product(
            1,
            "prekindle",
            "Prekindle",
            "ticketing",
            "All-in-one ticketing platform for casual event creators and professional planners.",
            "Ticketing with marketing built in for your first concert onward.",
            &["web", "ios", "android"],
            &["automation", "reporting", "integrations"],
        ),
        product(
            2,
            "sparrow",
            "Sparrow",
            "marketing",
            "Powerful marketing automation platform designed for concert promoters and event organizers.",
            "A megaphone for concert promoters.",
            &["web", "ios"],
            &["ai-powered", "automation", "integrations"],
        ),
        product(
            3,
            "booking",
            "Booking",
            "ticketing",
            "Streamlined booking management for venues and talent agencies.",
            "Ticketing, marketing, and analytics for booking agents.",
            &["web", "ios", "android"],
            &["realtime", "collaboration", "integrations"],
        ),
        product(
            4,
            "flnment",
            "Flnment",
            "marketing",
            "Strategic marketing intelligence platform for music industry professionals.",
            "Marketing intelligence for your concert campaigns.",
            &["web"],
            &["ai-powered", "reporting", "realtime"],
        ),
        product(
            5,
            "booktine",
            "Booktine",
            "ticketing",
            "Booking tickets and manage prices and iterative apps for live events.",
            "Booking tickets and managing prices for live events.",
            &["web", "ios"],
            &["automation", "integrations"],
        ),
        product(
            6,
            "flankist",
            "Flankist",
            "marketing",
            "Concert document sharing for marketing teams.",
            "Share concert marketing plans with your team.",
            &["web", "android"],
            &["collaboration", "realtime"],
        ),
        product(
            7,
            "charier",
            "Charier",
            "ticketing",
            "Campaign automation with built-in marketing analytics.",
            "Campaign automation with built-in analytics.",
            &["web", "ios"],
            &["ai-powered", "automation", "reporting"],
        ),
        product(
            8,
            "websites",
            "Websites",
            "marketing",
            "Build stunning websites for your concerts and events with our drag-and-drop builder.",
            "Concert websites with a drag-and-drop builder.",
            &["web"],
            &["automation", "integrations", "collaboration"],
        ),
        product(
            9,
            "analytix",
            "Analytix",
            "analytics",
            "Comprehensive analytics dashboard for tracking event performance and audience insights.",
            "Deep analytics and insights for your concert performance.",
            &["web", "ios", "android"],
            &["ai-powered", "reporting", "realtime"],
        ),
        product(
            10,
            "venuehub",
            "VenueHub",
            "booking",
            "Venue management and booking coordination for concert halls and event spaces.",
            "Manage your venues and coordinate bookings effortlessly.",
            &["web", "ios"],
            &["realtime", "collaboration", "integrations"],
        ),
        product(
            11,
            "adminpanel",
            "AdminPanel",
            "admin",
            "Centralized administration dashboard for managing all your concert tech stack.",
            "Central hub for managing your entire tech ecosystem.",
            &["web"],
            &["automation", "reporting", "collaboration"],
        ),
        product(
            12,
            "sitebuilder",
            "SiteBuilder",
            "websites",
            "Modern website builder specifically designed for music events and festivals.",
            "Build beautiful event websites without code.",
            &["web"],
            &["ai-powered", "automation", "integrations"],
        ),
    ];

    Catalog::from_parts(categories, Vec::new(), platforms, features, items)
        .expect("sample catalog is valid")
}
