//! Catalog record types
//!
//! `CatalogItem` is one product in the catalog; `FacetValue` is one value of
//! a facet dimension (a category, tag, platform, or feature). Both are plain
//! data: all classification logic lives in the `filter` module.

use crate::Dimension;
use serde::{Deserialize, Serialize};

/// One product in the catalog
///
/// `id` and `slug` are unique across the catalog (validated on load).
/// `category` holds exactly one category id; the remaining dimensions hold
/// zero or more ids, order-irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable opaque identifier, never reused
    pub id: u64,

    /// URL-safe unique key, immutable after creation
    pub slug: String,

    /// Display title
    pub title: String,

    /// One-line summary shown on cards
    #[serde(default)]
    pub short_summary: String,

    /// Full description shown on the detail view
    #[serde(default)]
    pub long_summary: String,

    /// The single category id of this item
    pub category: String,

    /// Tag ids (multi-valued)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Supported platform ids (multi-valued)
    #[serde(default)]
    pub platforms: Vec<String>,

    /// Feature ids (multi-valued)
    #[serde(default)]
    pub features: Vec<String>,

    /// Where the product can be downloaded
    #[serde(default)]
    pub download_url: Option<String>,

    /// External product page
    #[serde(default)]
    pub learn_more_url: Option<String>,

    /// Step-by-step usage notes for the detail view
    #[serde(default)]
    pub usage_instructions: Vec<String>,

    /// Screenshot asset paths
    #[serde(default)]
    pub screenshots: Vec<String>,
}

impl CatalogItem {
    /// Text the search rule matches against: title, long summary, and
    /// category id, lower-cased
    ///
    /// Derived on demand; never stored on the item.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.long_summary, self.category).to_ascii_lowercase()
    }

    /// The ids this item carries in the given dimension
    ///
    /// For `Category` this is a one-element slice, so every dimension can be
    /// treated uniformly by the predicate and the facet index.
    #[must_use]
    pub fn ids_in(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Category => std::slice::from_ref(&self.category),
            Dimension::Tag => &self.tags,
            Dimension::Platform => &self.platforms,
            Dimension::Feature => &self.features,
        }
    }
}

/// One value of a facet dimension
///
/// Matches the content-source contract: `{id, name, color?}`. Only
/// categories carry a display color in practice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    /// Stable identifier referenced by items
    pub id: String,

    /// Human-readable display name
    pub name: String,

    /// Display color as a `#rrggbb` hex string
    #[serde(default)]
    pub color: Option<String>,
}

impl FacetValue {
    /// Create a facet value without a display color
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
        }
    }
}
