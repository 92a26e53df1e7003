//! Catalog store module for facetr
//!
//! Provides a read-only snapshot of the product catalog loaded from a JSON
//! data file. Items keep their file order, which is the display order used
//! by the filter engine. There is no mutation API: editing the catalog is a
//! content-source concern, out of scope here.

use crate::Dimension;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{CatalogItem, FacetValue};

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<FacetValue>,
    #[serde(default)]
    tags: Vec<FacetValue>,
    #[serde(default)]
    platforms: Vec<FacetValue>,
    #[serde(default)]
    features: Vec<FacetValue>,
    #[serde(alias = "products")]
    items: Vec<CatalogItem>,
}

/// Read-only catalog snapshot
///
/// Holds the full ordered set of items plus the declared facet values per
/// dimension. Immutable after construction; uniqueness of item ids and slugs
/// is validated up front so lookups never have to disambiguate.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<FacetValue>,
    tags: Vec<FacetValue>,
    platforms: Vec<FacetValue>,
    features: Vec<FacetValue>,
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, is not valid JSON,
    /// or violates the uniqueness/reference invariants.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&contents)?;
        Self::from_parts(
            file.categories,
            file.tags,
            file.platforms,
            file.features,
            file.items,
        )
    }

    /// Build a catalog from already-parsed parts
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` / `DuplicateSlug` if two items
    /// collide, or `CatalogError::UnknownCategory` if an item references a
    /// category id not present in a non-empty category list.
    pub fn from_parts(
        categories: Vec<FacetValue>,
        tags: Vec<FacetValue>,
        platforms: Vec<FacetValue>,
        features: Vec<FacetValue>,
        items: Vec<CatalogItem>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            categories,
            tags,
            platforms,
            features,
            items,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        let category_ids: HashSet<&str> =
            self.categories.iter().map(|c| c.id.as_str()).collect();

        for item in &self.items {
            if !ids.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if !slugs.insert(item.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(item.slug.clone()));
            }
            // An empty category list means the file declares no taxonomy;
            // references are only checked when one is declared.
            if !category_ids.is_empty() && !category_ids.contains(item.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    slug: item.slug.clone(),
                    category: item.category.clone(),
                });
            }
        }
        Ok(())
    }

    /// All items, in stable display order
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by slug
    ///
    /// # Returns
    /// * `Some(&CatalogItem)` if the slug exists
    /// * `None` if no item has this slug (a valid, non-error outcome)
    #[must_use]
    pub fn item_by_slug(&self, slug: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.slug == slug)
    }

    /// Declared facet values for a dimension, in file order
    #[must_use]
    pub fn facet_values(&self, dimension: Dimension) -> &[FacetValue] {
        match dimension {
            Dimension::Category => &self.categories,
            Dimension::Tag => &self.tags,
            Dimension::Platform => &self.platforms,
            Dimension::Feature => &self.features,
        }
    }

    /// Look up a single facet value by dimension and id
    #[must_use]
    pub fn facet_value(&self, dimension: Dimension, id: &str) -> Option<&FacetValue> {
        self.facet_values(dimension).iter().find(|v| v.id == id)
    }

    /// Number of items in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
