//! Filter state: the active facet selections and search text
//!
//! `FilterState` is the only mutable entity owned by the filtering core.
//! It is created empty when a catalog view mounts, mutated synchronously by
//! user interaction (toggle a facet value, type search text, clear all), and
//! persists only through the query-string codec in `urlstate`.

use crate::Dimension;
use std::collections::BTreeSet;

/// Active filter selections across all dimensions plus free-text search
///
/// An empty selection set means "no constraint" in that dimension. Ordered
/// sets keep encoding deterministic and make the state usable as a cache key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    /// Free-text search (possibly empty; whitespace-only counts as empty)
    pub search: String,

    /// Selected category ids
    pub categories: BTreeSet<String>,

    /// Selected tag ids
    pub tags: BTreeSet<String>,

    /// Selected platform ids
    pub platforms: BTreeSet<String>,

    /// Selected feature ids
    pub features: BTreeSet<String>,
}

impl FilterState {
    /// Create an empty filter state (matches everything)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a `FilterState`
    #[must_use]
    pub fn builder() -> FilterStateBuilder {
        FilterStateBuilder::default()
    }

    /// Whether no constraint is active in any dimension
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.categories.is_empty()
            && self.tags.is_empty()
            && self.platforms.is_empty()
            && self.features.is_empty()
    }

    /// The selection set for a dimension
    #[must_use]
    pub fn selection(&self, dimension: Dimension) -> &BTreeSet<String> {
        match dimension {
            Dimension::Category => &self.categories,
            Dimension::Tag => &self.tags,
            Dimension::Platform => &self.platforms,
            Dimension::Feature => &self.features,
        }
    }

    /// Mutable selection set for a dimension
    pub fn selection_mut(&mut self, dimension: Dimension) -> &mut BTreeSet<String> {
        match dimension {
            Dimension::Category => &mut self.categories,
            Dimension::Tag => &mut self.tags,
            Dimension::Platform => &mut self.platforms,
            Dimension::Feature => &mut self.features,
        }
    }

    /// Toggle one facet value: select it if absent, deselect it if present
    pub fn toggle(&mut self, dimension: Dimension, id: &str) {
        let selection = self.selection_mut(dimension);
        if !selection.remove(id) {
            selection.insert(id.to_string());
        }
    }

    /// Replace the search text
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Drop every constraint ("clear all")
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Merge another state into this one
    ///
    /// Selections are unioned per dimension. A non-empty search in `other`
    /// replaces the current search (CLI flags take precedence over a decoded
    /// query string).
    pub fn merge(&mut self, other: &Self) {
        if !other.search.trim().is_empty() {
            self.search = other.search.clone();
        }
        for dimension in Dimension::ALL {
            let ids: Vec<String> = other.selection(dimension).iter().cloned().collect();
            self.selection_mut(dimension).extend(ids);
        }
    }
}

impl std::fmt::Display for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.search.trim().is_empty() {
            writeln!(f, "Search: (none)")?;
        } else {
            writeln!(f, "Search: {}", self.search)?;
        }

        for dimension in Dimension::ALL {
            let selection = self.selection(dimension);
            if selection.is_empty() {
                writeln!(f, "{}: (any)", capitalize(dimension.name()))?;
            } else {
                let ids: Vec<&str> = selection.iter().map(String::as_str).collect();
                writeln!(f, "{}: {}", capitalize(dimension.name()), ids.join(", "))?;
            }
        }
        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Builder for `FilterState`
#[derive(Debug, Clone, Default)]
pub struct FilterStateBuilder {
    search: String,
    categories: BTreeSet<String>,
    tags: BTreeSet<String>,
    platforms: BTreeSet<String>,
    features: BTreeSet<String>,
}

impl FilterStateBuilder {
    /// Set the search text
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Select a category id
    #[must_use]
    pub fn category(mut self, id: impl Into<String>) -> Self {
        self.categories.insert(id.into());
        self
    }

    /// Select a tag id
    #[must_use]
    pub fn tag(mut self, id: impl Into<String>) -> Self {
        self.tags.insert(id.into());
        self
    }

    /// Select a platform id
    #[must_use]
    pub fn platform(mut self, id: impl Into<String>) -> Self {
        self.platforms.insert(id.into());
        self
    }

    /// Select a feature id
    #[must_use]
    pub fn feature(mut self, id: impl Into<String>) -> Self {
        self.features.insert(id.into());
        self
    }

    /// Build the `FilterState`
    #[must_use]
    pub fn build(self) -> FilterState {
        FilterState {
            search: self.search,
            categories: self.categories,
            tags: self.tags,
            platforms: self.platforms,
            features: self.features,
        }
    }
}
