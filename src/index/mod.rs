//! Facet index: precomputed reverse lookups per facet value
//!
//! Built in one pass over the catalog and immutable afterward, the index
//! answers "does item X carry value V in dimension D" in O(1) and provides
//! per-value item counts for the facet sidebar.
//!
//! The index is a performance layer only: [`apply_indexed`] must return
//! exactly what the linear [`crate::filter::apply`] returns, in the same
//! order. The equivalence is asserted by tests.

use crate::Dimension;
use crate::catalog::{Catalog, CatalogItem};
use crate::filter::{FilterState, search_matches};
use std::collections::{HashMap, HashSet};

/// Reverse lookup from facet value to the set of item ids carrying it
#[derive(Debug, Clone)]
pub struct FacetIndex {
    categories: HashMap<String, HashSet<u64>>,
    tags: HashMap<String, HashSet<u64>>,
    platforms: HashMap<String, HashSet<u64>>,
    features: HashMap<String, HashSet<u64>>,
}

impl FacetIndex {
    /// Build the index with one pass over the catalog
    #[must_use]
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self {
            categories: HashMap::new(),
            tags: HashMap::new(),
            platforms: HashMap::new(),
            features: HashMap::new(),
        };

        for item in catalog.items() {
            for dimension in Dimension::ALL {
                let map = index.dimension_map_mut(dimension);
                for id in item.ids_in(dimension) {
                    map.entry(id.clone()).or_default().insert(item.id);
                }
            }
        }

        index
    }

    fn dimension_map(&self, dimension: Dimension) -> &HashMap<String, HashSet<u64>> {
        match dimension {
            Dimension::Category => &self.categories,
            Dimension::Tag => &self.tags,
            Dimension::Platform => &self.platforms,
            Dimension::Feature => &self.features,
        }
    }

    fn dimension_map_mut(&mut self, dimension: Dimension) -> &mut HashMap<String, HashSet<u64>> {
        match dimension {
            Dimension::Category => &mut self.categories,
            Dimension::Tag => &mut self.tags,
            Dimension::Platform => &mut self.platforms,
            Dimension::Feature => &mut self.features,
        }
    }

    /// Item ids carrying `value` in `dimension`, if any item does
    #[must_use]
    pub fn items_with(&self, dimension: Dimension, value: &str) -> Option<&HashSet<u64>> {
        self.dimension_map(dimension).get(value)
    }

    /// O(1) membership test
    #[must_use]
    pub fn contains(&self, dimension: Dimension, value: &str, item_id: u64) -> bool {
        self.items_with(dimension, value)
            .is_some_and(|ids| ids.contains(&item_id))
    }

    /// Number of items carrying `value` in `dimension`
    #[must_use]
    pub fn count(&self, dimension: Dimension, value: &str) -> usize {
        self.items_with(dimension, value).map_or(0, HashSet::len)
    }
}

/// Index-backed variant of `filter::apply`
///
/// Computes the candidate id set by unioning per-value id sets within each
/// active dimension and intersecting across dimensions, then walks the
/// catalog in display order keeping candidates that also pass the search
/// rule. Behaviorally identical to the linear scan.
#[must_use]
pub fn apply_indexed<'a>(
    catalog: &'a Catalog,
    index: &FacetIndex,
    state: &FilterState,
) -> Vec<&'a CatalogItem> {
    let mut candidates: Option<HashSet<u64>> = None;

    for dimension in Dimension::ALL {
        let selection = state.selection(dimension);
        if selection.is_empty() {
            continue;
        }

        // OR within the dimension: union of the selected values' id sets.
        let mut dimension_ids = HashSet::new();
        for value in selection {
            if let Some(ids) = index.items_with(dimension, value) {
                dimension_ids.extend(ids);
            }
        }

        // AND across dimensions: intersect with what previous dimensions allowed.
        candidates = Some(match candidates {
            None => dimension_ids,
            Some(existing) => existing.intersection(&dimension_ids).copied().collect(),
        });
    }

    catalog
        .items()
        .iter()
        .filter(|item| candidates.as_ref().is_none_or(|ids| ids.contains(&item.id)))
        .filter(|item| search_matches(item, &state.search))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::apply;
    use crate::testing;

    #[test]
    fn test_counts_match_catalog() {
        let catalog = testing::sample_catalog();
        let index = FacetIndex::build(&catalog);

        assert_eq!(index.count(Dimension::Category, "ticketing"), 4);
        assert_eq!(index.count(Dimension::Platform, "android"), 4);
        assert_eq!(index.count(Dimension::Platform, "web"), 12);
        assert_eq!(index.count(Dimension::Category, "unknown"), 0);
    }

    #[test]
    fn test_contains() {
        let catalog = testing::sample_catalog();
        let index = FacetIndex::build(&catalog);
        let prekindle = catalog.item_by_slug("prekindle").unwrap();

        assert!(index.contains(Dimension::Category, "ticketing", prekindle.id));
        assert!(index.contains(Dimension::Platform, "android", prekindle.id));
        assert!(!index.contains(Dimension::Category, "marketing", prekindle.id));
    }

    #[test]
    fn test_indexed_equals_linear_for_many_states() {
        let catalog = testing::sample_catalog();
        let index = FacetIndex::build(&catalog);

        let states = vec![
            FilterState::new(),
            FilterState::builder().category("ticketing").build(),
            FilterState::builder().platform("android").build(),
            FilterState::builder()
                .category("ticketing")
                .platform("android")
                .build(),
            FilterState::builder()
                .category("ticketing")
                .category("analytics")
                .search("concert")
                .build(),
            FilterState::builder().feature("ai-powered").build(),
            FilterState::builder().tag("nonexistent").build(),
            FilterState::builder().search("booking").build(),
        ];

        for state in states {
            let linear: Vec<&str> = apply(catalog.items(), &state)
                .iter()
                .map(|item| item.slug.as_str())
                .collect();
            let indexed: Vec<&str> = apply_indexed(&catalog, &index, &state)
                .iter()
                .map(|item| item.slug.as_str())
                .collect();
            assert_eq!(linear, indexed, "divergence for state: {state:?}");
        }
    }

    #[test]
    fn test_unknown_selected_value_yields_empty() {
        let catalog = testing::sample_catalog();
        let index = FacetIndex::build(&catalog);
        let state = FilterState::builder().category("no-such-category").build();

        assert!(apply_indexed(&catalog, &index, &state).is_empty());
    }
}
