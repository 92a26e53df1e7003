//! The filter engine: applies the predicate over the catalog in stable order
//!
//! [`apply`] is the plain, side-effect-free path: it produces the
//! subsequence of items matching the state, preserving relative order. It is
//! cheap enough to run on every state change for catalogs of realistic size.
//!
//! [`FilterEngine`] adds a memo cache keyed by `FilterState` for callers
//! that recompute the same state repeatedly. The catalog snapshot owned by
//! an engine is immutable, so the state alone identifies a result set.

use super::predicate::matches;
use super::state::FilterState;
use crate::catalog::{Catalog, CatalogItem};
use moka::sync::Cache;
use std::sync::Arc;

/// Apply the filter state to an ordered item sequence
///
/// Returns the matching items in their original relative order.
/// Deterministic and side-effect-free: safe to call on every state change.
#[must_use]
pub fn apply<'a>(items: &'a [CatalogItem], state: &FilterState) -> Vec<&'a CatalogItem> {
    items.iter().filter(|item| matches(item, state)).collect()
}

/// Memoizing filter engine over an immutable catalog snapshot
///
/// Results are cached per `FilterState`; the cache is a performance layer
/// only and never changes what `apply` would return.
pub struct FilterEngine {
    catalog: Arc<Catalog>,
    // Cached positions into the catalog's item list, in display order.
    cache: Cache<FilterState, Arc<Vec<usize>>>,
}

impl FilterEngine {
    /// Default number of distinct filter states kept in the memo cache
    const CACHE_CAPACITY: u64 = 1024;

    /// Create an engine over a catalog snapshot
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            cache: Cache::new(Self::CACHE_CAPACITY),
        }
    }

    /// The catalog snapshot this engine filters
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The visible result set for a filter state, in display order
    #[must_use]
    pub fn results(&self, state: &FilterState) -> Vec<&CatalogItem> {
        let positions = self.cache.get_with(state.clone(), || {
            let positions = self
                .catalog
                .items()
                .iter()
                .enumerate()
                .filter(|(_, item)| matches(item, state))
                .map(|(position, _)| position)
                .collect();
            Arc::new(positions)
        });

        let items = self.catalog.items();
        positions.iter().map(|&position| &items[position]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_empty_state_is_identity() {
        let catalog = testing::sample_catalog();
        let result = apply(catalog.items(), &FilterState::new());

        let slugs: Vec<&str> = result.iter().map(|item| item.slug.as_str()).collect();
        let all: Vec<&str> = catalog.items().iter().map(|item| item.slug.as_str()).collect();
        assert_eq!(slugs, all);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let catalog = testing::sample_catalog();
        let state = FilterState::builder().category("ticketing").build();

        let once = apply(catalog.items(), &state);
        let once_owned: Vec<CatalogItem> = once.iter().map(|&item| item.clone()).collect();
        let twice = apply(&once_owned, &state);

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.slug, b.slug);
        }
    }

    #[test]
    fn test_ticketing_scenario() {
        let catalog = testing::sample_catalog();
        let state = FilterState::builder().category("ticketing").build();
        let result = apply(catalog.items(), &state);

        let slugs: Vec<&str> = result.iter().map(|item| item.slug.as_str()).collect();
        assert_eq!(slugs, ["prekindle", "booking", "booktine", "charier"]);
    }

    #[test]
    fn test_android_scenario() {
        let catalog = testing::sample_catalog();
        let state = FilterState::builder().platform("android").build();
        let result = apply(catalog.items(), &state);

        let slugs: Vec<&str> = result.iter().map(|item| item.slug.as_str()).collect();
        assert_eq!(slugs, ["prekindle", "booking", "flankist", "analytix"]);
    }

    #[test]
    fn test_ticketing_and_android_intersection() {
        let catalog = testing::sample_catalog();
        let state = FilterState::builder()
            .category("ticketing")
            .platform("android")
            .build();
        let result = apply(catalog.items(), &state);

        let slugs: Vec<&str> = result.iter().map(|item| item.slug.as_str()).collect();
        assert_eq!(slugs, ["prekindle", "booking"]);
    }

    #[test]
    fn test_concert_search_scenario() {
        let catalog = testing::sample_catalog();
        let state = FilterState::builder().search("concert").build();
        let result = apply(catalog.items(), &state);

        // Every returned item literally mentions "concert"; no matching item
        // is dropped.
        assert!(!result.is_empty());
        for item in &result {
            assert!(item.searchable_text().contains("concert"));
        }
        let matching = catalog
            .items()
            .iter()
            .filter(|item| item.searchable_text().contains("concert"))
            .count();
        assert_eq!(result.len(), matching);
    }

    #[test]
    fn test_monotonic_narrowing() {
        let catalog = testing::sample_catalog();

        let broad = FilterState::builder().category("ticketing").build();
        let narrow = FilterState::builder()
            .category("ticketing")
            .platform("android")
            .build();

        let broad_result = apply(catalog.items(), &broad);
        let narrow_result = apply(catalog.items(), &narrow);

        assert!(narrow_result.len() <= broad_result.len());
        let broad_slugs: Vec<&str> =
            broad_result.iter().map(|item| item.slug.as_str()).collect();
        for item in &narrow_result {
            assert!(broad_slugs.contains(&item.slug.as_str()));
        }
    }

    #[test]
    fn test_narrowing_search_text() {
        let catalog = testing::sample_catalog();

        let short = FilterState::builder().search("concert").build();
        let long = FilterState::builder().search("concert promoters").build();

        let short_result = apply(catalog.items(), &short);
        let long_result = apply(catalog.items(), &long);

        assert!(long_result.len() <= short_result.len());
    }

    #[test]
    fn test_empty_result_is_valid() {
        let catalog = testing::sample_catalog();
        let state = FilterState::builder().search("no such thing anywhere").build();
        assert!(apply(catalog.items(), &state).is_empty());
    }

    #[test]
    fn test_engine_agrees_with_apply() {
        let catalog = Arc::new(testing::sample_catalog());
        let engine = FilterEngine::new(Arc::clone(&catalog));
        let state = FilterState::builder().platform("android").build();

        let direct = apply(catalog.items(), &state);
        // Second call comes from the memo cache and must be identical.
        for _ in 0..2 {
            let cached = engine.results(&state);
            assert_eq!(cached.len(), direct.len());
            for (a, b) in cached.iter().zip(direct.iter()) {
                assert_eq!(a.slug, b.slug);
            }
        }
    }
}
