//! The filter predicate: the single source of truth for item matching
//!
//! Every code path that filters the catalog (linear scan, facet-index scan,
//! any future server-side variant) must delegate to [`matches`] or its
//! per-rule helpers so the semantics cannot diverge.
//!
//! The rules form a conjunction of per-dimension disjunctions: an item
//! passes when EVERY active dimension has at least one selected value the
//! item carries, and the search text (if any) occurs in the item's
//! searchable text.

use super::state::FilterState;
use crate::Dimension;
use crate::catalog::CatalogItem;
use std::collections::BTreeSet;

/// Pure membership test: does `item` pass the current filter state?
///
/// Cheapest rules run first so evaluation can short-circuit: the
/// single-value category compare, then the set intersections, then the
/// substring search. The result is order-independent.
#[must_use]
pub fn matches(item: &CatalogItem, state: &FilterState) -> bool {
    selection_matches(&state.categories, item.ids_in(Dimension::Category))
        && selection_matches(&state.platforms, item.ids_in(Dimension::Platform))
        && selection_matches(&state.features, item.ids_in(Dimension::Feature))
        && selection_matches(&state.tags, item.ids_in(Dimension::Tag))
        && search_matches(item, &state.search)
}

/// One dimension's rule: empty selection passes; otherwise at least one of
/// the item's ids must be selected (OR within the dimension)
///
/// An item with no ids in the dimension never matches a non-empty selection.
#[must_use]
pub fn selection_matches(selected: &BTreeSet<String>, item_ids: &[String]) -> bool {
    selected.is_empty() || item_ids.iter().any(|id| selected.contains(id))
}

/// The search rule: locale-naive ASCII-case-insensitive substring match
/// over the item's derived searchable text
///
/// Whitespace-only search text is treated as empty and always passes.
#[must_use]
pub fn search_matches(item: &CatalogItem, search: &str) -> bool {
    let needle = search.trim().to_ascii_lowercase();
    needle.is_empty() || item.searchable_text().contains(&needle)
}
