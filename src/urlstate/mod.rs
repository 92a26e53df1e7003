//! Query-string codec for shareable filter state
//!
//! Serializes a `FilterState` to a URL query string and back. Multi-value
//! dimensions use a repeated key per selected id (never comma-joined, so ids
//! containing commas stay unambiguous); empty dimensions are omitted.
//!
//! Decoding is total: it never fails. Unknown keys are ignored, malformed
//! ids are dropped silently, and a repeated `search` key resolves to the
//! last occurrence. The result is always the closest valid `FilterState`.

use crate::filter::FilterState;
use std::collections::BTreeSet;

const PARAM_SEARCH: &str = "search";
const PARAM_CATEGORIES: &str = "categories";
// Blog-style single-select variant of the category parameter.
const PARAM_CATEGORY: &str = "category";
const PARAM_TAGS: &str = "tags";
const PARAM_PLATFORMS: &str = "platforms";
const PARAM_FEATURES: &str = "features";

/// Encode a filter state as a query string (without a leading `?`)
///
/// Keys appear in a fixed order (`search`, `categories`, `tags`,
/// `platforms`, `features`) so equal states encode identically.
#[must_use]
pub fn encode(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.search.is_empty() {
        serializer.append_pair(PARAM_SEARCH, &state.search);
    }
    for id in &state.categories {
        serializer.append_pair(PARAM_CATEGORIES, id);
    }
    for id in &state.tags {
        serializer.append_pair(PARAM_TAGS, id);
    }
    for id in &state.platforms {
        serializer.append_pair(PARAM_PLATFORMS, id);
    }
    for id in &state.features {
        serializer.append_pair(PARAM_FEATURES, id);
    }

    serializer.finish()
}

/// Decode a query string into a filter state
///
/// Tolerates a leading `?`. Never raises: anything unrecognized or
/// malformed is dropped.
#[must_use]
pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = FilterState::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            // Last occurrence wins.
            PARAM_SEARCH => state.search = value.into_owned(),
            PARAM_CATEGORIES | PARAM_CATEGORY => insert_id(&mut state.categories, &value),
            PARAM_TAGS => insert_id(&mut state.tags, &value),
            PARAM_PLATFORMS => insert_id(&mut state.platforms, &value),
            PARAM_FEATURES => insert_id(&mut state.features, &value),
            _ => {}
        }
    }

    state
}

fn insert_id(selection: &mut BTreeSet<String>, raw: &str) {
    let id = raw.trim();
    if is_facet_id(id) {
        selection.insert(id.to_string());
    }
}

/// Whether a string is a well-formed facet id
///
/// Facet ids follow the slug alphabet of the content source: non-empty,
/// ASCII alphanumerics plus `-` and `_`.
#[must_use]
pub fn is_facet_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_encodes_to_empty_string() {
        assert_eq!(encode(&FilterState::new()), "");
        assert_eq!(decode(""), FilterState::new());
    }

    #[test]
    fn test_round_trip() {
        let state = FilterState::builder()
            .search("a b")
            .tag("x")
            .tag("y")
            .build();

        let query = encode(&state);
        assert_eq!(decode(&query), state);
    }

    #[test]
    fn test_round_trip_all_dimensions() {
        let state = FilterState::builder()
            .search("concert tools")
            .category("ticketing")
            .category("analytics")
            .tag("events")
            .platform("android")
            .platform("ios")
            .feature("automation")
            .build();

        assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn test_repeated_keys_not_comma_joined() {
        let state = FilterState::builder().tag("x").tag("y").build();
        let query = encode(&state);
        assert_eq!(query, "tags=x&tags=y");
    }

    #[test]
    fn test_search_is_percent_encoded() {
        let state = FilterState::builder().search("a b").build();
        let query = encode(&state);
        assert!(query == "search=a+b" || query == "search=a%20b");
        assert_eq!(decode(&query).search, "a b");
    }

    #[test]
    fn test_decode_order_independence() {
        assert_eq!(decode("tags=a&tags=b"), decode("tags=b&tags=a"));
    }

    #[test]
    fn test_last_search_wins() {
        let state = decode("search=first&search=second");
        assert_eq!(state.search, "second");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let state = decode("tags=a&page=3&utm_source=mail");
        assert_eq!(state, FilterState::builder().tag("a").build());
    }

    #[test]
    fn test_malformed_ids_dropped() {
        let state = decode("tags=ok&tags=&tags=bad%20id&tags=ev%2Cil");
        let expected = FilterState::builder().tag("ok").build();
        assert_eq!(state, expected);
    }

    #[test]
    fn test_singular_category_alias() {
        assert_eq!(decode("category=ticketing"), decode("categories=ticketing"));
    }

    #[test]
    fn test_leading_question_mark_tolerated() {
        assert_eq!(decode("?tags=a"), decode("tags=a"));
    }

    #[test]
    fn test_is_facet_id() {
        assert!(is_facet_id("ai-powered"));
        assert!(is_facet_id("real_time"));
        assert!(is_facet_id("web2"));
        assert!(!is_facet_id(""));
        assert!(!is_facet_id("has space"));
        assert!(!is_facet_id("a,b"));
        assert!(!is_facet_id("café"));
    }
}
