//! Catalog filtering: state, predicate, and engine
//!
//! The module is split the way the data flows:
//! - [`state`]: `FilterState`, the mutable facet selections + search text
//! - [`predicate`]: the pure membership test (single source of truth)
//! - [`engine`]: order-preserving application over the catalog, with an
//!   optional memo cache

pub mod engine;
pub mod predicate;
pub mod state;

pub use engine::{FilterEngine, apply};
pub use predicate::{matches, search_matches, selection_matches};
pub use state::{FilterState, FilterStateBuilder};
