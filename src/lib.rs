//! Facetr - a faceted catalog filter and search library
//!
//! This library provides the filtering core of an app-library catalog:
//! a read-only catalog store, a facet index with reverse lookups, a pure
//! filter predicate with AND-across/OR-within dimension semantics, and a
//! query-string codec for shareable filter state.

use thiserror::Error;

pub mod auth;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filter;
pub mod index;
pub mod output;
pub mod urlstate;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FacetrError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Serialization error when exporting results
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// One independent filter dimension of the catalog
///
/// Category is single-valued on an item; the other dimensions hold zero or
/// more values. Selections are sets in every dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Single-valued classification (exactly one per item)
    Category,
    /// Free-form multi-valued classification
    Tag,
    /// Supported platform (web, ios, android, ...)
    Platform,
    /// Advertised capability (automation, reporting, ...)
    Feature,
}

impl Dimension {
    /// All dimensions, in display order
    pub const ALL: [Self; 4] = [Self::Category, Self::Tag, Self::Platform, Self::Feature];

    /// Lowercase name used in output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Tag => "tag",
            Self::Platform => "platform",
            Self::Feature => "feature",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
