//! Catalog-specific error types

use thiserror::Error;

/// Errors raised while loading or validating a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid JSON or does not match the schema
    #[error("Malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two items share the same id
    #[error("Duplicate item id: {0}")]
    DuplicateId(u64),

    /// Two items share the same slug
    #[error("Duplicate item slug: {0}")]
    DuplicateSlug(String),

    /// An item references a category that is not declared in the catalog
    #[error("Item '{slug}' references unknown category '{category}'")]
    UnknownCategory { slug: String, category: String },
}
