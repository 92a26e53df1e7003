//! Facets command - list a dimension's values with item counts

use crate::{Dimension, FacetrError, catalog::Catalog, index::FacetIndex, output};

type Result<T> = std::result::Result<T, FacetrError>;

/// Execute the facets command
pub fn execute(catalog: &Catalog, dimension: Dimension, quiet: bool) -> Result<()> {
    let values = catalog.facet_values(dimension);

    if values.is_empty() {
        if !quiet {
            println!("No {dimension} values declared in this catalog.");
        }
        return Ok(());
    }

    let index = FacetIndex::build(catalog);

    if !quiet {
        println!("{dimension} values:");
    }
    for value in values {
        let count = index.count(dimension, &value.id);
        println!("{}", output::facet_with_count(value, count, quiet));
    }
    Ok(())
}
