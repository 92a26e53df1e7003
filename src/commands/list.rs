//! List command - apply the filter state and print matching items

use crate::{
    Dimension, FacetrError,
    catalog::Catalog,
    cli::OutputFormat,
    filter::{self, FilterState},
    output,
};
use std::io;

type Result<T> = std::result::Result<T, FacetrError>;

/// Execute the list command
pub fn execute(
    catalog: &Catalog,
    state: &FilterState,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let results = filter::apply(catalog.items(), state);

    match format {
        OutputFormat::Plain => print_plain(catalog, &results, quiet),
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Csv => print_csv(&results)?,
    }
    Ok(())
}

fn print_plain(catalog: &Catalog, results: &[&crate::catalog::CatalogItem], quiet: bool) {
    if results.is_empty() {
        if !quiet {
            println!("No items match the current filters.");
        }
        return;
    }

    if !quiet {
        let noun = if results.len() == 1 { "item" } else { "items" };
        println!("{} {noun}:", results.len());
    }
    for item in results {
        let category = catalog.facet_value(Dimension::Category, &item.category);
        println!("{}", output::item_line(item, category, quiet));
    }
}

fn print_json(results: &[&crate::catalog::CatalogItem]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

fn print_csv(results: &[&crate::catalog::CatalogItem]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer
        .write_record(["slug", "title", "category", "platforms", "features", "tags"])
        .map_err(|e| FacetrError::InvalidInput(format!("CSV write failed: {e}")))?;

    for item in results {
        writer
            .write_record([
                item.slug.as_str(),
                item.title.as_str(),
                item.category.as_str(),
                &item.platforms.join(";"),
                &item.features.join(";"),
                &item.tags.join(";"),
            ])
            .map_err(|e| FacetrError::InvalidInput(format!("CSV write failed: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| FacetrError::InvalidInput(format!("CSV write failed: {e}")))?;
    Ok(())
}
