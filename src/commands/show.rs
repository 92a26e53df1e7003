//! Show command - display one catalog item by slug

use crate::{Dimension, FacetrError, catalog::Catalog, output};

type Result<T> = std::result::Result<T, FacetrError>;

/// Execute the show command
///
/// An unknown slug renders a not-found message; it is a valid outcome, not
/// an error.
pub fn execute(catalog: &Catalog, slug: &str, quiet: bool) -> Result<()> {
    let Some(item) = catalog.item_by_slug(slug) else {
        println!("No item found with slug '{slug}'.");
        return Ok(());
    };

    if quiet {
        println!("{}", item.slug);
        return Ok(());
    }

    let category = catalog.facet_value(Dimension::Category, &item.category);
    let category_label = match category {
        Some(value) => output::colorize_facet(&value.name, category),
        None => item.category.clone(),
    };

    println!("{}", item.title);
    println!("Slug: {}", item.slug);
    println!("Category: {category_label}");

    if !item.short_summary.is_empty() {
        println!("\n{}", item.short_summary);
    }
    if !item.long_summary.is_empty() {
        println!("\n{}", item.long_summary);
    }

    if !item.platforms.is_empty() {
        println!("\nPlatforms: {}", item.platforms.join(", "));
    }
    if !item.features.is_empty() {
        println!("Features: {}", item.features.join(", "));
    }
    if !item.tags.is_empty() {
        println!("Tags: {}", item.tags.join(", "));
    }

    if !item.usage_instructions.is_empty() {
        println!("\nHow to use:");
        for (step, instruction) in item.usage_instructions.iter().enumerate() {
            println!("  {}. {instruction}", step + 1);
        }
    }

    if let Some(url) = &item.download_url {
        println!("\nDownload: {url}");
    }
    if let Some(url) = &item.learn_more_url {
        println!("Learn more: {url}");
    }
    if !item.screenshots.is_empty() {
        println!("Screenshots: {}", item.screenshots.len());
    }

    Ok(())
}
