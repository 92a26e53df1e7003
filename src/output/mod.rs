//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including item lines, facet value lines, and category coloring from the
//! catalog's hex display colors.

use crate::catalog::{CatalogItem, FacetValue};
use colored::Colorize;

/// Parse a `#rrggbb` hex string into an RGB triple
#[must_use]
pub fn hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Color a label with a facet value's display color, if it has one
#[must_use]
pub fn colorize_facet(label: &str, value: Option<&FacetValue>) -> String {
    match value.and_then(|v| v.color.as_deref()).and_then(hex_color) {
        Some((r, g, b)) => label.truecolor(r, g, b).to_string(),
        None => label.to_string(),
    }
}

/// Format one catalog item as a result line
///
/// Quiet mode prints only the slug, for piping into other tools.
#[must_use]
pub fn item_line(item: &CatalogItem, category: Option<&FacetValue>, quiet: bool) -> String {
    if quiet {
        return item.slug.clone();
    }

    let category_label = colorize_facet(&item.category, category);
    if item.short_summary.is_empty() {
        format!("  {} [{}]", item.title, category_label)
    } else {
        format!("  {} [{}] - {}", item.title, category_label, item.short_summary)
    }
}

/// Format a facet value with its item count
#[must_use]
pub fn facet_with_count(value: &FacetValue, count: usize, quiet: bool) -> String {
    if quiet {
        value.id.clone()
    } else {
        let name = colorize_facet(&value.name, Some(value));
        format!("  {} ({} item(s))", name, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#4F7DF3"), Some((0x4F, 0x7D, 0xF3)));
        assert_eq!(hex_color("#ffffff"), Some((255, 255, 255)));
        assert_eq!(hex_color("4F7DF3"), None);
        assert_eq!(hex_color("#zzz"), None);
        assert_eq!(hex_color("#4F7D"), None);
    }

    #[test]
    fn test_item_line_quiet_is_slug_only() {
        let item = CatalogItem {
            slug: "prekindle".to_string(),
            title: "Prekindle".to_string(),
            category: "ticketing".to_string(),
            ..Default::default()
        };
        assert_eq!(item_line(&item, None, true), "prekindle");
    }
}
