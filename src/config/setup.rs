//! Interactive setup wizard for first-time configuration
//!
//! Handles the interactive prompts for registering an initial catalog file
//! when facetr is run for the first time.

use super::FacetrConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for a catalog name and file path
///
/// Guides the user through registering their first catalog:
/// 1. Prompts for a catalog name (default: "default")
/// 2. Prompts for the path of the catalog JSON file
/// 3. Creates and saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup() -> Result<FacetrConfig, ConfigError> {
    println!("Welcome to facetr! Let's register your first catalog.\n");

    let catalog_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Catalog name")
        .default("default".to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let catalog_path_str: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Catalog file (JSON)")
        .default("catalog.json".to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let catalog_path = PathBuf::from(catalog_path_str);

    let mut config = FacetrConfig::default();
    config.catalogs.insert(catalog_name.clone(), catalog_path);
    config.default_catalog = Some(catalog_name);

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
