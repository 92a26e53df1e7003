//! Catalog command - manage named catalog sources in the configuration

use crate::{FacetrError, cli::CatalogCommands, config::FacetrConfig};

type Result<T> = std::result::Result<T, FacetrError>;

/// Execute the catalog management command
pub fn execute(mut config: FacetrConfig, command: &CatalogCommands, quiet: bool) -> Result<()> {
    match command {
        CatalogCommands::Add { name, path } => {
            if !path.exists() {
                return Err(FacetrError::InvalidInput(format!(
                    "Catalog file '{}' does not exist",
                    path.display()
                )));
            }
            let set_default = config.catalogs.is_empty();
            config.add_catalog(name.clone(), path.clone())?;
            if set_default {
                config.set_default_catalog(name.clone())?;
            }
            if !quiet {
                println!("Added catalog '{name}' -> {}", path.display());
                if set_default {
                    println!("Set '{name}' as the default catalog.");
                }
            }
        }
        CatalogCommands::Remove { name } => {
            match config.remove_catalog(name)? {
                Some(path) => {
                    if !quiet {
                        println!("Removed catalog '{name}' ({})", path.display());
                    }
                }
                None => {
                    return Err(FacetrError::InvalidInput(format!(
                        "Catalog '{name}' not found in configuration"
                    )));
                }
            }
        }
        CatalogCommands::List => {
            if config.catalogs.is_empty() {
                if !quiet {
                    println!("No catalogs configured.");
                }
            } else {
                if !quiet {
                    println!("Configured catalogs:");
                }
                let default = config.get_default_catalog().cloned();
                let mut names: Vec<&String> = config.list_catalogs();
                names.sort();
                for name in names {
                    let marker = if Some(name) == default.as_ref() { " (default)" } else { "" };
                    if quiet {
                        println!("{name}");
                    } else if let Some(path) = config.get_catalog(name) {
                        println!("  {name}{marker} -> {}", path.display());
                    }
                }
            }
        }
        CatalogCommands::SetDefault { name } => {
            config.set_default_catalog(name.clone())?;
            if !quiet {
                println!("Set '{name}' as the default catalog.");
            }
        }
    }
    Ok(())
}
