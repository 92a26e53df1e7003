//! Configuration module for facetr
//!
//! Manages application configuration: named catalog files, the default
//! catalog, quiet mode, and the registration domain allow-list.
//! Configuration is stored in the user's config directory.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

mod setup;

pub use setup::first_time_setup;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FacetrConfig {
    /// Map of catalog names to their JSON file paths
    #[serde(default)]
    pub catalogs: HashMap<String, PathBuf>,

    /// The default catalog to use when none is specified
    #[serde(default)]
    pub default_catalog: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Email domains allowed to register; empty means allow all
    #[serde(default)]
    pub allowed_domains: Vec<String>,
}

impl FacetrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("facetr").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration, running the interactive setup if no catalog has
    /// been configured yet
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading, prompting, or saving fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return first_time_setup();
        }
        Self::load()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Add a catalog to the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn add_catalog(&mut self, name: String, path: PathBuf) -> Result<(), ConfigError> {
        self.catalogs.insert(name, path);
        self.save()
    }

    /// Remove a catalog from the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn remove_catalog(&mut self, name: &str) -> Result<Option<PathBuf>, ConfigError> {
        let removed = self.catalogs.remove(name);
        if self.default_catalog.as_deref() == Some(name) {
            self.default_catalog = None;
        }
        self.save()?;
        Ok(removed)
    }

    /// Get a catalog path by name
    #[must_use]
    pub fn get_catalog(&self, name: &str) -> Option<&PathBuf> {
        self.catalogs.get(name)
    }

    /// List all catalog names
    #[must_use]
    pub fn list_catalogs(&self) -> Vec<&String> {
        self.catalogs.keys().collect()
    }

    /// Get the default catalog name
    #[must_use]
    pub fn get_default_catalog(&self) -> Option<&String> {
        self.default_catalog.as_ref()
    }

    /// Set the default catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the name is not configured or saving fails.
    pub fn set_default_catalog(&mut self, name: String) -> Result<(), ConfigError> {
        if !self.catalogs.contains_key(&name) {
            return Err(ConfigError::Message(format!(
                "Catalog '{name}' not found in configuration"
            )));
        }
        self.default_catalog = Some(name);
        self.save()
    }
}
