//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for facetr using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **list**: List catalog items matching the active filters (default)
//! - **show**: Show one item by slug
//! - **facets**: List a dimension's facet values with item counts
//! - **url**: Encode/decode shareable filter query strings
//! - **domain**: Check emails against the registration allow-list
//! - **catalog**: Manage named catalog files (add, remove, list, set-default)
//!
//! # Design Features
//!
//! - Filter flags are repeatable (`-c ticketing -c analytics`)
//! - A raw query string (`--query "tags=x&tags=y"`) can seed the filter
//!   state, with explicit flags merged on top
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g., `l` for `list`, `s` for `show`)

use crate::Dimension;
use crate::filter::FilterState;
use crate::urlstate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Facet dimension as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionArg {
    /// Product category (single-valued per item)
    Category,
    /// Free-form tag
    Tag,
    /// Supported platform
    Platform,
    /// Advertised feature
    Feature,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Category => Self::Category,
            DimensionArg::Tag => Self::Tag,
            DimensionArg::Platform => Self::Platform,
            DimensionArg::Feature => Self::Feature,
        }
    }
}

/// Output format for the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Plain,
    /// JSON array of items
    Json,
    /// CSV with one row per item
    Csv,
}

/// Shared arguments selecting which catalog to open
#[derive(Parser, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Catalog name to use (overrides the configured default)
    #[arg(long = "catalog", value_name = "NAME")]
    pub catalog: Option<String>,
}

/// Shared filter arguments
#[derive(Parser, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free-text search over title, summary, and category
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Category ids to filter by (can specify multiple: -c cat1 -c cat2)
    #[arg(short = 'c', long = "category", value_name = "ID", num_args = 0..)]
    pub categories: Vec<String>,

    /// Tag ids to filter by
    #[arg(short = 't', long = "tag", value_name = "ID", num_args = 0..)]
    pub tags: Vec<String>,

    /// Platform ids to filter by
    #[arg(short = 'p', long = "platform", value_name = "ID", num_args = 0..)]
    pub platforms: Vec<String>,

    /// Feature ids to filter by
    #[arg(short = 'f', long = "feature", value_name = "ID", num_args = 0..)]
    pub features: Vec<String>,

    /// Raw query string to seed the filter state (flags merge on top)
    #[arg(short = 'Q', long = "query", value_name = "QUERY")]
    pub query: Option<String>,
}

impl FilterArgs {
    /// Resolve the arguments into a `FilterState`
    ///
    /// A `--query` string is decoded first; explicit flags are merged on
    /// top (selections union, a flag-provided search wins).
    #[must_use]
    pub fn to_state(&self) -> FilterState {
        let mut state = match &self.query {
            Some(query) => urlstate::decode(query),
            None => FilterState::new(),
        };

        let mut flags = FilterState::new();
        if let Some(search) = &self.search {
            flags.set_search(search.clone());
        }
        flags.categories.extend(self.categories.iter().cloned());
        flags.tags.extend(self.tags.iter().cloned());
        flags.platforms.extend(self.platforms.iter().cloned());
        flags.features.extend(self.features.iter().cloned());

        state.merge(&flags);
        state
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "facetr")]
#[command(about = "A faceted catalog filter and search tool", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, defaulting to an unfiltered `list`
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            filter_args: FilterArgs::default(),
            format: OutputFormat::Plain,
            catalog_args: CatalogArgs::default(),
        })
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List catalog items matching the active filters (default)
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        filter_args: FilterArgs,

        /// Output format
        #[arg(long = "format", value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Show one catalog item by slug
    #[command(visible_alias = "s")]
    Show {
        /// Item slug
        slug: String,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// List a dimension's facet values with item counts
    Facets {
        /// Which facet dimension to list
        #[arg(value_enum)]
        dimension: DimensionArg,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Encode or decode shareable filter query strings
    Url {
        #[command(subcommand)]
        command: UrlCommands,
    },

    /// Check email domains against the registration allow-list
    Domain {
        #[command(subcommand)]
        command: DomainCommands,
    },

    /// Manage catalog sources
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

impl Commands {
    /// The catalog name override carried by this command, if any
    #[must_use]
    pub fn get_catalog(&self) -> Option<&String> {
        match self {
            Self::List { catalog_args, .. }
            | Self::Show { catalog_args, .. }
            | Self::Facets { catalog_args, .. } => catalog_args.catalog.as_ref(),
            _ => None,
        }
    }
}

/// Subcommands for the url command
#[derive(Subcommand, Debug, Clone)]
pub enum UrlCommands {
    /// Encode filter flags into a query string
    Encode {
        #[command(flatten)]
        filter_args: FilterArgs,
    },
    /// Decode a query string into a readable filter state
    Decode {
        /// Query string (leading '?' allowed)
        query: String,
    },
}

/// Subcommands for the domain command
#[derive(Subcommand, Debug, Clone)]
pub enum DomainCommands {
    /// Check whether an email's domain may register
    Check {
        /// Email address to check
        email: String,
    },
}

/// Subcommands for catalog management
#[derive(Subcommand, Debug, Clone)]
pub enum CatalogCommands {
    /// Register a catalog file under a name
    Add {
        /// Catalog name
        name: String,
        /// Path to the catalog JSON file
        path: PathBuf,
    },
    /// Remove a named catalog from the configuration
    Remove {
        /// Catalog name
        name: String,
    },
    /// List configured catalogs
    List,
    /// Set the default catalog
    SetDefault {
        /// Catalog name
        name: String,
    },
}
