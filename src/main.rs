//! Facetr CLI application entry point
//!
//! This is the main executable for the facetr catalog browser. It loads the
//! configured catalog, applies facet filters, and prints the results.
//!
//! # Usage
//!
//! ```bash
//! # List everything (default command)
//! facetr
//! facetr list
//!
//! # Filter by category and platform
//! facetr list -c ticketing -p android
//!
//! # Free-text search
//! facetr list -s concert
//!
//! # Seed filters from a shared query string, then narrow further
//! facetr list -Q "categories=ticketing&search=event" -p android
//!
//! # Item detail
//! facetr show prekindle
//!
//! # Facet sidebar data
//! facetr facets category
//!
//! # Shareable filter links
//! facetr url encode -c ticketing -p android
//! facetr url decode "categories=ticketing&platforms=android"
//!
//! # Registration domain gate
//! facetr domain check user@example.com
//!
//! # Quiet mode (only output results)
//! facetr -q list -c ticketing
//! ```
//!
//! # Configuration
//!
//! On first run, facetr will prompt for an initial catalog. Configuration
//! is stored in the user's config directory
//! (`~/.config/facetr/config.toml` on Linux).

use facetr::{
    FacetrError,
    catalog::Catalog,
    cli::{Cli, Commands},
    commands,
    config::FacetrConfig,
};

type Result<T> = std::result::Result<T, FacetrError>;

fn main() -> Result<()> {
    let config = FacetrConfig::load_or_setup()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    match &command {
        Commands::Catalog { command } => {
            commands::catalog::execute(config, command, quiet)?;
        }
        Commands::Url { command } => {
            commands::url::execute(command, quiet)?;
        }
        Commands::Domain { command } => {
            commands::domain::execute(&config, command, quiet)?;
        }
        _ => {
            let catalog = open_catalog(&config, &command)?;

            match &command {
                Commands::List { filter_args, format, .. } => {
                    let state = filter_args.to_state();
                    commands::list::execute(&catalog, &state, *format, quiet)?;
                }
                Commands::Show { slug, .. } => {
                    commands::show::execute(&catalog, slug, quiet)?;
                }
                Commands::Facets { dimension, .. } => {
                    commands::facets::execute(&catalog, (*dimension).into(), quiet)?;
                }
                Commands::Catalog { .. } | Commands::Url { .. } | Commands::Domain { .. } => {
                    unreachable!()
                }
            }
        }
    }

    Ok(())
}

/// Resolve and load the catalog a command should run against
fn open_catalog(config: &FacetrConfig, command: &Commands) -> Result<Catalog> {
    let name = command
        .get_catalog()
        .or_else(|| config.get_default_catalog())
        .ok_or_else(|| {
            FacetrError::InvalidInput(
                "No default catalog set. Use 'facetr catalog add <name> <path>' to register one, or specify --catalog <name>.".into(),
            )
        })?;

    let path = config.get_catalog(name).ok_or_else(|| {
        FacetrError::InvalidInput(format!("Catalog '{name}' not found in configuration"))
    })?;

    Ok(Catalog::load(path)?)
}
