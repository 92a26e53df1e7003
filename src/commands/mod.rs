//! Command implementations for the facetr CLI
//!
//! Each subcommand gets its own module with an `execute` entry point; the
//! binary's `main` resolves the catalog/config and dispatches here.

pub mod catalog;
pub mod domain;
pub mod facets;
pub mod list;
pub mod show;
pub mod url;
