//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! flavor loading, path parsing and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use compath::{ConfigLoader, CustomFlavor, Path};
use serde::Serialize;
use std::path::PathBuf;

/// Path type handled by the CLI: the flavor is only known at runtime.
pub type CliPath = Path<CustomFlavor>;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // `verbose` is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Flavor file overriding the component flavor.
    pub flavor_file: Option<PathBuf>,
}

/// Output format for commands printing structured data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one item per line.
    Text,
    /// A single JSON document.
    Json,
}

/// Load the flavor selected by the global options.
///
/// Without a flavor file this is the component flavor.
pub fn load_flavor(global: &GlobalOptions) -> Result<CustomFlavor, CliError> {
    match global.flavor_file {
        Some(ref file) if file.is_dir() => Err(CliError::InvalidArguments(format!(
            "flavor file {} is a directory",
            file.display()
        ))),
        Some(ref file) => {
            log::info!("Using flavor file {}", file.display());
            Ok(ConfigLoader::load_flavor(file)?)
        }
        None => Ok(CustomFlavor::component()),
    }
}

/// Parse a raw path argument with `flavor`.
pub fn parse_path(raw: &str, flavor: &CustomFlavor) -> Result<CliPath, CliError> {
    let path = CliPath::parse_with(raw, flavor.clone())?;
    log::debug!("Parsed '{raw}' as '{path}'");
    Ok(path)
}

/// Parse a path operand that may start with a run of `..`, as printed by
/// the `relative` command.
pub fn parse_relative_path(raw: &str, flavor: &CustomFlavor) -> Result<CliPath, CliError> {
    let path = CliPath::parse_relative_with(raw, flavor.clone())?;
    log::debug!("Parsed operand '{raw}' as '{path}'");
    Ok(path)
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
