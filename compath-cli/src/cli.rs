//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbsoluteCommand, CompletionsCommand, LevelCommand, NameCommand, NormalizeCommand,
    ParentCommand, RelationshipCommand, RelativeCommand, SegmentsCommand, SplitCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for working with component paths.
#[derive(Parser)]
#[command(name = "compath")]
#[command(version, about = "Normalize and combine component paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// YAML file defining the separator and disallowed characters
    #[arg(long, value_name = "FILE", global = true, env = "COMPATH_FLAVOR_FILE")]
    pub flavor_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical form of a path
    Normalize(NormalizeCommand),

    /// Resolve a path against an absolute base
    Absolute(AbsoluteCommand),

    /// Compute the relative path between two absolute paths
    Relative(RelativeCommand),

    /// Print the parent of a path
    Parent(ParentCommand),

    /// Print the last segment of a path
    Name(NameCommand),

    /// Split a path into parent and name
    Split(SplitCommand),

    /// Print the segment at a given level
    Level(LevelCommand),

    /// List the segments of a path
    Segments(SegmentsCommand),

    /// Describe how two paths relate
    Relationship(RelationshipCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
