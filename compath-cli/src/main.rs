//! Main entry point for the compath CLI.
//!
//! This is the command-line interface for the compath library. It exposes
//! the path algebra on raw strings:
//! - `normalize`: Print the canonical form of a path
//! - `absolute` / `relative`: Convert between absolute and relative forms
//! - `parent`, `name`, `split`, `level`, `segments`: Take paths apart
//! - `relationship`: Classify two paths as ancestor, descendant or unrelated

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library diagnostics to stderr at the requested verbosity
    compath::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        flavor_file: cli.flavor_file,
    };

    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Parent(cmd) => cmd.execute(&global),
        cli::Command::Name(cmd) => cmd.execute(&global),
        cli::Command::Split(cmd) => cmd.execute(&global),
        cli::Command::Level(cmd) => cmd.execute(&global),
        cli::Command::Segments(cmd) => cmd.execute(&global),
        cli::Command::Relationship(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
