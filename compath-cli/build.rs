//! Build script for compath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

fn positional(name: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).value_name(value_name).help(help).required(true)
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_parser(["text", "json"])
        .default_value("text")
        .help("Output format")
}

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("compath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize and combine component paths")
        .long_about(
            "Command-line tool for validating, normalizing and combining \
             slash-delimited paths that name nodes of a component tree",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("flavor-file")
                .long("flavor-file")
                .help("YAML file defining the separator and disallowed characters")
                .value_name("FILE")
                .global(true)
                .env("COMPATH_FLAVOR_FILE"),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Print the canonical form of a path")
                .arg(positional("path", "PATH", "Raw path to normalize")),
            Command::new("absolute")
                .about("Resolve a path against an absolute base")
                .arg(
                    Arg::new("base")
                        .long("base")
                        .value_name("BASE")
                        .required(true)
                        .help("Absolute base path"),
                )
                .arg(positional("path", "PATH", "Path to resolve")),
            Command::new("relative")
                .about("Compute the relative path between two absolute paths")
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_name("FROM")
                        .required(true)
                        .help("Absolute starting path"),
                )
                .arg(positional("to", "TO", "Absolute target path")),
            Command::new("parent")
                .about("Print the parent of a path")
                .arg(positional("path", "PATH", "Path whose parent to print")),
            Command::new("name")
                .about("Print the last segment of a path")
                .arg(positional("path", "PATH", "Path whose leaf name to print")),
            Command::new("split")
                .about("Split a path into parent and name")
                .arg(positional("path", "PATH", "Path to split"))
                .arg(format_arg()),
            Command::new("level")
                .about("Print the segment at a given level")
                .arg(positional("path", "PATH", "Path to index into"))
                .arg(positional("index", "INDEX", "Level index")),
            Command::new("segments")
                .about("List the segments of a path")
                .arg(positional("path", "PATH", "Path to decompose"))
                .arg(format_arg()),
            Command::new("relationship")
                .about("Describe how two paths relate")
                .arg(positional("first", "FIRST", "First path"))
                .arg(positional("second", "SECOND", "Second path")),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("compath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
