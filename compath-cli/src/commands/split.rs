//! Command splitting a path into parent and leaf name.

use crate::error::CliError;
use crate::utils::{load_flavor, parse_path, print_json, GlobalOptions, OutputFormat};
use clap::Args;
use serde::Serialize;

/// Split a path into its parent path and leaf name.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct SplitOutput {
    parent: String,
    name: String,
}

impl SplitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let flavor = load_flavor(global)?;
        let path = parse_path(&self.path, &flavor)?;
        let (parent, name) = path.split();

        match self.format {
            OutputFormat::Text => {
                println!("parent: {parent}");
                println!("name: {name}");
            }
            OutputFormat::Json => print_json(&SplitOutput {
                parent: parent.to_string(),
                name,
            })?,
        }
        Ok(())
    }
}
