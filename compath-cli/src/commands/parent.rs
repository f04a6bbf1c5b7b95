//! Command printing the parent of a path.

use crate::error::CliError;
use crate::utils::{load_flavor, parse_path, GlobalOptions};
use clap::Args;

/// Print the path without its last segment.
#[derive(Args)]
pub struct ParentCommand {
    /// Path whose parent to print
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ParentCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let flavor = load_flavor(global)?;
        let path = parse_path(&self.path, &flavor)?;
        println!("{}", path.parent_path_string());
        Ok(())
    }
}
