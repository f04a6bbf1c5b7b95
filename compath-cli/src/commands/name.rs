//! Command printing the leaf name of a path.

use crate::error::CliError;
use crate::utils::{load_flavor, parse_path, GlobalOptions};
use clap::Args;

/// Print the last segment of a path (empty for the root).
#[derive(Args)]
pub struct NameCommand {
    /// Path whose leaf name to print
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl NameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let flavor = load_flavor(global)?;
        let path = parse_path(&self.path, &flavor)?;
        println!("{}", path.component_name());
        Ok(())
    }
}
