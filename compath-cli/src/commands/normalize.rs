//! Command printing the canonical form of a path.

use crate::error::CliError;
use crate::utils::{load_flavor, GlobalOptions};
use clap::Args;

/// Print the canonical form of a raw path.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Raw path to normalize
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let flavor = load_flavor(global)?;
        let normalized = compath::normalize_with(&self.path, &flavor)?;
        println!("{normalized}");
        Ok(())
    }
}
