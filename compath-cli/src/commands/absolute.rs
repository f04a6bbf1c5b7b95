//! Command resolving a path against an absolute base.

use crate::error::CliError;
use crate::utils::{load_flavor, parse_path, parse_relative_path, GlobalOptions};
use clap::Args;

/// Resolve PATH against the absolute path BASE.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Absolute base path
    #[arg(long, value_name = "BASE")]
    pub base: String,

    /// Path to resolve, possibly starting with `..`; returned unchanged if
    /// already absolute
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl AbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let flavor = load_flavor(global)?;
        let base = parse_path(&self.base, &flavor)?;
        let other = parse_relative_path(&self.path, &flavor)?;

        println!("{}", base.form_absolute_path(&other)?);
        Ok(())
    }
}
