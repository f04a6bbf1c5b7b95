//! Command computing the relative path between two absolute paths.

use crate::error::CliError;
use crate::utils::{load_flavor, parse_path, GlobalOptions};
use clap::Args;

/// Print the relative path leading from FROM to TO.
///
/// Equal paths print an empty line.
#[derive(Args)]
pub struct RelativeCommand {
    /// Absolute starting path
    #[arg(long, value_name = "FROM")]
    pub from: String,

    /// Absolute target path
    #[arg(value_name = "TO")]
    pub to: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let flavor = load_flavor(global)?;
        let from = parse_path(&self.from, &flavor)?;
        let to = parse_path(&self.to, &flavor)?;

        println!("{}", from.form_relative_path(&to)?);
        Ok(())
    }
}
