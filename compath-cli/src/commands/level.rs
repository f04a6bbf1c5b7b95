//! Command printing the segment at a given level.

use crate::error::CliError;
use crate::utils::{load_flavor, parse_path, GlobalOptions};
use clap::Args;

/// Print the segment at INDEX, where level 0 is closest to the root.
#[derive(Args)]
pub struct LevelCommand {
    /// Path to index into
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Level index
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

impl LevelCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let flavor = load_flavor(global)?;
        let path = parse_path(&self.path, &flavor)?;
        println!("{}", path.subcomponent_name_at_level(self.index)?);
        Ok(())
    }
}
