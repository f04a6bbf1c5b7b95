//! Command describing how two paths relate.

use crate::error::CliError;
use crate::utils::{load_flavor, parse_path, GlobalOptions};
use clap::Args;
use compath::PathRelationship;

/// Describe whether FIRST is an ancestor, descendant or unrelated to SECOND.
#[derive(Args)]
pub struct RelationshipCommand {
    /// First path
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second path
    #[arg(value_name = "SECOND")]
    pub second: String,
}

impl RelationshipCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let flavor = load_flavor(global)?;
        let first = parse_path(&self.first, &flavor)?;
        let second = parse_path(&self.second, &flavor)?;

        let rel = PathRelationship::between(&first, &second);
        println!("{}", rel.description(&first, &second));
        Ok(())
    }
}
