//! Command listing the segments of a path.

use crate::error::CliError;
use crate::utils::{load_flavor, parse_path, print_json, GlobalOptions, OutputFormat};
use clap::Args;
use serde::Serialize;

/// List the segments of a path, closest to the root first.
#[derive(Args)]
pub struct SegmentsCommand {
    /// Path to decompose
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct SegmentsOutput<'a> {
    absolute: bool,
    segments: &'a [String],
}

impl SegmentsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let flavor = load_flavor(global)?;
        let path = parse_path(&self.path, &flavor)?;

        match self.format {
            OutputFormat::Text => {
                for segment in path.segments() {
                    println!("{segment}");
                }
            }
            OutputFormat::Json => print_json(&SegmentsOutput {
                absolute: path.is_absolute(),
                segments: path.segments(),
            })?,
        }
        Ok(())
    }
}
