//! CLI command implementations.
//!
//! Every command parses its path arguments with the flavor selected by the
//! global options and prints results on stdout.

pub mod absolute;
pub mod completions;
pub mod level;
pub mod name;
pub mod normalize;
pub mod parent;
pub mod relationship;
pub mod relative;
pub mod segments;
pub mod split;

pub use absolute::AbsoluteCommand;
pub use completions::CompletionsCommand;
pub use level::LevelCommand;
pub use name::NameCommand;
pub use normalize::NormalizeCommand;
pub use parent::ParentCommand;
pub use relationship::RelationshipCommand;
pub use relative::RelativeCommand;
pub use segments::SegmentsCommand;
pub use split::SplitCommand;
