//! Flavor configuration for compath.
//!
//! A path flavor (separator plus disallowed characters) can be defined in a
//! YAML file instead of in code:
//!
//! ```yaml
//! name: signal-path
//! separator: ":"
//! invalid_chars: ["*", " "]
//! ```
//!
//! Omitted fields fall back to the component flavor (`/` separator, no
//! backslash, `*`, `+`, space, tab or newline).
//!
//! # Examples
//!
//! ```
//! use compath::config::ConfigLoader;
//! use compath::{Flavor, Path};
//!
//! let config = ConfigLoader::from_yaml_str("separator: ':'\n").unwrap();
//! let flavor = config.to_flavor().unwrap();
//! assert_eq!(flavor.separator(), ':');
//!
//! let path = Path::parse_with(":a:b", flavor).unwrap();
//! assert_eq!(path.component_name(), "b");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use loader::ConfigLoader;
pub use schema::FlavorConfig;
pub use validator::ConfigValidator;
