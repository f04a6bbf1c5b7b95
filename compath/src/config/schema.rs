//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::flavor::{ComponentFlavor, CustomFlavor};

/// A path flavor as written in a flavor file.
///
/// # Examples
///
/// ```
/// use compath::config::FlavorConfig;
/// use compath::Flavor;
///
/// let config = FlavorConfig {
///     name: Some("signals".to_string()),
///     separator: ':',
///     ..Default::default()
/// };
/// assert_eq!(config.to_flavor().unwrap().separator(), ':');
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FlavorConfig {
    /// Optional flavor name, used in diagnostics only.
    pub name: Option<String>,

    /// Segment separator.
    pub separator: char,

    /// Characters rejected anywhere in a raw path.
    pub invalid_chars: Vec<char>,
}

impl Default for FlavorConfig {
    fn default() -> Self {
        Self {
            name: None,
            separator: ComponentFlavor::SEPARATOR,
            invalid_chars: ComponentFlavor::INVALID_CHARS.to_vec(),
        }
    }
}

impl FlavorConfig {
    /// Validate the configuration and build the flavor it describes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] if the configuration is invalid.
    pub fn to_flavor(&self) -> Result<CustomFlavor> {
        ConfigValidator::validate(self)?;
        CustomFlavor::new(self.separator, self.invalid_chars.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::Flavor;

    #[test]
    fn test_default_is_component_flavor() {
        let flavor = FlavorConfig::default().to_flavor().unwrap();
        assert_eq!(flavor, CustomFlavor::component());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = FlavorConfig {
            name: Some("signals".into()),
            separator: ':',
            invalid_chars: vec!['#'],
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: FlavorConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: FlavorConfig = serde_yaml::from_str("separator: '|'").unwrap();
        assert_eq!(config.separator, '|');
        assert_eq!(config.invalid_chars, ComponentFlavor::INVALID_CHARS.to_vec());
        assert_eq!(config.to_flavor().unwrap().separator(), '|');
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<FlavorConfig, _> =
            serde_yaml::from_str("separator: '/'\nescape: '%'\n");
        assert!(result.is_err());
    }
}
