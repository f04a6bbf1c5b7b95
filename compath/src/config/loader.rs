//! Flavor file loading.

use std::fs;
use std::path::Path;

use crate::config::schema::FlavorConfig;
use crate::error::{Error, Result};
use crate::flavor::CustomFlavor;

/// Loads flavor configuration from YAML.
///
/// # Examples
///
/// ```no_run
/// use compath::config::ConfigLoader;
/// use std::path::Path;
///
/// let flavor = ConfigLoader::load_flavor(Path::new("flavor.yaml")).unwrap();
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse a flavor configuration from a YAML string.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is malformed or has
    /// unknown fields.
    pub fn from_yaml_str(contents: &str) -> Result<FlavorConfig> {
        if contents.trim().is_empty() {
            return Ok(FlavorConfig::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Load a flavor configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Configuration`] if it cannot be parsed.
    pub fn load_file(path: &Path) -> Result<FlavorConfig> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        log::debug!(
            "Loaded flavor configuration {} from {}",
            config.name.as_deref().unwrap_or("<unnamed>"),
            path.display()
        );
        Ok(config)
    }

    /// Load a flavor file and build the flavor it describes.
    ///
    /// # Errors
    ///
    /// Returns any error of [`ConfigLoader::load_file`], or
    /// [`Error::Validation`] if the configuration is invalid.
    pub fn load_flavor(path: &Path) -> Result<CustomFlavor> {
        let config = Self::load_file(path)?;
        config.to_flavor().map_err(|e| match e {
            Error::Validation { field, message } => Error::Validation {
                field,
                message: format!("{message} (in {})", path.display()),
            },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::Flavor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_yaml_str_empty_is_default() {
        assert_eq!(
            ConfigLoader::from_yaml_str("").unwrap(),
            FlavorConfig::default()
        );
        assert_eq!(
            ConfigLoader::from_yaml_str("  \n").unwrap(),
            FlavorConfig::default()
        );
    }

    #[test]
    fn test_from_yaml_str_malformed() {
        let err = ConfigLoader::from_yaml_str("separator: [unclosed").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_load_file() {
        let file = write_temp("name: signals\nseparator: ':'\ninvalid_chars: ['#', ' ']\n");
        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(config.name.as_deref(), Some("signals"));
        assert_eq!(config.separator, ':');
        assert_eq!(config.invalid_chars, vec!['#', ' ']);
    }

    #[test]
    fn test_load_flavor() {
        let file = write_temp("separator: ':'\ninvalid_chars: ['#']\n");
        let flavor = ConfigLoader::load_flavor(file.path()).unwrap();
        assert_eq!(flavor.separator(), ':');
        assert!(!flavor.is_valid("a#b"));
    }

    #[test]
    fn test_load_flavor_invalid_names_file() {
        let file = write_temp("separator: '.'\n");
        let err = ConfigLoader::load_flavor(file.path()).unwrap_err();
        match err {
            Error::Validation { field, message } => {
                assert_eq!(field, "separator");
                assert!(message.contains(&file.path().display().to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load_file(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
