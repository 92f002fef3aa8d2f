//! Configuration management and validation.
//!
//! Provides the converter's settings: the conventional input file names used
//! when a directory is given, JSON indentation, and duplicate reporting.
//! Settings layer as defaults, then an optional TOML file, then CLI overrides.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INDENT_WIDTH, FIXTURES_FILE, MAX_INDENT_WIDTH,
    MIXING_VALVES_FILE, PIPE_MATERIALS_FILE, VALVES_FILE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// File name of the pipe materials table inside an input directory
    pub pipe_materials_file: String,

    /// File name of the valves table inside an input directory
    pub valves_file: String,

    /// File name of the fixtures table inside an input directory
    pub fixtures_file: String,

    /// File name of the mixing valves table inside an input directory
    pub mixing_valves_file: String,

    /// Spaces per JSON indentation level (0 = compact)
    pub indent_width: usize,

    /// Log a warning for every identifier that replaces an earlier record
    pub warn_on_duplicates: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            pipe_materials_file: PIPE_MATERIALS_FILE.to_string(),
            valves_file: VALVES_FILE.to_string(),
            fixtures_file: FIXTURES_FILE.to_string(),
            mixing_valves_file: MIXING_VALVES_FILE.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
            warn_on_duplicates: true,
        }
    }
}

impl CatalogConfig {
    /// Default configuration file location (`<config dir>/plumbing-catalog/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;

        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        Self::from_toml_str(&text).map_err(|e| match e {
            Error::Configuration { message } => {
                Error::configuration(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Load defaults overlaid with the given (or default-located) config file
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => {
                    debug!("Loading default config file {}", path.display());
                    Self::from_file(&path)?
                }
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (key, file_name) in [
            ("pipe_materials_file", &self.pipe_materials_file),
            ("valves_file", &self.valves_file),
            ("fixtures_file", &self.fixtures_file),
            ("mixing_valves_file", &self.mixing_valves_file),
        ] {
            if file_name.trim().is_empty() {
                return Err(Error::configuration(format!("{} cannot be empty", key)));
            }
            if file_name.contains('/') || file_name.contains('\\') {
                return Err(Error::configuration(format!(
                    "{} must be a bare file name, got '{}'",
                    key, file_name
                )));
            }
        }

        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(Error::configuration(format!(
                "indent_width cannot exceed {}, got {}",
                MAX_INDENT_WIDTH, self.indent_width
            )));
        }

        Ok(())
    }

    /// Set the JSON indentation width
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Enable or disable duplicate identifier warnings
    pub fn with_duplicate_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_duplicates = enabled;
        self
    }

    /// Use custom file names for a directory input
    pub fn with_file_names(
        mut self,
        pipe_materials: impl Into<String>,
        valves: impl Into<String>,
        fixtures: impl Into<String>,
        mixing_valves: impl Into<String>,
    ) -> Self {
        self.pipe_materials_file = pipe_materials.into();
        self.valves_file = valves.into();
        self.fixtures_file = fixtures.into();
        self.mixing_valves_file = mixing_valves.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = CatalogConfig::default();
        assert_eq!(config.pipe_materials_file, "PipeMaterials.csv");
        assert_eq!(config.valves_file, "Valves.csv");
        assert_eq!(config.fixtures_file, "Fixtures.csv");
        assert_eq!(config.mixing_valves_file, "MixingValves.csv");
        assert_eq!(config.indent_width, 4);
        assert!(config.warn_on_duplicates);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CatalogConfig::from_toml_str("indent_width = 2\n").unwrap();
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.valves_file, "Valves.csv");
        assert!(config.warn_on_duplicates);
    }

    #[test]
    fn test_unknown_toml_key_rejected() {
        let result = CatalogConfig::from_toml_str("indent = 2\n");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = CatalogConfig::default().with_indent_width(17);
        assert!(config.validate().is_err());

        let config = CatalogConfig::default().with_file_names("", "V.csv", "F.csv", "M.csv");
        assert!(config.validate().is_err());

        let config =
            CatalogConfig::default().with_file_names("sub/P.csv", "V.csv", "F.csv", "M.csv");
        assert!(config.validate().is_err());

        let config = CatalogConfig::default().with_indent_width(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_layered_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "fixtures_file = \"fixtures.csv\"\nwarn_on_duplicates = false\n",
        )
        .unwrap();

        let config = CatalogConfig::load_layered(Some(&path)).unwrap();
        assert_eq!(config.fixtures_file, "fixtures.csv");
        assert!(!config.warn_on_duplicates);
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_load_layered_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        assert!(matches!(
            CatalogConfig::load_layered(Some(&path)),
            Err(Error::Io { .. })
        ));
    }
}
