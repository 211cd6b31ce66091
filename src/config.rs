//! Configuration file support.
//!
//! ```yaml
//! format: html
//! presets-file: ~/my-presets.yaml
//! ```
//!
//! Resolution: an explicit path wins, then `CHORD_TRANSPOSER_CONFIG`, then
//! built-in defaults. Command-line flags are applied on top by the binary.

use crate::error::TransposeError;
use crate::render::OutputFormat;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "CHORD_TRANSPOSER_CONFIG";

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ChordTransposerConfig {
    /// Output format for `table` (default: text)
    #[serde(default)]
    pub format: OutputFormat,

    /// Extra presets merged over the built-in catalog
    pub presets_file: Option<PathBuf>,
}

impl ChordTransposerConfig {
    pub fn from_yaml(content: &str) -> Result<Self, TransposeError> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| TransposeError::Config(e.to_string()))
    }

    pub fn load_file(path: &Path) -> Result<Self, TransposeError> {
        let content = fs::read_to_string(path).map_err(|e| TransposeError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config = Self::from_yaml(&content)?;

        // Relative preset paths are taken relative to the config file
        if let (Some(presets), Some(dir)) = (&config.presets_file, path.parent()) {
            if presets.is_relative() {
                config.presets_file = Some(dir.join(presets));
            }
        }

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `explicit`, else from the path in `CHORD_TRANSPOSER_CONFIG`,
    /// else return defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, TransposeError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ChordTransposerConfig::from_yaml("").unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.presets_file.is_none());
    }

    #[test]
    fn test_parse_config() {
        let config =
            ChordTransposerConfig::from_yaml("format: yaml\npresets-file: /tmp/p.yaml\n").unwrap();
        assert_eq!(config.format, OutputFormat::Yaml);
        assert_eq!(config.presets_file, Some(PathBuf::from("/tmp/p.yaml")));
    }

    #[test]
    fn test_rejects_unknown_keys_and_formats() {
        assert!(matches!(
            ChordTransposerConfig::from_yaml("colour: blue\n"),
            Err(TransposeError::Config(_))
        ));
        assert!(ChordTransposerConfig::from_yaml("format: pdf\n").is_err());
    }

    #[test]
    fn test_relative_presets_path_follows_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "presets-file: extra.yaml").unwrap();

        let config = ChordTransposerConfig::load_file(&path).unwrap();
        assert_eq!(config.presets_file, Some(dir.path().join("extra.yaml")));
    }

    #[test]
    fn test_missing_file() {
        let result = ChordTransposerConfig::resolve(Some(Path::new("/nonexistent/config.yaml")));
        assert!(matches!(result, Err(TransposeError::Io { .. })));
    }
}
