//! Configuration file handling for img2ascii.
//!
//! An optional TOML file (passed via `--config`) supplies defaults for the
//! bounding-box caps, the rendering mode, and the output sink. Command-line
//! arguments always win over the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file structure.
///
/// Every field has a default, so a partial file is fine.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    /// Maximum output width in characters.
    #[serde(default = "default_cap")]
    pub max_width: u32,
    /// Maximum output height in characters.
    #[serde(default = "default_cap")]
    pub max_height: u32,
    /// Rendering mode flag; "hack" enables the row-skip compensation.
    #[serde(default)]
    pub mode: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            max_width: default_cap(),
            max_height: default_cap(),
            mode: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output file path.
    #[serde(default = "default_output")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: default_output(),
        }
    }
}

/// Default bounding-box cap on both axes.
fn default_cap() -> u32 {
    200
}

/// Default output sink.
fn default_output() -> PathBuf {
    PathBuf::from("output.txt")
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// Returns built-in defaults when no path is given. An explicit path that
    /// cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.render.max_width, 200);
        assert_eq!(config.render.max_height, 200);
        assert!(config.render.mode.is_none());
        assert_eq!(config.output.path, PathBuf::from("output.txt"));
    }

    #[test]
    fn test_full_file_parses() {
        let config: Config = toml::from_str(
            r#"
            [render]
            max_width = 80
            max_height = 40
            mode = "hack"

            [output]
            path = "art.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.render.max_width, 80);
        assert_eq!(config.render.max_height, 40);
        assert_eq!(config.render.mode.as_deref(), Some("hack"));
        assert_eq!(config.output.path, PathBuf::from("art.txt"));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("[render]\nmax_width = 120\n").unwrap();
        assert_eq!(config.render.max_width, 120);
        assert_eq!(config.render.max_height, 200);
        assert_eq!(config.output.path, PathBuf::from("output.txt"));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
