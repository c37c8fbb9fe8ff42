//! # Configuration Module
//!
//! This module loads the optional configuration file, which lets a project
//! keep its header template and owner next to its code instead of repeating
//! them in every hook definition.
//!
//! Configuration can be specified in a `.license-headers.toml` file or via
//! the `CHECK_LICENSE_HEADERS_CONFIG` environment variable:
//!
//! ```toml
//! owner = "Example Corp"
//! template-file = "tools/license-header.txt"
//! file-types = ["python", "shell"]
//! exclude = ["vendor/**"]
//! summary = true
//! ```
//!
//! Values given on the command line win over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::file_types::all_text_file_types;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".license-headers.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "CHECK_LICENSE_HEADERS_CONFIG";

/// Settings read from the configuration file.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  /// Inline header template.
  #[serde(default)]
  pub template: Option<String>,

  /// Path to a header template. Relative paths are resolved against the
  /// directory holding the config file.
  #[serde(default)]
  pub template_file: Option<PathBuf>,

  /// Copyright owner substituted for `[OWNER]`.
  #[serde(default)]
  pub owner: Option<String>,

  /// File types to check; the built-in defaults apply when empty.
  #[serde(default)]
  pub file_types: Vec<String>,

  /// Glob patterns for paths that are never checked.
  #[serde(default)]
  pub exclude: Vec<String>,

  /// Print a summary after checking.
  #[serde(default)]
  pub summary: bool,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A value is present but not acceptable.
  #[error("Invalid value for '{key}': {message}")]
  InvalidValue { key: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Returns
  ///
  /// The loaded configuration, or an error if the file cannot be read,
  /// parsed, or validated.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("DEBUG loading config from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    if let Some(template_file) = config.template_file.take() {
      let base = path.parent().unwrap_or_else(|| Path::new(""));
      config.template_file = Some(base.join(template_file));
    }

    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - `template` and `template-file` are not both set
  /// - every entry of `file-types` is a known text type
  fn validate(&self) -> Result<(), ConfigError> {
    if self.template.is_some() && self.template_file.is_some() {
      return Err(ConfigError::InvalidValue {
        key: "template".to_string(),
        message: "cannot be combined with 'template-file'".to_string(),
      });
    }

    let known = all_text_file_types();
    if let Some(unknown) = self.file_types.iter().find(|t| !known.contains(&t.as_str())) {
      return Err(ConfigError::InvalidValue {
        key: "file-types".to_string(),
        message: format!("unknown file type '{unknown}' (see --list-file-types)"),
      });
    }

    Ok(())
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `CHECK_LICENSE_HEADERS_CONFIG` environment variable
/// 3. `.license-headers.toml` in the current directory
pub fn discover_config_path(explicit_path: Option<&Path>, current_dir: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    verbose_log!("DEBUG using explicit config path {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("DEBUG using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("DEBUG {} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let local_config = current_dir.join(DEFAULT_CONFIG_FILENAME);
  if local_config.exists() {
    verbose_log!("DEBUG using config {}", local_config.display());
    return Some(local_config);
  }

  None
}

/// Load configuration from the discovered path.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag; it must exist
/// * `current_dir` - Directory searched for `.license-headers.toml`
/// * `no_config` - If true, skip config file discovery entirely
///
/// # Returns
///
/// The loaded configuration, or `None` if no config file applies.
pub fn load_config(explicit_path: Option<&Path>, current_dir: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("DEBUG config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, current_dir) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_parse_valid_config() {
    let config_content = concat!(
      "owner = \"AFakeCompany Ltd\"\n",
      "template = \"Copyright [YEARS] [OWNER]\"\n",
      "file-types = [\"python\", \"yaml\"]\n",
      "exclude = [\"vendor/**\"]\n",
      "summary = true\n",
    );

    let config: Config = toml::from_str(config_content).expect("valid config should parse");

    assert_eq!(config.owner.as_deref(), Some("AFakeCompany Ltd"));
    assert_eq!(config.template.as_deref(), Some("Copyright [YEARS] [OWNER]"));
    assert_eq!(config.file_types, vec!["python", "yaml"]);
    assert_eq!(config.exclude, vec!["vendor/**"]);
    assert!(config.summary);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_parse_empty_config() {
    let config: Config = toml::from_str("").expect("empty config should parse");
    assert_eq!(config, Config::default());
  }

  #[test]
  fn test_unknown_key_is_rejected() {
    let result: Result<Config, _> = toml::from_str("ownr = \"typo\"\n");
    assert!(result.is_err());
  }

  #[test]
  fn test_template_and_template_file_conflict() {
    let config = Config {
      template: Some("Copyright".to_string()),
      template_file: Some(PathBuf::from("header.txt")),
      ..Config::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidValue { .. })));
  }

  #[test]
  fn test_unknown_file_type_is_rejected() {
    let config = Config {
      file_types: vec!["python".to_string(), "klingon".to_string()],
      ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("klingon"));
  }

  #[test]
  fn test_template_file_is_relative_to_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&config_path, "template-file = \"header.txt\"\n").unwrap();

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.template_file, Some(temp_dir.path().join("header.txt")));
  }

  #[test]
  fn test_load_config_discovers_local_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILENAME), "owner = \"Acme\"\n").unwrap();

    let config = load_config(None, temp_dir.path(), false).unwrap();
    assert_eq!(config.and_then(|c| c.owner).as_deref(), Some("Acme"));

    let config = load_config(None, temp_dir.path(), true).unwrap();
    assert!(config.is_none());
  }

  #[test]
  fn test_missing_explicit_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");
    assert!(load_config(Some(&missing), temp_dir.path(), false).is_err());
  }

  #[test]
  fn test_invalid_toml_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "owner = [").unwrap();

    let err = Config::load(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("bad.toml"));
  }
}
