//! # Configuration Module
//!
//! This module provides configuration file support for copyrighter, allowing
//! users to register extra languages, exclude extensions and set include /
//! exclude path filters without repeating them on every command line.
//!
//! Configuration can be specified in a `.copyrighter.toml` file or via the
//! `COPYRIGHTER_CONFIG` environment variable.
//!
//! ```toml
//! notice-file = "copyright.go"
//! recurse = true
//! exclude-extensions = ["js"]
//! filters = ["-vendor/**", "+vendor/ours/**"]
//!
//! [languages]
//! ".rs" = { line = "//", block-start = "/*", block-end = "*/" }
//! ".lua" = { line = "--" }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".copyrighter.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "COPYRIGHTER_CONFIG";

/// Comment markers for a user-defined language.
///
/// Empty values mean the corresponding comment form is not available.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LanguageConfig {
  /// Line comment prefix (e.g. "//")
  #[serde(default)]
  pub line: String,

  /// Block comment start token (e.g. "/*")
  #[serde(default)]
  pub block_start: String,

  /// Block comment end token (e.g. "*/")
  #[serde(default)]
  pub block_end: String,
}

#[cfg(test)]
impl LanguageConfig {
  pub fn line(prefix: &str) -> Self {
    Self {
      line: prefix.to_string(),
      ..Self::default()
    }
  }

  pub fn block(start: &str, end: &str) -> Self {
    Self {
      line: String::new(),
      block_start: start.to_string(),
      block_end: end.to_string(),
    }
  }
}

/// Main configuration struct for copyrighter.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
  /// Notice file, relative to the processed directory.
  #[serde(default)]
  pub notice_file: Option<PathBuf>,

  /// Recurse into sub-directories.
  #[serde(default)]
  pub recurse: bool,

  /// Extensions to skip, with or without the leading dot.
  #[serde(default)]
  pub exclude_extensions: Vec<String>,

  /// Ordered `+glob` / `-glob` path rules; the last matching rule wins.
  #[serde(default)]
  pub filters: Vec<String>,

  /// Additional or overriding languages, keyed by extension with its dot.
  #[serde(default)]
  pub languages: HashMap<String, LanguageConfig>,
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

  /// A language entry is invalid.
  #[error("Invalid comment style for '{extension}': {message}")]
  InvalidCommentStyle { extension: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    verbose_log!("Loaded {} language overrides", config.languages.len());

    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - Language keys include the leading dot
  /// - Every language has a line prefix or a complete pair of block tokens
  /// - Block tokens are given together or not at all
  fn validate(&self) -> Result<(), ConfigError> {
    for (ext, language) in &self.languages {
      let invalid = |message: &str| ConfigError::InvalidCommentStyle {
        extension: ext.clone(),
        message: message.to_string(),
      };

      if !ext.starts_with('.') || ext.len() < 2 {
        return Err(invalid("extension must include the leading dot"));
      }

      if language.block_start.is_empty() != language.block_end.is_empty() {
        return Err(invalid("block-start and block-end must be set together"));
      }

      if language.line.is_empty() && language.block_start.is_empty() {
        return Err(invalid("at least a line prefix or a block pair is required"));
      }
    }

    Ok(())
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `COPYRIGHTER_CONFIG` environment variable
/// 3. `.copyrighter.toml` in the processed directory
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let root_config = root.join(DEFAULT_CONFIG_FILENAME);
  if root_config.exists() {
    verbose_log!("Using config: {}", root_config.display());
    return Some(root_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// Returns `Ok(None)` when discovery is disabled or no file exists.
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
