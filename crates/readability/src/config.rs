//! Configuration management for readability
//!
//! Loads the default score selection and output format.
//! Command-line flags always take precedence over configured values.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ReadabilityError, Result};
use crate::report::{OutputFormat, ScoreSelection};

/// Config files looked up in the working directory, in order
const LOCAL_CONFIG_PATHS: [&str; 2] = [".readability.json", "readability.json"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReadabilityConfig {
  /// Scores printed when `--score` is not given
  #[serde(default)]
  pub score: ScoreSelection,
  /// Output format used when `--format` is not given
  #[serde(default)]
  pub format: OutputFormat,
}

impl ReadabilityConfig {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ReadabilityError::io(path, e))?;
    let config = serde_json::from_str(&content).map_err(|e| ReadabilityError::config(path, e))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
  }

  /// Load the first config found in the working directory or the user
  /// config directory, falling back to defaults
  pub fn load() -> Result<Self> {
    match Self::candidate_paths().into_iter().find(|path| path.exists()) {
      Some(path) => Self::load_from_file(path),
      None => Ok(Self::default()),
    }
  }

  pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = LOCAL_CONFIG_PATHS.iter().map(PathBuf::from).collect();
    if let Some(config_dir) = dirs::config_dir() {
      paths.push(config_dir.join("readability").join("config.json"));
    }
    paths
  }

  /// Resolve the effective selection and format, preferring explicit flags
  pub fn resolve(
    &self,
    score: Option<ScoreSelection>,
    format: Option<OutputFormat>,
  ) -> (ScoreSelection, OutputFormat) {
    (score.unwrap_or(self.score), format.unwrap_or(self.format))
  }
}
