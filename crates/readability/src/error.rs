use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReadabilityError>;

#[derive(Error, Debug)]
pub enum ReadabilityError {
  #[error("Failed to read {}: {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },

  #[error("Invalid configuration in {}: {source}", path.display())]
  Config { path: PathBuf, source: serde_json::Error },

  #[error("Unknown score '{value}', expected one of ARI, FK, SMOG, CL, all")]
  InvalidSelection { value: String },
}

impl ReadabilityError {
  pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io { path: path.into(), source }
  }

  pub fn config(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
    Self::Config { path: path.into(), source }
  }

  pub fn invalid_selection(value: impl Into<String>) -> Self {
    Self::InvalidSelection { value: value.into() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_io_error_names_path() {
    let err = ReadabilityError::io(
      "missing.txt",
      std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    );
    let message = err.to_string();
    assert!(message.contains("missing.txt"));
    assert!(message.contains("not found"));
  }

  #[test]
  fn test_invalid_selection_message() {
    let err = ReadabilityError::invalid_selection("xyz");
    assert_eq!(err.to_string(), "Unknown score 'xyz', expected one of ARI, FK, SMOG, CL, all");
  }
}
