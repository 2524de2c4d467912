//! # File I/O Module
//!
//! Whole-file reads and writes for the processor. Each call opens, uses and
//! releases its own handle.

use std::path::Path;

use crate::error::RunError;

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads a whole file as raw bytes.
  ///
  /// # Errors
  ///
  /// [`RunError::FileReadFailure`] if the file cannot be opened or read.
  pub fn read_source(path: &Path) -> Result<Vec<u8>, RunError> {
    std::fs::read(path).map_err(|source| RunError::FileReadFailure {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Interprets raw bytes as text, returning `None` for non-UTF-8 content.
  pub fn decode(bytes: Vec<u8>) -> Option<String> {
    String::from_utf8(bytes).ok()
  }

  /// Replaces the content of a file.
  ///
  /// # Errors
  ///
  /// [`RunError::FileWriteFailure`] if the file cannot be written.
  pub fn write_source(path: &Path, content: &str) -> Result<(), RunError> {
    std::fs::write(path, content).map_err(|source| RunError::FileWriteFailure {
      path: path.to_path_buf(),
      source,
    })
  }
}
