//! # Error Module
//!
//! Errors that stop a run. Scanning and rewriting never fail; a missing
//! comment is a normal result, not an error.

use std::path::PathBuf;

/// Fatal errors raised while loading the notice or processing the tree.
///
/// There is no retry and no rollback: files rewritten before the error stay
/// rewritten.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
  /// The canonical notice file is missing or unreadable.
  #[error("unable to read notice file '{path}': {source}")]
  NoticeSourceUnreadable { path: PathBuf, source: std::io::Error },

  /// The canonical notice file has no detectable comment.
  #[error("no comment found in notice file '{path}'")]
  NoticeNotFound { path: PathBuf },

  /// A directory of the tree could not be listed.
  #[error("unable to read files in '{path}': {source}")]
  DirectoryUnreadable { path: PathBuf, source: walkdir::Error },

  /// A target file could not be read.
  #[error("unable to read '{path}': {source}")]
  FileReadFailure { path: PathBuf, source: std::io::Error },

  /// A target file could not be written back.
  #[error("failed to overwrite '{path}': {source}")]
  FileWriteFailure { path: PathBuf, source: std::io::Error },
}

impl RunError {
  /// Path the error is about.
  pub fn path(&self) -> &std::path::Path {
    match self {
      Self::NoticeSourceUnreadable { path, .. }
      | Self::NoticeNotFound { path }
      | Self::DirectoryUnreadable { path, .. }
      | Self::FileReadFailure { path, .. }
      | Self::FileWriteFailure { path, .. } => path,
    }
  }
}
