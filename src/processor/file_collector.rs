//! # File Collector Module
//!
//! Lists the candidate files under the processed root, optionally recursing,
//! and skips nested projects.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::RunError;
use crate::verbose_log;

/// File collector for directory traversal.
///
/// A sub-directory holding its own copy of the notice file (same file name) is
/// a separate project with its own notice, and is not entered.
pub struct FileCollector {
  /// Whether to descend into sub-directories
  recurse: bool,
  /// File name marking the root of a project
  project_marker: Option<OsString>,
}

impl FileCollector {
  /// Creates a new FileCollector.
  ///
  /// # Parameters
  ///
  /// * `recurse` - Whether to descend into sub-directories
  /// * `project_marker` - File name whose presence marks a nested project
  pub const fn new(recurse: bool, project_marker: Option<OsString>) -> Self {
    Self { recurse, project_marker }
  }

  /// Collects all regular files under `root`, sorted by path within each
  /// directory.
  ///
  /// # Errors
  ///
  /// [`RunError::DirectoryUnreadable`] on the first directory that cannot be
  /// listed. Nothing is returned for the rest of the tree.
  pub fn collect(&self, root: &Path) -> Result<Vec<PathBuf>, RunError> {
    let max_depth = if self.recurse { usize::MAX } else { 1 };
    let start_time = std::time::Instant::now();
    debug!("Scanning directory: {}", root.display());

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
      .min_depth(1)
      .max_depth(max_depth)
      .sort_by_file_name()
      .into_iter()
      .filter_entry(|entry| !self.is_nested_project(entry));

    for entry in walker {
      let entry = entry.map_err(|err| {
        let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
        RunError::DirectoryUnreadable { path, source: err }
      })?;
      if entry.file_type().is_file() {
        files.push(entry.into_path());
      }
    }

    debug!("Found {} files in {}ms", files.len(), start_time.elapsed().as_millis());

    Ok(files)
  }

  fn is_nested_project(&self, entry: &DirEntry) -> bool {
    let Some(marker) = &self.project_marker else {
      return false;
    };
    if entry.depth() == 0 || !entry.file_type().is_dir() {
      return false;
    }
    let nested = entry.path().join(marker).is_file();
    if nested {
      verbose_log!("Skipping nested project: {}", entry.path().display());
    }
    nested
  }
}
