//! # Report Module
//!
//! Per-file results of a run and their aggregation into a summary, plus the
//! optional JSON report written with `--report-json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::writer::HeaderAction;

/// Information about a visited file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// What was done (or, in check mode, would be done) to the file
  pub action: FileAction,
  /// Why the file was skipped, if it was
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reason: Option<String>,
}

impl FileReport {
  pub const fn new(path: PathBuf, action: FileAction) -> Self {
    Self {
      path,
      action,
      reason: None,
    }
  }

  pub fn skipped(path: PathBuf, reason: impl Into<String>) -> Self {
    Self {
      path,
      action: FileAction::Skipped,
      reason: Some(reason.into()),
    }
  }

  /// Whether the file's content changed or would change.
  pub const fn is_change(&self) -> bool {
    matches!(self.action, FileAction::Inserted | FileAction::Replaced)
  }
}

/// Possible actions taken on a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
  /// Notice was prepended
  Inserted,
  /// An existing notice was replaced
  Replaced,
  /// The notice was already present
  #[serde(rename = "none")]
  Unchanged,
  /// File was not touched (e.g. not valid UTF-8)
  Skipped,
}

impl From<HeaderAction> for FileAction {
  fn from(action: HeaderAction) -> Self {
    match action {
      HeaderAction::Inserted => Self::Inserted,
      HeaderAction::Replaced => Self::Replaced,
    }
  }
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy().replace('\\', "/"))
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Summary of the processing results
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingSummary {
  /// Number of candidate files visited
  pub total_files: usize,
  /// Number of notices inserted
  pub inserted: usize,
  /// Number of notices replaced
  pub replaced: usize,
  /// Number of files that already carried the notice
  pub unchanged: usize,
  /// Number of files skipped
  pub skipped: usize,
  /// Total processing time
  #[serde(skip_serializing)]
  pub processing_time: Duration,
  /// Processing time in milliseconds for serialization
  pub processing_time_ms: u128,
  /// Timestamp when the summary was created
  pub timestamp: i64,
}

impl ProcessingSummary {
  /// Create a ProcessingSummary from a collection of FileReports
  pub fn from_reports(files: &[FileReport], processing_time: Duration) -> Self {
    let count = |action: FileAction| files.iter().filter(|f| f.action == action).count();
    Self {
      total_files: files.len(),
      inserted: count(FileAction::Inserted),
      replaced: count(FileAction::Replaced),
      unchanged: count(FileAction::Unchanged),
      skipped: count(FileAction::Skipped),
      processing_time,
      processing_time_ms: processing_time.as_millis(),
      timestamp: Local::now().timestamp(),
    }
  }

  /// Number of files changed (or that would change in check mode).
  pub const fn changed(&self) -> usize {
    self.inserted + self.replaced
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: &'a ProcessingSummary,
  files: &'a [FileReport],
}

/// Renders the JSON report.
pub fn render_json(files: &[FileReport], summary: &ProcessingSummary) -> Result<String> {
  Ok(serde_json::to_string_pretty(&JsonReport { summary, files })?)
}

/// Writes the JSON report to `output_path`.
pub fn write_json_report(output_path: &Path, files: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
  let content = render_json(files, summary)?;
  fs::write(output_path, content).with_context(|| format!("Failed to write report to {}", output_path.display()))
}
