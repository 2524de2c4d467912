//! # Diff Module
//!
//! Line diffs between a file's current content and its rewritten form, shown
//! when running with `--show-diff` or collected into one file with
//! `--save-diff`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Renders and records diffs of pending notice changes.
#[derive(Debug, Default)]
pub struct DiffManager {
  /// Print diffs to stderr
  pub show_diff: bool,

  /// File that collects every diff of the run
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether any diff output was requested.
  pub const fn is_enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates the diff file so a run never appends to a previous one.
  pub fn init(&self) -> Result<()> {
    if let Some(ref diff_path) = self.save_diff_path {
      File::create(diff_path).with_context(|| format!("Failed to create diff file {}", diff_path.display()))?;
    }
    Ok(())
  }

  /// Renders the diff of one file as plain text.
  pub fn render(path: &Path, original: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(original, new);

    let mut rendered = format!("Diff for {}:\n", path.display());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      rendered.push_str(sign);
      rendered.push_str(change.value());
      if change.missing_newline() {
        rendered.push('\n');
      }
    }
    rendered.push('\n');
    rendered
  }

  /// Shows and/or saves the diff between `original` and `new`.
  ///
  /// Diffs from successive files are appended to the same diff file.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    if !self.is_enabled() {
      return Ok(());
    }

    let rendered = Self::render(path, original, new);

    if self.show_diff {
      for line in rendered.lines() {
        if line.starts_with('+') {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |s| s.green()));
        } else if line.starts_with('-') {
          eprintln!("{}", line.if_supports_color(Stream::Stderr, |s| s.red()));
        } else {
          eprintln!("{line}");
        }
      }
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file {}", diff_path.display()))?;
      file
        .write_all(rendered.as_bytes())
        .with_context(|| format!("Failed to write diff file {}", diff_path.display()))?;
    }

    Ok(())
  }
}
