//! # Output Module
//!
//! All user-facing output of a run: the start message, the lists of changed
//! files, the summary and the closing hint. Everything here respects `-q`;
//! full file lists are shown with `-v`.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileAction, FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Success
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Notice missing or stale
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Notice replaced
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print "Processing N files..." or, in check mode, "Checking N files...".
pub fn print_start_message(file_count: usize, check_only: bool) {
  if is_quiet() {
    return;
  }

  let verb = if check_only { "Checking" } else { "Processing" };
  println!("{} {} {}...", verb, file_count, plural(file_count));
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the files whose notice was (or would be) inserted or replaced.
///
/// In quiet mode only the bare paths are printed, for scripting.
pub fn print_changed_files(files: &[&FileReport], action: FileAction, check_only: bool, root: Option<&Path>) {
  if files.is_empty() {
    return;
  }

  let mut sorted_files = files.to_vec();
  sorted_files.sort_by(|a, b| a.path.cmp(&b.path));

  if is_quiet() {
    if check_only {
      for file in &sorted_files {
        println!("{}", make_relative_path(&file.path, root));
      }
    }
    return;
  }

  let count = sorted_files.len();
  let header = match (action, check_only) {
    (FileAction::Replaced, true) => format!(
      "{} {} {} with an outdated notice:",
      symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
      count,
      plural(count)
    ),
    (FileAction::Replaced, false) => format!(
      "{} Replaced notice in {} {}:",
      symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
      count,
      plural(count)
    ),
    (_, true) => format!(
      "{} {} {} missing the notice:",
      symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
      count,
      plural(count)
    ),
    (_, false) => format!(
      "{} Added notice to {} {}:",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      count,
      plural(count)
    ),
  };
  println!("{}", header);

  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in sorted_files.iter().take(limit) {
    println!("  {}", make_relative_path(&file.path, root));
  }

  if !show_all && count > limit {
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      count - limit
    );
  }
}

/// Print the success message when no file needs a change.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files carry the notice.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: X inserted, Y replaced, Z unchanged, W skipped".
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &ProcessingSummary) {
  if is_quiet() {
    return;
  }

  let mut summary_line = format!(
    "Summary: {} inserted, {} replaced, {} unchanged, {} skipped",
    summary.inserted.if_supports_color(Stream::Stdout, |s| s.cyan()),
    summary.replaced.if_supports_color(Stream::Stdout, |s| s.cyan()),
    summary.unchanged.if_supports_color(Stream::Stdout, |s| s.cyan()),
    summary.skipped.if_supports_color(Stream::Stdout, |s| s.dimmed()),
  );

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Reports grouped by what happened to the file.
pub struct CategorizedReports<'a> {
  pub inserted: Vec<&'a FileReport>,
  pub replaced: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  pub fn from_reports(reports: &'a [FileReport]) -> Self {
    let by_action =
      |action: FileAction| -> Vec<&'a FileReport> { reports.iter().filter(|r| r.action == action).collect() };
    Self {
      inserted: by_action(FileAction::Inserted),
      replaced: by_action(FileAction::Replaced),
    }
  }

  pub fn has_changes(&self) -> bool {
    !self.inserted.is_empty() || !self.replaced.is_empty()
  }
}

const fn plural(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

/// Make a path relative to the processed root for display.
fn make_relative_path(path: &Path, root: Option<&Path>) -> String {
  root
    .and_then(|root| path.strip_prefix(root).ok())
    .unwrap_or(path)
    .to_string_lossy()
    .to_string()
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn test_categorize_reports() {
    let reports = vec![
      FileReport::new(PathBuf::from("a.go"), FileAction::Inserted),
      FileReport::new(PathBuf::from("b.go"), FileAction::Replaced),
      FileReport::new(PathBuf::from("c.go"), FileAction::Inserted),
      FileReport::new(PathBuf::from("d.go"), FileAction::Unchanged),
      FileReport::skipped(PathBuf::from("e.go"), "Not valid UTF-8"),
    ];

    let categorized = CategorizedReports::from_reports(&reports);
    assert_eq!(categorized.inserted.len(), 2);
    assert_eq!(categorized.replaced.len(), 1);
    assert!(categorized.has_changes());
  }

  #[test]
  fn test_categorize_reports_without_changes() {
    let reports = vec![FileReport::new(PathBuf::from("a.go"), FileAction::Unchanged)];
    assert!(!CategorizedReports::from_reports(&reports).has_changes());
  }

  #[test]
  fn test_make_relative_path_with_root() {
    let path = PathBuf::from("/workspace/project/src/main.go");
    let root = PathBuf::from("/workspace/project");

    assert_eq!(make_relative_path(&path, Some(&root)), "src/main.go");
  }

  #[test]
  fn test_make_relative_path_outside_root() {
    let path = PathBuf::from("/elsewhere/main.go");
    let root = PathBuf::from("/workspace/project");

    assert_eq!(make_relative_path(&path, Some(&root)), "/elsewhere/main.go");
  }

  #[test]
  fn test_make_relative_path_without_root() {
    let path = PathBuf::from("/workspace/project/src/main.go");
    assert_eq!(make_relative_path(&path, None), "/workspace/project/src/main.go");
  }
}
