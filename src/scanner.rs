//! # Scanner Module
//!
//! Finds the first comment of a source file and decodes its text.
//!
//! The scanner only understands two shapes of comment:
//!
//! - a run of consecutive lines that each start (after trimming) with the
//!   line prefix, e.g. `// ...`
//! - a block whose start and end delimiters each sit alone on their own line:
//!
//! ```text
//! /*
//! Copyright 2024 Example
//! */
//! ```
//!
//! Lines that do not open a comment (blank lines, `package` statements, code)
//! are walked past until an opening line shows up. A block opener followed by
//! anything on the same line, such as `/* Foo */`, ends the search without a
//! result.

use std::ops::Range;

use crate::languages::CommentStyle;

/// Maximum number of lines searched for the line that opens the first
/// comment.
pub const SCAN_LINE_LIMIT: usize = 1024;

/// Result of scanning a source for its first comment.
///
/// `start_line..end_line` is the half-open range of lines (zero-based, split on
/// `\n`) consumed by the comment, delimiter lines included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedComment {
  /// Decoded text with markers stripped and internal newlines preserved
  pub text: String,
  /// Whether a comment was found
  pub found: bool,
  /// First line of the comment
  pub start_line: usize,
  /// Line after the last line of the comment
  pub end_line: usize,
}

impl DetectedComment {
  /// The "nothing found" result.
  pub const fn not_found() -> Self {
    Self {
      text: String::new(),
      found: false,
      start_line: 0,
      end_line: 0,
    }
  }

  /// Lines covered by the comment.
  pub const fn line_range(&self) -> Range<usize> {
    self.start_line..self.end_line
  }
}

/// How a single line relates to the start of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
  /// The line is exactly the block start token
  BlockOpen,
  /// The line starts with the block start token but carries more text
  InlineBlock,
  /// The line starts with the line prefix
  LineComment,
  /// Anything else
  Other,
}

fn classify(line: &str, style: &CommentStyle) -> LineKind {
  let trimmed = line.trim();
  if style.supports_block() {
    if trimmed == style.block_start {
      return LineKind::BlockOpen;
    }
    if trimmed.starts_with(&style.block_start) {
      return LineKind::InlineBlock;
    }
  }
  if style.supports_line() && trimmed.starts_with(&style.line_prefix) {
    return LineKind::LineComment;
  }
  LineKind::Other
}

/// Detects the first comment in `source` using the markers of `style`.
///
/// Never fails: a missing, unterminated or inline comment yields
/// [`DetectedComment::not_found`].
pub fn detect_first_comment(source: &str, style: &CommentStyle) -> DetectedComment {
  let lines: Vec<&str> = source.split('\n').collect();
  detect_in_lines(&lines, style)
}

/// Same as [`detect_first_comment`], over an already split sequence of lines.
pub fn detect_in_lines(lines: &[&str], style: &CommentStyle) -> DetectedComment {
  for (index, line) in lines.iter().enumerate().take(SCAN_LINE_LIMIT) {
    match classify(line, style) {
      LineKind::BlockOpen => return scan_block(lines, index, style),
      LineKind::LineComment => return scan_line_run(lines, index, style),
      LineKind::InlineBlock => return DetectedComment::not_found(),
      LineKind::Other => {}
    }
  }
  DetectedComment::not_found()
}

fn scan_block(lines: &[&str], start: usize, style: &CommentStyle) -> DetectedComment {
  let mut body = Vec::new();
  for (offset, line) in lines[start + 1..].iter().enumerate() {
    if line.trim() == style.block_end {
      return DetectedComment {
        text: body.join("\n"),
        found: true,
        start_line: start,
        end_line: start + offset + 2,
      };
    }
    body.push(strip_trailing_spaces(line));
  }
  // Unterminated block
  DetectedComment::not_found()
}

fn scan_line_run(lines: &[&str], start: usize, style: &CommentStyle) -> DetectedComment {
  let body: Vec<&str> = lines[start..]
    .iter()
    .map(|line| line.trim_start())
    .take_while(|trimmed| trimmed.starts_with(&style.line_prefix))
    .map(|trimmed| strip_line_prefix(strip_trailing_spaces(trimmed), &style.line_prefix))
    .collect();

  DetectedComment {
    end_line: start + body.len(),
    text: body.join("\n"),
    found: true,
    start_line: start,
  }
}

/// Removes the prefix and at most one following space.
fn strip_line_prefix<'a>(trimmed: &'a str, prefix: &str) -> &'a str {
  let rest = &trimmed[prefix.len()..];
  rest.strip_prefix(' ').unwrap_or(rest)
}

fn strip_trailing_spaces(line: &str) -> &str {
  line.strip_suffix('\r').unwrap_or(line).trim_end_matches(' ')
}
