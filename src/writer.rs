//! # Writer Module
//!
//! Re-emits a source file with the notice injected at the top, or in place of
//! an existing notice comment.
//!
//! Everything outside the header stays byte-identical. The only other change
//! is a blank line between a freshly inserted header and content that
//! started right at the first line.
//!
//! ## Example
//!
//! ```rust
//! use copyrighter::detection::KeywordDetector;
//! use copyrighter::languages::style_for;
//! use copyrighter::writer::{HeaderAction, rewrite_source};
//!
//! let style = style_for(".go").expect("go is a builtin language");
//! let source = "// Old copyright notice\npackage example\n";
//!
//! let rewrite = rewrite_source(source, &style, "Copyright notice", &KeywordDetector)
//!   .expect("the old notice differs");
//! assert_eq!(rewrite.action, HeaderAction::Replaced);
//! assert_eq!(rewrite.content, "/*\nCopyright notice\n*/\npackage example\n");
//! ```

use serde::{Deserialize, Serialize};

use crate::detection::NoticeDetector;
use crate::languages::CommentStyle;
use crate::scanner::{DetectedComment, detect_first_comment};

/// Line separator used by a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
  /// `\n`
  Lf,
  /// `\r\n`
  CrLf,
}

impl LineEnding {
  /// CRLF as soon as the source contains one `\r\n`, LF otherwise.
  pub fn detect(source: &str) -> Self {
    if source.contains("\r\n") { Self::CrLf } else { Self::Lf }
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Lf => "\n",
      Self::CrLf => "\r\n",
    }
  }
}

/// What happened to a file's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderAction {
  /// The notice was prepended
  Inserted,
  /// An existing notice was replaced in place
  Replaced,
}

/// A rewritten source and how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
  pub action: HeaderAction,
  pub content: String,
}

/// Splits a notice into lines, dropping `\r` and trailing spaces the same way
/// the scanner does when it decodes a comment.
fn notice_lines(notice: &str) -> Vec<&str> {
  notice
    .split('\n')
    .map(|line| line.strip_suffix('\r').unwrap_or(line).trim_end_matches(' '))
    .collect()
}

/// A block can carry the notice only if none of its lines would close it.
fn fits_in_block(lines: &[&str], style: &CommentStyle) -> bool {
  style.supports_block() && !lines.iter().any(|line| line.trim() == style.block_end)
}

/// Whether `notice` can be written in `style` and read back unchanged.
///
/// Fails only for block-only styles when a notice line is the block end token.
pub fn can_express(notice: &str, style: &CommentStyle) -> bool {
  style.supports_line() || fits_in_block(&notice_lines(notice), style)
}

/// Renders `notice` as a comment in `style`, terminated by a separator.
///
/// Block-capable styles get the delimiters on their own lines, unless a notice
/// line is the block end token; then, and for line-only styles, every notice
/// line is prefixed with the line prefix and a space. Check [`can_express`]
/// first for block-only styles.
pub fn format_notice(notice: &str, style: &CommentStyle, ending: LineEnding) -> String {
  let sep = ending.as_str();
  let lines = notice_lines(notice);

  let mut out = String::with_capacity(notice.len() + lines.len() * 4 + 16);
  if fits_in_block(&lines, style) || !style.supports_line() {
    out.push_str(&style.block_start);
    out.push_str(sep);
    out.push_str(&lines.join(sep));
    out.push_str(sep);
    out.push_str(&style.block_end);
    out.push_str(sep);
  } else {
    for line in lines {
      out.push_str(&style.line_prefix);
      out.push(' ');
      out.push_str(line);
      out.push_str(sep);
    }
  }
  out
}

/// Writes `notice` into `source`.
///
/// When `detected.found` is set, lines `detected.start_line..detected.end_line`
/// are replaced; otherwise the notice is prepended. The caller decides which of
/// the two applies (see [`rewrite_source`]).
pub fn apply_notice(source: &str, detected: &DetectedComment, style: &CommentStyle, notice: &str) -> String {
  let ending = LineEnding::detect(source);
  let (head, tail) = if detected.found {
    (
      line_offset(source, detected.start_line),
      line_offset(source, detected.end_line),
    )
  } else {
    (0, 0)
  };

  let header = format_notice(notice, style, ending);
  let mut out = String::with_capacity(source.len() + header.len() + 2);
  out.push_str(&source[..head]);
  out.push_str(&header);
  if !detected.found && first_line_has_content(source) {
    out.push_str(ending.as_str());
  }
  out.push_str(&source[tail..]);
  out
}

/// Scans `source`, decides what to do and produces the new content.
///
/// Returns `None` when the first comment already equals the notice. A first
/// comment that the detector does not recognize as a notice is kept and the
/// notice is inserted above it. Trailing spaces on notice lines are dropped,
/// since the scanner never reads them back.
pub fn rewrite_source(
  source: &str,
  style: &CommentStyle,
  notice: &str,
  detector: &dyn NoticeDetector,
) -> Option<Rewrite> {
  let notice = notice_lines(notice).join("\n");
  let notice = notice.as_str();
  let detected = detect_first_comment(source, style);
  if detected.found && detected.text == notice {
    return None;
  }

  let detected = if detected.found && detector.is_notice(&detected.text) {
    detected
  } else {
    DetectedComment::not_found()
  };

  let action = if detected.found {
    HeaderAction::Replaced
  } else {
    HeaderAction::Inserted
  };

  Some(Rewrite {
    action,
    content: apply_notice(source, &detected, style, notice),
  })
}

/// Byte offset at which line `line` starts, or the end of the source.
fn line_offset(source: &str, line: usize) -> usize {
  if line == 0 {
    return 0;
  }
  source
    .match_indices('\n')
    .nth(line - 1)
    .map_or(source.len(), |(index, _)| index + 1)
}

fn first_line_has_content(source: &str) -> bool {
  let first = source.split('\n').next().unwrap_or_default();
  !first.strip_suffix('\r').unwrap_or(first).is_empty()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::detection::KeywordDetector;

  const NOTICE: &str = "Copyright notice";

  fn go() -> CommentStyle {
    CommentStyle::new("//", "/*", "*/")
  }

  fn rewrite(source: &str, style: &CommentStyle, notice: &str) -> Option<Rewrite> {
    rewrite_source(source, style, notice, &KeywordDetector)
  }

  #[test]
  fn test_insert_keeps_unrelated_doc_comment() {
    let source = "// Package example does something\npackage example\n\nvar x\n";
    let result = rewrite(source, &go(), NOTICE).expect("rewrite");
    assert_eq!(result.action, HeaderAction::Inserted);
    assert_eq!(
      result.content,
      "/*\nCopyright notice\n*/\n\n// Package example does something\npackage example\n\nvar x\n"
    );
  }

  #[test]
  fn test_replace_old_notice_in_place() {
    let source = "// Old copyright notice\npackage example\n\nvar x\n";
    let result = rewrite(source, &go(), NOTICE).expect("rewrite");
    assert_eq!(result.action, HeaderAction::Replaced);
    assert_eq!(result.content, "/*\nCopyright notice\n*/\npackage example\n\nvar x\n");
  }

  #[test]
  fn test_empty_source() {
    let result = rewrite("", &go(), NOTICE).expect("rewrite");
    assert_eq!(result.action, HeaderAction::Inserted);
    assert_eq!(result.content, "/*\nCopyright notice\n*/\n");
  }

  #[test]
  fn test_crlf_is_used_everywhere() {
    let source = "// Old copyright\r\npackage example\r\n\r\nvar x\r\n";
    let result = rewrite(source, &go(), "Copyright notice\nAll rights reserved.").expect("rewrite");
    assert_eq!(
      result.content,
      "/*\r\nCopyright notice\r\nAll rights reserved.\r\n*/\r\npackage example\r\n\r\nvar x\r\n"
    );
  }

  #[test]
  fn test_crlf_insert_adds_crlf_blank_line() {
    let source = "package example\r\n";
    let result = rewrite(source, &go(), NOTICE).expect("rewrite");
    assert_eq!(result.content, "/*\r\nCopyright notice\r\n*/\r\n\r\npackage example\r\n");
  }

  #[test]
  fn test_matching_notice_is_unchanged() {
    let source = "/*\nCopyright notice\n*/\n\npackage example\n";
    assert!(rewrite(source, &go(), NOTICE).is_none());

    // Same text in line style counts as present too
    let source = "// Copyright notice\npackage example\n";
    assert!(rewrite(source, &go(), NOTICE).is_none());
  }

  #[test]
  fn test_insert_after_blank_first_line_adds_no_blank_line() {
    let source = "\npackage example\n";
    let result = rewrite(source, &go(), NOTICE).expect("rewrite");
    assert_eq!(result.content, "/*\nCopyright notice\n*/\n\npackage example\n");
  }

  #[test]
  fn test_replace_keeps_code_before_comment() {
    let source = "package example\n\n/*\nCopyright 2020 Someone\n*/\n\nvar x\n";
    let result = rewrite(source, &go(), NOTICE).expect("rewrite");
    assert_eq!(result.action, HeaderAction::Replaced);
    assert_eq!(result.content, "package example\n\n/*\nCopyright notice\n*/\n\nvar x\n");
  }

  #[test]
  fn test_replace_comment_running_to_end_of_input() {
    let source = "// Copyright 2020 Someone";
    let result = rewrite(source, &go(), NOTICE).expect("rewrite");
    assert_eq!(result.content, "/*\nCopyright notice\n*/\n");
  }

  #[test]
  fn test_inline_block_notice_is_not_replaced() {
    let source = "/* Copyright 2020 Someone */\npackage example\n";
    let result = rewrite(source, &go(), NOTICE).expect("rewrite");
    assert_eq!(result.action, HeaderAction::Inserted);
    assert_eq!(
      result.content,
      "/*\nCopyright notice\n*/\n\n/* Copyright 2020 Someone */\npackage example\n"
    );
  }

  #[test]
  fn test_line_only_style_formatting() {
    let py = CommentStyle::line("#");
    let source = "import os\n";
    let result = rewrite(source, &py, "Copyright notice\n\n\tIndented").expect("rewrite");
    assert_eq!(
      result.content,
      "# Copyright notice\n# \n# \tIndented\n\nimport os\n"
    );
  }

  #[test]
  fn test_line_only_style_replace() {
    let py = CommentStyle::line("#");
    let source = "# Copyright 2019 Old\n# Line two\nimport os\n";
    let result = rewrite(source, &py, NOTICE).expect("rewrite");
    assert_eq!(result.action, HeaderAction::Replaced);
    assert_eq!(result.content, "# Copyright notice\nimport os\n");
  }

  #[test]
  fn test_block_only_style() {
    let css = CommentStyle::block("/*", "*/");
    let result = rewrite("body {}\n", &css, NOTICE).expect("rewrite");
    assert_eq!(result.content, "/*\nCopyright notice\n*/\n\nbody {}\n");
  }

  #[test]
  fn test_second_pass_is_a_no_op() {
    let sources = [
      "",
      "\n",
      "package example\n",
      "// Package example does something\npackage example\n",
      "// Old copyright notice\npackage example\n",
      "package example\r\n\r\nvar x\r\n",
      "/*\nCopyright 1999\n*/\nvar x",
    ];
    for source in sources {
      let first = rewrite(source, &go(), "Copyright notice\nLine two").expect("first pass changes");
      assert!(
        rewrite(&first.content, &go(), "Copyright notice\nLine two").is_none(),
        "not idempotent for {source:?}"
      );
    }
  }

  #[test]
  fn test_rescan_yields_notice() {
    let source = "package example\n";
    let content = apply_notice(source, &DetectedComment::not_found(), &go(), "A\nB");
    let detected = detect_first_comment(&content, &go());
    assert!(detected.found);
    assert_eq!(detected.text, "A\nB");
  }

  #[test]
  fn test_notice_line_closing_block_falls_back_to_line_comments() {
    let notice = "Copyright notice\n*/\ntail";
    let source = "/*\nCopyright 1999\n*/\npackage example\n";
    let first = rewrite(source, &go(), notice).expect("rewrite");
    assert_eq!(first.action, HeaderAction::Replaced);
    assert_eq!(first.content, "// Copyright notice\n// */\n// tail\npackage example\n");

    let detected = detect_first_comment(&first.content, &go());
    assert_eq!(detected.text, notice);
    assert!(rewrite(&first.content, &go(), notice).is_none());
  }

  #[test]
  fn test_can_express() {
    let html = CommentStyle::block("<!--", "-->");
    assert!(can_express("Copyright notice\n--> x", &html));
    assert!(!can_express("Copyright notice\n  -->  \ntail", &html));
    assert!(can_express("Copyright notice\n*/", &go()));
    assert!(can_express("-->", &CommentStyle::line("#")));
  }

  #[test]
  fn test_trailing_tab_survives_line_style() {
    let py = CommentStyle::line("#");
    let first = rewrite("import os\n", &py, "Copyright 2025 X\t").expect("rewrite");
    assert_eq!(first.content, "# Copyright 2025 X\t\n\nimport os\n");
    assert!(rewrite(&first.content, &py, "Copyright 2025 X\t").is_none());
  }

  #[test]
  fn test_trailing_spaces_in_notice_are_dropped() {
    let py = CommentStyle::line("#");
    let first = rewrite("import os\n", &py, "Copyright 2025 X  \nSecond ").expect("rewrite");
    assert_eq!(first.content, "# Copyright 2025 X\n# Second\n\nimport os\n");
    assert!(rewrite(&first.content, &py, "Copyright 2025 X  \nSecond ").is_none());
  }

  #[test]
  fn test_line_offset() {
    let source = "a\nbb\nccc";
    assert_eq!(line_offset(source, 0), 0);
    assert_eq!(line_offset(source, 1), 2);
    assert_eq!(line_offset(source, 2), 5);
    assert_eq!(line_offset(source, 3), source.len());
    assert_eq!(line_offset(source, 10), source.len());
  }

  #[test]
  fn test_line_ending_detect() {
    assert_eq!(LineEnding::detect("a\nb\n"), LineEnding::Lf);
    assert_eq!(LineEnding::detect("a\r\nb\n"), LineEnding::CrLf);
    assert_eq!(LineEnding::detect(""), LineEnding::Lf);
  }
}
