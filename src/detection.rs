//! # Detection Module
//!
//! Decides whether an existing leading comment is a notice that may be
//! replaced, or an unrelated comment (such as a package doc comment) that must
//! be left alone.

use std::sync::LazyLock;

use regex::Regex;

/// Trait for notice detectors.
///
/// Implementations look at the decoded text of a file's first comment and
/// report whether it is a notice the tool owns.
pub trait NoticeDetector: Send + Sync {
  /// Checks if the decoded comment text is a notice.
  fn is_notice(&self, comment_text: &str) -> bool;
}

/// Default detector: the comment mentions "copyright", in any case.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordDetector;

impl KeywordDetector {
  pub const fn new() -> Self {
    Self
  }
}

impl NoticeDetector for KeywordDetector {
  fn is_notice(&self, comment_text: &str) -> bool {
    static KEYWORD: LazyLock<Regex> =
      LazyLock::new(|| Regex::new(r"(?i)copyright").expect("keyword regex must compile"));
    KEYWORD.is_match(comment_text)
  }
}
