//! # Notice Module
//!
//! Loads the canonical notice from the first comment of a designated source
//! file and fills in the year placeholder.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use copyrighter::languages::LanguageRegistry;
//! use copyrighter::notice::{Notice, NoticeData};
//!
//! # fn main() -> anyhow::Result<()> {
//! let registry = LanguageRegistry::builtin();
//! let notice = Notice::load(Path::new("copyright.go"), &registry)?;
//!
//! let rendered = notice.render(&NoticeData {
//!   year: "2025".to_string(),
//! });
//! println!("{rendered}");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use crate::error::RunError;
use crate::languages::LanguageRegistry;
use crate::scanner::detect_first_comment;
use crate::verbose_log;

/// Literal marker replaced by the year when the notice is rendered.
pub const YEAR_PLACEHOLDER: &str = "{{year}}";

/// Data used to fill out the notice.
pub struct NoticeData {
  /// The copyright year to substitute for [`YEAR_PLACEHOLDER`]
  pub year: String,
}

/// The canonical notice text, as decoded from its source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  text: String,
}

impl Notice {
  /// Wraps an already decoded notice.
  pub fn from_text(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }

  /// Reads `path` and takes its first comment as the notice.
  ///
  /// # Errors
  ///
  /// - [`RunError::NoticeSourceUnreadable`] if the file cannot be read as text
  /// - [`RunError::NoticeNotFound`] if the file type is unknown or the file
  ///   has no comment
  pub fn load(path: &Path, registry: &LanguageRegistry) -> Result<Self, RunError> {
    verbose_log!("Loading notice from: {}", path.display());

    let source = fs::read_to_string(path).map_err(|source| RunError::NoticeSourceUnreadable {
      path: path.to_path_buf(),
      source,
    })?;

    let Some(style) = registry.style_for_path(path) else {
      return Err(RunError::NoticeNotFound {
        path: path.to_path_buf(),
      });
    };

    let detected = detect_first_comment(&source, style);
    if !detected.found {
      return Err(RunError::NoticeNotFound {
        path: path.to_path_buf(),
      });
    }

    verbose_log!("Notice:\n{}", detected.text);

    Ok(Self { text: detected.text })
  }

  /// Replaces every year placeholder with `data.year`.
  pub fn render(&self, data: &NoticeData) -> String {
    self.text.replace(YEAR_PLACEHOLDER, &data.year)
  }
}
