//! # Languages Module
//!
//! Maps file extensions to the comment markers used by each language.
//!
//! A [`CommentStyle`] carries up to three tokens: a line prefix (e.g. `//`),
//! and a pair of block delimiters (e.g. `/*` and `*/`). An empty token means
//! that form of comment is not available for the language. Extensions are
//! matched literally, including the leading dot, and case-sensitively:
//! `main.GO` is not treated as a Go file.
//!
//! ## Example
//!
//! ```rust
//! use copyrighter::languages::{CommentStyle, style_for};
//!
//! let go = style_for(".go").expect("go is a builtin language");
//! assert_eq!(go, CommentStyle::new("//", "/*", "*/"));
//! assert!(style_for(".GO").is_none());
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use crate::config::LanguageConfig;

/// Comment markers for a language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentStyle {
  /// Token that starts every line of a line comment (e.g. `//`)
  pub line_prefix: String,

  /// Token that opens a block comment (e.g. `/*`)
  pub block_start: String,

  /// Token that closes a block comment (e.g. `*/`)
  pub block_end: String,
}

impl CommentStyle {
  /// Creates a comment style from its three tokens.
  pub fn new(line_prefix: &str, block_start: &str, block_end: &str) -> Self {
    Self {
      line_prefix: line_prefix.to_string(),
      block_start: block_start.to_string(),
      block_end: block_end.to_string(),
    }
  }

  /// Creates a style that only knows line comments.
  pub fn line(prefix: &str) -> Self {
    Self::new(prefix, "", "")
  }

  /// Creates a style that only knows block comments.
  pub fn block(start: &str, end: &str) -> Self {
    Self::new("", start, end)
  }

  /// Whether line-prefixed comments are available.
  pub fn supports_line(&self) -> bool {
    !self.line_prefix.is_empty()
  }

  /// Whether delimited block comments are available.
  pub fn supports_block(&self) -> bool {
    !self.block_start.is_empty() && !self.block_end.is_empty()
  }

  /// Whether the style can express a comment at all.
  pub fn is_supported(&self) -> bool {
    self.supports_line() || self.supports_block()
  }
}

impl From<&LanguageConfig> for CommentStyle {
  fn from(config: &LanguageConfig) -> Self {
    Self::new(&config.line, &config.block_start, &config.block_end)
  }
}

/// Builtin extension table.
const BUILTIN_LANGUAGES: &[(&str, &str, &str, &str)] = &[
  (".go", "//", "/*", "*/"),
  (".js", "//", "/*", "*/"),
  (".ts", "//", "/*", "*/"),
  (".cs", "//", "/*", "*/"),
  (".java", "//", "/*", "*/"),
  (".c", "//", "/*", "*/"),
  (".cpp", "//", "/*", "*/"),
  (".php", "//", "/*", "*/"),
  (".py", "#", "", ""),
  (".css", "", "/*", "*/"),
  (".xml", "", "<!--", "-->"),
  (".html", "", "<!--", "-->"),
  (".yaml", "#", "", ""),
  (".yml", "#", "", ""),
  (".ps1", "#", "<#", "#>"),
  (".sh", "#", "", ""),
  (".sql", "--", "/*", "*/"),
];

static BUILTIN_REGISTRY: LazyLock<LanguageRegistry> = LazyLock::new(LanguageRegistry::builtin);

/// Lookup table from extension (with leading dot) to [`CommentStyle`].
///
/// The registry only ever holds supported styles, so anything it returns can
/// be handed straight to the scanner and the writer.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
  styles: HashMap<String, CommentStyle>,
}

impl Default for LanguageRegistry {
  fn default() -> Self {
    Self::builtin()
  }
}

impl LanguageRegistry {
  /// Builds the registry of builtin languages.
  pub fn builtin() -> Self {
    let styles = BUILTIN_LANGUAGES
      .iter()
      .map(|(ext, line, start, end)| (ext.to_string(), CommentStyle::new(line, start, end)))
      .collect();
    Self { styles }
  }

  /// Builds the builtin registry and layers user-defined languages on top.
  ///
  /// Entries are expected to be validated already (see
  /// [`Config::load`](crate::config::Config::load)); unsupported styles are
  /// dropped rather than stored.
  pub fn with_overrides(overrides: &HashMap<String, LanguageConfig>) -> Self {
    let mut registry = Self::builtin();
    for (extension, language) in overrides {
      registry.insert(extension, CommentStyle::from(language));
    }
    registry
  }

  /// Adds or replaces the style for an extension.
  ///
  /// Returns `false` (and leaves the registry untouched) when the style has no
  /// usable markers.
  pub fn insert(&mut self, extension: &str, style: CommentStyle) -> bool {
    if !style.is_supported() {
      return false;
    }
    self.styles.insert(extension.to_string(), style);
    true
  }

  /// Looks up the style for an extension such as `.go`.
  pub fn style_for(&self, extension: &str) -> Option<&CommentStyle> {
    self.styles.get(extension)
  }

  /// Looks up the style for a file path by its extension.
  pub fn style_for_path(&self, path: &Path) -> Option<&CommentStyle> {
    extension_of(path).and_then(|ext| self.style_for(&ext))
  }

  /// Number of known extensions.
  pub fn len(&self) -> usize {
    self.styles.len()
  }

  /// Whether the registry is empty.
  pub fn is_empty(&self) -> bool {
    self.styles.is_empty()
  }
}

/// Looks up an extension in the builtin table.
pub fn style_for(extension: &str) -> Option<CommentStyle> {
  BUILTIN_REGISTRY.style_for(extension).cloned()
}

/// Returns the extension of a path with its leading dot, case preserved.
pub fn extension_of(path: &Path) -> Option<String> {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .map(|ext| format!(".{ext}"))
}
