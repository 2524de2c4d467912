//! # File Filter Module
//!
//! This module contains components for deciding which files of the tree are
//! candidates for a notice: by extension (unsupported or excluded) and by
//! ordered include/exclude glob rules.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::languages::{LanguageRegistry, extension_of};
use crate::verbose_log;

/// Result of a file filtering operation.
#[derive(Debug)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter: Send + Sync {
  /// Determines whether a file should be processed.
  ///
  /// `path` is relative to the processed root.
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Filter on the file extension: it must be known to the registry and not
/// excluded.
pub struct ExtensionFilter {
  registry: LanguageRegistry,
  excluded: HashSet<String>,
}

impl ExtensionFilter {
  /// Creates a filter from a registry and a list of excluded extensions.
  ///
  /// Exclusions may be given with or without the leading dot. Matching is
  /// case-sensitive, like the registry itself.
  pub fn new(registry: LanguageRegistry, excluded: &[String]) -> Self {
    let excluded = excluded
      .iter()
      .map(|ext| ext.trim())
      .filter(|ext| !ext.is_empty())
      .map(|ext| format!(".{}", ext.trim_start_matches('.')))
      .collect();
    Self { registry, excluded }
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    let Some(extension) = extension_of(path) else {
      return FilterResult::skip("No extension");
    };
    if self.registry.style_for(&extension).is_none() {
      return FilterResult::skip(format!("Unsupported extension {extension}"));
    }
    if self.excluded.contains(&extension) {
      verbose_log!("Skipping: {} (excluded extension)", path.display());
      return FilterResult::skip(format!("Excluded extension {extension}"));
    }
    FilterResult::process()
  }
}

/// `*` and `?` stop at `/`; only `**` crosses directories.
const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
  case_sensitive: true,
  require_literal_separator: true,
  require_literal_leading_dot: false,
};

/// A single include or exclude rule.
#[derive(Debug, Clone)]
pub enum PatternRule {
  Include(glob::Pattern),
  Exclude(glob::Pattern),
}

impl PatternRule {
  /// Parses `+glob` (include), `-glob` or a bare `glob` (exclude).
  pub fn parse(rule: &str) -> Result<Self> {
    let rule = rule.trim();
    let (include, pattern) = if let Some(rest) = rule.strip_prefix('+') {
      (true, rest)
    } else {
      (false, rule.strip_prefix('-').unwrap_or(rule))
    };
    let pattern = pattern.replace('\\', "/");
    let compiled = glob::Pattern::new(&pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;
    Ok(if include {
      Self::Include(compiled)
    } else {
      Self::Exclude(compiled)
    })
  }

  const fn pattern(&self) -> &glob::Pattern {
    match self {
      Self::Include(pattern) | Self::Exclude(pattern) => pattern,
    }
  }

  const fn includes(&self) -> bool {
    matches!(self, Self::Include(_))
  }
}

/// Ordered glob rules evaluated top to bottom; the last matching rule decides.
///
/// Files that match no rule are processed.
pub struct PatternFilter {
  rules: Vec<PatternRule>,
}

impl PatternFilter {
  /// Creates a new PatternFilter from a list of rules.
  pub fn from_rules(rules: &[String]) -> Result<Self> {
    let rules = rules
      .iter()
      .filter(|rule| !rule.trim().is_empty())
      .map(|rule| PatternRule::parse(rule))
      .collect::<Result<Vec<_>>>()?;
    Ok(Self { rules })
  }
}

impl FileFilter for PatternFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    let normalized = path.to_string_lossy().replace('\\', "/");
    let verdict = self
      .rules
      .iter()
      .rev()
      .find(|rule| rule.pattern().matches_with(&normalized, MATCH_OPTIONS))
      .map_or(true, PatternRule::includes);

    if verdict {
      FilterResult::process()
    } else {
      verbose_log!("Skipping: {} (matches exclude pattern)", path.display());
      FilterResult::skip("Matches exclude pattern")
    }
  }
}

/// Filter that combines multiple filters.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  /// Creates a new CompositeFilter with the given filters.
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    for filter in &self.filters {
      let result = filter.should_process(path);
      if !result.should_process {
        return result;
      }
    }
    FilterResult::process()
  }
}

/// Builds the standard filter chain: extension first, then path rules.
pub fn create_default_filter(
  registry: LanguageRegistry,
  excluded_extensions: &[String],
  rules: &[String],
) -> Result<CompositeFilter> {
  let filters: Vec<Box<dyn FileFilter>> = vec![
    Box::new(ExtensionFilter::new(registry, excluded_extensions)),
    Box::new(PatternFilter::from_rules(rules)?),
  ];
  Ok(CompositeFilter::new(filters))
}
