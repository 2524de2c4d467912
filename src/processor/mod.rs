//! # Processor Module
//!
//! This module walks the processed tree and brings the first comment of every
//! candidate file in line with the canonical notice.
//!
//! The module is organized into submodules:
//! - [`file_io`] - Whole-file reads and writes
//! - [`file_collector`] - Directory traversal and nested-project detection
//!
//! The [`Processor`] struct ties them to the filters, the scanner and the
//! writer. Files are handled one at a time, in traversal order, and the run
//! stops at the first read or write failure.

mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

pub use file_collector::FileCollector;
pub use file_io::FileIO;
use tracing::{debug, trace, warn};

use crate::detection::{KeywordDetector, NoticeDetector};
use crate::diff::DiffManager;
use crate::error::RunError;
use crate::file_filter::{CompositeFilter, FileFilter, create_default_filter};
use crate::languages::LanguageRegistry;
use crate::report::{FileAction, FileReport};
use crate::verbose_log;
use crate::writer::{can_express, rewrite_source};

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  /// Directory to process
  pub root: PathBuf,
  /// Rendered notice text, without comment markers
  pub notice: String,
  /// File the notice was loaded from; never rewritten, and its file name
  /// marks nested projects
  pub notice_path: Option<PathBuf>,

  // Behavior flags
  pub recurse: bool,
  pub check_only: bool,

  // Filtering
  pub registry: LanguageRegistry,
  pub excluded_extensions: Vec<String>,
  pub filters: Vec<String>,

  // Optional components
  pub diff_manager: Option<DiffManager>,
  pub detector: Option<Box<dyn NoticeDetector>>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with required fields and sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     recurse: true,
  ///     ..ProcessorConfig::new(root, notice)
  /// }
  /// ```
  pub fn new(root: PathBuf, notice: impl Into<String>) -> Self {
    Self {
      root,
      notice: notice.into(),
      notice_path: None,
      recurse: false,
      check_only: false,
      registry: LanguageRegistry::builtin(),
      excluded_extensions: vec![],
      filters: vec![],
      diff_manager: None,
      detector: None,
    }
  }
}

/// Processor for placing the notice at the top of source files.
pub struct Processor {
  /// Directory being processed
  root: PathBuf,

  /// Rendered notice text
  notice: String,

  /// Canonical path of the notice file, if known
  notice_path: Option<PathBuf>,

  /// Comment styles by extension
  registry: LanguageRegistry,

  /// Extension and path rules
  file_filter: CompositeFilter,

  /// Directory traversal
  collector: FileCollector,

  /// Whether to only report pending changes without writing
  check_only: bool,

  /// Manager for rendering pending changes
  diff_manager: DiffManager,

  /// Decides whether an existing first comment may be replaced
  detector: Box<dyn NoticeDetector>,
}

impl Processor {
  /// Creates a new Processor.
  ///
  /// # Errors
  ///
  /// Fails when a filter rule is not a valid glob pattern.
  pub fn new(config: ProcessorConfig) -> anyhow::Result<Self> {
    let file_filter = create_default_filter(
      config.registry.clone(),
      &config.excluded_extensions,
      &config.filters,
    )?;

    let project_marker = config
      .notice_path
      .as_deref()
      .and_then(Path::file_name)
      .map(ToOwned::to_owned);
    let notice_path = config
      .notice_path
      .as_deref()
      .map(|path| path.canonicalize().unwrap_or_else(|_| path.to_path_buf()));

    Ok(Self {
      collector: FileCollector::new(config.recurse, project_marker),
      root: config.root,
      notice: config.notice,
      notice_path,
      registry: config.registry,
      file_filter,
      check_only: config.check_only,
      diff_manager: config.diff_manager.unwrap_or_default(),
      detector: config.detector.unwrap_or_else(|| Box::new(KeywordDetector::new())),
    })
  }

  /// Lists the candidate files: collected, filtered, minus the notice file.
  pub fn collect_files(&self) -> Result<Vec<PathBuf>, RunError> {
    let files = self.collector.collect(&self.root)?;
    let total = files.len();

    let candidates: Vec<PathBuf> = files
      .into_iter()
      .filter(|path| {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let result = self.file_filter.should_process(relative);
        if !result.should_process {
          trace!(
            "Filtered out {}: {}",
            relative.display(),
            result.reason.as_deref().unwrap_or("no reason")
          );
          return false;
        }
        if self.is_notice_file(path) {
          verbose_log!("Skipping: {} (notice file)", path.display());
          return false;
        }
        true
      })
      .collect();

    debug!("{} of {} files are candidates", candidates.len(), total);
    Ok(candidates)
  }

  /// Collects and processes the whole tree.
  pub fn run(&self) -> Result<Vec<FileReport>, RunError> {
    let files = self.collect_files()?;
    self.process_files(&files)
  }

  /// Processes already collected files in order, stopping at the first error.
  ///
  /// Files rewritten before a failure stay rewritten.
  pub fn process_files(&self, files: &[PathBuf]) -> Result<Vec<FileReport>, RunError> {
    files.iter().map(|path| self.process_file(path)).collect()
  }

  /// Reads, scans and, when needed, rewrites one file.
  pub fn process_file(&self, path: &Path) -> Result<FileReport, RunError> {
    let Some(style) = self.registry.style_for_path(path) else {
      trace!("Skipping: {} (no comment style defined for extension)", path.display());
      return Ok(FileReport::skipped(path.to_path_buf(), "No comment style defined for extension"));
    };
    if !can_express(&self.notice, style) {
      warn!("Skipping: {} (a notice line would close the comment block)", path.display());
      return Ok(FileReport::skipped(
        path.to_path_buf(),
        "Notice cannot be written in this comment style",
      ));
    }

    let bytes = FileIO::read_source(path)?;
    let Some(source) = FileIO::decode(bytes) else {
      verbose_log!("Skipping: {} (not valid UTF-8)", path.display());
      return Ok(FileReport::skipped(path.to_path_buf(), "Not valid UTF-8"));
    };

    let Some(rewrite) = rewrite_source(&source, style, &self.notice, self.detector.as_ref()) else {
      trace!("Notice already present in {}", path.display());
      return Ok(FileReport::new(path.to_path_buf(), FileAction::Unchanged));
    };

    if self.diff_manager.is_enabled()
      && let Err(e) = self.diff_manager.display_diff(path, &source, &rewrite.content)
    {
      warn!("Failed to display diff for {}: {}", path.display(), e);
    }

    if self.check_only {
      debug!("Notice {:?} pending in {}", rewrite.action, path.display());
    } else {
      FileIO::write_source(path, &rewrite.content)?;
      debug!("Notice {:?} in {}", rewrite.action, path.display());
      verbose_log!("Modified: {}", path.display());
    }

    Ok(FileReport::new(path.to_path_buf(), rewrite.action.into()))
  }

  /// Returns true if the processor never writes files.
  pub const fn is_check_only(&self) -> bool {
    self.check_only
  }

  fn is_notice_file(&self, path: &Path) -> bool {
    let Some(notice_path) = &self.notice_path else {
      return false;
    };
    path
      .canonicalize()
      .map_or_else(|_| path == notice_path.as_path(), |canonical| &canonical == notice_path)
  }
}
