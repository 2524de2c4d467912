//! # copyrighter
//!
//! A tool that keeps a canonical copyright notice at the top of every source
//! file in a directory tree.
//!
//! The notice is the first comment of a designated source file (by default
//! `copyright.go` in the processed directory). Each candidate file gets that
//! notice written in its own comment syntax: an existing notice is replaced in
//! place, a missing one is inserted, and a file already carrying it is left
//! byte-identical.
//!
//! ## Features
//!
//! * Comment detection for line-comment runs and block comments
//! * Builtin comment styles for common languages, extensible through
//!   `.copyrighter.toml`
//! * Optional recursion with nested-project detection
//! * Extension exclusion and ordered `+glob` / `-glob` path rules
//! * Check mode, diffs and a JSON report
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::{Path, PathBuf};
//!
//! use copyrighter::languages::LanguageRegistry;
//! use copyrighter::notice::{Notice, NoticeData};
//! use copyrighter::processor::{Processor, ProcessorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let registry = LanguageRegistry::builtin();
//!     let notice = Notice::load(Path::new("copyright.go"), &registry)?;
//!     let rendered = notice.render(&NoticeData {
//!         year: "2025".to_string(),
//!     });
//!
//!     let processor = Processor::new(ProcessorConfig {
//!         recurse: true,
//!         notice_path: Some(PathBuf::from("copyright.go")),
//!         ..ProcessorConfig::new(PathBuf::from("."), rendered)
//!     })?;
//!
//!     for report in processor.run()? {
//!         if report.is_change() {
//!             println!("{}: {:?}", report.path.display(), report.action);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`scanner`] - Finds the first comment of a source text
//! * [`writer`] - Re-emits a source with the notice in place
//! * [`languages`] - Comment styles by file extension
//! * [`processor`] - Walks the tree and rewrites files
//!
//! [`scanner`]: crate::scanner
//! [`writer`]: crate::writer
//! [`languages`]: crate::languages
//! [`processor`]: crate::processor

pub mod cli;
pub mod config;
pub mod detection;
pub mod diff;
pub mod error;
pub mod file_filter;
pub mod languages;
pub mod logging;
pub mod notice;
pub mod output;
pub mod processor;
pub mod report;
pub mod scanner;
pub mod writer;
