//! # Apply Command
//!
//! Loads the notice, merges command-line flags with the optional config file
//! and runs the processor over the tree.

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Args;
use tracing::debug;

use crate::config::{Config, load_config};
use crate::diff::DiffManager;
use crate::info_log;
use crate::languages::LanguageRegistry;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::notice::{Notice, NoticeData};
use crate::output::{
  CategorizedReports, print_all_files_ok, print_blank_line, print_changed_files, print_hint, print_start_message,
  print_summary,
};
use crate::processor::{Processor, ProcessorConfig};
use crate::report::{FileAction, FileReport, ProcessingSummary, write_json_report};

/// Notice file looked up in the processed directory when none is given.
pub const DEFAULT_NOTICE_FILE: &str = "copyright.go";

/// Arguments for the apply command
#[derive(Args, Debug, Default)]
pub struct ApplyArgs {
  /// Directory to process
  #[arg(default_value = ".")]
  pub dir: PathBuf,

  /// Recurse into sub-directories
  #[arg(long, short = 'r')]
  pub recurse: bool,

  /// Extensions to skip (comma separated or repeated, with or without the dot)
  #[arg(long, short = 'x', value_name = "EXT", value_delimiter = ',')]
  pub exclude: Vec<String>,

  /// Path rule, `+GLOB` to include or `-GLOB` to exclude (repeatable, the last
  /// matching rule wins; `*` stays within a directory, `**` crosses them)
  #[arg(long, short = 'f', value_name = "RULE", allow_hyphen_values = true)]
  pub filter: Vec<String>,

  /// File whose first comment is the notice [default: <DIR>/copyright.go]
  #[arg(long, short = 'n', value_name = "FILE")]
  pub notice_file: Option<PathBuf>,

  /// Year substituted for {{year}} in the notice [default: current year]
  #[arg(long)]
  pub year: Option<String>,

  /// Only report files that would change; exit with status 1 if any would
  #[arg(long)]
  pub check: bool,

  /// Print a diff of every change to stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Save a diff of every change to a file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Path to config file (default: .copyrighter.toml in DIR)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors and, in check mode, the paths that
  /// would change
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Settings after merging the command line with the config file.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
  notice_path: PathBuf,
  recurse: bool,
  excluded_extensions: Vec<String>,
  filters: Vec<String>,
}

impl Settings {
  /// CLI values win; `recurse` is OR-ed; list values are concatenated with
  /// the config file's entries first, so CLI filter rules match last.
  fn merge(args: &ApplyArgs, config: &Config) -> Self {
    let notice_path = args
      .notice_file
      .clone()
      .or_else(|| config.notice_file.as_ref().map(|path| args.dir.join(path)))
      .unwrap_or_else(|| args.dir.join(DEFAULT_NOTICE_FILE));

    Self {
      notice_path,
      recurse: args.recurse || config.recurse,
      excluded_extensions: concat(&config.exclude_extensions, &args.exclude),
      filters: concat(&config.filters, &args.filter),
    }
  }
}

fn concat(first: &[String], second: &[String]) -> Vec<String> {
  first.iter().chain(second).cloned().collect()
}

/// Run the apply command with the given arguments
pub fn run_apply(args: ApplyArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let root = args.dir.clone();
  let config = load_config(args.config.as_deref(), &root, args.no_config)?.unwrap_or_default();
  let settings = Settings::merge(&args, &config);
  debug!("Effective settings: {:?}", settings);

  let registry = LanguageRegistry::with_overrides(&config.languages);
  debug!("{} languages registered", registry.len());

  let notice = Notice::load(&settings.notice_path, &registry)
    .with_context(|| format!("Failed to load notice from {}", settings.notice_path.display()))?;
  let year = args.year.unwrap_or_else(|| chrono::Local::now().year().to_string());
  let rendered = notice.render(&NoticeData { year });

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  diff_manager.init()?;

  let check_only = args.check;
  let processor = Processor::new(ProcessorConfig {
    notice_path: Some(settings.notice_path),
    recurse: settings.recurse,
    check_only,
    registry,
    excluded_extensions: settings.excluded_extensions,
    filters: settings.filters,
    diff_manager: Some(diff_manager),
    ..ProcessorConfig::new(root.clone(), rendered)
  })?;

  let files = processor
    .collect_files()
    .with_context(|| format!("Failed to list files in {}", root.display()))?;

  print_start_message(files.len(), check_only);

  let start_time = Instant::now();
  let file_reports = processor.process_files(&files)?;
  let elapsed = start_time.elapsed();

  let summary = ProcessingSummary::from_reports(&file_reports, elapsed);
  let categorized = CategorizedReports::from_reports(&file_reports);

  print_blank_line();
  if categorized.has_changes() {
    print_changed_files(&categorized.inserted, FileAction::Inserted, check_only, Some(&root));
    if !categorized.inserted.is_empty() && !categorized.replaced.is_empty() {
      print_blank_line();
    }
    print_changed_files(&categorized.replaced, FileAction::Replaced, check_only, Some(&root));
  } else {
    print_all_files_ok();
  }

  print_blank_line();
  print_summary(&summary);

  if check_only && categorized.has_changes() {
    print_blank_line();
    print_hint("Run without --check to apply the notice.");
  }

  if let Some(ref output_path) = args.report_json {
    write_report(output_path, &file_reports, &summary)?;
  }

  if check_only && categorized.has_changes() {
    process::exit(1);
  }

  Ok(())
}

fn write_report(output_path: &Path, file_reports: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
  write_json_report(output_path, file_reports, summary)?;
  info_log!("Generated JSON report at {}", output_path.display());
  Ok(())
}
