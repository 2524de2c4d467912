//! # CLI Module
//!
//! This module contains the command-line interface implementation. It uses
//! clap for argument parsing.

mod apply;

pub use apply::{ApplyArgs, DEFAULT_NOTICE_FILE, run_apply};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Put the first comment of ./copyright.go at the top of every file in .
  copyrighter

  # Walk the whole tree, leaving generated code and JavaScript alone
  copyrighter -r -x js -f '-gen/**' src/

  # Report files that are missing the notice without touching them
  copyrighter -r --check --show-diff .

  # Use a notice file stored elsewhere, with a fixed year
  copyrighter -r -n tools/NOTICE.go --year 2024 .
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub apply_args: ApplyArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
