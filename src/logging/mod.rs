//! # Logging Module
//!
//! Two output channels sit next to `tracing`:
//!
//! - [`verbose_log!`] prints per-file decisions (skipped, modified, config
//!   lookups) to stderr, and only with `-v`.
//! - [`info_log!`] prints notes meant for every run, such as where the JSON
//!   report went, to stdout. `-q` silences it.
//!
//! `tracing` events are configured separately by [`init_tracing`] and always
//! land on stderr, so stdout stays limited to the run's results.
//!
//! ## Example
//!
//! ```rust
//! use copyrighter::logging::{ColorMode, set_verbose};
//! use copyrighter::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("Skipping: {} (excluded extension)", "web/app.js");
//! info_log!("Generated JSON report at {}", "report.json");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// `eprintln!` that only fires in verbose mode.
#[macro_export]
macro_rules! verbose_log {
  ($($arg:tt)*) => {
    if $crate::logging::is_verbose() {
      eprintln!($($arg)*);
    }
  };
}

/// Highlighted stdout line, dropped in quiet mode.
#[macro_export]
macro_rules! info_log {
  ($($arg:tt)*) => {
    if !$crate::logging::is_quiet() {
      $crate::logging::print_info_log(&format!($($arg)*));
    }
  };
}

#[doc(hidden)]
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
