//! # copyrighter
//!
//! Keeps a canonical copyright notice at the top of every source file.

use anyhow::Result;
use copyrighter::cli::{Cli, run_apply};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_apply(cli.apply_args)
}
