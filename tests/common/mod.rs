#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Canonical notice file content used across the integration tests.
pub const NOTICE_SOURCE: &str = "/*\nCopyright {{year}} Example Corp\n\nLicensed under the Apache License.\n*/\n\npackage copyright\n";

/// The notice above, rendered for 2025.
pub const RENDERED_NOTICE: &str = "Copyright 2025 Example Corp\n\nLicensed under the Apache License.";

/// Go block header for [`RENDERED_NOTICE`].
pub const GO_HEADER: &str = "/*\nCopyright 2025 Example Corp\n\nLicensed under the Apache License.\n*/\n";

/// Python line header for [`RENDERED_NOTICE`].
pub const PY_HEADER: &str = "# Copyright 2025 Example Corp\n# \n# Licensed under the Apache License.\n";

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Reads `root/relative` as text.
pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  let path = root.join(relative);
  fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Lays out a small project:
///
/// ```text
/// copyright.go        notice
/// main.go             no header
/// util.py             outdated header
/// README.md           unsupported
/// pkg/lib.go          no header
/// pkg/gen/out.go      generated
/// vendor/copyright.go nested project
/// vendor/dep.go
/// ```
pub fn setup_project(root: &Path) -> Result<()> {
  write_file(root, "copyright.go", NOTICE_SOURCE)?;
  write_file(root, "main.go", "package main\n\nfunc main() {}\n")?;
  write_file(root, "util.py", "# Copyright 2019 Example Corp\nimport os\n")?;
  write_file(root, "README.md", "# Readme\n")?;
  write_file(root, "pkg/lib.go", "package pkg\n")?;
  write_file(root, "pkg/gen/out.go", "package gen\n")?;
  write_file(root, "vendor/copyright.go", "/*\nCopyright Vendor\n*/\npackage copyright\n")?;
  write_file(root, "vendor/dep.go", "package dep\n")?;
  Ok(())
}
