//! Test-only helpers for config fixtures.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Write `contents` to `config.toml` inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn write_config_fixture(contents: &str) -> Result<(TempDir, PathBuf)> {
    let temp = tempfile::tempdir().context("create tempdir")?;
    let path = temp.path().join("config.toml");
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok((temp, path))
}
