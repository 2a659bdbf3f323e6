pub mod config;
pub mod detect;
pub mod transform;

use anyhow::{bail, Context, Result};
use class_transform_context::config::TransformConfig;
use std::path::Path;

/// Load an explicit config file, or `.class-transform.json` from the working directory.
fn load_config(path: Option<&Path>) -> Result<TransformConfig> {
    match path {
        Some(path) if !path.is_file() => bail!("Config file not found: {}", path.display()),
        Some(path) => TransformConfig::load(path),
        None => TransformConfig::load_cwd(),
    }
}

/// Convert a 1-based line argument to a zero-based index.
fn cursor_line(line: usize) -> Result<usize> {
    line.checked_sub(1).context("Line numbers start at 1")
}
