//! CLI command implementations

mod catalog;
mod config;
mod extract;
mod scan;

pub use catalog::{cmd_domains, cmd_projects};
pub use config::{cmd_config_init, cmd_config_reset, cmd_config_show};
pub use self::extract::{cmd_compare, cmd_extract};
pub use self::scan::cmd_scan;

use ::extract::FileExtractor;
use ::scan::Scanner;
use anyhow::{Context, Result};
use plagscan_core::{Catalog, Config, FileType};
use std::path::Path;
use std::sync::Arc;

/// Use the explicit `--type` if given, otherwise the file extension
fn resolve_file_type(path: &Path, explicit: Option<&str>) -> Result<FileType> {
  match explicit {
    Some(file_type) => Ok(file_type.parse()?),
    None => FileType::from_path(path)
      .with_context(|| format!("Cannot detect file type of {:?}; pass --type pdf|docx|pptx|txt", path)),
  }
}

/// Load the catalog named on the command line, or the configured one
fn load_catalog(config: &Config, cwd: &Path, explicit: Option<&Path>) -> Result<Catalog> {
  let path = explicit
    .map(Path::to_path_buf)
    .unwrap_or_else(|| config.catalog_path(cwd));
  Catalog::load(&path).with_context(|| format!("Failed to load catalog {:?}", path))
}

fn scanner(config: &Config) -> Scanner {
  let extractor = FileExtractor::from_config(&config.extract);
  Scanner::new(Arc::new(extractor), config.scan.clone())
}

/// Format a 0..=1 score as a percentage
fn percent(score: f64) -> String {
  format!("{:.1}%", score * 100.0)
}
