//! Configuration system for plagscan with per-project overrides.
//!
//! Config priority: project-relative (.plagscan/config.toml) > user (~/.config/plagscan/config.toml)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Scan Configuration
// ============================================================================

/// Upper bound for `scan.concurrency`; each slot may hold a whole document in memory
pub const MAX_CONCURRENCY: usize = 256;

/// Domain scan settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
  /// Matches must score strictly above this overall similarity (default: 0.3)
  pub threshold: f64,

  /// Maximum number of matches to report (default: unlimited)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_results: Option<usize>,

  /// Candidates extracted and scored at once (default: 4, at most 256)
  pub concurrency: usize,
}

impl Default for ScanConfig {
  fn default() -> Self {
    Self {
      threshold: 0.3,
      max_results: None,
      concurrency: 4,
    }
  }
}

// ============================================================================
// Extraction Configuration
// ============================================================================

/// Text extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
  /// Largest file the extractor will open, in bytes (default: 10MB)
  pub max_file_size: u64,
}

impl Default for ExtractConfig {
  fn default() -> Self {
    Self {
      max_file_size: 10 * 1024 * 1024, // 10MB
    }
  }
}

// ============================================================================
// Catalog Configuration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
  /// Catalog JSON file; relative paths resolve against the working directory
  pub path: PathBuf,
}

impl Default for CatalogConfig {
  fn default() -> Self {
    Self {
      path: PathBuf::from("catalog.json"),
    }
  }
}

// ============================================================================
// Logging Configuration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Default log level: error, warn, info, debug, trace (RUST_LOG overrides)
  pub level: String,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: "info".to_string(),
    }
  }
}

// ============================================================================
// Main Configuration
// ============================================================================

/// plagscan configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  #[serde(default)]
  pub scan: ScanConfig,

  #[serde(default)]
  pub extract: ExtractConfig,

  #[serde(default)]
  pub catalog: CatalogConfig,

  #[serde(default)]
  pub logging: LoggingConfig,
}

impl Config {
  /// Load config for a project directory, with fallback to user config
  pub fn load_for_project(project_path: &Path) -> Self {
    // Try project-relative first
    let project_config = Self::project_config_path(project_path);
    if project_config.exists()
      && let Ok(content) = std::fs::read_to_string(&project_config)
      && let Ok(config) = toml::from_str(&content)
    {
      return config;
    }

    // Fall back to user config
    if let Some(user_config_path) = Self::user_config_path()
      && user_config_path.exists()
      && let Ok(content) = std::fs::read_to_string(&user_config_path)
      && let Ok(config) = toml::from_str(&content)
    {
      return config;
    }

    Self::default()
  }

  /// Parse a config file, surfacing syntax errors instead of falling back
  pub fn from_file(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("PLAGSCAN_CONFIG_DIR") {
      return Some(PathBuf::from(path).join("config.toml"));
    }

    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("plagscan").join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("plagscan").join("config.toml"))
  }

  /// Get the project-relative config path
  pub fn project_config_path(project_path: &Path) -> PathBuf {
    project_path.join(".plagscan").join("config.toml")
  }

  /// Catalog location, resolved against `cwd` when relative
  pub fn catalog_path(&self, cwd: &Path) -> PathBuf {
    if self.catalog.path.is_absolute() {
      self.catalog.path.clone()
    } else {
      cwd.join(&self.catalog.path)
    }
  }

  /// Reject values the scanner cannot work with
  pub fn validate(&self) -> Result<()> {
    if !(0.0..=1.0).contains(&self.scan.threshold) {
      return Err(Error::Config(format!(
        "scan.threshold must be within 0.0..=1.0, got {}",
        self.scan.threshold
      )));
    }
    if !(1..=MAX_CONCURRENCY).contains(&self.scan.concurrency) {
      return Err(Error::Config(format!(
        "scan.concurrency must be within 1..={}, got {}",
        MAX_CONCURRENCY, self.scan.concurrency
      )));
    }
    if self.extract.max_file_size == 0 {
      return Err(Error::Config("extract.max_file_size must be positive".to_string()));
    }
    Ok(())
  }

  /// Generate a default config file as a string
  pub fn generate_template() -> String {
    r#"# plagscan Configuration
# Place in .plagscan/config.toml (project) or ~/.config/plagscan/config.toml (user)

# ============================================================================
# Domain Scans
# ============================================================================

[scan]
# Report projects whose overall similarity is strictly above this value
threshold = 0.3

# Cap the number of reported matches (uncomment to use)
# max_results = 10

# Candidate projects extracted and scored in parallel (1-256)
concurrency = 4

# ============================================================================
# Text Extraction
# ============================================================================

[extract]
# Largest file to open (bytes)
max_file_size = 10485760  # 10MB

# ============================================================================
# Project Catalog
# ============================================================================

[catalog]
# JSON file listing domains and projects
path = "catalog.json"

# ============================================================================
# Logging
# ============================================================================

[logging]
# error, warn, info, debug, trace (RUST_LOG takes precedence)
level = "info"
"#
    .to_string()
  }
}
