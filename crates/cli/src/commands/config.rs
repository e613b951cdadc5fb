//! Configuration commands (show, init, reset)

use anyhow::{Context, Result, bail};
use plagscan_core::Config;
use std::path::Path;
use tracing::warn;

/// Show the effective configuration and where it came from
pub fn cmd_config_show(config: &Config, cwd: &Path) -> Result<()> {
  let project_config = Config::project_config_path(cwd);
  let user_config = Config::user_config_path();

  println!("Effective configuration for: {:?}", cwd);
  println!();

  if project_config.exists() {
    println!("Using project config: {:?}", project_config);
    // load_for_project falls back silently; surface the reason here
    if let Err(e) = Config::from_file(&project_config) {
      warn!("Project config ignored: {}", e);
    }
  } else if let Some(ref user_path) = user_config {
    if user_path.exists() {
      println!("Using user config: {:?}", user_path);
      if let Err(e) = Config::from_file(user_path) {
        warn!("User config ignored: {}", e);
      }
    } else {
      println!("Using default configuration (no config file found)");
    }
  } else {
    println!("Using default configuration");
  }
  println!("Catalog: {:?}", config.catalog_path(cwd));
  println!();

  if let Err(e) = config.validate() {
    warn!("{}", e);
  }

  let toml_str = toml::to_string_pretty(config)?;
  println!("{}", toml_str);

  Ok(())
}

/// Write the commented template to the project config path
pub fn cmd_config_init(cwd: &Path) -> Result<()> {
  let config_path = Config::project_config_path(cwd);
  if config_path.exists() {
    bail!("{:?} already exists; delete it first to regenerate", config_path);
  }

  write_template(&config_path)?;
  println!("Created project config: {:?}", config_path);
  Ok(())
}

/// Overwrite the user config with the default template
pub fn cmd_config_reset() -> Result<()> {
  let Some(user_config_path) = Config::user_config_path() else {
    bail!("Could not determine user config path");
  };

  write_template(&user_config_path)?;
  println!("Reset user config to defaults: {:?}", user_config_path);
  Ok(())
}

fn write_template(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).with_context(|| format!("Failed to create {:?}", parent))?;
  }
  std::fs::write(path, Config::generate_template()).with_context(|| format!("Failed to write {:?}", path))?;
  Ok(())
}
