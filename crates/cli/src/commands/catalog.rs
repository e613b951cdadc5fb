//! Catalog listing commands (domains, projects)

use super::load_catalog;
use anyhow::Result;
use plagscan_core::Config;
use std::path::Path;

/// List catalog domains with their project counts
pub fn cmd_domains(config: &Config, cwd: &Path, catalog_path: Option<&Path>, json_output: bool) -> Result<()> {
  let catalog = load_catalog(config, cwd, catalog_path)?;

  if json_output {
    println!("{}", serde_json::to_string_pretty(&catalog.domains)?);
    return Ok(());
  }

  if catalog.domains.is_empty() {
    println!("No domains in catalog");
    return Ok(());
  }

  for domain in &catalog.domains {
    let count = catalog.projects_in_domain(domain.id).len();
    println!("{:>4}  {} ({} projects)", domain.id, domain.name, count);
    if let Some(description) = &domain.description {
      println!("      {}", description);
    }
  }

  Ok(())
}

/// List catalog projects, optionally limited to one domain
pub fn cmd_projects(
  config: &Config,
  cwd: &Path,
  domain: Option<&str>,
  catalog_path: Option<&Path>,
  json_output: bool,
) -> Result<()> {
  let catalog = load_catalog(config, cwd, catalog_path)?;

  let projects = match domain {
    Some(key) => catalog.projects_in_domain(catalog.find_domain(key)?.id),
    None => catalog.projects.iter().collect(),
  };

  if json_output {
    println!("{}", serde_json::to_string_pretty(&projects)?);
    return Ok(());
  }

  if projects.is_empty() {
    println!("No projects found");
    return Ok(());
  }

  for project in projects {
    let domain_name = catalog
      .domain(project.domain_id)
      .map(|d| d.name.as_str())
      .unwrap_or("unknown domain");
    println!("{:>4}  {} [{}]", project.id, project.title, domain_name);
    if let Some(one_liner) = &project.one_liner {
      println!("      {}", one_liner);
    }
    println!("      {} ({})", catalog.resolve_path(project).display(), project.file_type);
  }

  Ok(())
}
