//! Project catalog: the domains and previously uploaded projects a scan compares against.
//!
//! The catalog is a JSON file maintained outside this tool. Project file paths
//! may be relative, in which case they resolve against the catalog's directory.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A subject area grouping related projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
  pub id: u64,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

/// A previously uploaded project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
  pub id: u64,
  pub title: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub one_liner: Option<String>,
  #[serde(rename = "abstract")]
  pub abstract_text: String,
  pub file_path: String,
  #[serde(default)]
  pub file_name: String,
  /// Stored type string (e.g. "pdf"); parsed lazily so one bad entry does not poison the catalog
  pub file_type: String,
  pub domain_id: u64,
  #[serde(default)]
  pub author_name: String,
  #[serde(default)]
  pub author_email: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author_phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
  #[serde(default)]
  pub domains: Vec<Domain>,
  #[serde(default)]
  pub projects: Vec<Project>,
  #[serde(skip)]
  base_dir: PathBuf,
}

impl Catalog {
  /// Load a catalog from a JSON file
  pub fn load(path: &Path) -> Result<Self> {
    if !path.exists() {
      return Err(Error::NotFound {
        entity: "catalog",
        id: path.display().to_string(),
      });
    }

    let content = std::fs::read_to_string(path)?;
    let mut catalog: Catalog = serde_json::from_str(&content)?;
    catalog.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(catalog)
  }

  /// Parse a catalog from a JSON string, resolving relative paths against `base_dir`
  pub fn from_json(json: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
    let mut catalog: Catalog = serde_json::from_str(json)?;
    catalog.base_dir = base_dir.into();
    Ok(catalog)
  }

  pub fn base_dir(&self) -> &Path {
    &self.base_dir
  }

  pub fn domain(&self, id: u64) -> Option<&Domain> {
    self.domains.iter().find(|d| d.id == id)
  }

  /// Look up a domain by numeric id or case-insensitive name
  pub fn find_domain(&self, key: &str) -> Result<&Domain> {
    let key = key.trim();
    let found = match key.parse::<u64>() {
      Ok(id) => self.domain(id),
      Err(_) => self.domains.iter().find(|d| d.name.eq_ignore_ascii_case(key)),
    };

    found.ok_or_else(|| Error::NotFound {
      entity: "domain",
      id: key.to_string(),
    })
  }

  /// Projects belonging to a domain, in catalog order
  pub fn projects_in_domain(&self, domain_id: u64) -> Vec<&Project> {
    self.projects.iter().filter(|p| p.domain_id == domain_id).collect()
  }

  /// Absolute location of a project's stored file
  pub fn resolve_path(&self, project: &Project) -> PathBuf {
    let path = Path::new(&project.file_path);
    if path.is_absolute() {
      path.to_path_buf()
    } else {
      self.base_dir.join(path)
    }
  }
}
