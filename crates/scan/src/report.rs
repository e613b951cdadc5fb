use chrono::{DateTime, Utc};
use plagscan_core::{Project, SimilarityResult};
use serde::{Deserialize, Serialize};

/// A project whose similarity to the upload cleared the threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanMatch {
  pub project: Project,
  pub similarity: SimilarityResult,
}

/// Outcome of scanning one upload against a domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
  pub domain_id: u64,
  pub upload_title: String,
  /// Projects in the domain
  pub candidates: usize,
  /// Projects whose text was extracted and scored
  pub compared: usize,
  /// Projects skipped because their file could not be read
  pub skipped: usize,
  pub threshold: f64,
  /// Sorted by overall similarity, highest first
  pub matches: Vec<ScanMatch>,
  pub scanned_at: DateTime<Utc>,
  pub duration_ms: u64,
}

impl ScanReport {
  pub fn best_match(&self) -> Option<&ScanMatch> {
    self.matches.first()
  }
}
