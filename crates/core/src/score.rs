use serde::{Deserialize, Serialize};

/// Per-component similarity between an uploaded document and one project.
///
/// Every field lies in `[0, 1]`. `overall_similarity` is the fixed weighted
/// blend of the other three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
  pub title_similarity: f64,
  pub abstract_similarity: f64,
  pub content_similarity: f64,
  pub overall_similarity: f64,
}

impl SimilarityResult {
  /// Overall score as a whole percentage, for display
  pub fn overall_percent(&self) -> u32 {
    (self.overall_similarity * 100.0).round() as u32
  }
}
