//! Domain scans: compare one uploaded document against every project in a domain.

pub mod report;

pub use report::{ScanMatch, ScanReport};

use chrono::Utc;
use extract::{Extract, ExtractError};
use futures::future::join_all;
use plagscan_core::{Catalog, Document, FileType, MAX_CONCURRENCY, Project, ScanConfig, SimilarityResult};
use similarity::{ABSTRACT_CHARS, compute_similarity, leading_chars};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ScanError {
  #[error("Extraction failed: {0}")]
  Extract(#[from] ExtractError),

  #[error("Could not extract text from file: {}", .0.display())]
  NoContent(PathBuf),

  #[error("Task failed: {0}")]
  Join(#[from] tokio::task::JoinError),

  #[error("Scan cancelled: {0}")]
  Cancelled(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;

/// Outcome of scoring a single candidate
enum Candidate {
  Scored(ScanMatch),
  Skipped,
}

/// Runs extraction and scoring for uploads against stored projects
#[derive(Clone)]
pub struct Scanner {
  extractor: Arc<dyn Extract>,
  config: ScanConfig,
}

impl Scanner {
  pub fn new(extractor: Arc<dyn Extract>, config: ScanConfig) -> Self {
    Self { extractor, config }
  }

  pub fn config(&self) -> &ScanConfig {
    &self.config
  }

  /// Extract a file off the async runtime
  pub async fn extract(&self, path: &Path, file_type: FileType) -> Result<Document> {
    let extractor = Arc::clone(&self.extractor);
    let path = path.to_path_buf();
    let document = tokio::task::spawn_blocking(move || extractor.extract(&path, file_type)).await??;
    Ok(document)
  }

  /// Extract the upload, refusing documents with no text to compare
  pub async fn extract_upload(&self, path: &Path, file_type: FileType) -> Result<Document> {
    let document = self.extract(path, file_type).await?;
    if document.is_blank() {
      return Err(ScanError::NoContent(path.to_path_buf()));
    }
    Ok(document)
  }

  /// Scan an uploaded file against every project of a catalog domain
  pub async fn scan_catalog(
    &self,
    upload_path: &Path,
    upload_type: FileType,
    catalog: &Catalog,
    domain_id: u64,
  ) -> Result<ScanReport> {
    let candidates = catalog
      .projects_in_domain(domain_id)
      .into_iter()
      .map(|p| (p.clone(), catalog.resolve_path(p)))
      .collect();
    self.scan(upload_path, upload_type, domain_id, candidates).await
  }

  /// Scan an uploaded file against explicit `(project, stored file)` candidates
  pub async fn scan(
    &self,
    upload_path: &Path,
    upload_type: FileType,
    domain_id: u64,
    candidates: Vec<(Project, PathBuf)>,
  ) -> Result<ScanReport> {
    let upload = self.extract_upload(upload_path, upload_type).await?;
    self.scan_document(upload, domain_id, candidates).await
  }

  /// Score an already extracted upload against the candidates.
  ///
  /// Candidates that cannot be extracted, or yield no text, are skipped with
  /// a warning rather than failing the scan.
  pub async fn scan_document(
    &self,
    upload: Document,
    domain_id: u64,
    candidates: Vec<(Project, PathBuf)>,
  ) -> Result<ScanReport> {
    let start = Instant::now();
    let total = candidates.len();
    let upload_title = upload.title.clone();
    let upload = Arc::new(upload);

    // Bound concurrent extractions; each one may hold a whole document in memory
    let semaphore = Arc::new(Semaphore::new(self.config.concurrency.clamp(1, MAX_CONCURRENCY)));

    let futures: Vec<_> = candidates
      .into_iter()
      .map(|(project, path)| {
        let permit = Arc::clone(&semaphore);
        let extractor = Arc::clone(&self.extractor);
        let upload = Arc::clone(&upload);
        async move {
          let _permit = match permit.acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => return Err(ScanError::Cancelled("semaphore closed".to_string())),
          };

          let project_id = project.id;
          let handle = tokio::task::spawn_blocking(move || score_candidate(extractor.as_ref(), &upload, project, &path));
          match handle.await {
            Ok(candidate) => Ok(candidate),
            Err(e) => {
              warn!("Error processing project {}: {}", project_id, e);
              Ok(Candidate::Skipped)
            }
          }
        }
      })
      .collect();

    let results: Vec<Result<Candidate>> = join_all(futures).await;

    let mut compared = 0;
    let mut skipped = 0;
    let mut matches = Vec::new();
    for result in results {
      match result? {
        Candidate::Scored(scored) => {
          compared += 1;
          if scored.similarity.overall_similarity > self.config.threshold {
            matches.push(scored);
          }
        }
        Candidate::Skipped => skipped += 1,
      }
    }

    rank(&mut matches);
    if let Some(limit) = self.config.max_results {
      matches.truncate(limit);
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    info!(
      "Scanned domain {}: {} candidates, {} compared, {} skipped, {} matches in {}ms",
      domain_id,
      total,
      compared,
      skipped,
      matches.len(),
      duration_ms
    );

    Ok(ScanReport {
      domain_id,
      upload_title,
      candidates: total,
      compared,
      skipped,
      threshold: self.config.threshold,
      matches,
      scanned_at: Utc::now(),
      duration_ms,
    })
  }

  /// Compare two files directly.
  ///
  /// The second file plays the stored project; its abstract defaults to the
  /// leading excerpt of its own text.
  pub async fn compare(
    &self,
    upload: (&Path, FileType),
    project: (&Path, FileType),
    project_abstract: Option<&str>,
  ) -> Result<SimilarityResult> {
    let (a, b) = tokio::try_join!(self.extract(upload.0, upload.1), self.extract(project.0, project.1))?;

    let abstract_text = project_abstract.unwrap_or_else(|| leading_chars(&b.text, ABSTRACT_CHARS));
    Ok(compute_similarity(&a.title, &a.text, &b.title, abstract_text, &b.text))
  }
}

fn score_candidate(extractor: &dyn Extract, upload: &Document, project: Project, path: &Path) -> Candidate {
  let file_type = match project.file_type.parse::<FileType>() {
    Ok(file_type) => file_type,
    Err(e) => {
      warn!("Skipping project {}: {}", project.id, e);
      return Candidate::Skipped;
    }
  };

  let content = match extractor.extract(path, file_type) {
    Ok(content) if !content.text.is_empty() => content,
    Ok(_) => {
      warn!("Could not extract text from project {}", project.id);
      return Candidate::Skipped;
    }
    Err(e) => {
      warn!("Error processing project {}: {}", project.id, e);
      return Candidate::Skipped;
    }
  };

  let similarity = compute_similarity(
    &upload.title,
    &upload.text,
    &project.title,
    &project.abstract_text,
    &content.text,
  );
  debug!(
    "Project {} scored {:.3} (title {:.3}, abstract {:.3}, content {:.3})",
    project.id,
    similarity.overall_similarity,
    similarity.title_similarity,
    similarity.abstract_similarity,
    similarity.content_similarity
  );

  Candidate::Scored(ScanMatch { project, similarity })
}

/// Highest overall score first; equal scores fall back to project id
fn rank(matches: &mut [ScanMatch]) {
  matches.sort_by(|a, b| {
    b.similarity
      .overall_similarity
      .total_cmp(&a.similarity.overall_similarity)
      .then_with(|| a.project.id.cmp(&b.project.id))
  });
}
