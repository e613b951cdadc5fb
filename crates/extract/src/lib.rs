//! Text extraction for uploaded and stored project files.
//!
//! Turns a file on disk into a [`Document`] (title + plain text) that the
//! similarity scorer can consume.

pub mod error;
pub mod office;

pub use error::{ExtractError, Result};

use chrono::{DateTime, Utc};
use plagscan_core::{Document, ExtractConfig, FileType};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

/// Anything that can turn a stored file into comparable text
pub trait Extract: Send + Sync {
  fn extract(&self, path: &Path, file_type: FileType) -> Result<Document>;
}

/// Extractor backed by the local filesystem
#[derive(Debug, Clone)]
pub struct FileExtractor {
  max_file_size: u64,
}

impl Default for FileExtractor {
  fn default() -> Self {
    Self::new()
  }
}

impl FileExtractor {
  pub fn new() -> Self {
    Self {
      max_file_size: ExtractConfig::default().max_file_size,
    }
  }

  pub fn from_config(config: &ExtractConfig) -> Self {
    Self {
      max_file_size: config.max_file_size,
    }
  }

  pub fn with_max_file_size(mut self, size: u64) -> Self {
    self.max_file_size = size;
    self
  }
}

impl Extract for FileExtractor {
  fn extract(&self, path: &Path, file_type: FileType) -> Result<Document> {
    if !path.exists() {
      return Err(ExtractError::NotFound(path.to_path_buf()));
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > self.max_file_size {
      return Err(ExtractError::TooLarge {
        path: path.to_path_buf(),
        size: metadata.len(),
        limit: self.max_file_size,
      });
    }

    let document = match file_type {
      FileType::Pdf => {
        let text = pdf_text(path)?;
        Document::new(first_line(&text), text)
      }
      FileType::Docx => {
        let text = office::docx_text(BufReader::new(File::open(path)?), self.max_file_size)?;
        Document::new(first_line(&text), text)
      }
      FileType::Pptx => {
        let text = office::pptx_text(BufReader::new(File::open(path)?), self.max_file_size)?;
        let title = file_stem(path);
        if text.trim().is_empty() {
          warn!("No slide text in {}, falling back to file metadata", path.display());
          Document::new(title, presentation_stub(path, &metadata))
        } else {
          Document::new(title, text)
        }
      }
      FileType::Text => {
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Document::new(first_line(&text), text)
      }
    };

    debug!(
      "Extracted {} chars from {} ({})",
      document.text.chars().count(),
      path.display(),
      file_type
    );
    Ok(document)
  }
}

/// Extract with default limits
pub fn extract(path: &Path, file_type: FileType) -> Result<Document> {
  FileExtractor::new().extract(path, file_type)
}

fn pdf_text(path: &Path) -> Result<String> {
  let bytes = std::fs::read(path)?;
  // pdf-extract panics on some malformed inputs instead of returning an error
  match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes)) {
    Ok(Ok(text)) => Ok(text),
    Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
    Err(_) => Err(ExtractError::Pdf(format!("parser aborted on {}", path.display()))),
  }
}

/// First non-blank line, trimmed
fn first_line(text: &str) -> String {
  text
    .lines()
    .map(str::trim)
    .find(|line| !line.is_empty())
    .unwrap_or_default()
    .to_string()
}

fn file_stem(path: &Path) -> String {
  path
    .file_stem()
    .map(|s| s.to_string_lossy().into_owned())
    .unwrap_or_default()
}

/// Placeholder text for a deck with no readable slides
fn presentation_stub(path: &Path, metadata: &std::fs::Metadata) -> String {
  let file_name = path
    .file_name()
    .map(|s| s.to_string_lossy().into_owned())
    .unwrap_or_default();
  let created: DateTime<Utc> = metadata
    .created()
    .or_else(|_| metadata.modified())
    .map(DateTime::<Utc>::from)
    .unwrap_or_else(|_| Utc::now());

  format!(
    "PowerPoint presentation: {}. File size: {} bytes. Created: {}",
    file_name,
    metadata.len(),
    created.to_rfc3339()
  )
}
