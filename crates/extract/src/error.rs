use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
  #[error("File not found at path: {}", .0.display())]
  NotFound(PathBuf),

  #[error("File too large: {} is {size} bytes (limit {limit})", path.display())]
  TooLarge { path: PathBuf, size: u64, limit: u64 },

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Archive error: {0}")]
  Zip(#[from] zip::result::ZipError),

  #[error("XML error: {0}")]
  Xml(#[from] quick_xml::Error),

  #[error("PDF error: {0}")]
  Pdf(String),

  #[error("Malformed document: {0}")]
  Malformed(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
