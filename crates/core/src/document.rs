use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Text pulled out of an uploaded or stored project file.
///
/// Lives only for the duration of one comparison; nothing persists it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  pub title: String,
  pub text: String,
}

impl Document {
  pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      text: text.into(),
    }
  }

  /// True when there is nothing to compare against (empty or whitespace-only text)
  pub fn is_blank(&self) -> bool {
    self.text.trim().is_empty()
  }
}

/// File formats the extractor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
  Pdf,
  Docx,
  Pptx,
  Text,
}

impl FileType {
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext.trim_start_matches('.').to_lowercase().as_str() {
      "pdf" => Some(FileType::Pdf),
      "docx" => Some(FileType::Docx),
      "pptx" => Some(FileType::Pptx),
      "txt" | "text" | "md" | "markdown" => Some(FileType::Text),
      _ => None,
    }
  }

  /// Detect the type from a path's extension
  pub fn from_path(path: &Path) -> Option<Self> {
    path.extension().and_then(|e| e.to_str()).and_then(Self::from_extension)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      FileType::Pdf => "pdf",
      FileType::Docx => "docx",
      FileType::Pptx => "pptx",
      FileType::Text => "text",
    }
  }
}

impl std::fmt::Display for FileType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for FileType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_extension(s.trim()).ok_or_else(|| Error::UnsupportedFileType(s.to_string()))
  }
}
