use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("Not found: {entity} {id}")]
  NotFound { entity: &'static str, id: String },

  #[error("Unsupported file type: {0}")]
  UnsupportedFileType(String),

  #[error("Config: {0}")]
  Config(String),

  #[error("JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("IO: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
