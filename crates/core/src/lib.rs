pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod score;

pub use catalog::{Catalog, Domain, Project};
pub use config::{CatalogConfig, Config, ExtractConfig, LoggingConfig, MAX_CONCURRENCY, ScanConfig};
pub use document::{Document, FileType};
pub use error::{Error, Result};
pub use score::SimilarityResult;
