use std::path::PathBuf;
use thiserror::Error;
use urata_core::CoreError;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("could not read catalog {path:?}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid catalog: {0}")]
  Parse(#[from] toml::de::Error),
}

impl From<CatalogError> for CoreError {
  fn from(e: CatalogError) -> Self {
    CoreError::Catalog(e.to_string())
  }
}
