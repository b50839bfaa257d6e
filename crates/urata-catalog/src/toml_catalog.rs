use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use tracing::{Level, debug, instrument, warn};

use urata_core::CoreError;
use urata_core::domain::{Album, Award, FaqEntry, MediaItem, PressClipping, PressResourceGroup, TimelineEntry};
use urata_core::ports::CatalogSource;

use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// Catálogo integrado (datos de ejemplo del sitio).
const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.toml");

/// Contenido de un fichero de catálogo. Todas las secciones son opcionales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
  pub tracks: BTreeMap<String, MediaItem>,
  pub albums: Vec<Album>,
  pub timeline: Vec<TimelineEntry>,
  pub awards: Vec<Award>,
  pub press_resources: Vec<PressResourceGroup>,
  pub press_clippings: Vec<PressClipping>,
  pub faq: Vec<FaqEntry>,
}

/// `CatalogSource` respaldado por un documento TOML cargado en memoria.
#[derive(Debug, Clone)]
pub struct TomlCatalog {
  data: CatalogData,
}

impl TomlCatalog {
  pub fn new(data: CatalogData) -> Self {
    Self { data }
  }

  pub fn builtin() -> Result<Self, CatalogError> {
    BUILTIN_CATALOG.parse()
  }

  #[instrument(level = Level::DEBUG, err)]
  pub fn open(path: &Path) -> Result<Self, CatalogError> {
    let content =
      std::fs::read_to_string(path).map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
    content.parse()
  }

  /// Abre el catálogo configurado; sin ruta, o si el fichero no existe, usa el integrado.
  pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
    match &config.path {
      Some(path) if path.exists() => Self::open(path),
      Some(path) => {
        warn!(path = %path.display(), "catalog file not found, using built-in catalog");
        Self::builtin()
      }
      None => Self::builtin(),
    }
  }

  pub fn data(&self) -> &CatalogData {
    &self.data
  }
}

impl FromStr for TomlCatalog {
  type Err = CatalogError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let data: CatalogData = toml::from_str(s)?;
    debug!(tracks = data.tracks.len(), albums = data.albums.len(), "catalog loaded");
    Ok(Self::new(data))
  }
}

impl CatalogSource for TomlCatalog {
  fn tracks(&self) -> Result<Vec<(String, MediaItem)>, CoreError> {
    Ok(self.data.tracks.iter().map(|(key, item)| (key.clone(), item.clone())).collect())
  }

  fn track(&self, key: &str) -> Result<Option<MediaItem>, CoreError> {
    Ok(self.data.tracks.get(key).cloned())
  }

  fn albums(&self) -> Result<Vec<Album>, CoreError> {
    Ok(self.data.albums.clone())
  }

  fn timeline(&self) -> Result<Vec<TimelineEntry>, CoreError> {
    Ok(self.data.timeline.clone())
  }

  fn awards(&self) -> Result<Vec<Award>, CoreError> {
    Ok(self.data.awards.clone())
  }

  fn press_resources(&self) -> Result<Vec<PressResourceGroup>, CoreError> {
    Ok(self.data.press_resources.clone())
  }

  fn press_clippings(&self) -> Result<Vec<PressClipping>, CoreError> {
    Ok(self.data.press_clippings.clone())
  }

  fn faq(&self) -> Result<Vec<FaqEntry>, CoreError> {
    Ok(self.data.faq.clone())
  }
}
