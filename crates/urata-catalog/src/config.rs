use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use urata_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};

/// Sección `[catalog]` de urata.toml.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
  /// Fichero TOML con el catálogo. Sin valor se usa el catálogo integrado.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub path: Option<PathBuf>,
}

impl CatalogConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&*CONFIG_BACKEND)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg: Self = backend.load_section_with_default("catalog")?;
    backend.save_section("catalog", &cfg)?;
    Ok(cfg)
  }
}
