use crate::domain::{Album, Award, FaqEntry, MediaItem, PressClipping, PressResourceGroup, TimelineEntry};
use crate::errors::CoreError;

/// Origen de los datos estáticos del sitio.
///
/// Las implementaciones cargan una vez y sirven copias; nada aquí muta el catálogo.
pub trait CatalogSource {
  // --- Reproducibles ---
  /// Pistas ordenadas por clave.
  fn tracks(&self) -> Result<Vec<(String, MediaItem)>, CoreError>;
  fn track(&self, key: &str) -> Result<Option<MediaItem>, CoreError>;

  // --- Discografía ---
  fn albums(&self) -> Result<Vec<Album>, CoreError>;

  // --- About ---
  fn timeline(&self) -> Result<Vec<TimelineEntry>, CoreError>;
  fn awards(&self) -> Result<Vec<Award>, CoreError>;

  // --- Press ---
  fn press_resources(&self) -> Result<Vec<PressResourceGroup>, CoreError>;
  fn press_clippings(&self) -> Result<Vec<PressClipping>, CoreError>;

  // --- Contact ---
  fn faq(&self) -> Result<Vec<FaqEntry>, CoreError>;
}
