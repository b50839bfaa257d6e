use serde::{Deserialize, Serialize};

/// Hito de la biografía ("About").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
  /// Año o rango libre ("1988", "1990-1995", "2000-Present").
  pub year: String,
  pub title: String,
  pub description: String,
}

/// Premio o reconocimiento.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
  pub year: String,
  pub title: String,
  pub category: String,
  /// Obra premiada.
  pub work: String,
}
