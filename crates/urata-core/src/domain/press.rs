use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressResourceKind {
  Bio,
  Photo,
  Audio,
  Document,
}

/// Material descargable del press kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressResource {
  pub name: String,
  /// Formato del fichero ("PDF", "ZIP"...).
  pub format: String,
  /// Tamaño tal como se muestra ("45 KB").
  pub size: String,
  #[serde(rename = "type")]
  pub kind: PressResourceKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressResourceGroup {
  pub category: String,
  pub items: Vec<PressResource>,
}

fn placeholder_url() -> String {
  "#".to_string()
}

/// Artículo o entrevista publicada en un medio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressClipping {
  pub outlet: String,
  pub title: String,
  pub date: String,
  #[serde(rename = "type")]
  pub kind: String,
  /// Enlace al artículo; `#` mientras no exista.
  #[serde(default = "placeholder_url")]
  pub url: String,
}
