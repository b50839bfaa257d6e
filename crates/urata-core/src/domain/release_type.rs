use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Tipo de lanzamiento tal como se muestra en la discografía.
///
/// Además de la clasificación clásica (Album, EP, Single...) incluye las
/// categorías que usa el sitio (Film Score, Symphonic Suite...). Cualquier
/// otro texto se conserva en [`ReleaseType::Custom`].
///
/// Se (de)serializa como texto legible: `"Film Score"`, `"Symphonic Suite"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReleaseType {
  Album,
  EP,
  Single,
  Compilation,
  Soundtrack,
  FilmScore,
  SymphonicSuite,
  Electronic,
  AmbientElectronic,
  /// Valor no estándar.
  Custom(String),
}

impl FromStr for ReleaseType {
  type Err = std::convert::Infallible;

  /// Parsear nunca falla: lo desconocido acaba en `Custom`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");

    let rt = match normalized.as_str() {
      "album" | "lp" => ReleaseType::Album,
      "ep" => ReleaseType::EP,
      "single" => ReleaseType::Single,
      "compilation" => ReleaseType::Compilation,
      "soundtrack" | "ost" | "original soundtrack" => ReleaseType::Soundtrack,
      "film score" | "score" => ReleaseType::FilmScore,
      "symphonic suite" => ReleaseType::SymphonicSuite,
      "electronic" => ReleaseType::Electronic,
      "ambient electronic" => ReleaseType::AmbientElectronic,
      _ => ReleaseType::Custom(s.trim().to_string()),
    };

    Ok(rt)
  }
}

impl fmt::Display for ReleaseType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseType::Album => write!(f, "Album"),
      ReleaseType::EP => write!(f, "EP"),
      ReleaseType::Single => write!(f, "Single"),
      ReleaseType::Compilation => write!(f, "Compilation"),
      ReleaseType::Soundtrack => write!(f, "Soundtrack"),
      ReleaseType::FilmScore => write!(f, "Film Score"),
      ReleaseType::SymphonicSuite => write!(f, "Symphonic Suite"),
      ReleaseType::Electronic => write!(f, "Electronic"),
      ReleaseType::AmbientElectronic => write!(f, "Ambient Electronic"),
      ReleaseType::Custom(s) => write!(f, "{s}"),
    }
  }
}

impl From<String> for ReleaseType {
  fn from(s: String) -> Self {
    match s.parse() {
      Ok(rt) => rt,
      Err(never) => match never {},
    }
  }
}

impl From<ReleaseType> for String {
  fn from(rt: ReleaseType) -> Self {
    rt.to_string()
  }
}
