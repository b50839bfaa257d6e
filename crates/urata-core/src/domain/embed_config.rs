use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Dark,
  Light,
}

impl Theme {
  pub fn as_str(&self) -> &'static str {
    match self {
      Theme::Dark => "dark",
      Theme::Light => "light",
    }
  }
}

impl fmt::Display for Theme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Theme {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "dark" => Ok(Theme::Dark),
      "light" => Ok(Theme::Light),
      other => Err(format!("unknown theme: {other}")),
    }
  }
}

/// Opciones de presentación de un embed.
///
/// No afectan a *qué* se reproduce, sólo a *cómo*. Cada resolutor ignora las
/// opciones que su plataforma no soporta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbedConfig {
  /// Alto del iframe en px. `None` = alto por defecto (o compacto) de la plataforma.
  pub height: Option<u32>,
  pub theme: Theme,
  pub autoplay: bool,
  pub muted: bool,
  #[serde(rename = "loop")]
  pub loop_playback: bool,
  /// Mostrar controles del reproductor (YouTube).
  pub controls: bool,
  /// Segundo de inicio (YouTube).
  pub start: Option<u32>,
  /// Segundo de fin (YouTube).
  pub end: Option<u32>,
  /// Código de país de la tienda (Apple Music).
  pub country: String,
  /// Reproductor reducido: alto compacto y `view=coverart` en Spotify.
  pub compact: bool,
}

pub const DEFAULT_COUNTRY: &str = "us";

impl Default for EmbedConfig {
  fn default() -> Self {
    Self {
      height: None,
      theme: Theme::Dark,
      autoplay: false,
      muted: false,
      loop_playback: false,
      controls: true,
      start: None,
      end: None,
      country: DEFAULT_COUNTRY.to_string(),
      compact: false,
    }
  }
}

impl EmbedConfig {
  pub fn compact() -> Self {
    Self { compact: true, ..Self::default() }
  }

  /// Alto efectivo dados los altos normal/compacto de la plataforma.
  pub fn effective_height(&self, default_height: u32, compact_height: u32) -> u32 {
    match self.height {
      Some(h) => h,
      None if self.compact => compact_height,
      None => default_height,
    }
  }
}
