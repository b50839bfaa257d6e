use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Plataformas de streaming en las que puede estar publicado un ítem del catálogo.
///
/// El orden de declaración es significativo: es el orden en que se listan las
/// plataformas disponibles (`Ord` deriva de él, así que un `BTreeMap<Platform, _>`
/// itera en ese mismo orden).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
  #[serde(rename = "spotify")]
  Spotify,
  #[serde(rename = "appleMusic")]
  AppleMusic,
  #[serde(rename = "bandcamp")]
  Bandcamp,
  #[serde(rename = "youtube")]
  YouTube,
  #[serde(rename = "soundcloud")]
  SoundCloud,
}

impl Platform {
  pub const ALL: [Platform; 5] =
    [Platform::Spotify, Platform::AppleMusic, Platform::Bandcamp, Platform::YouTube, Platform::SoundCloud];

  /// Clave estable usada en el catálogo y en la interfaz de comandos.
  pub fn key(&self) -> &'static str {
    match self {
      Platform::Spotify => "spotify",
      Platform::AppleMusic => "appleMusic",
      Platform::Bandcamp => "bandcamp",
      Platform::YouTube => "youtube",
      Platform::SoundCloud => "soundcloud",
    }
  }

  /// Nombre legible para botones y etiquetas.
  pub fn label(&self) -> &'static str {
    match self {
      Platform::Spotify => "Spotify",
      Platform::AppleMusic => "Apple Music",
      Platform::Bandcamp => "Bandcamp",
      Platform::YouTube => "YouTube",
      Platform::SoundCloud => "SoundCloud",
    }
  }

  /// Color de marca (hex) para el selector de plataformas.
  pub fn brand_color(&self) -> &'static str {
    match self {
      Platform::Spotify => "#1DB954",
      Platform::AppleMusic => "#FA243C",
      Platform::Bandcamp => "#1DA0C3",
      Platform::YouTube => "#FF0000",
      Platform::SoundCloud => "#FF8500",
    }
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
  type Err = UnknownPlatform;

  /// Acepta la clave del catálogo (`appleMusic`) y variantes habituales
  /// (`apple-music`, `Apple Music`, `YouTube`...).
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized: String =
      s.trim().chars().filter(|c| !matches!(c, ' ' | '-' | '_')).collect::<String>().to_lowercase();

    match normalized.as_str() {
      "spotify" => Ok(Platform::Spotify),
      "applemusic" | "apple" => Ok(Platform::AppleMusic),
      "bandcamp" => Ok(Platform::Bandcamp),
      "youtube" => Ok(Platform::YouTube),
      "soundcloud" => Ok(Platform::SoundCloud),
      _ => Err(UnknownPlatform(s.to_string())),
    }
  }
}
