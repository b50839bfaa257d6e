use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::identifiers::PlatformIdentifiers;
use super::platform::Platform;

/// Una canción o álbum del catálogo del sitio, referenciado en varias plataformas.
///
/// Es configuración estática: se carga una vez y no se muta en tiempo de ejecución.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
  pub title: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub album: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub year: Option<String>,
  /// Duración tal como se muestra ("4:32").
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub duration: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cover_image: Option<String>,
  /// Identificadores por plataforma. Puede omitir cualquier subconjunto.
  #[serde(default)]
  pub platforms: BTreeMap<Platform, PlatformIdentifiers>,
}

impl MediaItem {
  pub fn new(title: impl Into<String>) -> Self {
    Self { title: title.into(), ..Default::default() }
  }

  pub fn with_platform(mut self, platform: Platform, ids: PlatformIdentifiers) -> Self {
    self.platforms.insert(platform, ids);
    self
  }

  pub fn identifiers(&self, platform: Platform) -> Option<&PlatformIdentifiers> {
    self.platforms.get(&platform)
  }

  /// Plataformas con al menos un identificador no vacío, en orden de declaración.
  pub fn available_platforms(&self) -> Vec<Platform> {
    self.platforms.iter().filter(|(_, ids)| !ids.is_empty()).map(|(platform, _)| *platform).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_bundles_are_not_available() {
    let item = MediaItem::new("x")
      .with_platform(Platform::Bandcamp, PlatformIdentifiers::default())
      .with_platform(Platform::Spotify, PlatformIdentifiers { track_id: Some("x".into()), ..Default::default() });

    assert_eq!(item.available_platforms(), vec![Platform::Spotify]);
  }

  #[test]
  fn available_platforms_follow_declaration_order() {
    let item = MediaItem::new("Akira Main Theme")
      .with_platform(Platform::YouTube, PlatformIdentifiers { video_id: Some("abc123".into()), ..Default::default() })
      .with_platform(
        Platform::AppleMusic,
        PlatformIdentifiers { album_id: Some("1234567890".into()), ..Default::default() },
      );

    assert_eq!(item.available_platforms(), vec![Platform::AppleMusic, Platform::YouTube]);
  }
}
