//! Resolución de URLs de embed por plataforma.
//!
//! Cada plataforma es una estrategia ([`EmbedResolver`]) con su propia lista
//! de identificadores en orden de prioridad y su plantilla de URL. La
//! resolución es una función pura de `(identificadores, config)`: o devuelve
//! una URL lista para un iframe o [`EmbedResolution::Unavailable`], nunca una
//! URL con un segmento vacío.

mod apple_music;
mod bandcamp;
mod query;
mod spotify;
mod youtube;

pub use apple_music::AppleMusicEmbed;
pub use bandcamp::{BandcampEmbed, purchase_link};
pub use spotify::SpotifyEmbed;
pub use youtube::YouTubeEmbed;

use serde::{Deserialize, Serialize};

use crate::domain::{EmbedConfig, IdentifierKind, Platform, PlatformIdentifiers};

/// URL de embed ya resuelta, con el identificador que ganó la prioridad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedUrl {
  pub platform: Platform,
  pub kind: IdentifierKind,
  pub id: String,
  pub url: String,
  /// Alto del iframe en px.
  pub height: u32,
}

/// Resultado de resolver un embed.
///
/// `Unavailable` es el único "error" posible: no hay identificador utilizable.
/// El host debe pintar un placeholder neutro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum EmbedResolution {
  Ready(EmbedUrl),
  Unavailable { platform: Option<Platform> },
}

impl EmbedResolution {
  pub fn unavailable(platform: Platform) -> Self {
    EmbedResolution::Unavailable { platform: Some(platform) }
  }

  pub fn url(&self) -> Option<&str> {
    match self {
      EmbedResolution::Ready(embed) => Some(&embed.url),
      EmbedResolution::Unavailable { .. } => None,
    }
  }

  pub fn is_ready(&self) -> bool {
    matches!(self, EmbedResolution::Ready(_))
  }
}

/// Estrategia de embed de una plataforma.
pub trait EmbedResolver: Sync {
  fn platform(&self) -> Platform;

  /// Identificadores que acepta el reproductor, de mayor a menor prioridad.
  fn priority(&self) -> &'static [IdentifierKind];

  fn default_height(&self) -> u32;

  fn compact_height(&self) -> u32;

  /// Construye la URL para un identificador ya elegido (no vacío).
  fn build_url(&self, kind: IdentifierKind, id: &str, config: &EmbedConfig) -> String;

  fn resolve(&self, ids: &PlatformIdentifiers, config: &EmbedConfig) -> EmbedResolution {
    let Some((kind, id)) = first_identifier(ids, self.priority()) else {
      return EmbedResolution::unavailable(self.platform());
    };

    EmbedResolution::Ready(EmbedUrl {
      platform: self.platform(),
      kind,
      id: id.to_string(),
      url: self.build_url(kind, id, config),
      height: config.effective_height(self.default_height(), self.compact_height()),
    })
  }
}

/// Primer identificador no vacío según `priority`.
pub fn first_identifier<'a>(
  ids: &'a PlatformIdentifiers,
  priority: &[IdentifierKind],
) -> Option<(IdentifierKind, &'a str)> {
  priority.iter().find_map(|kind| ids.get(*kind).map(|id| (*kind, id)))
}

static SPOTIFY: SpotifyEmbed = SpotifyEmbed;
static APPLE_MUSIC: AppleMusicEmbed = AppleMusicEmbed;
static BANDCAMP: BandcampEmbed = BandcampEmbed::DEFAULT;
static YOUTUBE: YouTubeEmbed = YouTubeEmbed;

/// Tabla de estrategias. SoundCloud sólo tiene enlace externo, no reproductor.
pub fn resolver_for(platform: Platform) -> Option<&'static dyn EmbedResolver> {
  match platform {
    Platform::Spotify => Some(&SPOTIFY),
    Platform::AppleMusic => Some(&APPLE_MUSIC),
    Platform::Bandcamp => Some(&BANDCAMP),
    Platform::YouTube => Some(&YOUTUBE),
    Platform::SoundCloud => None,
  }
}

/// Atajo: resuelve con la estrategia de `platform`, o `Unavailable` si no tiene.
pub fn resolve(platform: Platform, ids: &PlatformIdentifiers, config: &EmbedConfig) -> EmbedResolution {
  match resolver_for(platform) {
    Some(resolver) => resolver.resolve(ids, config),
    None => EmbedResolution::unavailable(platform),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn nothing_resolves_without_identifiers() {
    let ids = PlatformIdentifiers {
      artist_url: Some("keishiurata".into()),
      url: Some("https://example.com".into()),
      ..Default::default()
    };

    for platform in Platform::ALL {
      let resolution = resolve(platform, &ids, &EmbedConfig::default());
      assert_eq!(resolution, EmbedResolution::unavailable(platform), "{platform}");
      assert_eq!(resolution.url(), None);
    }
  }

  #[test]
  fn empty_string_identifiers_are_skipped() {
    let ids = PlatformIdentifiers { track_id: Some(String::new()), album_id: Some("alb".into()), ..Default::default() };

    assert_eq!(first_identifier(&ids, &[IdentifierKind::Track, IdentifierKind::Album]), Some((IdentifierKind::Album, "alb")));
  }

  #[test]
  fn soundcloud_has_no_player() {
    assert!(resolver_for(Platform::SoundCloud).is_none());
    for platform in [Platform::Spotify, Platform::AppleMusic, Platform::Bandcamp, Platform::YouTube] {
      assert_eq!(resolver_for(platform).map(|r| r.platform()), Some(platform));
    }
  }

  #[test]
  fn explicit_height_wins_over_compact() {
    let ids = PlatformIdentifiers { track_id: Some("t".into()), ..Default::default() };
    let config = EmbedConfig { height: Some(500), compact: true, ..Default::default() };

    let EmbedResolution::Ready(embed) = resolve(Platform::Spotify, &ids, &config) else {
      panic!("expected a ready embed");
    };
    assert_eq!(embed.height, 500);
  }
}
