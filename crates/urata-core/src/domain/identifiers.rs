use serde::{Deserialize, Serialize};

/// Qué tipo de contenido selecciona un identificador dentro de una plataforma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
  Track,
  Album,
  Playlist,
  Artist,
  Video,
}

/// Identificadores de un ítem en una plataforma concreta.
///
/// Todos los campos son opcionales y se tratan como cadenas opacas: no se
/// validan ni se normalizan. Un campo con cadena vacía cuenta como ausente.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformIdentifiers {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub track_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub album_id: Option<String>,
  /// Sólo Spotify.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub playlist_id: Option<String>,
  /// Spotify / Apple Music.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub artist_id: Option<String>,
  /// YouTube.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub video_id: Option<String>,
  /// Subdominio del artista en Bandcamp (`<slug>.bandcamp.com`).
  #[serde(skip_serializing_if = "Option::is_none")]
  pub artist_url: Option<String>,
  /// URL canónica para "abrir en la plataforma".
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}

impl PlatformIdentifiers {
  pub fn get(&self, kind: IdentifierKind) -> Option<&str> {
    match kind {
      IdentifierKind::Track => non_empty(&self.track_id),
      IdentifierKind::Album => non_empty(&self.album_id),
      IdentifierKind::Playlist => non_empty(&self.playlist_id),
      IdentifierKind::Artist => non_empty(&self.artist_id),
      IdentifierKind::Video => non_empty(&self.video_id),
    }
  }

  pub fn artist_slug(&self) -> Option<&str> {
    non_empty(&self.artist_url)
  }

  pub fn external_url(&self) -> Option<&str> {
    non_empty(&self.url)
  }

  /// `true` si ningún campo tiene una cadena no vacía.
  pub fn is_empty(&self) -> bool {
    [
      &self.track_id,
      &self.album_id,
      &self.playlist_id,
      &self.artist_id,
      &self.video_id,
      &self.artist_url,
      &self.url,
    ]
    .into_iter()
    .all(|field| non_empty(field).is_none())
  }
}
