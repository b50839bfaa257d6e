use super::EmbedResolver;
use super::query::QueryString;
use crate::domain::{EmbedConfig, IdentifierKind, Platform, Theme};

const HOST: &str = "https://open.spotify.com/embed";

/// `https://open.spotify.com/embed/{track|album|playlist|artist}/{id}?utm_source=generator&theme={0|1}[&view=coverart]`
#[derive(Debug, Clone, Copy, Default)]
pub struct SpotifyEmbed;

impl EmbedResolver for SpotifyEmbed {
  fn platform(&self) -> Platform {
    Platform::Spotify
  }

  fn priority(&self) -> &'static [IdentifierKind] {
    &[IdentifierKind::Track, IdentifierKind::Album, IdentifierKind::Playlist, IdentifierKind::Artist]
  }

  fn default_height(&self) -> u32 {
    380
  }

  fn compact_height(&self) -> u32 {
    152
  }

  fn build_url(&self, kind: IdentifierKind, id: &str, config: &EmbedConfig) -> String {
    let segment = match kind {
      IdentifierKind::Album => "album",
      IdentifierKind::Playlist => "playlist",
      IdentifierKind::Artist => "artist",
      IdentifierKind::Track | IdentifierKind::Video => "track",
    };

    // Spotify invierte la lógica: 0 = oscuro.
    let theme = match config.theme {
      Theme::Dark => "0",
      Theme::Light => "1",
    };

    let mut query = QueryString::new();
    query.push("utm_source", "generator").push("theme", theme);
    if config.compact {
      query.push("view", "coverart");
    }

    query.append_to(&format!("{HOST}/{segment}/{id}"))
  }
}
