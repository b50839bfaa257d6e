use super::EmbedResolver;
use super::query::QueryString;
use crate::domain::embed_config::DEFAULT_COUNTRY;
use crate::domain::{EmbedConfig, IdentifierKind, Platform};

const HOST: &str = "https://embed.music.apple.com";

/// `https://embed.music.apple.com/{country}/{song|album|artist}/{id}?app=music&theme={dark|light}`
#[derive(Debug, Clone, Copy, Default)]
pub struct AppleMusicEmbed;

impl EmbedResolver for AppleMusicEmbed {
  fn platform(&self) -> Platform {
    Platform::AppleMusic
  }

  fn priority(&self) -> &'static [IdentifierKind] {
    &[IdentifierKind::Track, IdentifierKind::Album, IdentifierKind::Artist]
  }

  fn default_height(&self) -> u32 {
    400
  }

  fn compact_height(&self) -> u32 {
    200
  }

  fn build_url(&self, kind: IdentifierKind, id: &str, config: &EmbedConfig) -> String {
    // Sólo llegan los tipos de `priority`; las listas no tienen reproductor aquí.
    let segment = match kind {
      IdentifierKind::Album => "album",
      IdentifierKind::Artist => "artist",
      _ => "song",
    };

    // Un país vacío dejaría un segmento vacío en la ruta.
    let country = config.country.trim().to_lowercase();
    let country = if country.is_empty() { DEFAULT_COUNTRY.to_string() } else { country };

    let mut query = QueryString::new();
    query.push("app", "music").push("theme", config.theme.as_str());

    query.append_to(&format!("{HOST}/{}/{segment}/{id}", urlencoding::encode(&country)))
  }
}
