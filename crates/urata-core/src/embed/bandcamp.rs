use super::EmbedResolver;
use crate::domain::{EmbedConfig, IdentifierKind, Platform, PlatformIdentifiers};

const HOST: &str = "https://bandcamp.com/EmbeddedPlayer";

/// Reproductor embebido de Bandcamp.
///
/// Bandcamp no usa query string: las opciones van en la ruta, en posiciones
/// fijas (`size=…/bgcol=…/linkcol=…/tracklist=…/transparent=…/`).
#[derive(Debug, Clone, Copy)]
pub struct BandcampEmbed {
  pub size: &'static str,
  /// Color de fondo, hex sin `#`.
  pub background: &'static str,
  /// Color de enlaces, hex sin `#`.
  pub link_color: &'static str,
  pub tracklist: bool,
  pub transparent: bool,
}

impl BandcampEmbed {
  pub const DEFAULT: BandcampEmbed =
    BandcampEmbed { size: "large", background: "1a1a1a", link_color: "ffffff", tracklist: false, transparent: true };
}

impl Default for BandcampEmbed {
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl EmbedResolver for BandcampEmbed {
  fn platform(&self) -> Platform {
    Platform::Bandcamp
  }

  /// El slug del artista no basta para el reproductor.
  fn priority(&self) -> &'static [IdentifierKind] {
    &[IdentifierKind::Album, IdentifierKind::Track]
  }

  fn default_height(&self) -> u32 {
    400
  }

  fn compact_height(&self) -> u32 {
    200
  }

  fn build_url(&self, kind: IdentifierKind, id: &str, _config: &EmbedConfig) -> String {
    let segment = match kind {
      IdentifierKind::Album => "album",
      _ => "track",
    };

    format!(
      "{HOST}/{segment}={id}/size={}/bgcol={}/linkcol={}/tracklist={}/transparent={}/",
      self.size, self.background, self.link_color, self.tracklist, self.transparent
    )
  }
}

/// Enlace de compra ("Buy on Bandcamp").
///
/// Con el slug del artista se construye siempre un enlace a su página (al
/// álbum o pista si se conocen); si no, se usa la URL canónica; si tampoco
/// existe, `#`.
pub fn purchase_link(ids: &PlatformIdentifiers) -> String {
  if let Some(slug) = ids.artist_slug() {
    let base = format!("https://{slug}.bandcamp.com");
    return match (ids.get(IdentifierKind::Album), ids.get(IdentifierKind::Track)) {
      (Some(album), _) => format!("{base}/album/{album}"),
      (None, Some(track)) => format!("{base}/track/{track}"),
      (None, None) => base,
    };
  }

  ids.external_url().unwrap_or("#").to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::embed::EmbedResolution;

  #[test]
  fn album_beats_track() {
    let ids = PlatformIdentifiers {
      track_id: Some("akira-theme".into()),
      album_id: Some("akira-soundtrack".into()),
      ..Default::default()
    };

    let res = BandcampEmbed::DEFAULT.resolve(&ids, &EmbedConfig::default());

    assert_eq!(
      res.url(),
      Some(
        "https://bandcamp.com/EmbeddedPlayer/album=akira-soundtrack/size=large/bgcol=1a1a1a/linkcol=ffffff/tracklist=false/transparent=true/"
      )
    );
  }

  #[test]
  fn track_only() {
    let ids = PlatformIdentifiers { track_id: Some("neo-tokyo-nights".into()), ..Default::default() };

    let res = BandcampEmbed::DEFAULT.resolve(&ids, &EmbedConfig::compact());

    let EmbedResolution::Ready(embed) = res else {
      panic!("expected a ready embed");
    };
    assert!(embed.url.starts_with("https://bandcamp.com/EmbeddedPlayer/track=neo-tokyo-nights/"));
    assert_eq!(embed.height, 200);
  }

  #[test]
  fn slug_alone_has_no_player_but_a_purchase_link() {
    let ids = PlatformIdentifiers { artist_url: Some("keishiurata".into()), ..Default::default() };

    assert_eq!(BandcampEmbed::DEFAULT.resolve(&ids, &EmbedConfig::default()), EmbedResolution::unavailable(Platform::Bandcamp));
    assert_eq!(purchase_link(&ids), "https://keishiurata.bandcamp.com");
  }

  #[test]
  fn purchase_link_prefers_album_then_track() {
    let ids = PlatformIdentifiers {
      artist_url: Some("keishiurata".into()),
      track_id: Some("digital-awakening".into()),
      ..Default::default()
    };
    assert_eq!(purchase_link(&ids), "https://keishiurata.bandcamp.com/track/digital-awakening");

    let ids = PlatformIdentifiers { album_id: Some("synthesized-dreams".into()), ..ids };
    assert_eq!(purchase_link(&ids), "https://keishiurata.bandcamp.com/album/synthesized-dreams");
  }

  #[test]
  fn purchase_link_falls_back_to_url_then_hash() {
    let ids = PlatformIdentifiers { url: Some("https://example.bandcamp.com/x".into()), ..Default::default() };
    assert_eq!(purchase_link(&ids), "https://example.bandcamp.com/x");

    assert_eq!(purchase_link(&PlatformIdentifiers::default()), "#");
  }
}
