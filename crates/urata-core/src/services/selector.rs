//! Selector de plataforma de un reproductor.
//!
//! Mantiene el único estado mutable del sitio: qué plataforma está activa para
//! el `MediaItem` mostrado. Es estado de vista efímero; vive lo que vive el
//! selector y se reinicia al cambiar de ítem.

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::domain::{EmbedConfig, MediaItem, Platform};
use crate::embed::{self, EmbedResolution};

/// Opciones del reproductor elegidas por quien lo monta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerOptions {
  /// Plataforma preferida si el ítem la tiene.
  pub preference: Option<Platform>,
  /// Mostrar el grupo de botones para cambiar de plataforma.
  pub show_platform_selector: bool,
  /// Opciones de embed; `embed.compact` oculta además la cabecera y las acciones.
  pub embed: EmbedConfig,
}

impl Default for PlayerOptions {
  fn default() -> Self {
    Self { preference: None, show_platform_selector: true, embed: EmbedConfig::default() }
  }
}

/// Plataformas de `item` con al menos un identificador no vacío, en orden fijo
/// (spotify, appleMusic, bandcamp, youtube, soundcloud).
pub fn available_platforms(item: &MediaItem) -> Vec<Platform> {
  item.available_platforms()
}

pub struct PlatformSelector<'a> {
  item: &'a MediaItem,
  options: PlayerOptions,
  available: Vec<Platform>,
  active: Option<Platform>,
}

impl<'a> PlatformSelector<'a> {
  #[instrument(skip_all, fields(title = %item.title), level = Level::DEBUG)]
  pub fn new(item: &'a MediaItem, options: PlayerOptions) -> Self {
    let available = available_platforms(item);
    let active = initial_platform(&available, options.preference);
    debug!(?available, ?active, "platform selector ready");

    Self { item, options, available, active }
  }

  pub fn available_platforms(&self) -> &[Platform] {
    &self.available
  }

  pub fn active_platform(&self) -> Option<Platform> {
    self.active
  }

  /// Cambia la plataforma activa.
  ///
  /// Si `platform` no está disponible para el ítem no hace nada. Devuelve si
  /// el estado cambió.
  pub fn set_active_platform(&mut self, platform: Platform) -> bool {
    if !self.available.contains(&platform) {
      debug!(%platform, "ignoring unavailable platform");
      return false;
    }

    let changed = self.active != Some(platform);
    self.active = Some(platform);
    changed
  }

  /// Apunta el selector a otro ítem y reinicia la selección como en `new`.
  pub fn set_item(&mut self, item: &'a MediaItem) {
    self.item = item;
    self.available = available_platforms(item);
    self.active = initial_platform(&self.available, self.options.preference);
    debug!(title = %item.title, active = ?self.active, "platform selector reset");
  }

  /// URL canónica de la plataforma, o `#` si no hay.
  pub fn external_link(&self, platform: Platform) -> String {
    self.item.identifiers(platform).and_then(|ids| ids.external_url()).unwrap_or("#").to_string()
  }

  /// Enlace "Buy" de Bandcamp, si el ítem está en Bandcamp.
  pub fn purchase_link(&self) -> Option<String> {
    self.item.identifiers(Platform::Bandcamp).filter(|ids| !ids.is_empty()).map(embed::purchase_link)
  }

  /// Embed de la plataforma activa, o el placeholder si no hay ninguna.
  pub fn resolve(&self) -> EmbedResolution {
    let Some(platform) = self.active else {
      return EmbedResolution::Unavailable { platform: None };
    };

    match self.item.identifiers(platform) {
      Some(ids) => embed::resolve(platform, ids, &self.options.embed),
      None => EmbedResolution::unavailable(platform),
    }
  }

  /// Todo lo que necesita el host para pintar el reproductor.
  pub fn view(&self) -> PlayerView {
    let compact = self.options.embed.compact;

    let switcher = (!compact && self.options.show_platform_selector && self.available.len() > 1).then(|| {
      self
        .available
        .iter()
        .map(|p| PlatformTab {
          platform: *p,
          label: p.label().to_string(),
          color: p.brand_color().to_string(),
          active: self.active == Some(*p),
        })
        .collect()
    });

    let header = (!compact).then(|| PlayerHeader::for_item(self.item));

    let actions = (!compact).then(|| ActionRow {
      buy: self.purchase_link(),
      open: self
        .active
        .map(|p| LinkAction { label: format!("Open in {}", p.label()), url: self.external_link(p) }),
    });

    PlayerView {
      title: self.item.title.clone(),
      active: self.active,
      embed: self.resolve(),
      compact,
      header,
      switcher,
      actions,
    }
  }
}

fn initial_platform(available: &[Platform], preference: Option<Platform>) -> Option<Platform> {
  preference.filter(|p| available.contains(p)).or_else(|| available.first().copied())
}

/// Cabecera del reproductor: portada y datos del ítem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHeader {
  pub title: String,
  pub album: Option<String>,
  pub year: Option<String>,
  pub duration: Option<String>,
  pub description: Option<String>,
  pub cover_image: Option<String>,
}

impl PlayerHeader {
  fn for_item(item: &MediaItem) -> Self {
    Self {
      title: item.title.clone(),
      album: item.album.clone(),
      year: item.year.clone(),
      duration: item.duration.clone(),
      description: item.description.clone(),
      cover_image: item.cover_image.clone(),
    }
  }
}

/// Botón del grupo de plataformas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformTab {
  pub platform: Platform,
  pub label: String,
  pub color: String,
  pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAction {
  pub label: String,
  pub url: String,
}

/// Fila de acciones bajo el reproductor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRow {
  pub buy: Option<String>,
  pub open: Option<LinkAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
  pub title: String,
  pub active: Option<Platform>,
  pub embed: EmbedResolution,
  pub compact: bool,
  /// `None` en modo compacto.
  pub header: Option<PlayerHeader>,
  /// `None` cuando el grupo de plataformas no se muestra.
  pub switcher: Option<Vec<PlatformTab>>,
  /// `None` en modo compacto.
  pub actions: Option<ActionRow>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::PlatformIdentifiers;

  fn youtube_only() -> MediaItem {
    MediaItem::new("Akira Main Theme")
      .with_platform(Platform::YouTube, PlatformIdentifiers { video_id: Some("abc123".into()), ..Default::default() })
  }

  fn everywhere() -> MediaItem {
    MediaItem::new("Neo-Tokyo Nights")
      .with_platform(
        Platform::Spotify,
        PlatformIdentifiers {
          track_id: Some("example2".into()),
          url: Some("https://open.spotify.com/track/example2".into()),
          ..Default::default()
        },
      )
      .with_platform(
        Platform::Bandcamp,
        PlatformIdentifiers {
          track_id: Some("neo-tokyo-nights".into()),
          artist_url: Some("keishiurata".into()),
          ..Default::default()
        },
      )
      .with_platform(Platform::YouTube, PlatformIdentifiers { video_id: Some("example2".into()), ..Default::default() })
  }

  fn prefer(platform: Platform) -> PlayerOptions {
    PlayerOptions { preference: Some(platform), ..Default::default() }
  }

  #[test]
  fn unavailable_preference_falls_back_to_first_available() {
    let item = youtube_only();
    let selector = PlatformSelector::new(&item, prefer(Platform::Spotify));

    assert_eq!(selector.active_platform(), Some(Platform::YouTube));
    assert_eq!(
      selector.resolve().url(),
      Some(
        "https://www.youtube-nocookie.com/embed/abc123?autoplay=0&controls=1&mute=0&loop=0&rel=0&modestbranding=1&iv_load_policy=3"
      )
    );
  }

  #[test]
  fn available_preference_wins() {
    let item = everywhere();
    let selector = PlatformSelector::new(&item, prefer(Platform::YouTube));

    assert_eq!(selector.active_platform(), Some(Platform::YouTube));
  }

  #[test]
  fn available_platforms_skip_empty_bundles() {
    let item = MediaItem::new("x")
      .with_platform(Platform::Spotify, PlatformIdentifiers { track_id: Some("x".into()), ..Default::default() })
      .with_platform(Platform::Bandcamp, PlatformIdentifiers::default());

    assert_eq!(available_platforms(&item), vec![Platform::Spotify]);
  }

  #[test]
  fn selecting_an_unavailable_platform_is_a_no_op() {
    let item = everywhere();
    let mut selector = PlatformSelector::new(&item, PlayerOptions::default());
    assert_eq!(selector.active_platform(), Some(Platform::Spotify));

    assert!(!selector.set_active_platform(Platform::AppleMusic));
    assert_eq!(selector.active_platform(), Some(Platform::Spotify));

    assert!(selector.set_active_platform(Platform::Bandcamp));
    assert!(!selector.set_active_platform(Platform::Bandcamp));
    assert_eq!(selector.active_platform(), Some(Platform::Bandcamp));
  }

  #[test]
  fn external_link_defaults_to_hash() {
    let item = everywhere();
    let selector = PlatformSelector::new(&item, PlayerOptions::default());

    assert_eq!(selector.external_link(Platform::Spotify), "https://open.spotify.com/track/example2");
    assert_eq!(selector.external_link(Platform::YouTube), "#");
    assert_eq!(selector.external_link(Platform::SoundCloud), "#");
  }

  #[test]
  fn no_platforms_means_placeholder() {
    let item = MediaItem::new("Unreleased");
    let selector = PlatformSelector::new(&item, prefer(Platform::Spotify));

    assert_eq!(selector.active_platform(), None);
    assert_eq!(selector.resolve(), EmbedResolution::Unavailable { platform: None });

    let view = selector.view();
    assert!(view.switcher.is_none());
    assert_eq!(view.actions, Some(ActionRow { buy: None, open: None }));
  }

  #[test]
  fn url_only_platform_is_selectable_but_renders_placeholder() {
    let item = MediaItem::new("Demo").with_platform(
      Platform::SoundCloud,
      PlatformIdentifiers { url: Some("https://soundcloud.com/demo".into()), ..Default::default() },
    );
    let selector = PlatformSelector::new(&item, PlayerOptions::default());

    assert_eq!(selector.active_platform(), Some(Platform::SoundCloud));
    assert_eq!(selector.resolve(), EmbedResolution::unavailable(Platform::SoundCloud));
    assert_eq!(selector.external_link(Platform::SoundCloud), "https://soundcloud.com/demo");
  }

  #[test]
  fn swapping_the_item_resets_selection() {
    let first = everywhere();
    let second = youtube_only();
    let mut selector = PlatformSelector::new(&first, PlayerOptions::default());
    selector.set_active_platform(Platform::Bandcamp);

    selector.set_item(&second);

    assert_eq!(selector.available_platforms(), &[Platform::YouTube]);
    assert_eq!(selector.active_platform(), Some(Platform::YouTube));
  }

  #[test]
  fn full_view_has_switcher_and_actions() {
    let item = everywhere();
    let selector = PlatformSelector::new(&item, PlayerOptions::default());

    let view = selector.view();

    let tabs = view.switcher.expect("switcher shown");
    assert_eq!(tabs.iter().map(|t| t.platform).collect::<Vec<_>>(), vec![
      Platform::Spotify,
      Platform::Bandcamp,
      Platform::YouTube
    ]);
    assert!(tabs[0].active);
    assert_eq!(tabs[1].label, "Bandcamp");

    let actions = view.actions.expect("actions shown");
    assert_eq!(actions.buy.as_deref(), Some("https://keishiurata.bandcamp.com/track/neo-tokyo-nights"));
    assert_eq!(
      actions.open,
      Some(LinkAction { label: "Open in Spotify".into(), url: "https://open.spotify.com/track/example2".into() })
    );
  }

  #[test]
  fn compact_view_hides_switcher_and_actions() {
    let item = everywhere();
    let options = PlayerOptions { embed: EmbedConfig::compact(), ..Default::default() };
    let selector = PlatformSelector::new(&item, options);

    let view = selector.view();

    assert!(view.compact);
    assert!(view.header.is_none());
    assert!(view.switcher.is_none());
    assert!(view.actions.is_none());
    let EmbedResolution::Ready(embed) = view.embed else {
      panic!("expected a ready embed");
    };
    assert_eq!(embed.height, 152);
    assert!(embed.url.ends_with("&view=coverart"));
  }

  #[test]
  fn full_view_carries_item_details() {
    let item = MediaItem {
      album: Some("Akira Original Soundtrack".into()),
      year: Some("1988".into()),
      duration: Some("4:32".into()),
      cover_image: Some("/covers/akira.jpg".into()),
      ..youtube_only()
    };
    let selector = PlatformSelector::new(&item, PlayerOptions::default());

    let header = selector.view().header.expect("header shown");

    assert_eq!(header.title, "Akira Main Theme");
    assert_eq!(header.album.as_deref(), Some("Akira Original Soundtrack"));
    assert_eq!(header.year.as_deref(), Some("1988"));
    assert_eq!(header.duration.as_deref(), Some("4:32"));
    assert_eq!(header.description, None);
    assert_eq!(header.cover_image.as_deref(), Some("/covers/akira.jpg"));
  }

  #[test]
  fn single_platform_hides_switcher() {
    let item = youtube_only();
    let selector = PlatformSelector::new(&item, PlayerOptions::default());

    assert!(selector.view().switcher.is_none());
  }
}
