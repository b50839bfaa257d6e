//! Operations exposed to the rendering host.
//!
//! Each command returns a serializable DTO or a plain error message, the same
//! contract a webview bridge would expect.

use serde::{Deserialize, Serialize};
use tracing::{Level, instrument};

use urata_catalog::{CatalogConfig, TomlCatalog};
use urata_core::domain::{
  Acknowledgment, Album, AlbumFilter, Award, ContactForm, DiscographyStats, EmbedConfig, FaqEntry, Platform,
  PlatformIdentifiers, PressClipping, PressResourceGroup, TimelineEntry,
};
use urata_core::embed::{self, EmbedResolution};
use urata_core::services::{ContactService, PlayerView, SiteService, available_platforms};

use crate::config::{ConfigDto, PlayerConfig};
use crate::infrastructure::inbox::LogInbox;

/// Everything the commands need, wired once at startup.
pub struct AppState {
  site: SiteService<TomlCatalog>,
  contact: ContactService<LogInbox>,
  catalog_config: CatalogConfig,
  player: PlayerConfig,
}

impl AppState {
  pub fn new(catalog: TomlCatalog, catalog_config: CatalogConfig, player: PlayerConfig) -> Self {
    Self {
      site: SiteService::new(catalog),
      contact: ContactService::new(LogInbox),
      catalog_config,
      player,
    }
  }

  /// Loads `[catalog]` and `[player]` from urata.toml (writing defaults back)
  /// and opens the configured catalog.
  pub fn from_config() -> anyhow::Result<Self> {
    let catalog_config = CatalogConfig::load()?;
    let player = PlayerConfig::load()?;
    let catalog = TomlCatalog::from_config(&catalog_config)?;
    Ok(Self::new(catalog, catalog_config, player))
  }

  pub fn player_config(&self) -> &PlayerConfig {
    &self.player
  }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSummary {
  pub key: String,
  pub title: String,
  pub album: Option<String>,
  pub year: Option<String>,
  pub platforms: Vec<Platform>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscographyDto {
  pub stats: DiscographyStats,
  pub featured: Option<Album>,
  pub albums: Vec<Album>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AboutDto {
  pub timeline: Vec<TimelineEntry>,
  pub awards: Vec<Award>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PressDto {
  pub resources: Vec<PressResourceGroup>,
  pub clippings: Vec<PressClipping>,
}

/// Command: every playable track with the platforms it can be played on.
pub fn list_tracks(state: &AppState) -> Result<Vec<TrackSummary>, String> {
  let tracks = state.site.tracks().map_err(|e| e.to_string())?;

  Ok(
    tracks
      .into_iter()
      .map(|(key, item)| TrackSummary {
        platforms: available_platforms(&item),
        key,
        title: item.title,
        album: item.album,
        year: item.year,
      })
      .collect(),
  )
}

/// Command: available platforms of one track.
pub fn track_platforms(state: &AppState, key: &str) -> Result<Vec<Platform>, String> {
  let item = state.site.track(key).map_err(|e| e.to_string())?;
  Ok(available_platforms(&item))
}

/// Command: the player for one track.
///
/// `platform` is a user pick: if the track is not on it, the configured
/// default (or the first available platform) stays active.
#[instrument(skip(state), level = Level::DEBUG)]
pub fn player_view(state: &AppState, key: &str, platform: Option<Platform>, compact: bool) -> Result<PlayerView, String> {
  let item = state.site.track(key).map_err(|e| e.to_string())?;
  let mut player = state.site.player(&item, state.player.player_options(None, compact));

  if let Some(platform) = platform {
    player.set_active_platform(platform);
  }

  Ok(player.view())
}

/// Command: resolve a single embed from raw identifiers.
pub fn resolve_embed(platform: Platform, ids: &PlatformIdentifiers, config: &EmbedConfig) -> EmbedResolution {
  embed::resolve(platform, ids, config)
}

/// Command: discography page.
pub fn discography(state: &AppState, filter: AlbumFilter) -> Result<DiscographyDto, String> {
  let stats = state.site.discography_stats().map_err(|e| e.to_string())?;
  let featured = state.site.featured_album().map_err(|e| e.to_string())?;
  let albums = state.site.albums_by_filter(filter).map_err(|e| e.to_string())?;

  Ok(DiscographyDto { stats, featured, albums })
}

/// Command: about page.
pub fn about(state: &AppState) -> Result<AboutDto, String> {
  let timeline = state.site.timeline().map_err(|e| e.to_string())?;
  let awards = state.site.awards().map_err(|e| e.to_string())?;
  Ok(AboutDto { timeline, awards })
}

/// Command: press kit.
pub fn press(state: &AppState) -> Result<PressDto, String> {
  let resources = state.site.press_resources().map_err(|e| e.to_string())?;
  let clippings = state.site.press_clippings().map_err(|e| e.to_string())?;
  Ok(PressDto { resources, clippings })
}

/// Command: contact page FAQ.
pub fn faq(state: &AppState) -> Result<Vec<FaqEntry>, String> {
  state.site.faq().map_err(|e| e.to_string())
}

/// Command: submit the contact form.
pub fn contact_submit(state: &AppState, form: ContactForm) -> Result<Acknowledgment, String> {
  state.contact.submit(form).map_err(|e| e.to_string())
}

/// Command: current configuration.
pub fn config_get(state: &AppState) -> ConfigDto {
  ConfigDto::new(&state.catalog_config, &state.player)
}
