use serde::{Deserialize, Serialize};
use urata_catalog::CatalogConfig;
use urata_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use urata_core::domain::embed_config::DEFAULT_COUNTRY;
use urata_core::domain::{EmbedConfig, Platform, Theme};
use urata_core::services::PlayerOptions;

/// `[player]` section: site-wide defaults for every embedded player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
  pub default_platform: Platform,
  pub theme: Theme,
  pub country: String,
  pub show_platform_selector: bool,
}

impl Default for PlayerConfig {
  fn default() -> Self {
    Self {
      default_platform: Platform::Spotify,
      theme: Theme::Dark,
      country: DEFAULT_COUNTRY.to_string(),
      show_platform_selector: true,
    }
  }
}

impl PlayerConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&*CONFIG_BACKEND)
  }

  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg: Self = backend.load_section_with_default("player")?;
    backend.save_section("player", &cfg)?;
    Ok(cfg)
  }

  pub fn embed_config(&self, compact: bool) -> EmbedConfig {
    EmbedConfig { theme: self.theme, country: self.country.clone(), compact, ..EmbedConfig::default() }
  }

  /// Options for one player. An explicit `preference` overrides `default_platform`.
  pub fn player_options(&self, preference: Option<Platform>, compact: bool) -> PlayerOptions {
    PlayerOptions {
      preference: Some(preference.unwrap_or(self.default_platform)),
      show_platform_selector: self.show_platform_selector,
      embed: self.embed_config(compact),
    }
  }
}

/// Serializable view of the whole configuration, for the `config` command.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
  pub catalog_path: Option<String>,
  pub player: PlayerConfig,
}

impl ConfigDto {
  pub fn new(catalog: &CatalogConfig, player: &PlayerConfig) -> Self {
    ConfigDto {
      catalog_path: catalog.path.as_ref().map(|p| p.to_string_lossy().to_string()),
      player: player.clone(),
    }
  }
}
