use tracing::{Level, debug, instrument};

use crate::domain::{
  Album, AlbumFilter, Award, DiscographyStats, FaqEntry, MediaItem, PressClipping, PressResourceGroup, TimelineEntry,
};
use crate::errors::CoreError;
use crate::ports::CatalogSource;
use crate::services::selector::{PlatformSelector, PlayerOptions};

/// Consultas de las páginas del sitio sobre un catálogo estático.
pub struct SiteService<C>
where
  C: CatalogSource,
{
  catalog: C,
}

impl<C> SiteService<C>
where
  C: CatalogSource,
{
  pub fn new(catalog: C) -> Self {
    Self { catalog }
  }

  // -------- Reproducibles --------

  pub fn tracks(&self) -> Result<Vec<(String, MediaItem)>, CoreError> {
    self.catalog.tracks()
  }

  pub fn track(&self, key: &str) -> Result<MediaItem, CoreError> {
    self.catalog.track(key)?.ok_or_else(|| CoreError::NotFound(format!("track {key}")))
  }

  /// Monta un selector de plataforma sobre `item`.
  ///
  /// El selector toma prestado el ítem: primero `track(key)`, luego esto.
  pub fn player<'a>(&self, item: &'a MediaItem, options: PlayerOptions) -> PlatformSelector<'a> {
    PlatformSelector::new(item, options)
  }

  // -------- Discografía --------

  pub fn albums(&self) -> Result<Vec<Album>, CoreError> {
    self.catalog.albums()
  }

  #[instrument(skip(self), level = Level::DEBUG)]
  pub fn albums_by_filter(&self, filter: AlbumFilter) -> Result<Vec<Album>, CoreError> {
    let albums: Vec<Album> = self.catalog.albums()?.into_iter().filter(|a| filter.matches(a)).collect();
    debug!(count = albums.len(), "albums filtered");
    Ok(albums)
  }

  pub fn featured_album(&self) -> Result<Option<Album>, CoreError> {
    Ok(self.catalog.albums()?.into_iter().find(|a| a.featured))
  }

  pub fn discography_stats(&self) -> Result<DiscographyStats, CoreError> {
    Ok(DiscographyStats::from_albums(&self.catalog.albums()?))
  }

  // -------- About / Press / Contact --------

  pub fn timeline(&self) -> Result<Vec<TimelineEntry>, CoreError> {
    self.catalog.timeline()
  }

  pub fn awards(&self) -> Result<Vec<Award>, CoreError> {
    self.catalog.awards()
  }

  pub fn press_resources(&self) -> Result<Vec<PressResourceGroup>, CoreError> {
    self.catalog.press_resources()
  }

  pub fn press_clippings(&self) -> Result<Vec<PressClipping>, CoreError> {
    self.catalog.press_clippings()
  }

  pub fn faq(&self) -> Result<Vec<FaqEntry>, CoreError> {
    self.catalog.faq()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Platform, PlatformIdentifiers, ReleaseType};
  use std::collections::BTreeMap;

  struct FixedCatalog {
    tracks: BTreeMap<String, MediaItem>,
    albums: Vec<Album>,
  }

  impl CatalogSource for FixedCatalog {
    fn tracks(&self) -> Result<Vec<(String, MediaItem)>, CoreError> {
      Ok(self.tracks.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    fn track(&self, key: &str) -> Result<Option<MediaItem>, CoreError> {
      Ok(self.tracks.get(key).cloned())
    }

    fn albums(&self) -> Result<Vec<Album>, CoreError> {
      Ok(self.albums.clone())
    }

    fn timeline(&self) -> Result<Vec<TimelineEntry>, CoreError> {
      Ok(vec![])
    }

    fn awards(&self) -> Result<Vec<Award>, CoreError> {
      Ok(vec![])
    }

    fn press_resources(&self) -> Result<Vec<PressResourceGroup>, CoreError> {
      Ok(vec![])
    }

    fn press_clippings(&self) -> Result<Vec<PressClipping>, CoreError> {
      Ok(vec![])
    }

    fn faq(&self) -> Result<Vec<FaqEntry>, CoreError> {
      Ok(vec![])
    }
  }

  fn album(id: &str, release_type: ReleaseType, genre: &str, year: u16, featured: bool) -> Album {
    Album {
      id: id.into(),
      title: id.to_uppercase(),
      year,
      release_type,
      genre: genre.into(),
      duration: "40:00".into(),
      tracks: 10,
      description: String::new(),
      image: None,
      featured,
      platforms: BTreeMap::new(),
    }
  }

  fn service() -> SiteService<FixedCatalog> {
    let mut tracks = BTreeMap::new();
    tracks.insert(
      "akira_theme".to_string(),
      MediaItem::new("Akira Main Theme")
        .with_platform(Platform::YouTube, PlatformIdentifiers { video_id: Some("abc123".into()), ..Default::default() }),
    );

    SiteService::new(FixedCatalog {
      tracks,
      albums: vec![
        album("akira-ost", ReleaseType::SymphonicSuite, "Electronic/Orchestral", 1988, true),
        album("ghost-machine", ReleaseType::FilmScore, "Cinematic Electronic", 1995, false),
        album("synthesized-dreams", ReleaseType::AmbientElectronic, "Ambient", 1992, false),
      ],
    })
  }

  #[test]
  fn unknown_track_is_not_found() {
    assert!(matches!(service().track("nope"), Err(CoreError::NotFound(_))));
  }

  #[test]
  fn player_for_catalog_track() {
    let service = service();
    let item = service.track("akira_theme").unwrap();

    let player = service.player(&item, PlayerOptions { preference: Some(Platform::Spotify), ..Default::default() });

    assert_eq!(player.active_platform(), Some(Platform::YouTube));
  }

  #[test]
  fn featured_and_filters() {
    let service = service();

    assert_eq!(service.featured_album().unwrap().map(|a| a.id), Some("akira-ost".to_string()));

    let ids = |filter| service.albums_by_filter(filter).unwrap().into_iter().map(|a| a.id).collect::<Vec<_>>();
    assert_eq!(ids(AlbumFilter::FilmScore), vec!["ghost-machine"]);
    assert_eq!(ids(AlbumFilter::Ambient), vec!["synthesized-dreams"]);
    assert_eq!(ids(AlbumFilter::All).len(), 3);
  }

  #[test]
  fn stats_cover_all_albums() {
    let stats = service().discography_stats().unwrap();

    assert_eq!(stats.albums, 3);
    assert_eq!(stats.compositions, 30);
    assert_eq!(stats.since, Some(1988));
  }
}
