use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::identifiers::PlatformIdentifiers;
use super::platform::Platform;
use super::release_type::ReleaseType;

/// Un lanzamiento de la discografía.
///
/// A diferencia de [`MediaItem`](super::media_item::MediaItem), que modela lo
/// que se puede *reproducir*, `Album` es la ficha editorial que se lista en la
/// página de discografía.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
  /// Slug estable ("akira-ost").
  pub id: String,
  pub title: String,
  pub year: u16,
  #[serde(rename = "type")]
  pub release_type: ReleaseType,
  pub genre: String,
  /// Duración total tal como se muestra ("58:32").
  pub duration: String,
  /// Número de pistas.
  pub tracks: u32,
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  /// Lanzamiento destacado en la cabecera de la discografía.
  #[serde(default)]
  pub featured: bool,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub platforms: BTreeMap<Platform, PlatformIdentifiers>,
}

/// Filtros de la página de discografía.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlbumFilter {
  #[default]
  All,
  Electronic,
  FilmScore,
  Ambient,
  Experimental,
}

impl AlbumFilter {
  /// Texto que se busca (sin distinguir mayúsculas) en tipo y género.
  fn needle(&self) -> Option<&'static str> {
    match self {
      AlbumFilter::All => None,
      AlbumFilter::Electronic => Some("electronic"),
      AlbumFilter::FilmScore => Some("film score"),
      AlbumFilter::Ambient => Some("ambient"),
      AlbumFilter::Experimental => Some("experimental"),
    }
  }

  pub fn matches(&self, album: &Album) -> bool {
    let Some(needle) = self.needle() else {
      return true;
    };

    let release_type = album.release_type.to_string().to_lowercase();
    release_type.contains(needle) || album.genre.to_lowercase().contains(needle)
  }
}

impl std::str::FromStr for AlbumFilter {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
      "all" => Ok(AlbumFilter::All),
      "electronic" => Ok(AlbumFilter::Electronic),
      "film score" | "filmscore" => Ok(AlbumFilter::FilmScore),
      "ambient" => Ok(AlbumFilter::Ambient),
      "experimental" => Ok(AlbumFilter::Experimental),
      other => Err(format!("unknown album filter: {other}")),
    }
  }
}

/// Cifras resumen de la cabecera de la discografía.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscographyStats {
  pub albums: usize,
  pub compositions: u32,
  pub since: Option<u16>,
}

impl DiscographyStats {
  pub fn from_albums(albums: &[Album]) -> Self {
    Self {
      albums: albums.len(),
      compositions: albums.iter().map(|a| a.tracks).sum(),
      since: albums.iter().map(|a| a.year).min(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn album(release_type: &str, genre: &str, year: u16, tracks: u32) -> Album {
    Album {
      id: "x".into(),
      title: "X".into(),
      year,
      release_type: release_type.parse().unwrap(),
      genre: genre.into(),
      duration: "40:00".into(),
      tracks,
      description: String::new(),
      image: None,
      featured: false,
      platforms: BTreeMap::new(),
    }
  }

  #[test]
  fn filter_matches_type_or_genre() {
    let score = album("Film Score", "Cinematic Electronic", 1995, 9);
    let suite = album("Symphonic Suite", "Electronic/Orchestral", 1988, 12);
    let techno = album("Electronic", "Techno", 1987, 13);

    assert!(AlbumFilter::FilmScore.matches(&score));
    assert!(!AlbumFilter::FilmScore.matches(&suite));
    assert!(AlbumFilter::Electronic.matches(&suite));
    assert!(AlbumFilter::Electronic.matches(&techno));
    assert!(!AlbumFilter::Ambient.matches(&techno));
    assert!(AlbumFilter::All.matches(&techno));
  }

  #[test]
  fn stats_sum_tracks_and_find_earliest_year() {
    let albums = vec![album("Electronic", "Techno", 1987, 13), album("Film Score", "x", 1985, 10)];

    let stats = DiscographyStats::from_albums(&albums);

    assert_eq!(stats, DiscographyStats { albums: 2, compositions: 23, since: Some(1985) });
    assert_eq!(DiscographyStats::from_albums(&[]).since, None);
  }
}
