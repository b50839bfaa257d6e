use super::EmbedResolver;
use super::query::QueryString;
use crate::domain::{EmbedConfig, IdentifierKind, Platform};

const HOST: &str = "https://www.youtube-nocookie.com/embed";

/// Reproductor de YouTube en modo "nocookie".
///
/// Sólo acepta `video_id`; no hay cadena de fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct YouTubeEmbed;

impl EmbedResolver for YouTubeEmbed {
  fn platform(&self) -> Platform {
    Platform::YouTube
  }

  fn priority(&self) -> &'static [IdentifierKind] {
    &[IdentifierKind::Video]
  }

  fn default_height(&self) -> u32 {
    315
  }

  fn compact_height(&self) -> u32 {
    200
  }

  fn build_url(&self, _kind: IdentifierKind, id: &str, config: &EmbedConfig) -> String {
    let mut query = QueryString::new();
    query
      .push_flag("autoplay", config.autoplay)
      .push_flag("controls", config.controls)
      .push_flag("mute", config.muted)
      .push_flag("loop", config.loop_playback)
      .push_raw("rel", "0")
      .push_raw("modestbranding", "1")
      .push_raw("iv_load_policy", "3");

    if let Some(start) = config.start.filter(|s| *s > 0) {
      query.push_raw("start", &start.to_string());
    }
    if let Some(end) = config.end.filter(|s| *s > 0) {
      query.push_raw("end", &end.to_string());
    }
    // El reproductor sólo repite un vídeo si forma parte de una playlist.
    if config.loop_playback {
      query.push_raw("playlist", id);
    }

    query.append_to(&format!("{HOST}/{id}"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::PlatformIdentifiers;
  use crate::embed::EmbedResolution;

  fn video(id: &str) -> PlatformIdentifiers {
    PlatformIdentifiers { video_id: Some(id.into()), ..Default::default() }
  }

  #[test]
  fn default_parameters() {
    let res = YouTubeEmbed.resolve(&video("abc123"), &EmbedConfig::default());

    assert_eq!(
      res.url(),
      Some(
        "https://www.youtube-nocookie.com/embed/abc123?autoplay=0&controls=1&mute=0&loop=0&rel=0&modestbranding=1&iv_load_policy=3"
      )
    );
  }

  #[test]
  fn loop_adds_playlist_with_same_video() {
    let config = EmbedConfig { loop_playback: true, ..Default::default() };

    let url = YouTubeEmbed.resolve(&video("dQw4w9WgXcQ"), &config).url().map(str::to_string).unwrap();

    assert!(url.contains("&loop=1&"));
    assert!(url.ends_with("&playlist=dQw4w9WgXcQ"));
  }

  #[test]
  fn start_end_autoplay_and_mute() {
    let config =
      EmbedConfig { autoplay: true, muted: true, controls: false, start: Some(30), end: Some(90), ..Default::default() };

    let url = YouTubeEmbed.resolve(&video("v"), &config).url().map(str::to_string).unwrap();

    assert_eq!(
      url,
      "https://www.youtube-nocookie.com/embed/v?autoplay=1&controls=0&mute=1&loop=0&rel=0&modestbranding=1&iv_load_policy=3&start=30&end=90"
    );
  }

  #[test]
  fn zero_start_is_omitted() {
    let config = EmbedConfig { start: Some(0), ..Default::default() };

    let url = YouTubeEmbed.resolve(&video("v"), &config).url().map(str::to_string).unwrap();

    assert!(!url.contains("start="));
  }

  #[test]
  fn only_video_id_counts() {
    let ids = PlatformIdentifiers { track_id: Some("t".into()), video_id: Some(String::new()), ..Default::default() };

    assert_eq!(YouTubeEmbed.resolve(&ids, &EmbedConfig::default()), EmbedResolution::unavailable(Platform::YouTube));
  }
}
