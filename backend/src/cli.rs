//! Argument parsing for the `urata` binary.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context, anyhow, bail};

use urata_core::domain::{AlbumFilter, ContactForm, InquiryType, Platform, PlatformIdentifiers, Theme};

pub const USAGE: &str = "\
usage: urata <command> [options]

commands:
  tracks                          list playable tracks
  platforms <track>               platforms a track is available on
  player <track> [--platform p] [--compact]
  embed <platform> [--track-id id] [--album-id id] [--playlist-id id] [--artist-id id]
                   [--video-id id] [--artist-url slug] [--url link] [--theme dark|light] [--country cc]
                   [--autoplay] [--muted] [--loop] [--no-controls] [--start s] [--end s] [--compact]
  discography [--filter all|electronic|film-score|ambient|experimental]
  about
  press
  faq
  contact --type general|collaboration|booking|press --name n --email e --subject s --message m
  config                          show the [catalog] and [player] sections

Output is JSON on stdout. Logs go to stderr (RUST_LOG, default info).";

/// Options a command accepts.
struct Options {
  /// Positional arguments after the command name.
  positional: &'static [&'static str],
  /// `--name value` options.
  values: &'static [&'static str],
  /// `--name` switches.
  switches: &'static [&'static str],
}

const NO_OPTIONS: Options = Options { positional: &[], values: &[], switches: &[] };

fn options_for(command: &str) -> anyhow::Result<Options> {
  let options = match command {
    "tracks" | "about" | "press" | "faq" | "config" | "help" | "-h" => NO_OPTIONS,
    "platforms" => Options { positional: &["track"], ..NO_OPTIONS },
    "player" => Options { positional: &["track"], values: &["platform"], switches: &["compact"] },
    "embed" => Options {
      positional: &["platform"],
      values: &[
        "track-id",
        "album-id",
        "playlist-id",
        "artist-id",
        "video-id",
        "artist-url",
        "url",
        "theme",
        "country",
        "start",
        "end",
      ],
      switches: &["autoplay", "muted", "loop", "no-controls", "compact"],
    },
    "discography" => Options { values: &["filter"], ..NO_OPTIONS },
    "contact" => Options { values: &["type", "name", "email", "subject", "message"], ..NO_OPTIONS },
    other => bail!("unknown command `{other}`\n\n{USAGE}"),
  };

  Ok(options)
}

/// Embed options given on the command line. Unset values fall back to `[player]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedArgs {
  pub theme: Option<Theme>,
  pub country: Option<String>,
  pub autoplay: bool,
  pub muted: bool,
  pub loop_playback: bool,
  pub no_controls: bool,
  pub start: Option<u32>,
  pub end: Option<u32>,
  pub compact: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Tracks,
  Platforms { track: String },
  Player { track: String, platform: Option<Platform>, compact: bool },
  Embed { platform: Platform, ids: PlatformIdentifiers, args: EmbedArgs },
  Discography { filter: AlbumFilter },
  About,
  Press,
  Faq,
  Contact(ContactForm),
  Config,
  Help,
}

#[derive(Debug, Default)]
struct Flags {
  positional: Vec<String>,
  values: HashMap<String, String>,
  switches: HashSet<String>,
}

impl Flags {
  fn split(command: &str, options: &Options, args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
    let mut flags = Flags::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
      let Some(name) = arg.strip_prefix("--") else {
        if flags.positional.len() == options.positional.len() {
          bail!("unexpected argument `{arg}` for `{command}`");
        }
        flags.positional.push(arg);
        continue;
      };

      if options.switches.contains(&name) {
        flags.switches.insert(name.to_string());
        continue;
      }

      if !options.values.contains(&name) {
        bail!("unknown option --{name} for `{command}`");
      }

      let value = args.next().with_context(|| format!("missing value for --{name}"))?;
      flags.values.insert(name.to_string(), value);
    }

    Ok(flags)
  }

  fn positional(&self, index: usize, what: &str) -> anyhow::Result<String> {
    self.positional.get(index).cloned().with_context(|| format!("missing <{what}>"))
  }

  fn value(&self, name: &str) -> Option<String> {
    self.values.get(name).cloned()
  }

  fn parsed<T>(&self, name: &str) -> anyhow::Result<Option<T>>
  where
    T: FromStr,
    T::Err: Display,
  {
    self.values.get(name).map(|raw| raw.parse::<T>().map_err(|e| anyhow!("--{name}: {e}"))).transpose()
  }

  fn switch(&self, name: &str) -> bool {
    self.switches.contains(name)
  }
}

/// Parses the arguments after the program name.
pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Command> {
  let mut args = args.into_iter();
  let Some(name) = args.next() else {
    return Ok(Command::Help);
  };

  let options = options_for(&name)?;
  let flags = Flags::split(&name, &options, args)?;

  let command = match name.as_str() {
    "tracks" => Command::Tracks,
    "platforms" => Command::Platforms { track: flags.positional(0, "track")? },
    "player" => Command::Player {
      track: flags.positional(0, "track")?,
      platform: flags.parsed("platform")?,
      compact: flags.switch("compact"),
    },
    "embed" => {
      let platform = flags.positional(0, "platform")?;
      let platform = platform.parse::<Platform>().map_err(|e| anyhow!(e))?;

      let ids = PlatformIdentifiers {
        track_id: flags.value("track-id"),
        album_id: flags.value("album-id"),
        playlist_id: flags.value("playlist-id"),
        artist_id: flags.value("artist-id"),
        video_id: flags.value("video-id"),
        artist_url: flags.value("artist-url"),
        url: flags.value("url"),
      };

      let args = EmbedArgs {
        theme: flags.parsed("theme")?,
        country: flags.value("country"),
        autoplay: flags.switch("autoplay"),
        muted: flags.switch("muted"),
        loop_playback: flags.switch("loop"),
        no_controls: flags.switch("no-controls"),
        start: flags.parsed("start")?,
        end: flags.parsed("end")?,
        compact: flags.switch("compact"),
      };

      Command::Embed { platform, ids, args }
    }
    "discography" => Command::Discography { filter: flags.parsed("filter")?.unwrap_or_default() },
    "about" => Command::About,
    "press" => Command::Press,
    "faq" => Command::Faq,
    "contact" => Command::Contact(ContactForm {
      inquiry_type: flags.parsed::<InquiryType>("type")?.unwrap_or_default(),
      name: flags.value("name").unwrap_or_default(),
      email: flags.value("email").unwrap_or_default(),
      subject: flags.value("subject").unwrap_or_default(),
      message: flags.value("message").unwrap_or_default(),
    }),
    "config" => Command::Config,
    "help" | "-h" => Command::Help,
    other => bail!("unknown command `{other}`\n\n{USAGE}"),
  };

  Ok(command)
}
