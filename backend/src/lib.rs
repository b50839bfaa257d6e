mod cli;
pub mod commands;
pub mod config;
mod infrastructure;

use anyhow::anyhow;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use urata_core::domain::EmbedConfig;

use crate::cli::{Command, EmbedArgs, USAGE};
use crate::commands::AppState;
use crate::config::PlayerConfig;

fn to_json<T: Serialize>(value: T) -> anyhow::Result<Value> {
  Ok(serde_json::to_value(value)?)
}

/// Embed options for the `embed` command: flags first, `[player]` for the rest.
fn embed_config(player: &PlayerConfig, args: EmbedArgs) -> EmbedConfig {
  let mut config = player.embed_config(args.compact);

  if let Some(theme) = args.theme {
    config.theme = theme;
  }
  if let Some(country) = args.country {
    config.country = country;
  }

  EmbedConfig {
    autoplay: args.autoplay,
    muted: args.muted,
    loop_playback: args.loop_playback,
    controls: !args.no_controls,
    start: args.start,
    end: args.end,
    ..config
  }
}

/// Runs one parsed command against the wired state.
fn execute(state: &AppState, command: Command) -> anyhow::Result<Value> {
  debug!(?command, "executing");

  match command {
    Command::Tracks => to_json(commands::list_tracks(state).map_err(|e| anyhow!(e))?),
    Command::Platforms { track } => to_json(commands::track_platforms(state, &track).map_err(|e| anyhow!(e))?),
    Command::Player { track, platform, compact } => {
      to_json(commands::player_view(state, &track, platform, compact).map_err(|e| anyhow!(e))?)
    }
    Command::Embed { platform, ids, args } => {
      let config = embed_config(state.player_config(), args);
      to_json(commands::resolve_embed(platform, &ids, &config))
    }
    Command::Discography { filter } => to_json(commands::discography(state, filter).map_err(|e| anyhow!(e))?),
    Command::About => to_json(commands::about(state).map_err(|e| anyhow!(e))?),
    Command::Press => to_json(commands::press(state).map_err(|e| anyhow!(e))?),
    Command::Faq => to_json(commands::faq(state).map_err(|e| anyhow!(e))?),
    Command::Contact(form) => to_json(commands::contact_submit(state, form).map_err(|e| anyhow!(e))?),
    Command::Config => to_json(commands::config_get(state)),
    Command::Help => Ok(Value::String(USAGE.to_string())),
  }
}

/// Entry point of the binary: parse, wire the state, run, print JSON on stdout.
pub fn run(args: impl IntoIterator<Item = String>) -> anyhow::Result<()> {
  infrastructure::logging::init();

  let command = cli::parse(args)?;
  if command == Command::Help {
    println!("{USAGE}");
    return Ok(());
  }

  // --- Dependency Injection Phase ---
  // [catalog] and [player] come from urata.toml; missing sections are written back with defaults.
  let state = AppState::from_config()?;

  let output = execute(&state, command)?;
  println!("{}", serde_json::to_string_pretty(&output)?);

  Ok(())
}
