//! Command-line entry point for patch checks, scheduled updates and one-off icon lookups.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lolstatic_icons::icons::{fetch_icon_listing, parse_directory_listing};
use lolstatic_icons::{AbilityKey, AbilityRef, DefaultCollaborators, IconResolver, UpdaterConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Resolve ability icons and keep static data on the latest patch")]
struct Cli {
  /// Configuration file; defaults to `lolstatic.config.json` in the working directory.
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
  /// Report the stored and latest published patch versions.
  Check,
  /// Regenerate static data when a new patch is published.
  Update,
  /// Resolve the icon URL of one ability.
  Resolve(ResolveArgs),
}

#[derive(Debug, Args)]
struct ResolveArgs {
  /// Champion key, e.g. `TahmKench`.
  #[arg(long)]
  champion: String,
  /// Ability key letter (Q, W, E or R).
  #[arg(long)]
  key: AbilityKey,
  /// Ability slot index.
  #[arg(long, default_value_t = 0)]
  index: u32,
  /// Ability display name.
  #[arg(long, default_value = "")]
  name: String,
  /// Saved HTML directory listing to read candidates from instead of the asset host.
  #[arg(long)]
  listing: Option<PathBuf>,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  match run(Cli::parse()) {
    Ok(code) => std::process::exit(code),
    Err(err) => {
      eprintln!("{err:#}");
      std::process::exit(1);
    }
  }
}

fn run(cli: Cli) -> Result<i32> {
  let base_dir = env::current_dir().context("failed to determine working directory")?;
  let config = load_config(cli.config.as_deref(), &base_dir)?;

  match cli.command {
    Commands::Check => {
      let collaborators = DefaultCollaborators::from_config(&config, &base_dir);
      let check = collaborators.updater().check();
      println!("Current version: {}", check.current.as_deref().unwrap_or("none"));
      println!("Latest version: {}", check.latest.as_deref().unwrap_or("unknown"));
      println!("Update needed: {}", check.has_new_version);
      Ok(0)
    }
    Commands::Update => {
      let collaborators = DefaultCollaborators::from_config(&config, &base_dir);
      let outcome = collaborators.updater().check_and_update()?;
      info!(?outcome, "update finished");
      Ok(outcome.exit_code())
    }
    Commands::Resolve(args) => {
      let candidates = match &args.listing {
        Some(path) => {
          let html = fs::read_to_string(path)
            .with_context(|| format!("failed to read listing {}", path.display()))?;
          parse_directory_listing(&html)
        }
        None => fetch_icon_listing(&config.asset_host, &args.champion)?,
      };

      let ability = AbilityRef::new(args.champion, args.key, args.index, args.name);
      let result = IconResolver::from_config(&config).resolve(&ability, &candidates);
      println!("{}", result.resolved_url);
      println!("confidence: {:.2}", result.confidence);
      Ok(0)
    }
  }
}

fn load_config(explicit: Option<&Path>, base_dir: &Path) -> Result<UpdaterConfig> {
  match explicit {
    Some(path) => {
      let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
      serde_json::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
    }
    None => Ok(UpdaterConfig::discover(base_dir)),
  }
}
