//! Data structures exchanged between the resolver, the version store and the updater.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Ability slot on a champion's kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilityKey {
  /// First basic ability.
  Q,
  /// Second basic ability.
  W,
  /// Third basic ability.
  E,
  /// Ultimate.
  R,
}

impl AbilityKey {
  /// Upper-case key letter as used by the CDN fallback URL.
  pub fn letter(self) -> char {
    match self {
      Self::Q => 'Q',
      Self::W => 'W',
      Self::E => 'E',
      Self::R => 'R',
    }
  }

  /// Lower-case key letter as it appears in asset filenames.
  pub fn lower(self) -> char {
    self.letter().to_ascii_lowercase()
  }
}

impl fmt::Display for AbilityKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.letter())
  }
}

impl FromStr for AbilityKey {
  type Err = anyhow::Error;

  /// Accepts the key letter in either case; only the first character is inspected so values
  /// such as `"Q1"` coming from scraped tables still parse.
  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let first = value
      .trim()
      .chars()
      .next()
      .ok_or_else(|| anyhow!("empty ability key"))?;
    match first.to_ascii_uppercase() {
      'Q' => Ok(Self::Q),
      'W' => Ok(Self::W),
      'E' => Ok(Self::E),
      'R' => Ok(Self::R),
      other => Err(anyhow!("unknown ability key '{other}'")),
    }
  }
}

/// Metadata describing one ability whose icon should be located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRef {
  /// Champion key as published by Data Dragon (e.g. `TahmKench`).
  pub champion_key: String,
  /// Ability slot.
  pub ability_key: AbilityKey,
  /// Ordinal distinguishing several icons for the same slot.
  pub ability_index: u32,
  /// Display name of the ability (e.g. `Frost Shot`).
  pub ability_display_name: String,
}

impl AbilityRef {
  /// Convenience constructor.
  pub fn new(
    champion_key: impl Into<String>,
    ability_key: AbilityKey,
    ability_index: u32,
    ability_display_name: impl Into<String>,
  ) -> Self {
    Self {
      champion_key: champion_key.into(),
      ability_key,
      ability_index,
      ability_display_name: ability_display_name.into(),
    }
  }
}

/// Outcome of resolving a single [`AbilityRef`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
  /// Matched filename (basename only), absent when the CDN fallback was used.
  pub filename: Option<String>,
  /// Match confidence in `0.0..=1.0`.
  pub confidence: f64,
  /// URL the icon should be fetched from.
  pub resolved_url: String,
}

impl MatchResult {
  /// Returns `true` when a real filename was found on the asset host.
  pub fn is_matched(&self) -> bool {
    self.filename.is_some()
  }
}

/// Persisted record of the last generated patch version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
  /// Patch version string, e.g. `14.3.1`.
  pub version: String,
  /// ISO-8601 UTC time of the last update, suffixed with `Z`.
  pub last_update: String,
  /// Unix timestamp (seconds) of the last update.
  pub timestamp: i64,
}

/// Result of comparing the stored version against the latest published one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCheck {
  /// Whether data needs to be regenerated.
  pub has_new_version: bool,
  /// Version currently recorded on disk.
  pub current: Option<String>,
  /// Latest published version; absent when the provider failed.
  pub latest: Option<String>,
}

/// Final state reported by [`crate::updater::PatchUpdater::check_and_update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
  /// Stored data already matches the latest patch (or the check failed).
  UpToDate {
    /// Version on disk, if any.
    version: Option<String>,
  },
  /// Generation ran and the version file now records `to`.
  Updated {
    /// Previously recorded version.
    from: Option<String>,
    /// Newly recorded version.
    to: String,
  },
  /// Generation failed; the version file was left untouched.
  GenerationFailed {
    /// Version that was being generated.
    latest: String,
  },
}

impl UpdateOutcome {
  /// Process exit code matching the outcome.
  pub fn exit_code(&self) -> i32 {
    match self {
      Self::UpToDate { .. } | Self::Updated { .. } => 0,
      Self::GenerationFailed { .. } => 1,
    }
  }
}
