//! Updater configuration loader describing hosts, file locations and generation commands.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default configuration file name searched for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "lolstatic.config.json";

/// Discoverable configuration for the icon resolver and the patch updater.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpdaterConfig {
  /// Host serving raw game assets and directory listings.
  pub asset_host: String,
  /// Host serving the per-champion ability icon fallback.
  pub cdn_host: String,
  /// Fuzzy scores strictly above this value count as a match.
  pub match_threshold: u8,
  /// Directory holding generated data and the version file.
  pub srv_dir: String,
  /// File name of the persisted version record inside `srv_dir`.
  pub version_file: String,
  /// Endpoint returning the published patch versions, newest first.
  pub versions_url: String,
  /// Commands run in order to regenerate the static data.
  pub generation_commands: Vec<Vec<String>>,
}

impl Default for UpdaterConfig {
  fn default() -> Self {
    Self {
      asset_host: "raw.communitydragon.org".into(),
      cdn_host: "cdn.communitydragon.org".into(),
      match_threshold: 50,
      srv_dir: "srv".into(),
      version_file: "version.json".into(),
      versions_url: "https://ddragon.leagueoflegends.com/api/versions.json".into(),
      generation_commands: vec![
        vec!["python".into(), "-m".into(), "lolstaticdata.champions".into()],
        vec!["python".into(), "-m".into(), "lolstaticdata.items".into()],
      ],
    }
  }
}

impl UpdaterConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// When the configuration file does not exist or fails to parse we fall back to default
  /// values so the updater can still run against the public hosts.
  pub fn discover(base_dir: &Path) -> Self {
    let candidate = base_dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Absolute location of the version record relative to `base_dir`.
  pub fn version_file_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.srv_dir).join(&self.version_file)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn discover_falls_back_to_defaults_when_missing() {
    let temp = tempdir().expect("failed to create temp dir");
    let config = UpdaterConfig::discover(temp.path());
    assert_eq!(config.asset_host, "raw.communitydragon.org");
    assert_eq!(config.match_threshold, 50);
    assert_eq!(config.generation_commands.len(), 2);
  }

  #[test]
  fn discover_ignores_malformed_files() {
    let temp = tempdir().expect("failed to create temp dir");
    fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();
    let config = UpdaterConfig::discover(temp.path());
    assert_eq!(config.version_file, "version.json");
  }

  #[test]
  fn partial_files_keep_remaining_defaults() {
    let temp = tempdir().expect("failed to create temp dir");
    fs::write(
      temp.path().join(DEFAULT_CONFIG_FILE),
      r#"{"srv_dir": "out", "match_threshold": 70}"#,
    )
    .unwrap();

    let config = UpdaterConfig::discover(temp.path());
    assert_eq!(config.srv_dir, "out");
    assert_eq!(config.match_threshold, 70);
    assert_eq!(config.cdn_host, "cdn.communitydragon.org");
    assert_eq!(
      config.version_file_path(temp.path()),
      temp.path().join("out").join("version.json")
    );
  }
}
