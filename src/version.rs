//! Tracking of the patch version the static data was last generated for.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::{info, warn};

use crate::models::{VersionCheck, VersionRecord};

/// Source of the latest published patch version.
pub trait PatchVersionProvider {
  /// Returns the newest published version string.
  fn get_latest_version(&self) -> Result<String>;
}

/// Reads the Data Dragon versions endpoint, which lists versions newest first.
#[derive(Debug, Clone)]
pub struct DataDragonVersions {
  url: String,
}

impl DataDragonVersions {
  /// Create a provider for the given versions endpoint.
  pub fn new(url: impl Into<String>) -> Self {
    Self { url: url.into() }
  }
}

impl PatchVersionProvider for DataDragonVersions {
  fn get_latest_version(&self) -> Result<String> {
    let response = reqwest::blocking::get(&self.url)
      .with_context(|| format!("failed to request {}", self.url))?;
    if !response.status().is_success() {
      return Err(anyhow!(
        "versions request to {} failed with status {}",
        self.url,
        response.status()
      ));
    }
    let body = response.text().context("failed to read versions response")?;
    latest_from_versions_json(&body)
  }
}

/// Pick the newest version from a Data Dragon `versions.json` payload.
pub fn latest_from_versions_json(body: &str) -> Result<String> {
  let versions: Value = serde_json::from_str(body).context("failed to parse versions JSON")?;
  versions
    .as_array()
    .and_then(|values| values.first())
    .and_then(|value| value.as_str())
    .map(str::to_string)
    .ok_or_else(|| anyhow!("versions JSON does not start with a version string"))
}

/// Errors that can occur while persisting the version record.
#[derive(Debug)]
pub enum VersionStoreError {
  /// Failed to create the directory, write or re-read the file.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to serialise the record or to parse it back.
  Serialize {
    /// Path that caused the error.
    path: PathBuf,
    /// Source serialisation error.
    source: serde_json::Error,
  },
}

impl std::fmt::Display for VersionStoreError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to access {}: {}", path.display(), source)
      }
      Self::Serialize { path, source } => {
        write!(f, "failed to serialise {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for VersionStoreError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Serialize { source, .. } => Some(source),
    }
  }
}

/// JSON file holding the [`VersionRecord`] of the last successful generation.
#[derive(Debug, Clone)]
pub struct VersionStore {
  path: PathBuf,
}

impl VersionStore {
  /// Store backed by `path`; parent directories are created on save.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Location of the version file.
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Load the stored record.
  ///
  /// Missing, unreadable and malformed files all read as "no version" so that a damaged file
  /// triggers a full regeneration instead of blocking it.
  pub fn load(&self) -> Option<VersionRecord> {
    let content = fs::read_to_string(&self.path).ok()?;
    match serde_json::from_str(&content) {
      Ok(record) => Some(record),
      Err(err) => {
        warn!(path = %self.path.display(), error = %err, "ignoring malformed version file");
        None
      }
    }
  }

  /// Record `version` as generated now and verify the file by reading it back.
  pub fn save(&self, version: &str) -> Result<VersionRecord, VersionStoreError> {
    let now = Utc::now();
    let record = VersionRecord {
      version: version.to_string(),
      last_update: now.to_rfc3339_opts(SecondsFormat::Micros, true),
      timestamp: now.timestamp(),
    };

    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
    }
    let json = serde_json::to_string_pretty(&record).map_err(|source| self.serialize_error(source))?;
    fs::write(&self.path, json).map_err(|source| self.io_error(source))?;

    let written = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
    let verified: VersionRecord =
      serde_json::from_str(&written).map_err(|source| self.serialize_error(source))?;
    info!(path = %self.path.display(), version = %verified.version, "version file updated");

    Ok(verified)
  }

  /// Compare the stored version against the latest one published by `provider`.
  ///
  /// Provider failures are logged and reported as "no new version" so scheduled runs stay quiet
  /// while the upstream endpoint is unavailable.
  pub fn check_for_new_version<P: PatchVersionProvider + ?Sized>(&self, provider: &P) -> VersionCheck {
    let latest = match provider.get_latest_version() {
      Ok(latest) => latest,
      Err(err) => {
        warn!(error = %format!("{err:#}"), "failed to fetch latest patch version");
        return VersionCheck {
          has_new_version: false,
          current: None,
          latest: None,
        };
      }
    };

    let current = self.load().map(|record| record.version);
    let has_new_version = match &current {
      None => true,
      Some(current) if *current != latest => {
        info!(current = %current, latest = %latest, "new patch version detected");
        true
      }
      Some(current) => {
        info!(current = %current, "already up to date");
        false
      }
    };

    VersionCheck {
      has_new_version,
      current,
      latest: Some(latest),
    }
  }

  fn io_error(&self, source: std::io::Error) -> VersionStoreError {
    VersionStoreError::Io {
      path: self.path.clone(),
      source,
    }
  }

  fn serialize_error(&self, source: serde_json::Error) -> VersionStoreError {
    VersionStoreError::Serialize {
      path: self.path.clone(),
      source,
    }
  }
}
