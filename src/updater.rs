//! Update orchestrator: check the published patch, regenerate data, then record the version.

use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use crate::config::UpdaterConfig;
use crate::generation::{CommandGenerationJob, DataGenerationJob};
use crate::models::{UpdateOutcome, VersionCheck};
use crate::version::{DataDragonVersions, PatchVersionProvider, VersionStore};

/// Ties a version store to its provider and generation job.
pub struct PatchUpdater<'a> {
  store: VersionStore,
  provider: &'a dyn PatchVersionProvider,
  job: &'a dyn DataGenerationJob,
}

impl<'a> PatchUpdater<'a> {
  /// Create an updater over the given collaborators.
  pub fn new(
    store: VersionStore,
    provider: &'a dyn PatchVersionProvider,
    job: &'a dyn DataGenerationJob,
  ) -> Self {
    Self { store, provider, job }
  }

  /// Store in use.
  pub fn store(&self) -> &VersionStore {
    &self.store
  }

  /// Compare the stored version with the latest published one.
  pub fn check(&self) -> VersionCheck {
    self.store.check_for_new_version(self.provider)
  }

  /// Regenerate the data when a new patch is out and record it on success.
  ///
  /// The version file is only written after the generation job reports success, so a failed run
  /// is retried on the next invocation. Errors writing the version file are returned.
  pub fn check_and_update(&self) -> Result<UpdateOutcome> {
    let VersionCheck {
      has_new_version,
      current,
      latest,
    } = self.check();

    let latest = match latest {
      Some(latest) if has_new_version => latest,
      _ => {
        info!(current = ?current, "no update needed");
        return Ok(UpdateOutcome::UpToDate { version: current });
      }
    };

    match &current {
      Some(current) => info!(from = %current, to = %latest, "updating static data"),
      None => info!(to = %latest, "no previous version found, generating initial data"),
    }

    if !self.job.run_data_generation() {
      error!(latest = %latest, "data generation failed, version file not updated");
      return Ok(UpdateOutcome::GenerationFailed { latest });
    }

    self.store.save(&latest)?;
    info!(version = %latest, "static data updated");
    Ok(UpdateOutcome::Updated {
      from: current,
      to: latest,
    })
  }
}

/// Production collaborators built from configuration.
pub struct DefaultCollaborators {
  /// Version store at the configured location.
  pub store: VersionStore,
  /// Data Dragon versions endpoint.
  pub provider: DataDragonVersions,
  /// Configured generation commands, run from `base_dir`.
  pub job: CommandGenerationJob,
}

impl DefaultCollaborators {
  /// Build the collaborators described by `config`, resolving paths against `base_dir`.
  pub fn from_config(config: &UpdaterConfig, base_dir: &Path) -> Self {
    Self {
      store: VersionStore::new(config.version_file_path(base_dir)),
      provider: DataDragonVersions::new(config.versions_url.clone()),
      job: CommandGenerationJob::new(config.generation_commands.clone()).with_working_dir(base_dir),
    }
  }

  /// Borrow the collaborators as an updater.
  pub fn updater(&self) -> PatchUpdater<'_> {
    PatchUpdater::new(self.store.clone(), &self.provider, &self.job)
  }
}
