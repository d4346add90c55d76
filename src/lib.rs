#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod generation;
pub mod icons;
pub mod models;
pub mod updater;
pub mod version;

pub use config::UpdaterConfig;
pub use generation::{CommandGenerationJob, DataGenerationJob};
pub use icons::{IconResolver, resolve};
pub use models::{AbilityKey, AbilityRef, MatchResult, UpdateOutcome, VersionCheck, VersionRecord};
pub use updater::{DefaultCollaborators, PatchUpdater};
pub use version::{DataDragonVersions, PatchVersionProvider, VersionStore, VersionStoreError};
