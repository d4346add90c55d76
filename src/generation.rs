//! External process that regenerates champion and item data.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{error, info};

/// Opaque regeneration step triggered when a new patch is published.
pub trait DataGenerationJob {
  /// Run the job to completion, returning `true` on success.
  fn run_data_generation(&self) -> bool;
}

/// Runs a fixed sequence of commands, stopping at the first failure.
#[derive(Debug, Clone)]
pub struct CommandGenerationJob {
  commands: Vec<Vec<String>>,
  working_dir: Option<PathBuf>,
}

impl CommandGenerationJob {
  /// Job running `commands` in order; each command is a program followed by its arguments.
  pub fn new(commands: Vec<Vec<String>>) -> Self {
    Self {
      commands,
      working_dir: None,
    }
  }

  /// Run every command from `dir` instead of the current directory.
  pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.working_dir = Some(dir.into());
    self
  }

  fn run_all(&self) -> Result<()> {
    for command in &self.commands {
      self.run_one(command)?;
    }
    Ok(())
  }

  fn run_one(&self, command: &[String]) -> Result<()> {
    let (program, args) = command
      .split_first()
      .ok_or_else(|| anyhow!("empty generation command"))?;
    let command_line = command.join(" ");
    info!(command = %command_line, "running generation step");

    let mut process = Command::new(program);
    process.args(args);
    if let Some(dir) = &self.working_dir {
      process.current_dir(dir);
    }
    let output = process
      .output()
      .with_context(|| format!("failed to run `{command_line}`"))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
      info!(command = %command_line, "{}", stdout.trim_end());
    }

    if !output.status.success() {
      bail!(
        "`{command_line}` failed with status {}\nstdout: {}\nstderr: {}",
        output.status,
        stdout,
        String::from_utf8_lossy(&output.stderr)
      );
    }
    Ok(())
  }
}

impl DataGenerationJob for CommandGenerationJob {
  fn run_data_generation(&self) -> bool {
    info!(steps = self.commands.len(), "starting data generation");
    match self.run_all() {
      Ok(()) => {
        info!("data generation completed");
        true
      }
      Err(err) => {
        error!(error = %format!("{err:#}"), "data generation failed");
        false
      }
    }
  }
}

#[cfg(all(test, unix))]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn sh(script: &str) -> Vec<String> {
    vec!["sh".into(), "-c".into(), script.into()]
  }

  #[test]
  fn succeeds_when_every_step_succeeds() {
    let job = CommandGenerationJob::new(vec![sh("echo champions"), sh("echo items")]);
    assert!(job.run_data_generation());
  }

  #[test]
  fn stops_at_first_failing_step() {
    let temp = tempdir().expect("failed to create temp dir");
    let job = CommandGenerationJob::new(vec![sh("exit 3"), sh("touch items.done")])
      .with_working_dir(temp.path());

    assert!(!job.run_data_generation());
    assert!(!temp.path().join("items.done").exists());
  }

  #[test]
  fn runs_steps_in_working_directory() {
    let temp = tempdir().expect("failed to create temp dir");
    let job = CommandGenerationJob::new(vec![sh("touch champions.done"), sh("touch items.done")])
      .with_working_dir(temp.path());

    assert!(job.run_data_generation());
    assert!(temp.path().join("champions.done").exists());
    assert!(temp.path().join("items.done").exists());
  }

  #[test]
  fn missing_programs_report_failure() {
    let job = CommandGenerationJob::new(vec![vec!["definitely-not-a-real-program-4711".into()]]);
    assert!(!job.run_data_generation());
  }

  #[test]
  fn empty_commands_report_failure() {
    let job = CommandGenerationJob::new(vec![Vec::new()]);
    assert!(!job.run_data_generation());
  }
}
