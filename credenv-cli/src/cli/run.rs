//! # Run Command
//!
//! Derive-based implementation of the run command, which executes a child
//! command with the recognized credentials exported into its environment.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result, bail};
use clap::Args;
use credenv_core::{CredentialFile, ProcessEnv, apply_exports, print_success, resolve_credential_path, resolve_exports};

/// Command for running a child process with exported credentials
#[derive(Args)]
pub struct RunArgs {
  /// Path to the credential file (defaults to credential.json)
  #[arg(short, long)]
  pub file: Option<PathBuf>,

  /// Command to run, e.g. `credenv run -- python train.py`
  #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
  pub command: Vec<String>,
}

/// Handle the run command
///
/// The exports are applied to this process before spawning, so the child
/// inherits them along with the rest of the environment.
pub(crate) fn handle_run_command(run: RunArgs) -> Result<()> {
  let path = resolve_credential_path(run.file);
  let file = CredentialFile::load(&path)?;
  let exports = resolve_exports(&file);

  let Some((program, args)) = run.command.split_first() else {
    bail!("no command given");
  };

  apply_exports(&exports, &mut ProcessEnv);
  for export in &exports {
    print_success(&format!("Exported {}", export.key));
  }

  let status = Command::new(program)
    .args(args)
    .status()
    .with_context(|| format!("failed to run {program}; make sure it is installed and on your PATH"))?;

  std::process::exit(status.code().unwrap_or(1));
}
