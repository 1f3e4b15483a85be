//! # Shellenv Command
//!
//! Derive-based implementation of the shellenv command, which prints the
//! wrapper function that sources credential exports into the calling shell.

use anyhow::Result;
use clap::Args;
use credenv_core::Shell;

/// Command for printing the shell wrapper
#[derive(Args)]
pub struct ShellenvArgs {
  /// Shell to generate the wrapper for
  #[arg(value_enum)]
  pub shell: Shell,
}

pub(crate) fn handle_shellenv_command(shellenv: ShellenvArgs) -> Result<()> {
  print!("{}", shellenv.shell.wrapper_script());
  Ok(())
}
