//! # Shell Completion
//!
//! Generates shell completion scripts for various shells (bash, zsh, fish,
//! PowerShell) to provide tab completion for credenv commands and arguments.

use std::io;

use anyhow::{Result, bail};
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::Cli;

/// Parse a shell name into a completion shell
pub fn parse_shell(name: &str) -> Result<clap_complete::Shell> {
  match name {
    "bash" => Ok(clap_complete::Shell::Bash),
    "zsh" => Ok(clap_complete::Shell::Zsh),
    "fish" => Ok(clap_complete::Shell::Fish),
    "powershell" => Ok(clap_complete::Shell::PowerShell),
    other => bail!("unsupported shell: {other}"),
  }
}

/// Generate shell completions for the specified shell
pub fn generate_completions(shell: clap_complete::Shell) -> Result<()> {
  let mut cmd = Cli::command();
  let app_name = cmd.get_name().to_string();

  generate(shell, &mut cmd, app_name, &mut io::stdout());

  Ok(())
}
