//! # Init Command
//!
//! Derive-based implementation of the init command, which scaffolds a
//! credential file with the recognized keys left blank.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use credenv_core::{
  RECOGNIZED_KEYS, format_command, format_path, print_error, print_info, print_success, resolve_credential_path,
};
use serde_json::{Map, Value};

/// Command for creating a template credential file
#[derive(Args)]
pub struct InitArgs {
  /// Path to the credential file to create (defaults to credential.json)
  pub file: Option<PathBuf>,

  /// Overwrite an existing credential file
  #[arg(long)]
  pub force: bool,
}

/// Handle the init command
pub(crate) fn handle_init_command(init: InitArgs) -> Result<()> {
  let path = resolve_credential_path(init.file);

  if path.exists() && !init.force {
    print_error(&format!(
      "{} already exists.",
      format_path(&path.display().to_string())
    ));
    println!("Pass {} to overwrite it.", format_command("--force"));
    bail!("refusing to overwrite existing credential file");
  }

  let mut template = Map::new();
  for &key in &RECOGNIZED_KEYS {
    template.insert(key.as_str().to_string(), Value::String(String::new()));
  }
  let body = serde_json::to_string_pretty(&Value::Object(template)).context("failed to serialize credential template")?;

  fs::write(&path, format!("{body}\n")).with_context(|| format!("failed to write {}", path.display()))?;
  set_private_permissions(&path)?;

  print_success(&format!("Created {}.", format_path(&path.display().to_string())));
  print_info(&format!(
    "Fill in your API keys, then run {} to verify.",
    format_command("credenv check")
  ));

  Ok(())
}

/// Restrict the credential file to the owner
#[cfg(unix)]
fn set_private_permissions(path: &Path) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  let mut perms = fs::metadata(path)?.permissions();
  perms.set_mode(0o600);
  fs::set_permissions(path, perms)?;

  print_success("Set secure permissions on the credential file (600).");
  Ok(())
}

#[cfg(not(unix))]
fn set_private_permissions(_path: &Path) -> Result<()> {
  Ok(())
}
