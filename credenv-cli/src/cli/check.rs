//! # Check Command
//!
//! Derive-based implementation of the check command, which reports whether
//! the credential file is present, private, and parseable, and which
//! recognized keys it provides.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use credenv_core::output::print_header;
use credenv_core::store::StoreError;
use credenv_core::{
  CredentialFile, RECOGNIZED_KEYS, format_command, format_path, print_error, print_info, print_success, print_warning,
  resolve_credential_path,
};

/// Command for checking the credential file
#[derive(Args)]
pub struct CheckArgs {
  /// Path to the credential file (defaults to credential.json)
  pub file: Option<PathBuf>,
}

/// Handle the check command
///
/// This is a diagnostic command: every finding is reported and the command
/// still exits successfully, so it is safe to run from shell startup files.
pub(crate) fn handle_check_command(check: CheckArgs) -> Result<()> {
  let path = resolve_credential_path(check.file);

  print_header("Credential Check");
  println!();

  // Check if the credential file exists
  if !path.is_file() {
    print_error(&format!(
      "No credential file found at {}.",
      format_path(&path.display().to_string())
    ));
    println!("Create one with {}.", format_command("credenv init"));
    return Ok(());
  }

  check_permissions(&path)?;

  let file = match CredentialFile::load(&path) {
    Ok(file) => file,
    Err(err @ StoreError::Malformed { .. }) => {
      print_error(&err.to_string());
      println!("Fix the JSON syntax and run {} again.", format_command("credenv check"));
      return Ok(());
    }
    Err(err) => return Err(err.into()),
  };

  // Check each recognized key
  for &key in &RECOGNIZED_KEYS {
    match file.value_of(key) {
      Some(_) => print_success(&format!("{} API key found ({key}).", key.provider())),
      None => {
        print_warning(&format!("No {} API key found.", key.provider()));
        println!(
          "Add a non-empty \"{key}\" entry to {}.",
          format_path(&path.display().to_string())
        );
      }
    }
  }

  let ignored = file.unrecognized_key_count();
  if ignored > 0 {
    print_info(&format!(
      "Ignoring {ignored} unrecognized key(s); only the recognized keys are ever exported."
    ));
  }

  // Print credential file format example
  print_info("Example credential file format:");
  println!("```");
  println!("{{");
  println!("  \"ANTHROPIC_API_KEY\": \"sk-ant-...\",");
  println!("  \"OPENAI_API_KEY\": \"sk-...\"");
  println!("}}");
  println!("```");

  Ok(())
}

/// Warn when the credential file is readable by group or others
#[cfg(unix)]
fn check_permissions(path: &Path) -> Result<()> {
  use std::fs::metadata;
  use std::os::unix::fs::PermissionsExt;

  let metadata = metadata(path)?;
  let permissions = metadata.permissions();
  let mode = permissions.mode();

  if mode & 0o077 != 0 {
    print_warning("Your credential file has insecure permissions.");
    println!(
      "For security, change permissions to 600: {}",
      format_command(&format!("chmod 600 {}", path.display()))
    );
  } else {
    print_success("Credential file has secure permissions.");
  }

  Ok(())
}

#[cfg(not(unix))]
fn check_permissions(_path: &Path) -> Result<()> {
  Ok(())
}
