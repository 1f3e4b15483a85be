//! # Export Command
//!
//! Derive-based implementation of the export command, which emits eval-able
//! export lines for the recognized credentials in a credential file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use credenv_core::{CredentialFile, Shell, print_status, resolve_credential_path, resolve_exports};
use tracing::debug;

/// Command for emitting eval-able exports
#[derive(Args)]
pub struct ExportArgs {
  /// Path to the credential file (defaults to credential.json)
  pub file: Option<PathBuf>,

  /// Shell dialect for the emitted lines (detected from $SHELL when omitted)
  #[arg(long, value_enum)]
  pub shell: Option<Shell>,
}

/// Handle the export command
///
/// Both failure gates (missing and malformed file) fire before any key is
/// processed, so a failed run never emits a partial export. A pass over a
/// file with nothing to export is still a success.
pub(crate) fn handle_export_command(export: ExportArgs) -> Result<()> {
  let path = resolve_credential_path(export.file);
  let file = CredentialFile::load(&path)?;
  let shell = export.shell.unwrap_or_else(Shell::detect);

  let exports = resolve_exports(&file);
  if exports.is_empty() {
    debug!("no recognized credentials with non-empty values in {}", path.display());
  }

  // stdout stays machine-readable for eval; confirmations go to stderr
  for export in &exports {
    println!("{}", shell.export_line(export.key.as_str(), &export.value));
    print_status(&format!("Exported {}", export.key));
  }

  Ok(())
}
