//! # Credential Store
//!
//! Loading and querying of the JSON credential file. The file is read-only
//! input; only the recognized keys are ever considered for export.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use tracing::debug;

use crate::consts::{DEFAULT_CREDENTIAL_FILE, ENV_CREDENTIAL_FILE};
use crate::keys::{RECOGNIZED_KEYS, RecognizedKey};

/// Errors raised while loading a credential file.
///
/// All of these are fatal preconditions: they fire before any key is
/// processed, so a failed load never produces a partial export.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("credential file not found at {}. Provide a path or run `credenv init` to create one.", path.display())]
  MissingFile { path: PathBuf },

  #[error("failed to read credential file {}: {source}", path.display())]
  Unreadable {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("credential file {} is not a valid JSON object: {source}", path.display())]
  Malformed {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

/// A parsed credential file.
///
/// Recognized keys deserialize into typed fields. Every other top-level key
/// lands in `extra`, which is only ever counted for diagnostics and never
/// exported.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialFile {
  #[serde(rename = "ANTHROPIC_API_KEY", default)]
  anthropic_api_key: Option<String>,

  #[serde(rename = "OPENAI_API_KEY", default)]
  openai_api_key: Option<String>,

  #[serde(flatten)]
  extra: BTreeMap<String, serde_json::Value>,
}

impl CredentialFile {
  /// Load and parse a credential file from disk.
  pub fn load(path: &Path) -> Result<Self, StoreError> {
    if !path.is_file() {
      return Err(StoreError::MissingFile {
        path: path.to_path_buf(),
      });
    }

    let raw = fs::read_to_string(path).map_err(|source| StoreError::Unreadable {
      path: path.to_path_buf(),
      source,
    })?;

    let file: CredentialFile = serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
      path: path.to_path_buf(),
      source,
    })?;

    debug!(path = %path.display(), "loaded credential file");
    Ok(file)
  }

  /// Value for a recognized key, with empty strings normalized to `None`.
  ///
  /// A missing key, a `null` value, and an empty string all read as `None`;
  /// none of them is an error.
  pub fn value_of(&self, key: RecognizedKey) -> Option<&str> {
    let value = match key {
      RecognizedKey::Anthropic => self.anthropic_api_key.as_deref(),
      RecognizedKey::OpenAi => self.openai_api_key.as_deref(),
    };
    value.filter(|value| !value.is_empty())
  }

  /// Number of top-level keys credenv does not recognize.
  pub fn unrecognized_key_count(&self) -> usize {
    self.extra.len()
  }
}

/// A single (name, value) pair ready to be exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
  pub key: RecognizedKey,
  pub value: String,
}

/// Build the export plan for a credential file.
///
/// Only recognized keys are considered, in their fixed order; missing, null,
/// and empty values are skipped. The plan is the single source of export
/// ordering for every command.
pub fn resolve_exports(file: &CredentialFile) -> Vec<Export> {
  RECOGNIZED_KEYS
    .iter()
    .filter_map(|&key| {
      file.value_of(key).map(|value| Export {
        key,
        value: value.to_string(),
      })
    })
    .collect()
}

/// Resolve the credential file path: the explicit argument wins, then the
/// `CREDENV_FILE` environment variable, then `credential.json` in the
/// working directory.
pub fn resolve_credential_path(arg: Option<PathBuf>) -> PathBuf {
  if let Some(path) = arg {
    return path;
  }

  if let Ok(path) = env::var(ENV_CREDENTIAL_FILE) {
    if !path.is_empty() {
      return PathBuf::from(path);
    }
  }

  PathBuf::from(DEFAULT_CREDENTIAL_FILE)
}
