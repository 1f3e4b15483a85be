//! # Credenv Core Library
//!
//! Core library for credenv providing the credential store, export
//! resolution, environment sinks, and shell formatting. The CLI builds on
//! these pieces; keeping them here leaves export resolution testable without
//! touching real process state.

pub mod consts;
pub mod env;
pub mod keys;
pub mod output;
pub mod shell;
pub mod store;

// Re-export main types for the CLI and integration tests
pub use consts::{DEFAULT_CREDENTIAL_FILE, ENV_CREDENTIAL_FILE};
pub use env::{EnvSink, MemoryEnv, ProcessEnv, apply_exports};
pub use keys::{RECOGNIZED_KEYS, RecognizedKey};
pub use output::{
  ColorMode, format_command, format_path, print_error, print_info, print_status, print_success, print_warning,
};
pub use shell::Shell;
pub use store::{CredentialFile, Export, StoreError, resolve_credential_path, resolve_exports};
