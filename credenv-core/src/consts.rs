//! Core constants shared across credenv components.

/// Default credential file name, resolved relative to the working directory.
pub const DEFAULT_CREDENTIAL_FILE: &str = "credential.json";

/// Environment variable overriding the credential file path when no explicit
/// path is given on the command line.
pub const ENV_CREDENTIAL_FILE: &str = "CREDENV_FILE";
