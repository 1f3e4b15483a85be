//! # Shell Syntax
//!
//! Export-line formatting and the sourcing wrapper for supported shells.
//! Everything printed for `eval` goes through this module so quoting rules
//! live in one place.

use std::env;
use std::fmt;

use clap::ValueEnum;

/// Shell dialect for eval-able output.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
  /// Bourne Again `SHell` (bash)
  Bash,
  /// Z `SHell` (zsh)
  Zsh,
  /// Friendly Interactive `SHell` (fish)
  Fish,
}

impl Shell {
  /// Detect the user's shell from `$SHELL`, defaulting to bash.
  pub fn detect() -> Self {
    match env::var("SHELL") {
      Ok(shell) => match shell.rsplit('/').next().unwrap_or_default() {
        "fish" => Shell::Fish,
        "zsh" => Shell::Zsh,
        _ => Shell::Bash,
      },
      Err(_) => Shell::Bash,
    }
  }

  /// One eval-able line exporting `name` with `value`.
  pub fn export_line(self, name: &str, value: &str) -> String {
    match self {
      Shell::Bash | Shell::Zsh => format!("export {}={}", name, posix_quote(value)),
      Shell::Fish => format!("set -gx {} {}", name, fish_quote(value)),
    }
  }

  /// The wrapper function users add to their shell configuration.
  ///
  /// The wrapper refuses to run when the credenv binary is missing from
  /// PATH, then evaluates the export output in the calling shell. Without
  /// the eval step the exports would only reach a throwaway child process.
  pub fn wrapper_script(self) -> String {
    match self {
      Shell::Bash | Shell::Zsh => format!(
        "# credenv shell integration for {shell}. Add to your shell rc:\n\
         #   eval \"$(credenv shellenv {shell})\"\n\
         credenv_load() {{\n\
         \x20 if ! command -v credenv >/dev/null 2>&1; then\n\
         \x20   echo \"credenv: command not found. Install credenv and make sure it is on your PATH.\" >&2\n\
         \x20   return 1\n\
         \x20 fi\n\
         \x20 eval \"$(credenv export --shell {shell} \"$@\")\"\n\
         }}\n",
        shell = self
      ),
      Shell::Fish => "# credenv shell integration for fish. Add to ~/.config/fish/config.fish:\n\
         #   credenv shellenv fish | source\n\
         function credenv_load\n\
         \x20 if not command -q credenv\n\
         \x20   echo \"credenv: command not found. Install credenv and make sure it is on your PATH.\" >&2\n\
         \x20   return 1\n\
         \x20 end\n\
         \x20 credenv export --shell fish $argv | source\n\
         end\n"
        .to_string(),
    }
  }
}

impl fmt::Display for Shell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Shell::Bash => "bash",
      Shell::Zsh => "zsh",
      Shell::Fish => "fish",
    };
    f.write_str(name)
  }
}

/// Quote a value for POSIX shells: wrap in single quotes, with embedded
/// single quotes closed, escaped, and reopened.
fn posix_quote(value: &str) -> String {
  format!("'{}'", value.replace('\'', r"'\''"))
}

/// Quote a value for fish: backslashes and single quotes are escaped inside
/// single quotes.
fn fish_quote(value: &str) -> String {
  format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_posix_export_line() {
    let line = Shell::Bash.export_line("ANTHROPIC_API_KEY", "sk-ant-test");
    assert_eq!(line, "export ANTHROPIC_API_KEY='sk-ant-test'");
  }

  #[test]
  fn test_posix_quoting_survives_embedded_single_quotes() {
    let line = Shell::Zsh.export_line("OPENAI_API_KEY", "it's");
    assert_eq!(line, r"export OPENAI_API_KEY='it'\''s'");
  }

  #[test]
  fn test_fish_export_line() {
    let line = Shell::Fish.export_line("ANTHROPIC_API_KEY", "sk-ant-test");
    assert_eq!(line, "set -gx ANTHROPIC_API_KEY 'sk-ant-test'");
  }

  #[test]
  fn test_fish_quoting_escapes_quotes_and_backslashes() {
    let line = Shell::Fish.export_line("OPENAI_API_KEY", r"a'b\c");
    assert_eq!(line, r"set -gx OPENAI_API_KEY 'a\'b\\c'");
  }

  #[test]
  fn test_wrapper_scripts_guard_against_missing_binary() {
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
      let script = shell.wrapper_script();
      assert!(script.contains("credenv_load"), "wrapper for {shell} missing function");
      assert!(script.contains("command"), "wrapper for {shell} missing dependency guard");
      assert!(
        script.contains("command not found"),
        "wrapper for {shell} missing remediation message"
      );
    }
  }

  #[test]
  fn test_posix_wrapper_evals_export_output() {
    let script = Shell::Bash.wrapper_script();
    assert!(script.contains(r#"eval "$(credenv export --shell bash "$@")""#));
  }

  #[test]
  fn test_fish_wrapper_sources_export_output() {
    let script = Shell::Fish.wrapper_script();
    assert!(script.contains("credenv export --shell fish $argv | source"));
  }
}
