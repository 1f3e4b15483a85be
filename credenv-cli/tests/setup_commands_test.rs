use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_credentials(dir: &TempDir, content: &str) -> PathBuf {
  let path = dir.path().join("credential.json");
  fs::write(&path, content).unwrap();
  path
}

#[test]
fn help_output_shows_usage() {
  cargo_bin_cmd!("credenv")
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains(
      "Export API credentials from a JSON credential file",
    ))
    .stdout(predicate::str::contains("export"))
    .stdout(predicate::str::contains("shellenv"));
}

#[test]
fn check_reports_both_keys_when_present() {
  let dir = TempDir::new().unwrap();
  let path = write_credentials(&dir, r#"{"ANTHROPIC_API_KEY": "sk-ant", "OPENAI_API_KEY": "sk-openai"}"#);

  cargo_bin_cmd!("credenv")
    .arg("check")
    .arg(&path)
    .assert()
    .success()
    .stdout(predicate::str::contains("Anthropic API key found"))
    .stdout(predicate::str::contains("OpenAI API key found"));
}

#[test]
fn check_warns_about_missing_keys() {
  let dir = TempDir::new().unwrap();
  let path = write_credentials(&dir, r#"{"ANTHROPIC_API_KEY": "sk-ant"}"#);

  cargo_bin_cmd!("credenv")
    .arg("check")
    .arg(&path)
    .assert()
    .success()
    .stdout(predicate::str::contains("Anthropic API key found"))
    .stdout(predicate::str::contains("No OpenAI API key found"));
}

#[test]
fn check_counts_unrecognized_keys() {
  let dir = TempDir::new().unwrap();
  let path = write_credentials(&dir, r#"{"GEMINI_API_KEY": "sk-gem", "HF_TOKEN": "hf-x"}"#);

  cargo_bin_cmd!("credenv")
    .arg("check")
    .arg(&path)
    .assert()
    .success()
    .stdout(predicate::str::contains("2 unrecognized key(s)"));
}

#[test]
fn check_survives_a_missing_file() {
  let dir = TempDir::new().unwrap();

  cargo_bin_cmd!("credenv")
    .arg("check")
    .arg(dir.path().join("absent.json"))
    .assert()
    .success()
    .stderr(predicate::str::contains("No credential file found"))
    .stdout(predicate::str::contains("credenv init"));
}

#[test]
fn check_survives_malformed_json() {
  let dir = TempDir::new().unwrap();
  let path = write_credentials(&dir, "not json at all");

  cargo_bin_cmd!("credenv")
    .arg("check")
    .arg(&path)
    .assert()
    .success()
    .stderr(predicate::str::contains("not a valid JSON object"))
    .stdout(predicate::str::contains("Fix the JSON syntax"));
}

#[cfg(unix)]
#[test]
fn check_warns_about_insecure_permissions() {
  use std::os::unix::fs::PermissionsExt;

  let dir = TempDir::new().unwrap();
  let path = write_credentials(&dir, "{}");

  let mut perms = fs::metadata(&path).unwrap().permissions();
  perms.set_mode(0o644);
  fs::set_permissions(&path, perms).unwrap();

  cargo_bin_cmd!("credenv")
    .arg("check")
    .arg(&path)
    .assert()
    .success()
    .stdout(predicate::str::contains("insecure permissions"));
}

#[test]
fn init_creates_a_template_with_the_recognized_keys() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("credential.json");

  cargo_bin_cmd!("credenv")
    .arg("init")
    .arg(&path)
    .assert()
    .success()
    .stdout(predicate::str::contains("Created"));

  let content = fs::read_to_string(&path).unwrap();
  let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
  assert_eq!(parsed["ANTHROPIC_API_KEY"], "");
  assert_eq!(parsed["OPENAI_API_KEY"], "");
}

#[cfg(unix)]
#[test]
fn init_sets_private_permissions() {
  use std::os::unix::fs::PermissionsExt;

  let dir = TempDir::new().unwrap();
  let path = dir.path().join("credential.json");

  cargo_bin_cmd!("credenv").arg("init").arg(&path).assert().success();

  let mode = fs::metadata(&path).unwrap().permissions().mode();
  assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn init_refuses_to_overwrite_without_force() {
  let dir = TempDir::new().unwrap();
  let path = write_credentials(&dir, r#"{"ANTHROPIC_API_KEY": "sk-keep"}"#);

  cargo_bin_cmd!("credenv")
    .arg("init")
    .arg(&path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("already exists"));

  // The original content is untouched
  let content = fs::read_to_string(&path).unwrap();
  assert!(content.contains("sk-keep"));

  cargo_bin_cmd!("credenv")
    .arg("init")
    .arg(&path)
    .arg("--force")
    .assert()
    .success();

  let content = fs::read_to_string(&path).unwrap();
  assert!(!content.contains("sk-keep"));
}

#[test]
fn shellenv_bash_wrapper_guards_against_missing_binary() {
  cargo_bin_cmd!("credenv")
    .arg("shellenv")
    .arg("bash")
    .assert()
    .success()
    .stdout(predicate::str::contains("credenv_load()"))
    .stdout(predicate::str::contains("command -v credenv"))
    .stdout(predicate::str::contains("command not found"));
}

#[test]
fn shellenv_fish_wrapper_sources_export_output() {
  cargo_bin_cmd!("credenv")
    .arg("shellenv")
    .arg("fish")
    .assert()
    .success()
    .stdout(predicate::str::contains("function credenv_load"))
    .stdout(predicate::str::contains("credenv export --shell fish"));
}

#[test]
fn completion_generates_a_bash_script() {
  cargo_bin_cmd!("credenv")
    .arg("completion")
    .arg("bash")
    .assert()
    .success()
    .stdout(predicate::str::contains("credenv"));
}
