//! # Environment Sinks
//!
//! Applying an export plan to an environment. The sink trait keeps export
//! resolution decoupled from real process state, so the plan can be unit
//! tested without mutating the test runner's environment.

use std::collections::BTreeMap;
use std::env;

use crate::store::Export;

/// Destination for exported variables.
pub trait EnvSink {
  /// Set `name` to `value` in this environment.
  fn set(&mut self, name: &str, value: &str);
}

/// Sink backed by the real process environment.
#[derive(Debug, Default)]
pub struct ProcessEnv;

impl EnvSink for ProcessEnv {
  fn set(&mut self, name: &str, value: &str) {
    // SAFETY: credenv runs single-threaded; nothing reads the environment
    // concurrently with the export pass.
    unsafe { env::set_var(name, value) };
  }
}

/// In-memory sink for tests and dry inspection.
#[derive(Debug, Default)]
pub struct MemoryEnv {
  vars: BTreeMap<String, String>,
}

impl MemoryEnv {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.vars.get(name).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.vars.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vars.is_empty()
  }
}

impl EnvSink for MemoryEnv {
  fn set(&mut self, name: &str, value: &str) {
    self.vars.insert(name.to_string(), value.to_string());
  }
}

/// Apply an export plan to a sink, in plan order.
pub fn apply_exports<S: EnvSink>(exports: &[Export], sink: &mut S) {
  for export in exports {
    sink.set(export.key.as_str(), &export.value);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::keys::RecognizedKey;

  #[test]
  fn test_memory_env_apply() {
    let exports = vec![
      Export {
        key: RecognizedKey::Anthropic,
        value: "sk-ant".to_string(),
      },
      Export {
        key: RecognizedKey::OpenAi,
        value: "sk-openai".to_string(),
      },
    ];

    let mut env = MemoryEnv::new();
    apply_exports(&exports, &mut env);

    assert_eq!(env.len(), 2);
    assert_eq!(env.get("ANTHROPIC_API_KEY"), Some("sk-ant"));
    assert_eq!(env.get("OPENAI_API_KEY"), Some("sk-openai"));
  }

  #[test]
  fn test_apply_is_idempotent() {
    let exports = vec![Export {
      key: RecognizedKey::Anthropic,
      value: "sk-ant".to_string(),
    }];

    let mut env = MemoryEnv::new();
    apply_exports(&exports, &mut env);
    apply_exports(&exports, &mut env);

    assert_eq!(env.len(), 1);
    assert_eq!(env.get("ANTHROPIC_API_KEY"), Some("sk-ant"));
  }

  #[test]
  fn test_empty_plan_leaves_sink_empty() {
    let mut env = MemoryEnv::new();
    apply_exports(&[], &mut env);
    assert!(env.is_empty());
  }
}
