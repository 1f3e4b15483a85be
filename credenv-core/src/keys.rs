//! # Recognized Keys
//!
//! The fixed set of credential keys credenv will ever export, in the order
//! they are processed. Every other key in a credential file is ignored.

use std::fmt;

/// A credential key recognized by credenv.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizedKey {
  /// `ANTHROPIC_API_KEY`
  Anthropic,
  /// `OPENAI_API_KEY`
  OpenAi,
}

/// Recognized keys in processing order: Anthropic first, then OpenAI.
pub const RECOGNIZED_KEYS: [RecognizedKey; 2] = [RecognizedKey::Anthropic, RecognizedKey::OpenAi];

impl RecognizedKey {
  /// The environment variable name this key is exported as.
  pub const fn as_str(self) -> &'static str {
    match self {
      RecognizedKey::Anthropic => "ANTHROPIC_API_KEY",
      RecognizedKey::OpenAi => "OPENAI_API_KEY",
    }
  }

  /// Human-readable provider label used in diagnostics.
  pub const fn provider(self) -> &'static str {
    match self {
      RecognizedKey::Anthropic => "Anthropic",
      RecognizedKey::OpenAi => "OpenAI",
    }
  }
}

impl fmt::Display for RecognizedKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_processing_order_is_anthropic_then_openai() {
    assert_eq!(RECOGNIZED_KEYS[0], RecognizedKey::Anthropic);
    assert_eq!(RECOGNIZED_KEYS[1], RecognizedKey::OpenAi);
  }

  #[test]
  fn test_key_names_match_environment_variables() {
    assert_eq!(RecognizedKey::Anthropic.as_str(), "ANTHROPIC_API_KEY");
    assert_eq!(RecognizedKey::OpenAi.as_str(), "OPENAI_API_KEY");
    assert_eq!(RecognizedKey::Anthropic.to_string(), "ANTHROPIC_API_KEY");
  }
}
