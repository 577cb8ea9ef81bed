//! Session configuration.

use serde::{Deserialize, Serialize};
use xamlc_codegen::{EmitOptions, TargetLanguage};
use xamlc_core::names;

use crate::error::Result;

/// Options for a conversion session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Language of the generated code.
    pub language: TargetLanguage,
    /// Emit `global::` / `Global.` qualified type names.
    pub qualify_global_names: bool,
    /// Type providing `ConvertFromInvariantString` for the fallback path.
    pub fallback_converter: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            language: TargetLanguage::CSharp,
            qualify_global_names: true,
            fallback_converter: names::TYPE_FROM_STRING_CONVERTERS.to_string(),
        }
    }
}

impl SessionOptions {
    /// Create default session options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target language.
    pub fn with_language(mut self, language: TargetLanguage) -> Self {
        self.language = language;
        self
    }

    /// Qualify emitted type names with the global namespace alias.
    pub fn with_global_names(mut self, qualify: bool) -> Self {
        self.qualify_global_names = qualify;
        self
    }

    /// Set the fallback converter type.
    pub fn with_fallback_converter(mut self, name: impl Into<String>) -> Self {
        self.fallback_converter = name.into();
        self
    }

    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Emitter options derived from these settings.
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions::new()
            .with_global_names(self.qualify_global_names)
            .with_fallback_converter(self.fallback_converter.as_str())
    }
}
