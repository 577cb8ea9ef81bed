//! A configured registry and emitter, shared across a compilation.

use tracing::{debug, trace};
use xamlc_codegen::{CSharpEmitter, Emitter, TargetLanguage, VisualBasicEmitter};
use xamlc_core::{ConvertResult, Expr, LocatedFailure, TypeName};

use crate::options::SessionOptions;
use crate::registry::ConverterRegistry;

/// Conversion entry point used while walking a markup document.
///
/// A session is immutable once built and can be shared between threads.
pub struct ConverterSession {
    registry: ConverterRegistry,
    emitter: Box<dyn Emitter>,
    options: SessionOptions,
}

impl ConverterSession {
    /// Build a session over the default catalog.
    pub fn new(options: SessionOptions) -> Self {
        Self::with_registry(options, ConverterRegistry::with_defaults())
    }

    /// Build a session over a custom registry.
    pub fn with_registry(options: SessionOptions, registry: ConverterRegistry) -> Self {
        let emit_options = options.emit_options();
        let emitter: Box<dyn Emitter> = match options.language {
            TargetLanguage::CSharp => Box::new(CSharpEmitter::new(emit_options)),
            TargetLanguage::VisualBasic => Box::new(VisualBasicEmitter::new(emit_options)),
        };
        Self {
            registry,
            emitter,
            options,
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    pub fn emitter(&self) -> &dyn Emitter {
        self.emitter.as_ref()
    }

    /// Whether `full_type_name` has a dedicated converter.
    pub fn is_supported_core_type(&self, full_type_name: &str) -> bool {
        self.registry.contains(full_type_name)
    }

    /// Convert an attribute value to source code for `full_type_name`.
    ///
    /// `aux` overrides the catalog's companion type names by position.
    pub fn convert_core_type(
        &self,
        full_type_name: &str,
        raw: &str,
        aux: &[&str],
    ) -> ConvertResult<String> {
        debug!(
            type_name = full_type_name,
            language = %self.options.language,
            "converting core type"
        );
        let result = self
            .registry
            .convert(full_type_name, raw, aux, self.emitter.as_ref());
        if let Err(failure) = &result {
            debug!(%failure, "core type conversion failed");
        }
        result
    }

    /// Like [`convert_core_type`](Self::convert_core_type), but types outside
    /// the catalog go through the runtime's invariant-string converter.
    pub fn convert_or_fallback(
        &self,
        full_type_name: &str,
        raw: &str,
        aux: &[&str],
    ) -> ConvertResult<String> {
        if self.is_supported_core_type(full_type_name) {
            return self.convert_core_type(full_type_name, raw, aux);
        }
        trace!(type_name = full_type_name, "using invariant-string fallback");
        let fallback = Expr::fallback(TypeName::from(full_type_name), raw);
        Ok(self.emitter.emit(&fallback))
    }

    /// Convert and attach the markup location to any failure.
    pub fn convert_at(
        &self,
        full_type_name: &str,
        raw: &str,
        aux: &[&str],
        line: u32,
        column: u32,
    ) -> Result<String, LocatedFailure> {
        self.convert_core_type(full_type_name, raw, aux)
            .map_err(|failure| failure.at(line, column))
    }
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl std::fmt::Debug for ConverterSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterSession")
            .field("language", &self.emitter.language())
            .field("converters", &self.registry.len())
            .field("options", &self.options)
            .finish()
    }
}
