//! Converter registry keyed by lower-cased type name.

use indexmap::IndexMap;
use thiserror::Error;
use xamlc_codegen::Emitter;
use xamlc_convert::ConvertFn;
use xamlc_core::{
    ConversionFailure, ConversionTarget, ConvertResult, Expr, FailureCause, TypeName,
};

use crate::catalog::{CatalogEntry, CATALOG};

/// Errors raised while building a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a converter is already registered for '{0}'")]
    DuplicateKey(String),
}

/// A converter together with its default target types.
#[derive(Clone)]
pub struct ConverterEntry {
    key: String,
    destination: TypeName,
    companions: Vec<TypeName>,
    convert: ConvertFn,
}

impl ConverterEntry {
    pub fn new(key: &str, destination: impl Into<TypeName>, convert: ConvertFn) -> Self {
        Self {
            key: key.to_lowercase(),
            destination: destination.into(),
            companions: Vec::new(),
            convert,
        }
    }

    pub fn with_companion(mut self, name: impl Into<TypeName>) -> Self {
        self.companions.push(name.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn destination(&self) -> &TypeName {
        &self.destination
    }

    pub fn companions(&self) -> &[TypeName] {
        &self.companions
    }

    /// The default target with caller-supplied names overriding companions
    /// position by position.
    pub fn target(&self, aux: &[&str]) -> ConversionTarget {
        let len = self.companions.len().max(aux.len());
        let mut target = ConversionTarget::new(self.destination.clone());
        for index in 0..len {
            let name = match aux.get(index) {
                Some(name) => TypeName::from(*name),
                None => self.companions[index].clone(),
            };
            target = target.with_companion(name);
        }
        target
    }

    /// Run the converter against the default target.
    pub fn convert(&self, raw: &str, aux: &[&str]) -> ConvertResult<Expr> {
        (self.convert)(raw, &self.target(aux))
    }
}

impl std::fmt::Debug for ConverterEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterEntry")
            .field("key", &self.key)
            .field("destination", &self.destination)
            .field("companions", &self.companions)
            .finish_non_exhaustive()
    }
}

impl From<&CatalogEntry> for ConverterEntry {
    fn from(entry: &CatalogEntry) -> Self {
        entry.companions.iter().fold(
            ConverterEntry::new(entry.key, entry.destination, entry.convert),
            |converter, companion| converter.with_companion(*companion),
        )
    }
}

/// Registry of core-type converters.
///
/// Built once, then only read. Lookups ignore case and a leading
/// `global::` or `Global.` qualifier.
#[derive(Debug, Clone, Default)]
pub struct ConverterRegistry {
    entries: IndexMap<String, ConverterEntry>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the full core-type catalog.
    pub fn with_defaults() -> Self {
        let entries = CATALOG
            .iter()
            .map(|entry| (entry.key.to_string(), ConverterEntry::from(entry)))
            .collect();
        Self { entries }
    }

    /// Register a converter. Existing keys are never overwritten.
    pub fn register(&mut self, entry: ConverterEntry) -> Result<(), RegistryError> {
        if self.entries.contains_key(entry.key()) {
            return Err(RegistryError::DuplicateKey(entry.key().to_string()));
        }
        self.entries.insert(entry.key().to_string(), entry);
        Ok(())
    }

    /// Find the converter for a fully-qualified type name.
    pub fn lookup(&self, type_full_name: &str) -> Option<&ConverterEntry> {
        self.entries.get(&normalize_key(type_full_name))
    }

    pub fn contains(&self, type_full_name: &str) -> bool {
        self.lookup(type_full_name).is_some()
    }

    /// Registered keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert `raw` to the semantic result for `type_full_name`.
    pub fn convert_expr(
        &self,
        type_full_name: &str,
        raw: &str,
        aux: &[&str],
    ) -> ConvertResult<Expr> {
        let entry = self.lookup(type_full_name).ok_or_else(|| {
            ConversionFailure::new(raw, type_full_name).with_cause(FailureCause::UnsupportedType)
        })?;
        entry.convert(raw, aux)
    }

    /// Convert `raw` and render it with `emitter`.
    pub fn convert(
        &self,
        type_full_name: &str,
        raw: &str,
        aux: &[&str],
        emitter: &dyn Emitter,
    ) -> ConvertResult<String> {
        self.convert_expr(type_full_name, raw, aux)
            .map(|expr| emitter.emit(&expr))
    }
}

fn normalize_key(type_full_name: &str) -> String {
    let key = type_full_name.trim().to_lowercase();
    match key
        .strip_prefix("global::")
        .or_else(|| key.strip_prefix("global."))
    {
        Some(rest) => rest.to_string(),
        None => key,
    }
}
