//! Error types for xamlc-compiler.

use thiserror::Error;
use xamlc_core::{ConversionFailure, LocatedFailure};

use crate::registry::RegistryError;

/// Result type for xamlc-compiler operations.
pub type Result<T> = std::result::Result<T, XamlcError>;

/// Errors surfaced by the compiler front end.
#[derive(Debug, Error)]
pub enum XamlcError {
    /// An attribute value could not be converted.
    #[error(transparent)]
    Conversion(#[from] ConversionFailure),

    /// A conversion failure with its markup location.
    #[error(transparent)]
    Located(#[from] LocatedFailure),

    /// The converter registry could not be built.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Session options could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_message_is_transparent() {
        let err: XamlcError = ConversionFailure::new("1,2,3", "System.Windows.Point").into();
        assert_eq!(err.to_string(), "Cannot convert '1,2,3' to 'System.Windows.Point'.");
    }

    #[test]
    fn test_located_message() {
        let err: XamlcError = ConversionFailure::new("bad", "System.Windows.Media.Color")
            .at(12, 7)
            .into();
        assert_eq!(
            err.to_string(),
            "line 12, column 7: Cannot convert 'bad' to 'System.Windows.Media.Color'."
        );
    }

    #[test]
    fn test_registry_message() {
        let err: XamlcError = RegistryError::DuplicateKey("system.windows.point".into()).into();
        assert_eq!(
            err.to_string(),
            "registry error: a converter is already registered for 'system.windows.point'"
        );
    }
}
