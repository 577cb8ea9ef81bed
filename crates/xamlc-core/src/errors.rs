//! Error types for core-type conversion.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type ConvertResult<T> = std::result::Result<T, ConversionFailure>;

/// A raw attribute string could not be converted to its destination type.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Cannot convert '{value}' to '{type_name}'.")]
pub struct ConversionFailure {
    /// The offending raw string, exactly as passed in.
    pub value: String,
    /// Full name of the destination type.
    pub type_name: String,
    /// What went wrong inside the grammar, when known.
    #[source]
    pub cause: Option<FailureCause>,
}

impl ConversionFailure {
    pub fn new(value: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            type_name: type_name.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: FailureCause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Attribute this failure to another destination type, keeping the cause.
    pub fn retarget(self, type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..self
        }
    }

    /// Attach a markup source location.
    pub fn at(self, line: u32, column: u32) -> LocatedFailure {
        LocatedFailure {
            failure: self,
            line,
            column,
        }
    }
}

/// Nested cause of a [`ConversionFailure`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FailureCause {
    #[error("Token is not valid: {0:?}")]
    InvalidToken(char),

    #[error("Unknown {kind} name: {name}")]
    UnknownName { kind: &'static str, name: String },

    #[error("Expected {expected} numeric tokens, found {found}")]
    TokenCount { expected: &'static str, found: usize },

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid time span: {0}")]
    InvalidTimeSpan(String),

    #[error("{0}")]
    Unsupported(String),

    #[error("No companion type name at position {0}")]
    MissingCompanionType(usize),

    #[error("Type is not a supported core type")]
    UnsupportedType,
}

/// A conversion failure together with the markup location it came from.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}, column {column}: {failure}")]
pub struct LocatedFailure {
    #[source]
    pub failure: ConversionFailure,
    pub line: u32,
    pub column: u32,
}
