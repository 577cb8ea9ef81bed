//! Per-call destination and companion type names.

use crate::errors::{ConversionFailure, ConvertResult, FailureCause};
use crate::expr::TypeName;

/// What a single conversion call should construct.
///
/// Companion types are the auxiliary names a converter must reference, such
/// as the `Color` type wrapped by a brush or the `Point` type inside a
/// collection. They are supplied per call so one converter can serve a family
/// of destination types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionTarget {
    pub destination: TypeName,
    pub companions: Vec<TypeName>,
}

impl ConversionTarget {
    pub fn new(destination: impl Into<TypeName>) -> Self {
        Self {
            destination: destination.into(),
            companions: Vec::new(),
        }
    }

    /// Append a companion type name.
    pub fn with_companion(mut self, name: impl Into<TypeName>) -> Self {
        self.companions.push(name.into());
        self
    }

    pub fn destination(&self) -> &TypeName {
        &self.destination
    }

    pub fn companion(&self, index: usize) -> Option<&TypeName> {
        self.companions.get(index)
    }

    /// Companion type at `index`, or a failure attributed to `source`.
    pub fn require_companion(&self, source: &str, index: usize) -> ConvertResult<&TypeName> {
        self.companion(index)
            .ok_or_else(|| self.fail(source, FailureCause::MissingCompanionType(index)))
    }

    /// A failure for `source` against this destination.
    pub fn fail(&self, source: &str, cause: FailureCause) -> ConversionFailure {
        ConversionFailure::new(source, self.destination.as_str()).with_cause(cause)
    }

    /// A failure for `source` with no further detail.
    pub fn reject(&self, source: &str) -> ConversionFailure {
        ConversionFailure::new(source, self.destination.as_str())
    }

    /// The same companions, aimed at a different destination.
    pub fn retarget(&self, destination: TypeName) -> Self {
        Self {
            destination,
            companions: self.companions.clone(),
        }
    }
}
