//! Core-type conversion for the markup compiler.
//!
//! Markup attributes arrive as strings. For the fixed catalog of core types
//! (colors, brushes, thickness, grid lengths, key times and friends) this
//! crate turns the string into a C# or Visual Basic expression that builds the
//! typed value, or reports why it cannot.
//!
//! # Example
//!
//! ```ignore
//! use xamlc_compiler::{ConverterSession, SessionOptions, TargetLanguage};
//!
//! let session = ConverterSession::new(
//!     SessionOptions::new().with_language(TargetLanguage::VisualBasic),
//! );
//! let code = session.convert_core_type("System.Windows.Thickness", "1,2", &[])?;
//! assert_eq!(code, "New Global.System.Windows.Thickness(1, 2, 1, 2)");
//! ```

pub mod catalog;
pub mod error;
pub mod options;
pub mod registry;
pub mod session;

pub use error::{Result, XamlcError};
pub use options::SessionOptions;
pub use registry::{ConverterEntry, ConverterRegistry, RegistryError};
pub use session::ConverterSession;

pub use xamlc_codegen::{EmitOptions, Emitter, TargetLanguage};
pub use xamlc_core::{ConversionFailure, Expr, FailureCause, LocatedFailure};
