//! Source rendering for converter results.
//!
//! Converters describe *what* value to build as an [`Expr`](xamlc_core::Expr);
//! an [`Emitter`] decides how that value is spelled in the target language.
//!
//! # Features
//!
//! - `csharp` - Render C# expressions
//! - `visual-basic` - Render Visual Basic expressions
//!
//! # Example
//!
//! ```ignore
//! use xamlc_codegen::{CSharpEmitter, EmitOptions, Emitter};
//!
//! let emitter = CSharpEmitter::new(EmitOptions::default());
//! let code = emitter.emit(&expr);
//! ```

pub mod emitters;

pub use emitters::{EmitOptions, Emitter, TargetLanguage};

#[cfg(feature = "csharp")]
pub use emitters::CSharpEmitter;

#[cfg(feature = "visual-basic")]
pub use emitters::VisualBasicEmitter;
