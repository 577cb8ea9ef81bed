//! Per-type converters for markup attribute values.
//!
//! Every converter is a pure function from the raw attribute string and a
//! [`ConversionTarget`] to a language-neutral [`Expr`]. Rendering the
//! expression as C# or Visual Basic is left to `xamlc-codegen`.
//!
//! # Example
//!
//! ```ignore
//! use xamlc_convert::layout::convert_to_thickness;
//! use xamlc_core::ConversionTarget;
//!
//! let target = ConversionTarget::new("System.Windows.Thickness");
//! let expr = convert_to_thickness("1,2", &target)?;
//! ```

pub mod animation;
pub mod color;
pub mod geometry;
pub mod layout;
pub mod media;
pub mod text;

use xamlc_core::{ConversionTarget, ConvertResult, Expr, FailureCause, TypeName};
use xamlc_parser::{split_numeric_list, NumericList};

/// Signature shared by every converter.
pub type ConvertFn = fn(&str, &ConversionTarget) -> ConvertResult<Expr>;

/// Split `source` and require exactly `count` tokens.
fn exact_tokens<'a>(
    source: &'a str,
    target: &ConversionTarget,
    count: usize,
    expected: &'static str,
) -> ConvertResult<NumericList<'a>> {
    let tokens = split_numeric_list(source);
    if tokens.len() == count {
        Ok(tokens)
    } else {
        Err(target.fail(
            source,
            FailureCause::TokenCount {
                expected,
                found: tokens.len(),
            },
        ))
    }
}

/// Numeric tokens as verbatim literals.
fn raw_args(tokens: &[&str]) -> Vec<Expr> {
    tokens.iter().map(|token| Expr::raw(*token)).collect()
}

/// `new Point(x, y)`.
fn point(point_type: &TypeName, x: &str, y: &str) -> Expr {
    Expr::construct(point_type.clone(), vec![Expr::raw(x), Expr::raw(y)])
}
