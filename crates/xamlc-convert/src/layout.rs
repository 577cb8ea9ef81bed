//! Thickness, corner radius and grid length.

use xamlc_core::{ConversionTarget, ConvertResult, Expr, FailureCause, Literal};
use xamlc_parser::{read_leading_number, split_numeric_list};

use crate::raw_args;

/// `new Thickness(...)` from one, two, or four lengths.
///
/// Two values are `horizontal, vertical` and expand to
/// `left, top, right, bottom`.
pub fn convert_to_thickness(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let tokens = split_numeric_list(source);
    let args = match tokens.as_slice() {
        [uniform] => vec![Expr::raw(*uniform)],
        [horizontal, vertical] => raw_args(&[*horizontal, *vertical, *horizontal, *vertical]),
        [_, _, _, _] => raw_args(&tokens),
        _ => {
            return Err(target.fail(
                source,
                FailureCause::TokenCount {
                    expected: "1, 2 or 4",
                    found: tokens.len(),
                },
            ))
        }
    };
    Ok(Expr::construct(target.destination().clone(), args))
}

/// `new CornerRadius(...)` from one or four radii.
pub fn convert_to_corner_radius(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let tokens = split_numeric_list(source);
    match tokens.len() {
        1 | 4 => Ok(Expr::construct(
            target.destination().clone(),
            raw_args(&tokens),
        )),
        found => Err(target.fail(
            source,
            FailureCause::TokenCount {
                expected: "1 or 4",
                found,
            },
        )),
    }
}

/// `new GridLength(value, GridUnitType.Unit)`. Companion 0 is the unit enum.
///
/// `auto` is one automatic unit, `N*` (or bare `*`) is star sizing, and
/// anything else reads its leading number as pixels.
pub fn convert_to_grid_length(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let unit_type = target.require_companion(source, 0)?.clone();
    let value = source.trim().to_lowercase();

    let (amount, unit) = if value == "auto" {
        (double("1"), "Auto")
    } else if value.ends_with('*') {
        (leading_or(&value, "1"), "Star")
    } else {
        (leading_or(&value, "0"), "Pixel")
    };

    Ok(Expr::construct(
        target.destination().clone(),
        vec![amount, Expr::member(unit_type, unit)],
    ))
}

fn double(digits: &str) -> Expr {
    Expr::Literal(Literal::Double(digits.to_string()))
}

fn leading_or(value: &str, default: &str) -> Expr {
    match read_leading_number(value) {
        Some(number) => Expr::raw(number),
        None => double(default),
    }
}
