//! Colors and solid color brushes.

use xamlc_core::colors::{self, Argb};
use xamlc_core::{ConversionTarget, ConvertResult, Expr, FailureCause, Literal, TypeName};
use xamlc_parser::{parse_hex_color_body, parse_sc_rgb};

/// The three spellings a color attribute may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorForm {
    Hex,
    ScRgb,
    Named,
}

fn classify(value: &str) -> ColorForm {
    let len = value.chars().count();
    if value.starts_with('#') && matches!(len, 4 | 5 | 7 | 9) {
        ColorForm::Hex
    } else if value.starts_with("sc#") {
        ColorForm::ScRgb
    } else {
        ColorForm::Named
    }
}

fn from_argb(owner: TypeName, argb: Argb) -> Expr {
    let byte = |v: u8| Expr::Literal(Literal::Byte(v));
    Expr::invoke(
        owner,
        "FromArgb",
        vec![byte(argb.a), byte(argb.r), byte(argb.g), byte(argb.b)],
    )
}

/// Convert `#rgb`, `#argb`, `#rrggbb`, `#aarrggbb`, `sc#` or a named color.
pub fn convert_to_color(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let value = source.trim();
    let owner = target.destination().clone();

    match classify(value) {
        ColorForm::Hex => {
            let argb = parse_hex_color_body(value).map_err(|cause| target.fail(source, cause))?;
            Ok(from_argb(owner, argb))
        }
        ColorForm::ScRgb => {
            let sc = parse_sc_rgb(value).map_err(|cause| target.fail(source, cause))?;
            let float = |v: f32| Expr::Literal(Literal::Float(v));
            Ok(Expr::invoke(
                owner,
                "FromScRgb",
                vec![float(sc.a), float(sc.r), float(sc.g), float(sc.b)],
            ))
        }
        ColorForm::Named => colors::lookup(value)
            .map(|argb| from_argb(owner, argb))
            .ok_or_else(|| {
                target.fail(
                    source,
                    FailureCause::UnknownName {
                        kind: "color",
                        name: value.to_string(),
                    },
                )
            }),
    }
}

/// `new SolidColorBrush(color)`. Companion 0 is the color type.
///
/// Failures from the inner color are reported against the brush type.
pub fn convert_to_brush(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let color_type = target.require_companion(source, 0)?.clone();
    let color = convert_to_color(source, &ConversionTarget::new(color_type))
        .map_err(|failure| failure.retarget(target.destination().as_str()))?;
    Ok(Expr::construct(target.destination().clone(), vec![color]))
}
