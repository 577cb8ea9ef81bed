//! Font and text decoration values.

use xamlc_core::font_weights;
use xamlc_core::{ConversionTarget, ConvertResult, Expr, FailureCause};

const FONT_STYLES: [&str; 3] = ["Normal", "Oblique", "Italic"];

/// `FontWeights.Name` from a weight name or its numeric code.
/// Companion 0 is the `FontWeights` owner.
pub fn convert_to_font_weight(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let owner = target.require_companion(source, 0)?.clone();
    let value = source.trim();

    let name = font_weights::by_name(value)
        .or_else(|| value.parse::<u16>().ok().and_then(font_weights::by_code))
        .ok_or_else(|| {
            target.fail(
                source,
                FailureCause::UnknownName {
                    kind: "font weight",
                    name: value.to_string(),
                },
            )
        })?;

    Ok(Expr::member(owner, name))
}

/// `FontStyles.Normal`, `.Oblique` or `.Italic`. Companion 0 is the owner.
pub fn convert_to_font_style(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let owner = target.require_companion(source, 0)?.clone();
    let value = source.trim();

    FONT_STYLES
        .iter()
        .find(|style| style.eq_ignore_ascii_case(value))
        .map(|style| Expr::member(owner, *style))
        .ok_or_else(|| {
            target.fail(
                source,
                FailureCause::UnknownName {
                    kind: "font style",
                    name: value.to_string(),
                },
            )
        })
}

/// Stretch values are not interpreted; every input yields the default.
pub fn convert_to_font_stretch(_source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    Ok(Expr::new_default(target.destination().clone()))
}

/// `new FontFamily("name")` with surrounding whitespace removed.
pub fn convert_to_font_family(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    Ok(Expr::construct(
        target.destination().clone(),
        vec![Expr::string(source.trim())],
    ))
}

/// A single text decoration, or null for `None`. Companion 0 is the
/// `TextDecorations` owner.
pub fn convert_to_text_decorations(
    source: &str,
    target: &ConversionTarget,
) -> ConvertResult<Expr> {
    let owner = target.require_companion(source, 0)?.clone();

    let member = match source.trim().to_lowercase().as_str() {
        "underline" => "Underline",
        "strikethrough" => "Strikethrough",
        "overline" => "OverLine",
        "none" => return Ok(Expr::Null),
        _ => {
            return Err(target.fail(
                source,
                FailureCause::UnknownName {
                    kind: "text decoration",
                    name: source.trim().to_string(),
                },
            ))
        }
    };
    Ok(Expr::member(owner, member))
}
