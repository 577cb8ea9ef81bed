//! Animation timing: durations, key times, repeat behaviors and key splines.

use tracing::warn;
use xamlc_core::names;
use xamlc_core::{
    Construct, ConversionFailure, ConversionTarget, ConvertResult, Expr, FailureCause, Literal,
    TypeName,
};
use xamlc_parser::{is_decimal, parse_time_span, split_numeric_list};

use crate::point;

/// `new System.TimeSpan(ticks)`, with failures attributed to `target`.
pub fn time_span(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let ticks = parse_time_span(source).map_err(|cause| target.fail(source, cause))?;
    Ok(Expr::construct(
        TypeName::from(names::TIME_SPAN),
        vec![Expr::Literal(Literal::Long(ticks))],
    ))
}

/// `Duration.Automatic`, `Duration.Forever`, or a time span.
pub fn convert_to_duration(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let value = source.trim();
    for keyword in ["Automatic", "Forever"] {
        if value.eq_ignore_ascii_case(keyword) {
            return Ok(Expr::member(target.destination().clone(), keyword));
        }
    }
    time_span(source, target)
}

/// `KeyTime.Uniform` or `KeyTime.FromTimeSpan(span)`.
///
/// `Paced` and percentage key times are recognized but rejected.
pub fn convert_to_key_time(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let destination = target.destination();
    let value = source.trim();

    if value == "Paced" {
        warn!(value, "paced key times are not supported");
        return Err(target.fail(
            source,
            FailureCause::Unsupported(format!(
                "The '{destination}.Paced' property is not supported yet."
            )),
        ));
    }
    if value.ends_with('%') {
        warn!(value, "percentage key times are not supported");
        return Err(target.fail(
            source,
            FailureCause::Unsupported(format!(
                "Percentage values for '{destination}' are not supported yet."
            )),
        ));
    }
    if value == "Uniform" {
        return Ok(Expr::member(destination.clone(), "Uniform"));
    }

    Ok(Expr::invoke(
        destination.clone(),
        "FromTimeSpan",
        vec![time_span(source, target)?],
    ))
}

/// `RepeatBehavior.Forever`, `new RepeatBehavior(count)` for `Nx`, or a
/// duration given as a time span.
pub fn convert_to_repeat_behavior(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    let value = source.trim().to_lowercase();

    if value == "forever" {
        return Ok(Expr::member(target.destination().clone(), "Forever"));
    }
    if let Some(count) = value.strip_suffix('x') {
        let count = count.trim_end();
        if !is_decimal(count) {
            return Err(target.fail(source, FailureCause::InvalidNumber(count.to_string())));
        }
        return Ok(Expr::construct(
            target.destination().clone(),
            vec![Expr::raw(count)],
        ));
    }

    time_span(&value, target).map_err(|failure| ConversionFailure {
        value: source.to_string(),
        ..failure
    })
}

/// `new KeySpline()` for an empty value, otherwise both control points as
/// named initializers. Companion 0 is the point type.
pub fn convert_to_key_spline(source: &str, target: &ConversionTarget) -> ConvertResult<Expr> {
    if source.is_empty() {
        return Ok(Expr::new_default(target.destination().clone()));
    }

    let tokens = split_numeric_list(source);
    if tokens.len() != 4 {
        return Err(target.fail(
            source,
            FailureCause::TokenCount {
                expected: "4",
                found: tokens.len(),
            },
        ));
    }

    let point_type = target.require_companion(source, 0)?;
    Ok(Expr::New(
        Construct::new(target.destination().clone())
            .with_initializer("ControlPoint1", point(point_type, tokens[0], tokens[1]))
            .with_initializer("ControlPoint2", point(point_type, tokens[2], tokens[3])),
    ))
}
