//! Invariant-culture time span grammar.
//!
//! `[ws][-]{ d | [d.]hh:mm[:ss[.fffffff]] }[ws]`, measured in 100ns ticks.

use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, opt},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};
use xamlc_core::FailureCause;

pub const TICKS_PER_SECOND: i64 = 10_000_000;
const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;
const MAX_FRACTION_DIGITS: usize = 7;

type Clock<'a> = (Option<&'a str>, &'a str, &'a str, Option<(&'a str, Option<&'a str>)>);

fn days_only(input: &str) -> IResult<&str, &str> {
    all_consuming(digit1)(input)
}

fn clock(input: &str) -> IResult<&str, Clock<'_>> {
    all_consuming(tuple((
        opt(terminated(digit1, char('.'))),
        digit1,
        preceded(char(':'), digit1),
        opt(pair(
            preceded(char(':'), digit1),
            opt(preceded(char('.'), digit1)),
        )),
    )))(input)
}

/// Parse a time span into ticks.
pub fn parse_time_span(input: &str) -> Result<i64, FailureCause> {
    let invalid = || FailureCause::InvalidTimeSpan(input.to_string());

    let trimmed = input.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let ticks = if let Ok((_, days)) = days_only(body) {
        let days: i64 = days.parse().map_err(|_| invalid())?;
        days.checked_mul(TICKS_PER_DAY)
    } else {
        let (_, (days, hours, minutes, rest)) = clock(body).map_err(|_| invalid())?;
        let (seconds, fraction) = rest.unwrap_or(("0", None));

        let days: i64 = days.unwrap_or("0").parse().map_err(|_| invalid())?;
        let hours = bounded(hours, 24).ok_or_else(invalid)?;
        let minutes = bounded(minutes, 60).ok_or_else(invalid)?;
        let seconds = bounded(seconds, 60).ok_or_else(invalid)?;
        let fraction = fraction.map_or(Some(0), fraction_ticks).ok_or_else(invalid)?;

        days.checked_mul(TICKS_PER_DAY).and_then(|t| {
            t.checked_add(
                hours * TICKS_PER_HOUR
                    + minutes * TICKS_PER_MINUTE
                    + seconds * TICKS_PER_SECOND
                    + fraction,
            )
        })
    };
    let ticks = ticks.ok_or_else(invalid)?;

    Ok(if negative { -ticks } else { ticks })
}

/// A clock component strictly below `limit`.
fn bounded(digits: &str, limit: i64) -> Option<i64> {
    digits.parse::<i64>().ok().filter(|v| *v < limit)
}

/// Fractional seconds, right-padded to seven digits.
fn fraction_ticks(digits: &str) -> Option<i64> {
    if digits.len() > MAX_FRACTION_DIGITS {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    Some(value * 10_i64.pow((MAX_FRACTION_DIGITS - digits.len()) as u32))
}
