//! Tokenizers for numeric lists and color literals.

use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1},
    combinator::{all_consuming, opt, recognize},
    sequence::pair,
    IResult,
};
use smallvec::SmallVec;
use xamlc_core::colors::Argb;
use xamlc_core::FailureCause;

/// Tokens of a comma/space separated list. Matrices are the longest common case.
pub type NumericList<'a> = SmallVec<[&'a str; 6]>;

/// Split on `,` and ` `, dropping empty tokens.
pub fn split_numeric_list(input: &str) -> NumericList<'_> {
    input
        .split([',', ' '])
        .filter(|token| !token.is_empty())
        .collect()
}

/// Value of a single hex digit.
pub fn parse_hex_digit(c: char) -> Result<u8, FailureCause> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(FailureCause::InvalidToken(c)),
    }
}

/// Two hex digits as one byte.
fn hex_byte(high: char, low: char) -> Result<u8, FailureCause> {
    Ok(parse_hex_digit(high)? * 16 + parse_hex_digit(low)?)
}

/// One hex digit duplicated into both nibbles (`a` -> `0xaa`).
fn hex_nibble(c: char) -> Result<u8, FailureCause> {
    Ok(parse_hex_digit(c)? * 17)
}

/// Parse `#rgb`, `#argb`, `#rrggbb`, or `#aarrggbb`.
pub fn parse_hex_color_body(input: &str) -> Result<Argb, FailureCause> {
    let chars: SmallVec<[char; 9]> = input.chars().collect();
    match chars.first() {
        Some('#') => {}
        Some(&other) => return Err(FailureCause::InvalidToken(other)),
        None => {
            return Err(FailureCause::TokenCount {
                expected: "4, 5, 7 or 9",
                found: 0,
            })
        }
    }

    match chars.len() {
        9 => Ok(Argb::new(
            hex_byte(chars[1], chars[2])?,
            hex_byte(chars[3], chars[4])?,
            hex_byte(chars[5], chars[6])?,
            hex_byte(chars[7], chars[8])?,
        )),
        7 => Ok(Argb::new(
            255,
            hex_byte(chars[1], chars[2])?,
            hex_byte(chars[3], chars[4])?,
            hex_byte(chars[5], chars[6])?,
        )),
        5 => Ok(Argb::new(
            hex_nibble(chars[1])?,
            hex_nibble(chars[2])?,
            hex_nibble(chars[3])?,
            hex_nibble(chars[4])?,
        )),
        4 => Ok(Argb::new(
            255,
            hex_nibble(chars[1])?,
            hex_nibble(chars[2])?,
            hex_nibble(chars[3])?,
        )),
        found => Err(FailureCause::TokenCount {
            expected: "4, 5, 7 or 9",
            found,
        }),
    }
}

/// A linear-light color with float channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScRgb {
    pub a: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Parse `sc# r g b` or `sc# a r g b`.
pub fn parse_sc_rgb(input: &str) -> Result<ScRgb, FailureCause> {
    let body = input
        .strip_prefix("sc#")
        .ok_or_else(|| FailureCause::Unsupported("scRGB colors must start with 'sc#'".into()))?;

    let channels = split_numeric_list(body)
        .iter()
        .map(|token| {
            token
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| FailureCause::InvalidNumber(token.to_string()))
        })
        .collect::<Result<SmallVec<[f32; 4]>, _>>()?;

    match channels.as_slice() {
        &[r, g, b] => Ok(ScRgb { a: 1.0, r, g, b }),
        &[a, r, g, b] => Ok(ScRgb { a, r, g, b }),
        other => Err(FailureCause::TokenCount {
            expected: "3 or 4",
            found: other.len(),
        }),
    }
}

/// Digits with at most one decimal point.
fn leading_number(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit0, opt(pair(char('.'), digit0))))(input)
}

/// Read the numeric prefix of a grid length.
///
/// Returns `None` when there is no prefix. A lone `.` reads as zero and a
/// trailing `.` is dropped so the result is always a valid literal.
pub fn read_leading_number(input: &str) -> Option<&str> {
    let (_, prefix) = leading_number(input).ok()?;
    match prefix {
        "" => None,
        "." => Some("0"),
        _ => Some(prefix.strip_suffix('.').unwrap_or(prefix)),
    }
}

/// Unsigned decimal; a `.` must be followed by digits (`3`, `2.5`, `.5`).
fn decimal(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        recognize(pair(char('.'), digit1)),
    ))(input)
}

/// Whether `input` is exactly one unsigned decimal literal.
pub fn is_decimal(input: &str) -> bool {
    all_consuming(decimal)(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_numeric_list() {
        assert_eq!(split_numeric_list("1,2, 3  4").as_slice(), &["1", "2", "3", "4"]);
        assert!(split_numeric_list("").is_empty());
        assert!(split_numeric_list(" , ,").is_empty());
        assert_eq!(split_numeric_list("-1.5e3").as_slice(), &["-1.5e3"]);
    }

    #[test]
    fn test_parse_hex_digit() {
        assert_eq!(parse_hex_digit('0'), Ok(0));
        assert_eq!(parse_hex_digit('9'), Ok(9));
        assert_eq!(parse_hex_digit('a'), Ok(10));
        assert_eq!(parse_hex_digit('F'), Ok(15));
        assert_eq!(parse_hex_digit('g'), Err(FailureCause::InvalidToken('g')));
    }

    #[test]
    fn test_short_hex() {
        assert_eq!(parse_hex_color_body("#abc"), Ok(Argb::new(255, 0xaa, 0xbb, 0xcc)));
        assert_eq!(parse_hex_color_body("#8abc"), Ok(Argb::new(0x88, 0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn test_long_hex() {
        assert_eq!(parse_hex_color_body("#FF00FF"), Ok(Argb::new(255, 255, 0, 255)));
        assert_eq!(parse_hex_color_body("#80102030"), Ok(Argb::new(0x80, 0x10, 0x20, 0x30)));
    }

    #[test]
    fn test_bad_hex() {
        assert_eq!(
            parse_hex_color_body("#12345G"),
            Err(FailureCause::InvalidToken('G'))
        );
        assert!(matches!(
            parse_hex_color_body("#12"),
            Err(FailureCause::TokenCount { found: 3, .. })
        ));
    }

    #[test]
    fn test_sc_rgb() {
        assert_eq!(
            parse_sc_rgb("sc# 1 0.5 0.2"),
            Ok(ScRgb { a: 1.0, r: 1.0, g: 0.5, b: 0.2 })
        );
        assert_eq!(
            parse_sc_rgb("sc#0.5,1,0,0"),
            Ok(ScRgb { a: 0.5, r: 1.0, g: 0.0, b: 0.0 })
        );
        assert!(matches!(
            parse_sc_rgb("sc# 1 0"),
            Err(FailureCause::TokenCount { found: 2, .. })
        ));
        assert_eq!(
            parse_sc_rgb("sc# 1 x 0"),
            Err(FailureCause::InvalidNumber("x".into()))
        );
    }

    #[test]
    fn test_sc_rgb_rejects_non_finite() {
        assert_eq!(
            parse_sc_rgb("sc# nan 0 0"),
            Err(FailureCause::InvalidNumber("nan".into()))
        );
        assert_eq!(
            parse_sc_rgb("sc# inf 1 1"),
            Err(FailureCause::InvalidNumber("inf".into()))
        );
        assert_eq!(
            parse_sc_rgb("sc# 1 Infinity 0 0"),
            Err(FailureCause::InvalidNumber("Infinity".into()))
        );
        assert_eq!(
            parse_sc_rgb("sc# 1 1e40 0"),
            Err(FailureCause::InvalidNumber("1e40".into()))
        );
    }

    #[test]
    fn test_is_decimal() {
        assert!(is_decimal("3"));
        assert!(is_decimal("2.5"));
        assert!(is_decimal(".5"));
        assert!(!is_decimal("3."));
        assert!(!is_decimal("."));
        assert!(!is_decimal(""));
        assert!(!is_decimal("-1"));
        assert!(!is_decimal("inf"));
        assert!(!is_decimal("nan"));
        assert!(!is_decimal("1e3"));
        assert!(!is_decimal("1.2.3"));
    }

    #[test]
    fn test_read_leading_number() {
        assert_eq!(read_leading_number("150"), Some("150"));
        assert_eq!(read_leading_number("2*"), Some("2"));
        assert_eq!(read_leading_number("1.5.3*"), Some("1.5"));
        assert_eq!(read_leading_number(".5*"), Some(".5"));
        assert_eq!(read_leading_number(".*"), Some("0"));
        assert_eq!(read_leading_number("5.px"), Some("5"));
        assert_eq!(read_leading_number("*"), None);
        assert_eq!(read_leading_number("-3"), None);
    }

    proptest! {
        #[test]
        fn prop_long_hex_matches_reference(a: u8, r: u8, g: u8, b: u8) {
            let argb = format!("#{a:02X}{r:02x}{g:02X}{b:02x}");
            prop_assert_eq!(parse_hex_color_body(&argb), Ok(Argb::new(a, r, g, b)));

            let rgb = format!("#{r:02x}{g:02X}{b:02x}");
            prop_assert_eq!(parse_hex_color_body(&rgb), Ok(Argb::new(255, r, g, b)));
        }

        #[test]
        fn prop_short_hex_duplicates_nibbles(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
            let short = format!("#{r:x}{g:X}{b:x}");
            prop_assert_eq!(
                parse_hex_color_body(&short),
                Ok(Argb::new(255, r * 17, g * 17, b * 17))
            );
        }
    }
}
