//! Named font weights and their OpenType weight codes.
//!
//! Each code maps to exactly one name so the table can be read in both
//! directions.

pub const FONT_WEIGHTS: &[(&str, u16)] = &[
    ("Thin", 100),
    ("ExtraLight", 200),
    ("Light", 300),
    ("SemiLight", 350),
    ("Normal", 400),
    ("Medium", 500),
    ("SemiBold", 600),
    ("Bold", 700),
    ("ExtraBold", 800),
    ("Black", 900),
    ("ExtraBlack", 950),
];

/// Canonical name for a weight name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<&'static str> {
    FONT_WEIGHTS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|&(known, _)| known)
}

/// Canonical name for a numeric weight code.
pub fn by_code(code: u16) -> Option<&'static str> {
    FONT_WEIGHTS
        .iter()
        .find(|&&(_, known)| known == code)
        .map(|&(name, _)| name)
}

/// Numeric code for a canonical name.
pub fn code_of(name: &str) -> Option<u16> {
    FONT_WEIGHTS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, code)| code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_round_trips() {
        for &(name, code) in FONT_WEIGHTS {
            assert_eq!(by_code(code), Some(name));
            assert_eq!(code_of(name), Some(code));
            assert_eq!(by_name(&name.to_lowercase()), Some(name));
        }
    }

    #[test]
    fn test_unknown() {
        assert_eq!(by_code(450), None);
        assert_eq!(by_name("Heavyish"), None);
    }
}
