//! Lexical primitives for markup attribute grammars.
//!
//! The per-type converters build on these tokenizers: numeric lists, hex
//! colors, scRGB colors, grid-length numbers, and invariant time spans.
//! Built on `nom` where a grammar has real structure.

mod lexer;
mod time_span;

pub use lexer::{
    is_decimal, parse_hex_color_body, parse_hex_digit, parse_sc_rgb, read_leading_number,
    split_numeric_list, NumericList, ScRgb,
};
pub use time_span::{parse_time_span, TICKS_PER_SECOND};
