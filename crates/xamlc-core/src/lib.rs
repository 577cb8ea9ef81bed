//! Core types for the xamlc core-type converter.
//!
//! This crate provides the foundational types shared by every other xamlc crate:
//! - The language-neutral expression tree produced by converters
//! - Type names and per-call conversion targets
//! - The conversion failure diagnostic
//! - Lookup tables for named colors and font weights

pub mod colors;
pub mod errors;
pub mod expr;
pub mod font_weights;
pub mod names;
pub mod target;

pub use errors::*;
pub use expr::*;
pub use target::*;
