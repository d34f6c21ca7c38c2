//! # recolor
//!
//! Finds CSS color literals embedded in arbitrary text and rewrites them into
//! a chosen target notation, preserving every non-color byte exactly.
//!
//! The crate is organized around two subsystems:
//!
//! - a library of per-format lexical grammars plus a single combined grammar
//!   used to scan whole documents in one pass ([`grammar`], [`scan`]), and
//! - an output-formatting engine that renders a parsed color into any of the
//!   eight supported notations with precise numeric rounding and
//!   alpha-channel policy ([`render`]).
//!
//! Color parsing and color-space math live in [`color`]; the high-level
//! conversion API (detect, convert a single literal, scan-and-convert a
//! document) lives in [`processor`].
//!
//! ## Supported notations
//!
//! `hex`, `rgb`/`rgba`, `hsl`/`hsla`, `hwb`, `lab`, `lch`, `oklab`, `oklch`,
//! in both legacy (comma-separated) and modern (space-separated,
//! slash-alpha) CSS syntax where the format allows it.

pub mod color;
pub mod format;
pub mod grammar;
pub mod processor;
pub mod render;
pub mod scan;

pub use color::Color;
pub use format::{detect_format, ColorFormat, FormatDefinition, FORMAT_DEFINITIONS};
pub use processor::{
    all_formats, convert_literal, parse_color, scan_and_convert, ConversionResult, ParsedColor,
};
pub use render::{AlphaFormat, ConversionOptions};
pub use scan::{ColorMatch, ProcessingOptions, ProcessingResult, Stats};
