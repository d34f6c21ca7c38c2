//! High-level conversion API
//!
//! The surface callers use: parse a single literal, convert it to one
//! target format (or all eight), and scan-and-convert whole documents.
//! Everything here is a thin orchestration layer over [`crate::color`],
//! [`crate::render`], and [`crate::scan`]; malformed input is reported as
//! data (`is_valid`, empty values), never as an error.

use crate::color::{self, Color};
use crate::format::{detect_format, ColorFormat};
use crate::render::{self, ConversionOptions};
use crate::scan::{self, ProcessingOptions, ProcessingResult};
use serde::Serialize;

/// Outcome of parsing one literal: the color (if readable), the detected
/// format (if recognizable), and the text as given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedColor {
    pub color: Option<Color>,
    pub format: Option<ColorFormat>,
    pub is_valid: bool,
    pub original: String,
}

/// Outcome of converting one literal to a target format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// Canonical rendering in the target format, empty when invalid.
    pub value: String,
    pub format: ColorFormat,
    pub is_valid: bool,
}

/// Parse a literal and detect its format. Format detection is independent
/// of numeric validity: `rgb(oops)` detects as rgb but does not parse, and
/// a named color parses without a detectable format.
pub fn parse_color(input: &str) -> ParsedColor {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParsedColor {
            color: None,
            format: None,
            is_valid: false,
            original: input.to_string(),
        };
    }

    let parsed = color::parse(trimmed);
    ParsedColor {
        is_valid: parsed.is_some(),
        color: parsed,
        format: detect_format(trimmed),
        original: input.to_string(),
    }
}

/// Convert one literal into the target format.
pub fn convert_literal(
    input: &str,
    target_format: ColorFormat,
    options: &ConversionOptions,
) -> ConversionResult {
    match parse_color(input).color {
        Some(parsed) => ConversionResult {
            value: render::render(&parsed, target_format, options),
            format: target_format,
            is_valid: true,
        },
        None => ConversionResult {
            value: String::new(),
            format: target_format,
            is_valid: false,
        },
    }
}

/// Render a color in every convertible format, in canonical order.
pub fn all_formats(color: &Color, options: &ConversionOptions) -> Vec<(ColorFormat, String)> {
    ColorFormat::CONVERTIBLE
        .iter()
        .map(|&format| (format, render::render(color, format, options)))
        .collect()
}

/// Scan a document for color literals and rewrite them into the target
/// format, preserving every non-color byte exactly.
pub fn scan_and_convert(
    document: &str,
    target_format: ColorFormat,
    options: &ConversionOptions,
) -> ProcessingResult {
    scan::process_document(
        document,
        &ProcessingOptions {
            target_format,
            precision: options.precision,
            alpha_format: options.alpha_format,
        },
    )
}
