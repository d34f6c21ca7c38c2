//! Single-pass document scanning and rewriting
//!
//! [`detect_colors`] runs the combined grammar over a document and produces
//! [`ColorMatch`] records with original-document offsets and 1-indexed
//! line/column positions. [`process_document`] then rewrites each match into
//! the target format, splicing replacements into a working buffer while a
//! running length delta keeps later splice points aligned with the shifting
//! text.
//!
//! Offsets are byte offsets into the original document and never refer to
//! the rewritten text. Both functions are pure transforms of their inputs:
//! no I/O, no shared mutable state, safe to run concurrently over
//! independent documents.

use crate::color;
use crate::format::ColorFormat;
use crate::grammar;
use crate::render::{self, AlphaFormat, ConversionOptions};
use serde::{Deserialize, Serialize};

/// One located color literal.
///
/// `converted` is empty on records produced by [`detect_colors`]; in a
/// [`ProcessingResult`]'s change list it holds the replacement text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMatch {
    /// The literal exactly as it appears in the document.
    pub original: String,
    /// Replacement text, when part of a change record.
    pub converted: String,
    /// Byte offset of the match start in the original document.
    pub start: usize,
    /// Byte length of the matched literal.
    pub length: usize,
    /// 1-indexed line of the match start.
    pub line: usize,
    /// 1-indexed column (in characters) of the match start.
    pub column: usize,
}

/// Counts for one processing run. `total` is fixed at scan time; a match
/// whose rendering equals its source text counts in neither `converted` nor
/// `failed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub converted: usize,
    pub failed: usize,
}

/// Outcome of rewriting one document. Built once, never mutated after
/// return; `changes` is ordered by ascending `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub original: String,
    pub converted: String,
    pub changes: Vec<ColorMatch>,
    pub stats: Stats,
}

impl ProcessingResult {
    /// JSON report of the run (changes plus statistics).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Target format plus rendering options for a processing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    pub target_format: ColorFormat,
    pub precision: usize,
    pub alpha_format: AlphaFormat,
}

impl ProcessingOptions {
    pub fn new(target_format: ColorFormat) -> Self {
        let defaults = ConversionOptions::default();
        ProcessingOptions {
            target_format,
            precision: defaults.precision,
            alpha_format: defaults.alpha_format,
        }
    }

    fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            precision: self.precision,
            alpha_format: self.alpha_format,
        }
    }
}

/// 1-indexed line/column of a byte offset, from the newline count before it.
fn line_and_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Locate every color literal in `content`, left to right, non-overlapping.
pub fn detect_colors(content: &str) -> Vec<ColorMatch> {
    grammar::COMBINED
        .find_iter(content)
        .map(|found| {
            let (line, column) = line_and_column(content, found.start());
            ColorMatch {
                original: found.as_str().to_string(),
                converted: String::new(),
                start: found.start(),
                length: found.len(),
                line,
                column,
            }
        })
        .collect()
}

/// Rewrite every color literal in `content` into the target format.
///
/// A match the parser rejects counts as `failed` and its text is left
/// untouched. A match that renders byte-identical to its source produces no
/// change record and counts in neither bucket.
pub fn process_document(content: &str, options: &ProcessingOptions) -> ProcessingResult {
    let conversion_options = options.conversion_options();
    let matches = detect_colors(content);
    let total = matches.len();

    let mut converted = content.to_string();
    let mut changes = Vec::new();
    let mut delta: i64 = 0;
    let mut converted_count = 0;
    let mut failed_count = 0;

    for found in matches {
        match color::parse(&found.original) {
            Some(parsed) => {
                let replacement =
                    render::render(&parsed, options.target_format, &conversion_options);
                if !replacement.is_empty() && replacement != found.original {
                    let spliced_start = (found.start as i64 + delta) as usize;
                    converted.replace_range(spliced_start..spliced_start + found.length, &replacement);
                    delta += replacement.len() as i64 - found.length as i64;
                    converted_count += 1;
                    changes.push(ColorMatch {
                        converted: replacement,
                        ..found
                    });
                }
            }
            None => failed_count += 1,
        }
    }

    ProcessingResult {
        original: content.to_string(),
        converted,
        changes,
        stats: Stats {
            total,
            converted: converted_count,
            failed: failed_count,
        },
    }
}
