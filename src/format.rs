//! Color format identifiers and prefix-based format detection
//!
//! A [`ColorFormat`] names one of the eight convertible CSS color notations
//! (plus [`ColorFormat::Named`], a detection outcome for keyword colors that
//! has no lexical grammar and no renderer of its own). Detection is purely
//! syntactic: it sniffs the prefix of a trimmed, lowercased literal and never
//! checks whether the channel values are numerically valid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a CSS color notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Hwb,
    Lab,
    Lch,
    Oklab,
    Oklch,
    /// Keyword colors (`red`, `rebeccapurple`, ...). Parseable, but never
    /// produced by the scanner and not a rendering target.
    Named,
}

impl ColorFormat {
    /// All formats that can be rendered, in canonical order.
    pub const CONVERTIBLE: [ColorFormat; 8] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Hsl,
        ColorFormat::Hwb,
        ColorFormat::Lab,
        ColorFormat::Lch,
        ColorFormat::Oklab,
        ColorFormat::Oklch,
    ];

    /// Lowercase identifier as it appears in CSS source.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hwb => "hwb",
            ColorFormat::Lab => "lab",
            ColorFormat::Lch => "lch",
            ColorFormat::Oklab => "oklab",
            ColorFormat::Oklch => "oklch",
            ColorFormat::Named => "named",
        }
    }

    /// Human-readable label, uppercase of the identifier for formats without
    /// a definition entry.
    pub fn label(self) -> String {
        self.definition()
            .map(|d| d.label.to_string())
            .unwrap_or_else(|| self.as_str().to_uppercase())
    }

    /// Canonical example literal for this format, empty for formats without
    /// a definition entry.
    pub fn example(self) -> &'static str {
        self.definition().map(|d| d.example).unwrap_or("")
    }

    /// Short description of the format.
    pub fn description(self) -> &'static str {
        self.definition().map(|d| d.description).unwrap_or("")
    }

    fn definition(self) -> Option<&'static FormatDefinition> {
        FORMAT_DEFINITIONS.iter().find(|d| d.id == self)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one convertible format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatDefinition {
    pub id: ColorFormat,
    pub label: &'static str,
    pub example: &'static str,
    pub description: &'static str,
}

/// The eight convertible formats with labels and canonical examples.
pub const FORMAT_DEFINITIONS: [FormatDefinition; 8] = [
    FormatDefinition {
        id: ColorFormat::Hex,
        label: "HEX",
        example: "#ff5733",
        description: "Hexadecimal color notation",
    },
    FormatDefinition {
        id: ColorFormat::Rgb,
        label: "RGB",
        example: "rgb(255, 87, 51)",
        description: "Red, Green, Blue values",
    },
    FormatDefinition {
        id: ColorFormat::Hsl,
        label: "HSL",
        example: "hsl(11, 100%, 60%)",
        description: "Hue, Saturation, Lightness",
    },
    FormatDefinition {
        id: ColorFormat::Hwb,
        label: "HWB",
        example: "hwb(11 20% 0%)",
        description: "Hue, Whiteness, Blackness",
    },
    FormatDefinition {
        id: ColorFormat::Lab,
        label: "LAB",
        example: "lab(62 58 49)",
        description: "CIE LAB color space",
    },
    FormatDefinition {
        id: ColorFormat::Lch,
        label: "LCH",
        example: "lch(62 76 40)",
        description: "Lightness, Chroma, Hue",
    },
    FormatDefinition {
        id: ColorFormat::Oklab,
        label: "OKLAB",
        example: "oklab(0.68 0.13 0.11)",
        description: "OK perceptual LAB",
    },
    FormatDefinition {
        id: ColorFormat::Oklch,
        label: "OKLCH",
        example: "oklch(0.68 0.17 40)",
        description: "OK perceptual LCH",
    },
];

/// Classify a color literal by prefix.
///
/// The input is trimmed and lowercased first, so detection is
/// case-insensitive and tolerant of surrounding whitespace. `lab`/`lch`
/// require the opening paren so they are not confused with other
/// identifiers starting with the same letters; `oklab`/`oklch` are checked
/// as their own prefixes. Returns `None` for empty, whitespace-only, or
/// unrecognized input.
pub fn detect_format(input: &str) -> Option<ColorFormat> {
    let trimmed = input.trim().to_lowercase();

    if trimmed.starts_with('#') {
        Some(ColorFormat::Hex)
    } else if trimmed.starts_with("rgba") || trimmed.starts_with("rgb") {
        Some(ColorFormat::Rgb)
    } else if trimmed.starts_with("hsla") || trimmed.starts_with("hsl") {
        Some(ColorFormat::Hsl)
    } else if trimmed.starts_with("hwb") {
        Some(ColorFormat::Hwb)
    } else if trimmed.starts_with("lab(") {
        Some(ColorFormat::Lab)
    } else if trimmed.starts_with("lch(") {
        Some(ColorFormat::Lch)
    } else if trimmed.starts_with("oklab") {
        Some(ColorFormat::Oklab)
    } else if trimmed.starts_with("oklch") {
        Some(ColorFormat::Oklch)
    } else {
        None
    }
}
