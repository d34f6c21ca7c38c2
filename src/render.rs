//! Output formatting: parsed color → canonical literal text
//!
//! The renderer turns a [`Color`] plus a target [`ColorFormat`] and
//! [`ConversionOptions`] into the canonical string for that format. It owns
//! the numeric formatting contract the whole crate's round-trip and
//! snapshot behavior depends on:
//!
//! - round to `precision` decimal digits, then strip trailing zeros and a
//!   trailing decimal point (`60.0` → `60`, `11.50` → `11.5`);
//! - percentage channels (hsl S/L, hwb W/B) and hues in hsl/hwb are always
//!   rounded to 1 decimal regardless of `precision`;
//! - rgb channels render as bare integers (value × 255, rounded);
//! - alpha is omitted entirely when absent or fully opaque (≥ 1), otherwise
//!   rendered per [`AlphaFormat`] as a ` / value` clause (two hex digits in
//!   the hex format).

use crate::color::{self, convert, Color};
use crate::format::ColorFormat;
use serde::{Deserialize, Serialize};

/// How alpha values are written when present and below 1.
///
/// `Preserve` is accepted for callers that want "leave it as written"
/// semantics but renders the same as `Decimal`: the renderer works from the
/// parsed value and has no access to the source literal's spelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphaFormat {
    #[default]
    Decimal,
    Percentage,
    Preserve,
}

/// Formatting options for rendering a color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Decimal digits for lab/lch/oklab/oklch channels. Default 2.
    pub precision: usize,
    /// Alpha rendering policy. Default decimal.
    pub alpha_format: AlphaFormat,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            precision: 2,
            alpha_format: AlphaFormat::Decimal,
        }
    }
}

/// Round to `precision` digits and strip trailing zeros and the trailing
/// decimal point. Non-finite values render as `0`.
pub fn format_number(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        text.truncate(text.trim_end_matches('0').trim_end_matches('.').len());
    }
    // -0.004 at one digit would otherwise print as "-0"
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

/// The ` / alpha` clause, or the empty string under the omit-near-opaque
/// rule (alpha absent or ≥ 1).
pub fn format_alpha(alpha: Option<f64>, alpha_format: AlphaFormat) -> String {
    match alpha {
        Some(alpha) if alpha < 1.0 => match alpha_format {
            AlphaFormat::Percentage => format!(" / {}%", format_number(alpha * 100.0, 1)),
            AlphaFormat::Decimal | AlphaFormat::Preserve => {
                format!(" / {}", format_number(alpha, 2))
            }
        },
        _ => String::new(),
    }
}

/// Render `color` as the canonical string for `target`.
///
/// An unrenderable target (`Named`) falls back to the generic serialization
/// of the color in its own space rather than failing.
pub fn render(color: &Color, target: ColorFormat, options: &ConversionOptions) -> String {
    let precision = options.precision;
    let alpha = format_alpha(color.alpha(), options.alpha_format);

    match target {
        ColorFormat::Hex => {
            let [r, g, b] = convert::to_rgb(color);
            let byte = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
            let mut hex = format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b));
            if let Some(alpha) = color.alpha() {
                if alpha < 1.0 {
                    hex.push_str(&format!(
                        "{:02x}",
                        (alpha * 255.0).round().clamp(0.0, 255.0) as u8
                    ));
                }
            }
            hex
        }
        ColorFormat::Rgb => {
            let [r, g, b] = convert::to_rgb(color);
            // Unclamped: out-of-gamut inputs round to out-of-range integers.
            let channel = |c: f64| (c * 255.0).round() as i64;
            let (r, g, b) = (channel(r), channel(g), channel(b));
            if alpha.is_empty() {
                format!("rgb({r}, {g}, {b})")
            } else {
                format!("rgba({r}, {g}, {b}{alpha})")
            }
        }
        ColorFormat::Hsl => {
            let [h, s, l] = convert::to_hsl(color);
            let h = format_number(h, 1);
            let s = format_number(s * 100.0, 1);
            let l = format_number(l * 100.0, 1);
            if alpha.is_empty() {
                format!("hsl({h}, {s}%, {l}%)")
            } else {
                format!("hsla({h}, {s}%, {l}%{alpha})")
            }
        }
        ColorFormat::Hwb => {
            let [h, w, b] = convert::to_hwb(color);
            format!(
                "hwb({} {}% {}%{alpha})",
                format_number(h, 1),
                format_number(w * 100.0, 1),
                format_number(b * 100.0, 1)
            )
        }
        ColorFormat::Lab => {
            let [l, a, b] = convert::to_lab(color);
            format!(
                "lab({} {} {}{alpha})",
                format_number(l, precision),
                format_number(a, precision),
                format_number(b, precision)
            )
        }
        ColorFormat::Lch => {
            let [l, c, h] = convert::to_lch(color);
            format!(
                "lch({} {} {}{alpha})",
                format_number(l, precision),
                format_number(c, precision),
                format_number(h, precision)
            )
        }
        ColorFormat::Oklab => {
            let [l, a, b] = convert::to_oklab(color);
            format!(
                "oklab({} {} {}{alpha})",
                format_number(l, precision),
                format_number(a, precision),
                format_number(b, precision)
            )
        }
        ColorFormat::Oklch => {
            let [l, c, h] = convert::to_oklch(color);
            format!(
                "oklch({} {} {}{alpha})",
                format_number(l, precision),
                format_number(c, precision),
                format_number(h, precision)
            )
        }
        ColorFormat::Named => color::format_css(color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_strips_trailing_zeros() {
        assert_eq!(format_number(60.0, 1), "60");
        assert_eq!(format_number(11.50, 2), "11.5");
        assert_eq!(format_number(0.5, 2), "0.5");
        assert_eq!(format_number(10.588235, 1), "10.6");
        assert_eq!(format_number(f64::NAN, 2), "0");
        assert_eq!(format_number(-0.004, 1), "0");
    }

    #[test]
    fn alpha_omitted_when_opaque_or_absent() {
        assert_eq!(format_alpha(None, AlphaFormat::Decimal), "");
        assert_eq!(format_alpha(Some(1.0), AlphaFormat::Decimal), "");
        assert_eq!(format_alpha(Some(1.5), AlphaFormat::Percentage), "");
    }

    #[test]
    fn alpha_formats() {
        assert_eq!(format_alpha(Some(0.5), AlphaFormat::Decimal), " / 0.5");
        assert_eq!(format_alpha(Some(0.5), AlphaFormat::Percentage), " / 50%");
        assert_eq!(format_alpha(Some(0.5), AlphaFormat::Preserve), " / 0.5");
        assert_eq!(format_alpha(Some(0.333), AlphaFormat::Decimal), " / 0.33");
    }

    #[test]
    fn rgb_switches_name_when_alpha_present() {
        let opaque = Color::Rgb {
            r: 1.0,
            g: 87.0 / 255.0,
            b: 0.2,
            alpha: None,
        };
        let options = ConversionOptions::default();
        assert_eq!(render(&opaque, ColorFormat::Rgb, &options), "rgb(255, 87, 51)");
        assert_eq!(
            render(&opaque.with_alpha(Some(0.5)), ColorFormat::Rgb, &options),
            "rgba(255, 87, 51 / 0.5)"
        );
    }

    #[test]
    fn hex_appends_alpha_byte_only_when_translucent() {
        let options = ConversionOptions::default();
        let color = Color::Rgb {
            r: 1.0,
            g: 87.0 / 255.0,
            b: 0.2,
            alpha: Some(0.5),
        };
        assert_eq!(render(&color, ColorFormat::Hex, &options), "#ff573380");
        assert_eq!(
            render(&color.with_alpha(Some(1.0)), ColorFormat::Hex, &options),
            "#ff5733"
        );
    }

    #[test]
    fn hex_clamps_out_of_gamut_channels() {
        let options = ConversionOptions::default();
        let color = Color::Rgb {
            r: 1.2,
            g: -0.1,
            b: 0.5,
            alpha: None,
        };
        assert_eq!(render(&color, ColorFormat::Hex, &options), "#ff0080");
    }

    #[test]
    fn rgb_does_not_clamp() {
        let options = ConversionOptions::default();
        let color = Color::Rgb {
            r: 1.2,
            g: -0.1,
            b: 0.5,
            alpha: None,
        };
        assert_eq!(render(&color, ColorFormat::Rgb, &options), "rgb(306, -26, 128)");
    }

    #[test]
    fn percent_channels_ignore_precision_option() {
        let color = Color::Hsl {
            h: 10.588235294117647,
            s: 1.0,
            l: 0.6,
            alpha: None,
        };
        let options = ConversionOptions {
            precision: 5,
            alpha_format: AlphaFormat::Decimal,
        };
        assert_eq!(render(&color, ColorFormat::Hsl, &options), "hsl(10.6, 100%, 60%)");
    }

    #[test]
    fn named_target_falls_back_to_generic_serialization() {
        let color = Color::Oklch {
            l: 0.68,
            c: 0.17,
            h: 40.0,
            alpha: None,
        };
        let options = ConversionOptions::default();
        assert_eq!(
            render(&color, ColorFormat::Named, &options),
            "oklch(0.68 0.17 40)"
        );
    }
}
