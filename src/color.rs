//! Canonical color access: parsing literals and projecting channel views
//!
//! This module is the color-math boundary the rest of the crate talks to.
//! [`parse`] turns literal text into a [`Color`]; [`convert`] projects a
//! `Color` into the channel values of any supported space; [`format_css`]
//! is the generic fallback serialization used when a rendering target is
//! unrecognized.
//!
//! A [`Color`] is a tagged variant keyed by the space the literal was
//! written in. Channels keep the conventions of CSS Color 4 conversion
//! code: rgb components and saturation/lightness/whiteness/blackness in
//! [0, 1], CIE lightness in 0–100, OK lightness in [0, 1], hues in degrees.
//! Alpha is an explicit `Option` in [0, 1]; `None` means "not written".
//!
//! No gamut validation happens here: out-of-range channel values parse and
//! convert arithmetically, matching CSS serialization behavior.

pub mod convert;
pub mod named;
pub mod parse;

pub use parse::parse;

use serde::{Deserialize, Serialize};

/// A parsed color, tagged by its originating space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Rgb {
        r: f64,
        g: f64,
        b: f64,
        alpha: Option<f64>,
    },
    Hsl {
        h: f64,
        s: f64,
        l: f64,
        alpha: Option<f64>,
    },
    Hwb {
        h: f64,
        w: f64,
        b: f64,
        alpha: Option<f64>,
    },
    Lab {
        l: f64,
        a: f64,
        b: f64,
        alpha: Option<f64>,
    },
    Lch {
        l: f64,
        c: f64,
        h: f64,
        alpha: Option<f64>,
    },
    Oklab {
        l: f64,
        a: f64,
        b: f64,
        alpha: Option<f64>,
    },
    Oklch {
        l: f64,
        c: f64,
        h: f64,
        alpha: Option<f64>,
    },
}

impl Color {
    /// The alpha channel as written, if any.
    pub fn alpha(&self) -> Option<f64> {
        match *self {
            Color::Rgb { alpha, .. }
            | Color::Hsl { alpha, .. }
            | Color::Hwb { alpha, .. }
            | Color::Lab { alpha, .. }
            | Color::Lch { alpha, .. }
            | Color::Oklab { alpha, .. }
            | Color::Oklch { alpha, .. } => alpha,
        }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(mut self, new_alpha: Option<f64>) -> Self {
        match &mut self {
            Color::Rgb { alpha, .. }
            | Color::Hsl { alpha, .. }
            | Color::Hwb { alpha, .. }
            | Color::Lab { alpha, .. }
            | Color::Lch { alpha, .. }
            | Color::Oklab { alpha, .. }
            | Color::Oklch { alpha, .. } => *alpha = new_alpha,
        }
        self
    }
}

/// Generic canonical serialization of a color in its own space.
///
/// Used as the pass-through fallback when a rendering target is not one of
/// the eight known formats. Channels are written at 4-digit precision in
/// modern syntax with a slash alpha clause.
pub fn format_css(color: &Color) -> String {
    fn num(value: f64) -> String {
        let mut s = format!("{value:.4}");
        if s.contains('.') {
            s = s.trim_end_matches('0').trim_end_matches('.').to_string();
        }
        if s == "-0" {
            s = "0".to_string();
        }
        s
    }

    let alpha_clause = match color.alpha() {
        Some(alpha) if alpha < 1.0 => format!(" / {}", num(alpha)),
        _ => String::new(),
    };

    match *color {
        Color::Rgb { r, g, b, .. } => {
            format!("color(srgb {} {} {}{alpha_clause})", num(r), num(g), num(b))
        }
        Color::Hsl { h, s, l, .. } => format!(
            "hsl({} {}% {}%{alpha_clause})",
            num(h),
            num(s * 100.0),
            num(l * 100.0)
        ),
        Color::Hwb { h, w, b, .. } => format!(
            "hwb({} {}% {}%{alpha_clause})",
            num(h),
            num(w * 100.0),
            num(b * 100.0)
        ),
        Color::Lab { l, a, b, .. } => {
            format!("lab({} {} {}{alpha_clause})", num(l), num(a), num(b))
        }
        Color::Lch { l, c, h, .. } => {
            format!("lch({} {} {}{alpha_clause})", num(l), num(c), num(h))
        }
        Color::Oklab { l, a, b, .. } => {
            format!("oklab({} {} {}{alpha_clause})", num(l), num(a), num(b))
        }
        Color::Oklch { l, c, h, .. } => {
            format!("oklch({} {} {}{alpha_clause})", num(l), num(c), num(h))
        }
    }
}
