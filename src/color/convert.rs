//! Color space conversion math
//!
//! Projects a [`Color`] into the channel values of any supported space.
//! Rectangular↔polar pairs (Lab↔LCh, OKLab↔OKLCh) convert directly;
//! everything else routes through gamma-encoded sRGB. CIE Lab uses the
//! D50 white point with Bradford-adapted XYZ matrices, per the CSS Color 4
//! conversion constants. OKLab converts through the LMS cone matrices.
//!
//! Conversions never clamp: an out-of-gamut Lab color yields rgb channels
//! outside [0, 1] and it is the renderer's business what to do with them.

use super::Color;

// D50 reference white, derived from the (0.3457, 0.3585) chromaticity.
const D50: [f64; 3] = [
    0.3457 / 0.3585,
    1.0,
    (1.0 - 0.3457 - 0.3585) / 0.3585,
];

// CIE kappa and epsilon: 29^3/3^3 and 6^3/29^3.
const KAPPA: f64 = 24389.0 / 27.0;
const EPSILON: f64 = 216.0 / 24389.0;

const LINEAR_SRGB_TO_XYZ_D65: [f64; 9] = [
    0.41239079926595934,
    0.357584339383878,
    0.1804807884018343,
    0.21263900587151027,
    0.715168678767756,
    0.07219231536073371,
    0.01933081871559182,
    0.11919477979462598,
    0.9505321522496607,
];

const XYZ_D65_TO_LINEAR_SRGB: [f64; 9] = [
    3.2409699419045226,
    -1.537383177570094,
    -0.4986107602930034,
    -0.9692436362808796,
    1.8759675015077202,
    0.04155505740717559,
    0.05563007969699366,
    -0.20397695888897652,
    1.0569715142428786,
];

// Bradford chromatic adaptation between the D65 and D50 whites.
const XYZ_D65_TO_D50: [f64; 9] = [
    1.0479298208405488,
    0.022946793341019088,
    -0.05019222954313557,
    0.029627815688159344,
    0.990434484573249,
    -0.01707382502938514,
    -0.009243058152591178,
    0.015055144896577895,
    0.7518742899580008,
];

const XYZ_D50_TO_D65: [f64; 9] = [
    0.9554734527042182,
    -0.023098536874261423,
    0.0632593086610217,
    -0.028369706963208136,
    1.0099954580058226,
    0.021041398966943008,
    0.012314001688319899,
    -0.020507696433477912,
    1.3303659366080753,
];

// OKLab cone-response matrices (Björn Ottosson's reference constants),
// operating on linear sRGB directly.
const LINEAR_SRGB_TO_LMS: [f64; 9] = [
    0.4122214708,
    0.5363325363,
    0.0514459929,
    0.2119034982,
    0.6806995451,
    0.1073969566,
    0.0883024619,
    0.2817188376,
    0.6299787005,
];

const LMS_TO_OKLAB: [f64; 9] = [
    0.2104542553,
    0.7936177850,
    -0.0040720468,
    1.9779984951,
    -2.4285922050,
    0.4505937099,
    0.0259040371,
    0.7827717662,
    -0.8086757660,
];

const OKLAB_TO_LMS: [f64; 9] = [
    1.0,
    0.3963377774,
    0.2158037573,
    1.0,
    -0.1055613458,
    -0.0638541728,
    1.0,
    -0.0894841775,
    -1.2914855480,
];

const LMS_TO_LINEAR_SRGB: [f64; 9] = [
    4.0767416621,
    -3.3077115913,
    0.2309699292,
    -1.2684380046,
    2.6097574011,
    -0.3413193965,
    -0.0041960863,
    -0.7034186147,
    1.7076147010,
];

#[inline]
fn multiply_matrix(m: &[f64; 9], v: [f64; 3]) -> [f64; 3] {
    [
        m[0] * v[0] + m[1] * v[1] + m[2] * v[2],
        m[3] * v[0] + m[4] * v[1] + m[5] * v[2],
        m[6] * v[0] + m[7] * v[1] + m[8] * v[2],
    ]
}

/// Extended sRGB transfer function: the linear portion reflects across the
/// axis for negative values.
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    let abs = c.abs();
    if abs <= 0.04045 {
        c / 12.92
    } else {
        c.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_to_srgb(c: f64) -> f64 {
    let abs = c.abs();
    if abs <= 0.0031308 {
        12.92 * c
    } else {
        c.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    }
}

fn normalize_hue(hue: f64) -> f64 {
    hue.rem_euclid(360.0)
}

// ── gamma sRGB ↔ the other spaces ────────────────────────────

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = normalize_hue(h) / 60.0;
    let x = chroma * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    [r + m, g + m, b + m]
}

fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;
    if delta == 0.0 {
        return [0.0, 0.0, l];
    }
    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    [normalize_hue(h), s, l]
}

fn hwb_to_rgb(h: f64, w: f64, blackness: f64) -> [f64; 3] {
    if w + blackness >= 1.0 {
        let gray = w / (w + blackness);
        return [gray, gray, gray];
    }
    hsl_to_rgb(h, 1.0, 0.5).map(|c| c * (1.0 - w - blackness) + w)
}

fn rgb_to_hwb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let [h, _, _] = rgb_to_hsl(rgb);
    [h, r.min(g).min(b), 1.0 - r.max(g).max(b)]
}

fn rgb_to_lab(rgb: [f64; 3]) -> [f64; 3] {
    let linear = rgb.map(srgb_to_linear);
    let xyz65 = multiply_matrix(&LINEAR_SRGB_TO_XYZ_D65, linear);
    let xyz50 = multiply_matrix(&XYZ_D65_TO_D50, xyz65);

    let f = |t: f64| {
        if t > EPSILON {
            t.cbrt()
        } else {
            (KAPPA * t + 16.0) / 116.0
        }
    };
    let fx = f(xyz50[0] / D50[0]);
    let fy = f(xyz50[1] / D50[1]);
    let fz = f(xyz50[2] / D50[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

fn lab_to_rgb(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;
    let f1 = (l + 16.0) / 116.0;
    let f0 = a / 500.0 + f1;
    let f2 = f1 - b / 200.0;

    let x = if f0.powi(3) > EPSILON {
        f0.powi(3)
    } else {
        (116.0 * f0 - 16.0) / KAPPA
    };
    let y = if l > KAPPA * EPSILON {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l / KAPPA
    };
    let z = if f2.powi(3) > EPSILON {
        f2.powi(3)
    } else {
        (116.0 * f2 - 16.0) / KAPPA
    };

    let xyz50 = [x * D50[0], y * D50[1], z * D50[2]];
    let xyz65 = multiply_matrix(&XYZ_D50_TO_D65, xyz50);
    multiply_matrix(&XYZ_D65_TO_LINEAR_SRGB, xyz65).map(linear_to_srgb)
}

fn rgb_to_oklab(rgb: [f64; 3]) -> [f64; 3] {
    let linear = rgb.map(srgb_to_linear);
    let lms = multiply_matrix(&LINEAR_SRGB_TO_LMS, linear).map(f64::cbrt);
    multiply_matrix(&LMS_TO_OKLAB, lms)
}

fn oklab_to_rgb(oklab: [f64; 3]) -> [f64; 3] {
    let lms = multiply_matrix(&OKLAB_TO_LMS, oklab).map(|v| v * v * v);
    multiply_matrix(&LMS_TO_LINEAR_SRGB, lms).map(linear_to_srgb)
}

// ── rectangular ↔ polar ──────────────────────────────────────

fn to_polar(rect: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = rect;
    let c = a.hypot(b);
    let h = normalize_hue(b.atan2(a).to_degrees());
    [l, c, h]
}

fn to_rectangular(polar: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = polar;
    let radians = h.to_radians();
    [l, c * radians.cos(), c * radians.sin()]
}

// ── channel views ────────────────────────────────────────────

/// Gamma-encoded sRGB channels in [0, 1] (out-of-gamut inputs exceed it).
pub fn to_rgb(color: &Color) -> [f64; 3] {
    match *color {
        Color::Rgb { r, g, b, .. } => [r, g, b],
        Color::Hsl { h, s, l, .. } => hsl_to_rgb(h, s, l),
        Color::Hwb { h, w, b, .. } => hwb_to_rgb(h, w, b),
        Color::Lab { l, a, b, .. } => lab_to_rgb([l, a, b]),
        Color::Lch { l, c, h, .. } => lab_to_rgb(to_rectangular([l, c, h])),
        Color::Oklab { l, a, b, .. } => oklab_to_rgb([l, a, b]),
        Color::Oklch { l, c, h, .. } => oklab_to_rgb(to_rectangular([l, c, h])),
    }
}

/// Hue in degrees, saturation and lightness in [0, 1]. Achromatic colors
/// report hue 0.
pub fn to_hsl(color: &Color) -> [f64; 3] {
    match *color {
        Color::Hsl { h, s, l, .. } => [normalize_hue(h), s, l],
        _ => rgb_to_hsl(to_rgb(color)),
    }
}

/// Hue in degrees, whiteness and blackness in [0, 1].
pub fn to_hwb(color: &Color) -> [f64; 3] {
    match *color {
        Color::Hwb { h, w, b, .. } => [normalize_hue(h), w, b],
        _ => rgb_to_hwb(to_rgb(color)),
    }
}

/// CIE Lab: L in 0–100, a/b unbounded.
pub fn to_lab(color: &Color) -> [f64; 3] {
    match *color {
        Color::Lab { l, a, b, .. } => [l, a, b],
        Color::Lch { l, c, h, .. } => to_rectangular([l, c, h]),
        _ => rgb_to_lab(to_rgb(color)),
    }
}

/// CIE LCh: polar form of Lab, hue in degrees.
pub fn to_lch(color: &Color) -> [f64; 3] {
    match *color {
        Color::Lch { l, c, h, .. } => [l, c, normalize_hue(h)],
        _ => to_polar(to_lab(color)),
    }
}

/// OKLab: L in [0, 1], a/b roughly in [-0.4, 0.4].
pub fn to_oklab(color: &Color) -> [f64; 3] {
    match *color {
        Color::Oklab { l, a, b, .. } => [l, a, b],
        Color::Oklch { l, c, h, .. } => to_rectangular([l, c, h]),
        _ => rgb_to_oklab(to_rgb(color)),
    }
}

/// OKLCh: polar form of OKLab, hue in degrees.
pub fn to_oklch(color: &Color) -> [f64; 3] {
    match *color {
        Color::Oklch { l, c, h, .. } => [l, c, normalize_hue(h)],
        _ => to_polar(to_oklab(color)),
    }
}
