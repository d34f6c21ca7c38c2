//! Literal text → [`Color`]
//!
//! Accepts every notation the grammars recognize plus CSS named colors,
//! in legacy or modern syntax, and is deliberately lenient about details
//! the grammars already police (it will happily read `rgb(300, -4, 51)`;
//! range checking is not its job). Returns `None` for anything it cannot
//! read — parsing never panics and never raises.
//!
//! Percent scaling follows the CSS Color 4 reference ranges: `lab` a/b
//! 100% = 125, `lch` chroma 100% = 150, `oklab` a/b 100% = 0.4, `oklch`
//! chroma 100% = 0.4.

use super::named;
use super::Color;

/// Parse a CSS color literal. `None` for empty, blank, or unrecognized text.
pub fn parse(input: &str) -> Option<Color> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();

    if let Some(digits) = lower.strip_prefix('#') {
        return parse_hex(digits);
    }
    for name in ["rgba", "rgb"] {
        if let Some(body) = function_body(&lower, name) {
            return parse_rgb(body);
        }
    }
    for name in ["hsla", "hsl"] {
        if let Some(body) = function_body(&lower, name) {
            return parse_hsl(body);
        }
    }
    if let Some(body) = function_body(&lower, "hwb") {
        return parse_hwb(body);
    }
    if let Some(body) = function_body(&lower, "oklab") {
        return parse_oklab(body);
    }
    if let Some(body) = function_body(&lower, "oklch") {
        return parse_oklch(body);
    }
    if let Some(body) = function_body(&lower, "lab") {
        return parse_lab(body);
    }
    if let Some(body) = function_body(&lower, "lch") {
        return parse_lch(body);
    }

    named::lookup(&lower)
}

fn function_body<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Channel tokens plus the alpha token, if any. Alpha is whatever follows a
/// slash, or a fourth component in legacy comma syntax.
fn split_components(body: &str) -> (Vec<&str>, Option<&str>) {
    if let Some((channels, alpha)) = body.split_once('/') {
        (tokenize(channels), Some(alpha.trim()))
    } else {
        let mut tokens = tokenize(body);
        let alpha = if tokens.len() == 4 { tokens.pop() } else { None };
        (tokens, alpha)
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Numeric token with a flag for a trailing percent sign.
fn number(token: &str) -> Option<(f64, bool)> {
    let (digits, percent) = match token.strip_suffix('%') {
        Some(rest) => (rest, true),
        None => (token, false),
    };
    digits.parse::<f64>().ok().map(|value| (value, percent))
}

/// Hue token in degrees, converting any trailing angle unit.
/// `grad` must be tried before `rad`.
fn hue(token: &str) -> Option<f64> {
    if let Some(digits) = token.strip_suffix("grad") {
        return digits.parse::<f64>().ok().map(|v| v * 0.9);
    }
    if let Some(digits) = token.strip_suffix("rad") {
        return digits.parse::<f64>().ok().map(f64::to_degrees);
    }
    if let Some(digits) = token.strip_suffix("turn") {
        return digits.parse::<f64>().ok().map(|v| v * 360.0);
    }
    if let Some(digits) = token.strip_suffix("deg") {
        return digits.parse::<f64>().ok();
    }
    token.parse::<f64>().ok()
}

fn alpha_value(token: Option<&str>) -> Option<Option<f64>> {
    match token {
        None => Some(None),
        Some(token) => {
            let (value, percent) = number(token)?;
            Some(Some(if percent { value / 100.0 } else { value }))
        }
    }
}

/// A percentage-semantics channel (saturation, lightness, whiteness,
/// blackness): the number is a percent whether or not the sign is written.
fn percent_channel(token: &str) -> Option<f64> {
    number(token).map(|(value, _)| value / 100.0)
}

fn parse_hex(digits: &str) -> Option<Color> {
    // Byte-indexed slicing below requires ASCII.
    if !digits.is_ascii() {
        return None;
    }
    let pair = |index: usize| u8::from_str_radix(&digits[index..index + 2], 16).ok();
    let single = |index: usize| {
        u8::from_str_radix(&digits[index..index + 1], 16)
            .ok()
            .map(|v| v * 16 + v)
    };

    let (r, g, b, a) = match digits.len() {
        3 => (single(0)?, single(1)?, single(2)?, None),
        4 => (single(0)?, single(1)?, single(2)?, Some(single(3)?)),
        6 => (pair(0)?, pair(2)?, pair(4)?, None),
        8 => (pair(0)?, pair(2)?, pair(4)?, Some(pair(6)?)),
        _ => return None,
    };

    Some(Color::Rgb {
        r: f64::from(r) / 255.0,
        g: f64::from(g) / 255.0,
        b: f64::from(b) / 255.0,
        alpha: a.map(|a| f64::from(a) / 255.0),
    })
}

fn parse_rgb(body: &str) -> Option<Color> {
    let (tokens, alpha) = split_components(body);
    let [r, g, b] = three(&tokens)?;
    let channel = |token: &str| {
        number(token).map(|(value, percent)| {
            if percent {
                value / 100.0
            } else {
                value / 255.0
            }
        })
    };
    Some(Color::Rgb {
        r: channel(r)?,
        g: channel(g)?,
        b: channel(b)?,
        alpha: alpha_value(alpha)?,
    })
}

fn parse_hsl(body: &str) -> Option<Color> {
    let (tokens, alpha) = split_components(body);
    let [h, s, l] = three(&tokens)?;
    Some(Color::Hsl {
        h: hue(h)?,
        s: percent_channel(s)?,
        l: percent_channel(l)?,
        alpha: alpha_value(alpha)?,
    })
}

fn parse_hwb(body: &str) -> Option<Color> {
    let (tokens, alpha) = split_components(body);
    let [h, w, b] = three(&tokens)?;
    Some(Color::Hwb {
        h: hue(h)?,
        w: percent_channel(w)?,
        b: percent_channel(b)?,
        alpha: alpha_value(alpha)?,
    })
}

fn parse_lab(body: &str) -> Option<Color> {
    let (tokens, alpha) = split_components(body);
    let [l, a, b] = three(&tokens)?;
    let ab = |token: &str| {
        number(token).map(|(value, percent)| if percent { value * 1.25 } else { value })
    };
    Some(Color::Lab {
        l: number(l)?.0,
        a: ab(a)?,
        b: ab(b)?,
        alpha: alpha_value(alpha)?,
    })
}

fn parse_lch(body: &str) -> Option<Color> {
    let (tokens, alpha) = split_components(body);
    let [l, c, h] = three(&tokens)?;
    let chroma =
        number(c).map(|(value, percent)| if percent { value * 1.5 } else { value })?;
    Some(Color::Lch {
        l: number(l)?.0,
        c: chroma,
        h: hue(h)?,
        alpha: alpha_value(alpha)?,
    })
}

fn parse_oklab(body: &str) -> Option<Color> {
    let (tokens, alpha) = split_components(body);
    let [l, a, b] = three(&tokens)?;
    let lightness =
        number(l).map(|(value, percent)| if percent { value / 100.0 } else { value })?;
    let ab = |token: &str| {
        number(token).map(|(value, percent)| if percent { value * 0.004 } else { value })
    };
    Some(Color::Oklab {
        l: lightness,
        a: ab(a)?,
        b: ab(b)?,
        alpha: alpha_value(alpha)?,
    })
}

fn parse_oklch(body: &str) -> Option<Color> {
    let (tokens, alpha) = split_components(body);
    let [l, c, h] = three(&tokens)?;
    let lightness =
        number(l).map(|(value, percent)| if percent { value / 100.0 } else { value })?;
    let chroma =
        number(c).map(|(value, percent)| if percent { value * 0.004 } else { value })?;
    Some(Color::Oklch {
        l: lightness,
        c: chroma,
        h: hue(h)?,
        alpha: alpha_value(alpha)?,
    })
}

fn three<'a>(tokens: &[&'a str]) -> Option<[&'a str; 3]> {
    match tokens {
        [a, b, c] => Some([a, b, c]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_lengths_expand_correctly() {
        assert_eq!(
            parse("#f53"),
            Some(Color::Rgb {
                r: 1.0,
                g: 85.0 / 255.0,
                b: 51.0 / 255.0,
                alpha: None,
            })
        );
        assert_eq!(
            parse("#ff573380"),
            Some(Color::Rgb {
                r: 1.0,
                g: 87.0 / 255.0,
                b: 51.0 / 255.0,
                alpha: Some(128.0 / 255.0),
            })
        );
        assert_eq!(parse("#ff57"), parse("#ffff5577"));
        assert!(parse("#ff573").is_none());
        assert!(parse("#gg5733").is_none());
    }

    #[test]
    fn rgb_legacy_and_modern_agree() {
        let legacy = parse("rgba(255, 87, 51, 0.5)").unwrap();
        let modern = parse("rgb(255 87 51 / 0.5)").unwrap();
        assert_eq!(legacy, modern);
        assert_eq!(legacy.alpha(), Some(0.5));
    }

    #[test]
    fn rgb_percent_channels_scale_to_unit() {
        assert_eq!(
            parse("rgb(100%, 0%, 50%)"),
            Some(Color::Rgb {
                r: 1.0,
                g: 0.0,
                b: 0.5,
                alpha: None,
            })
        );
    }

    #[test]
    fn hsl_hue_units_convert_to_degrees() {
        let quarter_turn = parse("hsl(0.25turn, 100%, 60%)").unwrap();
        assert_eq!(
            quarter_turn,
            Color::Hsl {
                h: 90.0,
                s: 1.0,
                l: 0.6,
                alpha: None,
            }
        );
        let gradians = parse("hsl(100grad, 100%, 60%)").unwrap();
        assert_eq!(quarter_turn, gradians);
    }

    #[test]
    fn saturation_reads_as_percent_without_the_sign() {
        assert_eq!(parse("hsl(11, 100, 60)"), parse("hsl(11, 100%, 60%)"));
    }

    #[test]
    fn lab_percent_reference_ranges() {
        assert_eq!(
            parse("lab(100% 100% -100%)"),
            Some(Color::Lab {
                l: 100.0,
                a: 125.0,
                b: -125.0,
                alpha: None,
            })
        );
        assert_eq!(
            parse("oklch(68% 100% 40)"),
            Some(Color::Oklch {
                l: 0.68,
                c: 0.4,
                h: 40.0,
                alpha: None,
            })
        );
        assert_eq!(
            parse("oklch(68% 50% 40)"),
            Some(Color::Oklch {
                l: 0.68,
                c: 0.2,
                h: 40.0,
                alpha: None,
            })
        );
        assert_eq!(
            parse("oklab(68% 100% -100%)"),
            Some(Color::Oklab {
                l: 0.68,
                a: 0.4,
                b: -0.4,
                alpha: None,
            })
        );
    }

    #[test]
    fn percent_alpha_scales_to_unit() {
        assert_eq!(parse("hwb(11 20% 0% / 50%)").unwrap().alpha(), Some(0.5));
    }

    #[test]
    fn named_colors_parse_as_rgb() {
        assert_eq!(
            parse("red"),
            Some(Color::Rgb {
                r: 1.0,
                g: 0.0,
                b: 0.0,
                alpha: None,
            })
        );
        assert_eq!(parse("RebeccaPurple"), parse("rebeccapurple"));
    }

    #[test]
    fn rejects_blank_and_unrecognized_input() {
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
        assert!(parse("notacolor").is_none());
        assert!(parse("rgb(1, 2)").is_none());
        assert!(parse("lab(a b c)").is_none());
    }
}
