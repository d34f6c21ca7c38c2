//! Lexical grammars for CSS color literals
//!
//! Each supported notation gets one compiled pattern, assembled from a small
//! set of shared building blocks so that numeric syntax, whitespace, angle
//! units, and alpha clauses behave identically across formats. A single
//! combined alternation of all eight patterns is used for one-pass document
//! scanning.
//!
//! The grammars are lexical only: they locate literal spans and tolerate the
//! legacy/modern syntax variance (commas vs spaces, percent vs raw numbers,
//! comma-or-slash vs slash-only alpha). Channel value extraction is the
//! parser's job (`color::parse`), never the grammar's.
//!
//! All patterns are compiled once into process-wide statics and are
//! read-only afterwards. Matching goes through `Regex::find_iter`, which
//! carries no cursor state across calls, so the statics are safe to share
//! across threads and concurrent scans.

use crate::format::ColorFormat;
use once_cell::sync::Lazy;
use regex::Regex;

// ── Shared building blocks ───────────────────────────────────

/// Integer or decimal: `255`, `0.5`, `100.25`
const NUMERIC: &str = r"[\d.]+";

/// Numeric with optional leading minus, for Lab/OKLab `a`/`b` channels
const SIGNED_NUMERIC: &str = r"[\d.-]+";

/// Numeric followed by an optional percent sign
const NUMERIC_PCT: &str = r"[\d.]+%?";

/// Zero-or-more whitespace (space, tab, newline, carriage return)
const WS_OPT: &str = r"\s*";

/// One-or-more whitespace, the modern-only channel separator
const WS_REQ: &str = r"\s+";

/// Optional CSS angle unit after hue-like channels
const ANGLE_OPT: &str = r"(?:deg|rad|grad|turn)?";

/// Comma or whitespace, the legacy-capable channel separator (rgb/hsl)
const SEP: &str = r"[,\s]";

/// Optional alpha clause introduced by comma or slash (legacy-capable formats)
const ALPHA_OPT: &str = r"(?:[,/]\s*[\d.]+%?)?";

/// Optional alpha clause introduced by slash only (modern-only formats)
const SLASH_ALPHA_OPT: &str = r"(?:/\s*[\d.]+%?)?";

// ── Per-format pattern sources ───────────────────────────────

/// `#fff`, `#ffff`, `#ffffff`, `#ffffffff`
///
/// Longest digit count first (the alternation is first-match), and a trailing
/// word boundary so the pattern never matches inside a longer identifier.
fn hex_source() -> String {
    r"#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{4}|[0-9a-fA-F]{3})\b".to_string()
}

/// `rgb(255, 87, 51)`, `rgba(255, 87, 51, 0.5)`, `rgb(255 87 51 / 0.5)`
fn rgb_source() -> String {
    format!(
        r"rgba?\({WS_OPT}{NUMERIC_PCT}{WS_OPT}{SEP}{WS_OPT}{NUMERIC_PCT}{WS_OPT}{SEP}{WS_OPT}{NUMERIC_PCT}{WS_OPT}{ALPHA_OPT}{WS_OPT}\)"
    )
}

/// `hsl(11, 100%, 60%)`, `hsla(11deg, 100%, 60%, 0.5)`, `hsl(11 100% 60% / 0.5)`
fn hsl_source() -> String {
    format!(
        r"hsla?\({WS_OPT}{NUMERIC}{ANGLE_OPT}{WS_OPT}{SEP}{WS_OPT}{NUMERIC_PCT}{WS_OPT}{SEP}{WS_OPT}{NUMERIC_PCT}{WS_OPT}{ALPHA_OPT}{WS_OPT}\)"
    )
}

/// `hwb(11 20% 0%)`, `hwb(11deg 20% 0% / 0.5)` — modern syntax only,
/// percent signs mandatory on whiteness/blackness
fn hwb_source() -> String {
    format!(
        r"hwb\({WS_OPT}{NUMERIC}{ANGLE_OPT}{WS_REQ}{NUMERIC}%{WS_REQ}{NUMERIC}%{WS_OPT}{SLASH_ALPHA_OPT}{WS_OPT}\)"
    )
}

/// `lab(62 58 49)`, `lab(62% -58 49 / 0.5)` — `a`/`b` may be negative
fn lab_source() -> String {
    format!(
        r"lab\({WS_OPT}{NUMERIC_PCT}{WS_REQ}{SIGNED_NUMERIC}{WS_REQ}{SIGNED_NUMERIC}{WS_OPT}{SLASH_ALPHA_OPT}{WS_OPT}\)"
    )
}

/// `lch(62 76 40)`, `lch(62% 76 40deg / 0.5)`
fn lch_source() -> String {
    format!(
        r"lch\({WS_OPT}{NUMERIC_PCT}{WS_REQ}{NUMERIC}{WS_REQ}{NUMERIC}{ANGLE_OPT}{WS_OPT}{SLASH_ALPHA_OPT}{WS_OPT}\)"
    )
}

/// `oklab(0.68 0.13 0.11)`, `oklab(68% -0.13 0.11 / 0.5)`
fn oklab_source() -> String {
    format!(
        r"oklab\({WS_OPT}{NUMERIC_PCT}{WS_REQ}{SIGNED_NUMERIC}{WS_REQ}{SIGNED_NUMERIC}{WS_OPT}{SLASH_ALPHA_OPT}{WS_OPT}\)"
    )
}

/// `oklch(0.68 0.17 40)`, `oklch(68% 0.17 40deg / 0.5)`
fn oklch_source() -> String {
    format!(
        r"oklch\({WS_OPT}{NUMERIC_PCT}{WS_REQ}{NUMERIC}{WS_REQ}{NUMERIC}{ANGLE_OPT}{WS_OPT}{SLASH_ALPHA_OPT}{WS_OPT}\)"
    )
}

// ── Compiled grammar table ───────────────────────────────────

/// One compiled lexical pattern bound to its format.
#[derive(Debug)]
pub struct FormatGrammar {
    pub format: ColorFormat,
    pub pattern: Regex,
}

fn compile(source: &str) -> Regex {
    // Anchorless, case-insensitive. Sources are literal constants verified
    // by the grammar tests, so a compile failure is a programming error.
    Regex::new(&format!("(?i){source}")).unwrap()
}

/// The eight per-format grammars, compiled once.
///
/// The table order follows the canonical format order. The formats are
/// mutually exclusive at any start position (hex's `#` and the distinct
/// function-name prefixes), so ordering carries no disambiguation weight.
pub static GRAMMARS: Lazy<Vec<FormatGrammar>> = Lazy::new(|| {
    vec![
        FormatGrammar {
            format: ColorFormat::Hex,
            pattern: compile(&hex_source()),
        },
        FormatGrammar {
            format: ColorFormat::Rgb,
            pattern: compile(&rgb_source()),
        },
        FormatGrammar {
            format: ColorFormat::Hsl,
            pattern: compile(&hsl_source()),
        },
        FormatGrammar {
            format: ColorFormat::Hwb,
            pattern: compile(&hwb_source()),
        },
        FormatGrammar {
            format: ColorFormat::Lab,
            pattern: compile(&lab_source()),
        },
        FormatGrammar {
            format: ColorFormat::Lch,
            pattern: compile(&lch_source()),
        },
        FormatGrammar {
            format: ColorFormat::Oklab,
            pattern: compile(&oklab_source()),
        },
        FormatGrammar {
            format: ColorFormat::Oklch,
            pattern: compile(&oklch_source()),
        },
    ]
});

/// Combined alternation of all eight grammars, for single-pass document
/// scanning. Locates literal spans only; channel extraction happens after a
/// span is isolated.
pub static COMBINED: Lazy<Regex> = Lazy::new(|| {
    let alternation = [
        hex_source(),
        rgb_source(),
        hsl_source(),
        hwb_source(),
        lab_source(),
        lch_source(),
        oklab_source(),
        oklch_source(),
    ]
    .join("|");
    compile(&alternation)
});

/// Look up the compiled pattern for a single format. `Named` has no grammar.
pub fn pattern(format: ColorFormat) -> Option<&'static Regex> {
    GRAMMARS
        .iter()
        .find(|grammar| grammar.format == format)
        .map(|grammar| &grammar.pattern)
}
