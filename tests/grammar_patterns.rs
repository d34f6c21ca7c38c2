//! Grammar pattern integration tests
//!
//! Verifies that each per-format grammar and the combined alternation
//! locate exactly the spans a scan should see, including the legacy/modern
//! syntax variants and position bookkeeping.

use recolor::grammar::{pattern, COMBINED};
use recolor::scan::detect_colors;
use recolor::ColorFormat;
use rstest::rstest;

#[rstest]
#[case(ColorFormat::Hex, "#ff5733")]
#[case(ColorFormat::Hex, "#fff")]
#[case(ColorFormat::Hex, "#ff573380")]
#[case(ColorFormat::Rgb, "rgb(255, 87, 51)")]
#[case(ColorFormat::Rgb, "rgba(255, 87, 51, 0.5)")]
#[case(ColorFormat::Rgb, "rgb(255 87 51 / 0.5)")]
#[case(ColorFormat::Hsl, "hsl(11, 100%, 60%)")]
#[case(ColorFormat::Hsl, "hsla(11deg, 100%, 60%, 0.5)")]
#[case(ColorFormat::Hwb, "hwb(11 20% 0%)")]
#[case(ColorFormat::Hwb, "hwb(11deg 20% 0% / 0.5)")]
#[case(ColorFormat::Lab, "lab(62 58 49)")]
#[case(ColorFormat::Lab, "lab(62% -58 49 / 0.5)")]
#[case(ColorFormat::Lch, "lch(62 76 40)")]
#[case(ColorFormat::Lch, "lch(62% 76 40deg / 0.5)")]
#[case(ColorFormat::Oklab, "oklab(0.68 0.13 0.11)")]
#[case(ColorFormat::Oklab, "oklab(68% -0.13 0.11 / 0.5)")]
#[case(ColorFormat::Oklch, "oklch(0.68 0.17 40)")]
#[case(ColorFormat::Oklch, "oklch(68% 0.17 40deg / 0.5)")]
fn per_format_pattern_matches_whole_literal(#[case] format: ColorFormat, #[case] literal: &str) {
    let found = pattern(format)
        .expect("convertible format has a grammar")
        .find(literal)
        .expect("literal should match");
    assert_eq!(found.as_str(), literal);
}

#[rstest]
#[case(".button { color: #ff5733; }", "#ff5733")]
#[case(".button { color: #f53; }", "#f53")]
#[case(".button { color: #ff573380; }", "#ff573380")]
#[case(".button { color: rgb(255, 87, 51); }", "rgb(255, 87, 51)")]
#[case(".button { color: rgba(255, 87, 51, 0.5); }", "rgba(255, 87, 51, 0.5)")]
#[case(".button { color: hsl(11, 100%, 60%); }", "hsl(11, 100%, 60%)")]
#[case(".button { color: hsla(11, 100%, 60%, 0.5); }", "hsla(11, 100%, 60%, 0.5)")]
#[case(".button { color: hwb(11 20% 0%); }", "hwb(11 20% 0%)")]
#[case(".button { color: lab(62 58 49); }", "lab(62 58 49)")]
#[case(".button { color: lch(62 76 40); }", "lch(62 76 40)")]
#[case(".button { color: oklab(0.68 0.13 0.11); }", "oklab(0.68 0.13 0.11)")]
#[case(".button { color: oklch(0.68 0.17 40); }", "oklch(0.68 0.17 40)")]
fn scanner_isolates_the_literal(#[case] content: &str, #[case] expected: &str) {
    let matches = detect_colors(content);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].original, expected);
}

#[test]
fn scanner_finds_multiple_colors() {
    let content = "\n.button {\n  color: #ff5733;\n  background: rgb(255, 87, 51);\n  border-color: hsl(11, 100%, 60%);\n}\n";
    assert_eq!(detect_colors(content).len(), 3);
}

#[test]
fn scanner_ignores_color_free_content() {
    assert!(detect_colors(".button { font-size: 16px; }").is_empty());
}

#[test]
fn scanner_reports_line_and_column() {
    let matches = detect_colors(".button { color: #ff5733; }");
    assert_eq!(matches[0].line, 1);
    assert_eq!(matches[0].column, 18);

    let matches = detect_colors(".button {\n  color: #ff5733;\n}");
    assert_eq!(matches[0].line, 2);
    assert_eq!(matches[0].column, 10);
}

#[test]
fn combined_matches_are_non_overlapping_and_ordered() {
    let content = "#abc#def rgb(1,2,3)rgb(4,5,6)";
    let spans: Vec<(usize, usize)> = COMBINED
        .find_iter(content)
        .map(|m| (m.start(), m.end()))
        .collect();
    assert_eq!(spans.len(), 4);
    for window in spans.windows(2) {
        assert!(window[0].1 <= window[1].0);
    }
}

#[test]
fn hex_requires_a_word_boundary() {
    // Seven hex digits cannot end on a boundary; identifiers keep going.
    assert!(detect_colors("url(#ff57334g)").is_empty());
    // Punctuation right after six digits is fine.
    assert_eq!(detect_colors("{color:#ff5733}").len(), 1);
}

#[test]
fn unit_suffixed_values_are_not_colors() {
    assert!(detect_colors("margin: 16px 2em 0 auto;").is_empty());
    assert!(detect_colors("grid-template: repeat(3, 1fr);").is_empty());
}
