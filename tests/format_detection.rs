//! Format detection integration tests
//!
//! Detection is prefix sniffing over trimmed, lowercased input and is
//! independent of numeric validity, so every case here is purely lexical.

use recolor::{detect_format, ColorFormat};
use rstest::rstest;

#[rstest]
#[case("#fff", ColorFormat::Hex)]
#[case("#FFF", ColorFormat::Hex)]
#[case("#ff5733", ColorFormat::Hex)]
#[case("#ff573380", ColorFormat::Hex)]
#[case("rgb(255, 87, 51)", ColorFormat::Rgb)]
#[case("RGB(255, 87, 51)", ColorFormat::Rgb)]
#[case("rgba(255, 87, 51, 0.5)", ColorFormat::Rgb)]
#[case("RGBA(255, 87, 51, 0.5)", ColorFormat::Rgb)]
#[case("hsl(11, 100%, 60%)", ColorFormat::Hsl)]
#[case("HSL(11, 100%, 60%)", ColorFormat::Hsl)]
#[case("hsla(11, 100%, 60%, 0.5)", ColorFormat::Hsl)]
#[case("hwb(11 20% 0%)", ColorFormat::Hwb)]
#[case("HWB(11 20% 0%)", ColorFormat::Hwb)]
#[case("lab(62 58 49)", ColorFormat::Lab)]
#[case("LAB(62 58 49)", ColorFormat::Lab)]
#[case("lch(62 76 40)", ColorFormat::Lch)]
#[case("LCH(62 76 40)", ColorFormat::Lch)]
#[case("oklab(0.68 0.13 0.11)", ColorFormat::Oklab)]
#[case("OKLAB(0.68 0.13 0.11)", ColorFormat::Oklab)]
#[case("oklch(0.68 0.17 40)", ColorFormat::Oklch)]
#[case("OKLCH(0.68 0.17 40)", ColorFormat::Oklch)]
fn detects_format(#[case] input: &str, #[case] expected: ColorFormat) {
    assert_eq!(detect_format(input), Some(expected));
}

#[rstest]
#[case("red")]
#[case("notacolor")]
#[case("")]
#[case("   ")]
#[case("label")]
#[case("16px")]
fn rejects_unrecognized_input(#[case] input: &str) {
    assert_eq!(detect_format(input), None);
}

#[rstest]
#[case("  #ff5733  ", ColorFormat::Hex)]
#[case("  rgb(255, 87, 51)  ", ColorFormat::Rgb)]
#[case("\toklch(0.68 0.17 40)\n", ColorFormat::Oklch)]
fn tolerates_surrounding_whitespace(#[case] input: &str, #[case] expected: ColorFormat) {
    assert_eq!(detect_format(input), Some(expected));
}

#[test]
fn case_insensitivity_is_symmetric() {
    assert_eq!(detect_format("RGB(1,2,3)"), detect_format("rgb(1,2,3)"));
}

#[test]
fn labels_and_examples_come_from_the_definition_table() {
    assert_eq!(ColorFormat::Hex.label(), "HEX");
    assert_eq!(ColorFormat::Oklch.label(), "OKLCH");
    assert_eq!(ColorFormat::Hex.example(), "#ff5733");
    assert_eq!(ColorFormat::Rgb.example(), "rgb(255, 87, 51)");
    assert_eq!(ColorFormat::Hsl.example(), "hsl(11, 100%, 60%)");
    assert_eq!(ColorFormat::Oklch.example(), "oklch(0.68 0.17 40)");
    assert_eq!(ColorFormat::Hwb.description(), "Hue, Whiteness, Blackness");
}
