//! Tests for the Color type.

use component::{Color, ColorParseError, NamedColor};

// ============================================================================
// Named Colors
// ============================================================================

#[test]
fn parse_every_named_color() {
    for named in NamedColor::ALL {
        let parsed = Color::parse(named.name());
        assert_eq!(parsed, Ok(Color::Named(named)), "Failed to parse: {}", named.name());
    }
}

#[test]
fn parse_case_insensitive() {
    assert_eq!(Color::parse("GOLD").unwrap(), Color::Named(NamedColor::Gold));
    assert_eq!(Color::parse("Gold").unwrap(), Color::Named(NamedColor::Gold));
    assert_eq!(Color::parse("gOlD").unwrap(), Color::Named(NamedColor::Gold));
}

#[test]
fn parse_with_whitespace() {
    assert_eq!(Color::parse("  yellow  ").unwrap(), Color::Named(NamedColor::Yellow));
    assert_eq!(Color::parse("\tgray\t").unwrap(), Color::Named(NamedColor::Gray));
}

#[test]
fn parse_grey_spelling() {
    assert_eq!(Color::parse("grey").unwrap(), Color::Named(NamedColor::Gray));
    assert_eq!(Color::parse("dark_grey").unwrap(), Color::Named(NamedColor::DarkGray));
}

#[test]
fn named_color_rgb_values() {
    assert_eq!(NamedColor::Gold.to_rgb(), (0xFF, 0xAA, 0x00));
    assert_eq!(NamedColor::Yellow.to_rgb(), (0xFF, 0xFF, 0x55));
    assert_eq!(NamedColor::Gray.to_rgb(), (0xAA, 0xAA, 0xAA));
    assert_eq!(NamedColor::DarkGray.to_rgb(), (0x55, 0x55, 0x55));
}

// ============================================================================
// Hex and RGB
// ============================================================================

#[test]
fn parse_hex_colors() {
    assert_eq!(Color::parse("#FA342D").unwrap(), Color::from_hex(0xFA342D));
    assert_eq!(Color::parse("#fa342d").unwrap(), Color::from_hex(0xFA342D));
    assert_eq!(Color::parse("#fff").unwrap(), Color::Rgb(255, 255, 255));
}

#[test]
fn parse_rgb_function() {
    assert_eq!(
        Color::parse("rgb(235, 217, 77)").unwrap(),
        Color::from_hex(0xEBD94D)
    );
    assert_eq!(Color::parse("rgb(0,0,0)").unwrap(), Color::Rgb(0, 0, 0));
}

#[test]
fn to_rgb_for_both_variants() {
    assert_eq!(Color::Named(NamedColor::Red).to_rgb(), (0xFF, 0x55, 0x55));
    assert_eq!(Color::Rgb(10, 20, 30).to_rgb(), (10, 20, 30));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn unknown_name_error() {
    assert_eq!(
        Color::parse("crimson"),
        Err(ColorParseError::UnknownName("crimson".to_string()))
    );
}

#[test]
fn invalid_hex_error() {
    assert!(matches!(Color::parse("#12345"), Err(ColorParseError::InvalidHex(_))));
    assert!(matches!(Color::parse("#zzzzzz"), Err(ColorParseError::InvalidHex(_))));
}

#[test]
fn invalid_rgb_error() {
    assert!(matches!(Color::parse("rgb(1, 2)"), Err(ColorParseError::InvalidRgb(_))));
    assert!(matches!(
        Color::parse("rgb(300, 0, 0)"),
        Err(ColorParseError::InvalidRgb(_))
    ));
}

#[test]
fn error_messages() {
    let err = Color::parse("#12").unwrap_err();
    assert_eq!(err.to_string(), "invalid hex color: #12");

    let err = Color::parse("mauve").unwrap_err();
    assert_eq!(err.to_string(), "unknown color name: mauve");
}
