//! Tests for flare classification

use crate::flare_class::{FlareClass, FlareClassParseError, FlareLetter};

// ========== Letter ordering and power ==========

#[test]
fn test_letters_ordered_weakest_first() {
    assert!(FlareLetter::A < FlareLetter::B);
    assert!(FlareLetter::B < FlareLetter::C);
    assert!(FlareLetter::C < FlareLetter::M);
    assert!(FlareLetter::M < FlareLetter::X);
}

#[test]
fn test_each_letter_is_ten_times_stronger() {
    for pair in FlareLetter::ALL.windows(2) {
        assert_eq!(pair[1].relative_power() / pair[0].relative_power(), 10.0);
    }
}

#[test]
fn test_letter_from_speed_ladder() {
    assert_eq!(FlareLetter::from_speed(300.0), FlareLetter::B);
    assert_eq!(FlareLetter::from_speed(500.0), FlareLetter::B);
    assert_eq!(FlareLetter::from_speed(501.0), FlareLetter::C);
    assert_eq!(FlareLetter::from_speed(1000.0), FlareLetter::C);
    assert_eq!(FlareLetter::from_speed(1001.0), FlareLetter::M);
}

// ========== Parsing ==========

#[test]
fn test_parse_letter_with_magnitude() {
    let class: FlareClass = "X8.5".parse().unwrap();
    assert_eq!(class.letter, FlareLetter::X);
    assert_eq!(class.magnitude, Some(8.5));
}

#[test]
fn test_parse_bare_letter() {
    let class: FlareClass = "M".parse().unwrap();
    assert_eq!(class.letter, FlareLetter::M);
    assert_eq!(class.magnitude, None);
}

#[test]
fn test_parse_is_case_insensitive() {
    let class: FlareClass = "x2.2".parse().unwrap();
    assert_eq!(class.letter, FlareLetter::X);
    assert_eq!(class.magnitude, Some(2.2));
}

#[test]
fn test_parse_historic_x28() {
    // The 2003 Halloween storm flare
    let class: FlareClass = "X28".parse().unwrap();
    assert_eq!(class.letter, FlareLetter::X);
    assert_eq!(class.magnitude, Some(28.0));
}

#[test]
fn test_parse_rejects_empty() {
    assert_eq!(
        "".parse::<FlareClass>(),
        Err(FlareClassParseError::Empty)
    );
}

#[test]
fn test_parse_rejects_unknown_letter() {
    assert_eq!(
        "Z5".parse::<FlareClass>(),
        Err(FlareClassParseError::UnknownLetter('Z'))
    );
}

#[test]
fn test_parse_rejects_bad_magnitude() {
    assert!(matches!(
        "Xbig".parse::<FlareClass>(),
        Err(FlareClassParseError::InvalidMagnitude(_))
    ));
}

// ========== Display ==========

#[test]
fn test_display_round_trips() {
    for text in ["X8.5", "M2", "C", "B1.1"] {
        let class: FlareClass = text.parse().unwrap();
        assert_eq!(class.to_string(), text);
    }
}

// ========== Relative power ==========

#[test]
fn test_magnitude_scales_power() {
    let x2 = FlareClass::new(FlareLetter::X, 2.0);
    let m2 = FlareClass::new(FlareLetter::M, 2.0);
    assert_eq!(x2.relative_power() / m2.relative_power(), 10.0);

    // A bare class counts as magnitude 1
    let bare_x = FlareClass::bare(FlareLetter::X);
    assert_eq!(bare_x.relative_power(), 10000.0);
}
