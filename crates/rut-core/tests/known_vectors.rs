//! # Known-Vector Tests
//!
//! Exercises the public surface end to end with identifiers whose check
//! characters are known.

use rut_core::{
    compute_check_digit, format, format_code, generate, generate_default, validate, FormatMode,
    Rut, RutError,
};

/// (body, check character, grouped form)
const VECTORS: &[(&str, char, &str)] = &[
    ("18622178", '8', "18.622.178-8"),
    ("11111111", '1', "11.111.111-1"),
    ("70360100", '6', "70.360.100-6"),
    ("22222222", '2', "22.222.222-2"),
    ("15304340", 'K', "15.304.340-K"),
    ("8367720", '1', "8.367.720-1"),
];

#[test]
fn compute_matches_vectors() {
    for (body, check, _) in VECTORS {
        assert_eq!(compute_check_digit(body).unwrap(), *check, "body {body}");
    }
}

#[test]
fn every_shape_validates() {
    for (body, check, grouped) in VECTORS {
        assert_eq!(validate(grouped), Ok(true), "{grouped}");
        assert_eq!(validate(&format!("{body}-{check}")), Ok(true));
        assert_eq!(validate(&format!("{body}{check}")), Ok(true));
    }
}

#[test]
fn documented_validation_outcomes() {
    assert_eq!(validate("18.622.178-8"), Ok(true));
    assert_eq!(validate("15304340-k"), Ok(true));
    assert_eq!(validate("11111111-3"), Ok(false));
    assert_eq!(validate(""), Err(RutError::EmptyInput));
    assert_eq!(validate("1"), Err(RutError::EmptyInput));
    assert!(matches!(validate("15g#4z52-4"), Err(RutError::InvalidInput(_))));
}

#[test]
fn format_converts_between_shapes() {
    for (body, check, grouped) in VECTORS {
        let bare = format!("{body}{check}");
        let dashed = format!("{body}-{check}");
        assert_eq!(format(&dashed, FormatMode::WithGroupAndDash), *grouped);
        assert_eq!(format(grouped, FormatMode::DashOnly), dashed);
        assert_eq!(format(grouped, FormatMode::Bare), bare);
        assert_eq!(
            format(&format(grouped, FormatMode::Bare), FormatMode::WithGroupAndDash),
            *grouped
        );
    }
}

#[test]
fn format_code_matches_named_modes() {
    for mode in FormatMode::all() {
        assert_eq!(
            format_code("18622178-8", mode.code()).unwrap(),
            format("18622178-8", *mode)
        );
    }
    for code in [0u8, 4, 99, u8::MAX] {
        assert!(matches!(
            format_code("18.622.178-8", code),
            Err(RutError::InvalidOption { input, .. }) if input == "18.622.178-8"
        ));
    }
}

#[test]
fn generated_ruts_parse_as_newtype() {
    for _ in 0..100 {
        let raw = generate_default();
        let rut = Rut::new(&raw).unwrap();
        assert_eq!(rut.formatted(FormatMode::DashOnly), raw);
    }
    let raw = generate(1, 9);
    assert!(Rut::new(&raw).is_ok());
}
