//! Unit constants, display presets, and direction enums

use aim_config::config::{
    approx_eq, weakly_approx_eq, CardinalDirection, LightStatus, NumberFormat, TurnDirection,
    BITS_PER_BYTE, BITS_PER_KB, BOOLEAN_SIZE, BYTES_PER_KB, BYTES_PER_MB, DOUBLE_EQUAL_PRECISION,
    DOUBLE_EQUAL_WEAK_PRECISION, DOUBLE_SIZE, ENUM_SIZE, INTEGER_SIZE, LEADING_ZEROES,
    NUM_OF_SECONDS_PER_HOUR, ONE_DEC, TEN_DEC, TWO_DEC, ZERO_DEC,
};

#[test]
fn test_data_size_constants() {
    assert_eq!(BITS_PER_BYTE, 8);
    assert_eq!(BYTES_PER_KB, 1024);
    assert_eq!(BITS_PER_KB, 8192);
    assert_eq!(BYTES_PER_MB, 1_048_576);
}

#[test]
fn test_platform_sizes() {
    assert_eq!(INTEGER_SIZE, 32);
    assert_eq!(DOUBLE_SIZE, 64);
    assert_eq!(BOOLEAN_SIZE, 1);
    assert_eq!(ENUM_SIZE, 8);
    assert_eq!(NUM_OF_SECONDS_PER_HOUR, 3600);
}

#[test]
fn test_equality_tolerances() {
    assert_eq!(DOUBLE_EQUAL_PRECISION, 1e-10);
    assert_eq!(DOUBLE_EQUAL_WEAK_PRECISION, 1e-6);

    assert!(approx_eq(0.1 + 0.2, 0.3));
    assert!(!approx_eq(1.0, 1.0 + 1e-8));
    assert!(weakly_approx_eq(1.0, 1.0 + 1e-8));
    assert!(!weakly_approx_eq(1.0, 1.00001));
}

#[test]
fn test_zero_dec() {
    assert_eq!(ZERO_DEC.format(3.7), "4");
    assert_eq!(ZERO_DEC.format(0.0), "0");
    assert_eq!(ZERO_DEC.format(0.2), "0");
    assert_eq!(ZERO_DEC.format(-12.2), "-12");
}

#[test]
fn test_fraction_presets_drop_zero_integer() {
    assert_eq!(ONE_DEC.format(0.5), ".5");
    assert_eq!(ONE_DEC.format(1.5), "1.5");
    assert_eq!(ONE_DEC.format(-1.24), "-1.2");
    assert_eq!(TWO_DEC.format(1.5), "1.50");
    assert_eq!(TWO_DEC.format(0.0), ".00");
    assert_eq!(TEN_DEC.format(0.1), ".1000000000");
}

#[test]
fn test_rounded_zero_has_no_sign() {
    assert_eq!(ONE_DEC.format(-0.01), ".0");
    assert_eq!(ZERO_DEC.format(-0.2), "0");
}

#[test]
fn test_leading_zeroes() {
    assert_eq!(LEADING_ZEROES.format(42.0), "00000042");
    assert_eq!(LEADING_ZEROES.format(0.0), "00000000");
    assert_eq!(LEADING_ZEROES.format(123456789.0), "123456789");
    assert_eq!(LEADING_ZEROES.format(-7.0), "-00000007");
}

#[test]
fn test_custom_format() {
    let format = NumberFormat::new(3, 2);
    assert_eq!(format.min_integer_digits(), 3);
    assert_eq!(format.fraction_digits(), 2);
    assert_eq!(format.format(4.5), "004.50");
    assert_eq!(format.format(f64::NAN), "NaN");
}

#[test]
fn test_direction_enums() {
    assert_eq!(CardinalDirection::ALL.len(), 4);
    assert_eq!(TurnDirection::ALL.len(), 4);
    assert_eq!(LightStatus::ALL.len(), 3);

    assert_eq!(CardinalDirection::ALL[0], CardinalDirection::North);
    assert_ne!(TurnDirection::Left, TurnDirection::Right);
    assert_eq!(LightStatus::ALL[2], LightStatus::Red);

    assert_eq!(CardinalDirection::West.to_string(), "west");
    assert_eq!(TurnDirection::UTurn.to_string(), "u-turn");
    assert_eq!(LightStatus::Yellow.to_string(), "yellow");
}
