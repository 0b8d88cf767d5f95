use parsefp::{double_is_range_error, float_is_range_error, parse_double, parse_float, RangeError};

fn double(input: &str) -> (f64, usize) {
    parse_double(input.as_bytes())
        .unwrap()
        .unwrap_or_else(|| panic!("no number in {:?}", input))
}

fn float(input: &str) -> (f32, usize) {
    parse_float(input.as_bytes())
        .unwrap()
        .unwrap_or_else(|| panic!("no number in {:?}", input))
}

#[test]
fn parses_plain_decimals() {
    assert_eq!(double("0"), (0.0, 1));
    assert_eq!(double("42"), (42.0, 2));
    assert_eq!(double("-17"), (-17.0, 3));
    assert_eq!(double("3.14159"), (3.14159, 7));
    assert_eq!(double("0.5"), (0.5, 3));
    assert_eq!(double(".5"), (0.5, 2));
    assert_eq!(double("5."), (5.0, 2));
    assert_eq!(double("1e10"), (1e10, 4));
    assert_eq!(double("1.5E-3"), (1.5e-3, 6));
    assert_eq!(double("+2.5e+10"), (2.5e10, 8));
}

#[test]
fn reports_consumed_length_not_total_length() {
    assert_eq!(double("1.5,rest"), (1.5, 3));
    assert_eq!(double("2e3]"), (2000.0, 3));
    assert_eq!(double("7 8"), (7.0, 1));
}

#[test]
fn no_match_leaves_position_unmoved() {
    assert_eq!(parse_double(b"abc"), Ok(None));
    assert_eq!(parse_double(b""), Ok(None));
    assert_eq!(parse_double(b" 42"), Ok(None), "no whitespace skipping");
    assert_eq!(parse_double(b"\t1"), Ok(None));
    assert_eq!(parse_double(b"e5"), Ok(None));
    assert_eq!(parse_double(b"-"), Ok(None));
    assert_eq!(parse_double(b"."), Ok(None));
    assert_eq!(parse_double(b"infinity"), Ok(None));
    assert_eq!(parse_double(b"nan"), Ok(None));
}

#[test]
fn malformed_numbers_are_errors() {
    for input in ["1e", "1e+", "1e-", "3.5ex", "0x", "0xG", "0x1p", "0x1.8p+"] {
        let result = parse_double(input.as_bytes());
        assert!(result.is_err(), "{:?} should be malformed, got {:?}", input, result);
    }
}

#[test]
fn malformed_error_reports_offset() {
    let err = parse_double(b"12e+").unwrap_err();
    assert_eq!(err.offset(), 4);
    let err = parse_double(b"0x").unwrap_err();
    assert_eq!(err.offset(), 2);
}

#[test]
fn overflow_and_underflow_parse_with_range_signal() {
    let (value, len) = double("1e400");
    assert_eq!(len, 5);
    assert_eq!(value, f64::INFINITY);
    assert_eq!(double_is_range_error(value), RangeError::Overflow);

    let (value, len) = double("-1e400");
    assert_eq!(len, 6);
    assert_eq!(value, f64::NEG_INFINITY);
    assert_eq!(double_is_range_error(value), RangeError::Underflow);

    // A vanishing magnitude parses to zero and is not a range error.
    let (value, _) = double("1e-400");
    assert_eq!(value, 0.0);
    assert_eq!(double_is_range_error(value), RangeError::None);

    let (value, _) = double("-1e-400");
    assert_eq!(value, 0.0);
    assert!(value.is_sign_negative());
    assert_eq!(double_is_range_error(value), RangeError::None);
}

#[test]
fn extremes_of_the_f64_range() {
    assert_eq!(double("1.7976931348623157e308").0, f64::MAX);
    assert_eq!(double("-1.7976931348623157e308").0, f64::MIN);
    assert_eq!(double("2.2250738585072014e-308").0, f64::MIN_POSITIVE);
    assert_eq!(double("5e-324").0, 5e-324);
    assert_eq!(double("4.9406564584124654e-324").0, 5e-324);
    assert_eq!(double("1.7976931348623159e308").0, f64::INFINITY);
}

#[test]
fn many_digit_inputs_round_correctly() {
    // 20+ significant digits force the engine onto its fallback.
    assert_eq!(double("12345678901234567890123").0, 1.2345678901234568e22);
    assert_eq!(double("0.000000000000000000000012345678901234567890123").0, 1.2345678901234568e-23);
    // Tie cases around 2^53.
    assert_eq!(double("9007199254740993").0, 9007199254740992.0);
    assert_eq!(double("9007199254740993.0000000000000001").0, 9007199254740994.0);
}

#[test]
fn hex_floats_parse_exactly() {
    assert_eq!(double("0x1.8p3"), (12.0, 7));
    assert_eq!(double("-0x1.8p3"), (-12.0, 8));
    assert_eq!(double("0X1P10"), (1024.0, 6));
    assert_eq!(double("0x.4p1"), (0.5, 6));
    assert_eq!(double("0x1.8"), (1.5, 5));
    assert_eq!(double("0xAp-2"), (2.5, 6));

    let (value, _) = double("0x1p-1074");
    assert_eq!(value, 5e-324);

    let (value, _) = double("0x1p1024");
    assert_eq!(value, f64::INFINITY);
    assert_eq!(double_is_range_error(value), RangeError::Overflow);
}

#[test]
fn parse_float_narrows_through_the_double_parse() {
    assert_eq!(float("1.5"), (1.5f32, 3));
    assert_eq!(float("-3.25e2"), (-325.0f32, 7));
    assert_eq!(float("1e-50").0, 0.0f32);

    // 0.1 narrows to the f32 nearest of the f64 parse.
    assert_eq!(float("0.1").0, 0.1f32);
}

#[test]
fn parse_float_true_overflow_is_signed_infinity() {
    let (value, len) = float("1e39");
    assert_eq!(len, 4);
    assert_eq!(value, f32::INFINITY);
    assert_eq!(float_is_range_error(value), RangeError::Overflow);

    let (value, _) = float("-1e39");
    assert_eq!(value, f32::NEG_INFINITY);
    assert_eq!(float_is_range_error(value), RangeError::Underflow);

    let (value, _) = float("3.4028237e38");
    assert_eq!(value, f32::INFINITY);

    let (value, _) = float("1e400");
    assert_eq!(value, f32::INFINITY);
}

#[test]
fn parse_float_boundary_artifact_is_no_match() {
    // The decimal below parses to the exact f64 halfway point between
    // f32::MAX and 2^128; narrowing it to infinity would be a rounding
    // artifact, so the 32-bit parse refuses instead of guessing.
    let halfway = "3.4028235677973366e38";
    let (as_double, _) = double(halfway);
    assert_eq!(as_double, f64::from_bits(0x47EF_FFFF_F000_0000));
    assert_eq!(parse_float(halfway.as_bytes()), Ok(None));
    assert_eq!(parse_float(b"-3.4028235677973366e38"), Ok(None));

    // Just inside the boundary stays finite...
    let (value, _) = float("3.4028234e38");
    assert_eq!(value, 3.4028234e38f32);
    assert_eq!(float_is_range_error(value), RangeError::None);

    // ...and f32::MAX itself survives the round trip.
    let (value, _) = float("3.4028235e38");
    assert_eq!(value, f32::MAX);
}

#[test]
fn signed_zero_keeps_its_sign() {
    let (value, _) = double("-0");
    assert_eq!(value, 0.0);
    assert!(value.is_sign_negative());

    let (value, _) = float("-0.0e7");
    assert_eq!(value, 0.0f32);
    assert!(value.is_sign_negative());
}
