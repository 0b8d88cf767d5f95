//! Decimal parser front-end and conversion strategy selection.
//!
//! One scanner delimits the numeric token and splits it into components;
//! the conversion strategy only decides how the committed digits become a
//! double. That keeps the two strategies interchangeable observable-
//! behavior-wise: which one is compiled in changes performance, never
//! results.
//!
//! No whitespace is skipped and `inf`/`nan` spellings are not numbers
//! here; the text must begin directly with a numeric token.

use crate::classify::is_inf;
use crate::error::{Error, ErrorCode};
use crate::hex;
use crate::num::Float;

/// A scanned decimal token, split into its components.
///
/// The integer digits carry no leading zeros and the exponent is the
/// explicit one from the text, saturated to i32.
struct Decimal<'a> {
    integer: &'a [u8],
    fraction: &'a [u8],
    exponent: i32,
    /// Offset one past the last consumed byte.
    end: usize,
}

/// A decimal-to-double conversion strategy.
///
/// Implementations must agree bit-for-bit on every token the scanner can
/// produce; the build-time selection below is a performance choice only.
trait Strategy {
    fn convert(decimal: &Decimal, token: &[u8]) -> f64;
}

/// The platform's general-purpose converter, `str::parse::<f64>`.
struct Platform;

impl Strategy for Platform {
    #[inline]
    fn convert(_decimal: &Decimal, token: &[u8]) -> f64 {
        // The scanner only emits ASCII tokens within the grammar the
        // standard library accepts, so neither step can fail.
        match core::str::from_utf8(token).ok().and_then(|text| text.parse().ok()) {
            Some(value) => value,
            None => 0.0,
        }
    }
}

/// The self-contained fast path; defers to [`Platform`] whenever it
/// cannot certify the result.
#[cfg(feature = "grisu")]
struct Grisu;

#[cfg(feature = "grisu")]
impl Strategy for Grisu {
    #[inline]
    fn convert(decimal: &Decimal, token: &[u8]) -> f64 {
        match crate::grisu::convert::<f64>(decimal.integer, decimal.fraction, decimal.exponent) {
            Some(value) => value,
            None => Platform::convert(decimal, token),
        }
    }
}

#[cfg(feature = "grisu")]
type Selected = Grisu;
#[cfg(not(feature = "grisu"))]
type Selected = Platform;

// SCANNER

#[inline]
fn is_digit(input: &[u8], pos: usize) -> bool {
    input.get(pos).map_or(false, |c| c.is_ascii_digit())
}

/// Delimit a decimal token starting at `start` (past any sign).
///
/// `Ok(None)` when no digit can be committed there; `Err` when digits
/// were committed but an exponent marker has none following it. The
/// scanner never backtracks.
fn scan_decimal(input: &[u8], start: usize) -> Result<Option<Decimal>, Error> {
    let mut pos = start;
    let mut digits = 0usize;

    // Integer digits; leading zeros carry no value.
    while input.get(pos) == Some(&b'0') {
        pos += 1;
        digits += 1;
    }
    let integer_start = pos;
    while is_digit(input, pos) {
        pos += 1;
    }
    let integer = &input[integer_start..pos];
    digits += integer.len();

    // Fraction. A lone dot opens one only when a digit follows; a dot
    // after digits is consumed even with an empty fraction, as in `5.`.
    let mut fraction: &[u8] = &[];
    if input.get(pos) == Some(&b'.') && (digits > 0 || is_digit(input, pos + 1)) {
        pos += 1;
        let fraction_start = pos;
        while is_digit(input, pos) {
            pos += 1;
        }
        fraction = &input[fraction_start..pos];
        digits += fraction.len();
    }

    if digits == 0 {
        return Ok(None);
    }

    // Explicit exponent.
    let mut exponent: i32 = 0;
    if matches!(input.get(pos).copied(), Some(b'e' | b'E')) {
        pos += 1;
        let negative = match input.get(pos).copied() {
            Some(b'+') => {
                pos += 1;
                false
            }
            Some(b'-') => {
                pos += 1;
                true
            }
            _ => false,
        };
        let exponent_start = pos;
        while let Some(digit) = input.get(pos).and_then(|c| (*c as char).to_digit(10)) {
            exponent = exponent.saturating_mul(10).saturating_add(digit as i32);
            pos += 1;
        }
        if pos == exponent_start {
            return Err(Error::new(ErrorCode::EmptyExponent, pos));
        }
        if negative {
            exponent = -exponent;
        }
    }

    Ok(Some(Decimal { integer, fraction, exponent, end: pos }))
}

// PARSERS

/// Parse a double from the start of `input`.
///
/// Returns `Ok(Some((value, len)))` on success, where `len` is one past
/// the last consumed byte; `Ok(None)` when the input does not begin with
/// a number (the caller decides whether that is an error); `Err` when the
/// input begins a numeric token that cannot be completed.
///
/// Overflow and underflow still parse: the value is the correctly signed
/// infinity or zero, and [`double_is_range_error`](crate::double_is_range_error)
/// tells them apart from in-range results.
pub fn parse_double(input: &[u8]) -> Result<Option<(f64, usize)>, Error> {
    let mut pos = 0;
    let negative = match input.first().copied() {
        Some(b'+') => {
            pos += 1;
            false
        }
        Some(b'-') => {
            pos += 1;
            true
        }
        _ => false,
    };

    if input.get(pos) == Some(&b'0') && matches!(input.get(pos + 1).copied(), Some(b'x' | b'X')) {
        let (magnitude, end) = hex::convert(input, pos + 2)?;
        let value = if negative { -magnitude } else { magnitude };
        return Ok(Some((value, end)));
    }

    let decimal = match scan_decimal(input, pos)? {
        Some(decimal) => decimal,
        None => return Ok(None),
    };

    let magnitude = Selected::convert(&decimal, &input[pos..decimal.end]);
    let value = if negative { -magnitude } else { magnitude };
    Ok(Some((value, decimal.end)))
}

// The exact halfway point between the largest finite f32 and the next
// representable magnitude, 2^128 - 2^103. It is the only finite double
// that narrows to infinity through double rounding rather than through a
// genuinely out-of-range decimal.
const F32_OVERFLOW_HALFWAY: u64 = 0x47EF_FFFF_F000_0000;

/// Parse a float from the start of `input`.
///
/// The text is parsed as a double first and then narrowed. A narrowed
/// result that lands on infinity keeps the sign of the original double.
/// When that infinity comes from the double sitting exactly on the 32-bit
/// overflow boundary, the narrowing cannot be trusted and the call
/// reports `Ok(None)` instead, as if no float were present.
pub fn parse_float(input: &[u8]) -> Result<Option<(f32, usize)>, Error> {
    let (value, len) = match parse_double(input)? {
        Some(parsed) => parsed,
        None => return Ok(None),
    };

    let narrowed = value as f32;
    if is_inf(narrowed) {
        if !is_inf(value) && value.to_bits64() & !f64::SIGN_MASK == F32_OVERFLOW_HALFWAY {
            return Ok(None);
        }
        // Re-derive the infinity from the double's sign rather than
        // trusting the narrowed value.
        let infinity = if value.is_sign_negative() {
            f32::from_bits64(f32::NEGATIVE_INFINITY_BITS)
        } else {
            f32::from_bits64(f32::INFINITY_BITS)
        };
        return Ok(Some((infinity, len)));
    }
    Ok(Some((narrowed, len)))
}

// TESTS
// -----
