//! Decimal-to-float conversion that certifies its own accuracy.
//!
//! Three outcomes are possible for a scanned decimal: an exact fast-path
//! value, a moderate-path value certified correctly rounded by the error
//! accounting in [`errors`](crate::grisu::errors), or a deferral. A
//! deferral means the caller must re-convert through the platform parser;
//! this module never returns an approximation it cannot certify.

use crate::grisu::cached::{POW10_64, POWERS};
use crate::grisu::digit::{add_digit, to_digit};
use crate::grisu::errors::{error_halfscale, error_is_accurate};
use crate::grisu::exponent::mantissa_exponent;
use crate::grisu::float::ExtendedFloat;
use crate::num::Float;

// MANTISSA

/// Parse the significant digits of the float into a u64.
///
/// * `integer`     - Slice containing the integer digits.
/// * `fraction`    - Slice containing the fraction digits.
///
/// On overflow, stops and returns the number of truncated digits.
fn parse_mantissa(integer: &[u8], fraction: &[u8]) -> (u64, usize) {
    let mut value: u64 = 0;
    let mut integer = integer.iter();
    while let Some(c) = integer.next() {
        value = match to_digit(*c).and_then(|digit| add_digit(value, digit)) {
            Some(v) => v,
            None => return (value, 1 + integer.count() + fraction.len()),
        };
    }
    let mut fraction = fraction.iter();
    while let Some(c) = fraction.next() {
        value = match to_digit(*c).and_then(|digit| add_digit(value, digit)) {
            Some(v) => v,
            None => return (value, 1 + fraction.count()),
        };
    }
    (value, 0)
}

// FAST

/// Convert an exact mantissa and a power of ten to a float, when the whole
/// product is representable without rounding.
pub(crate) fn fast_path<F: Float>(mantissa: u64, exponent: i32) -> Option<F> {
    // A mantissa with bits above the hidden bit would need truncation.
    let (min_exp, max_exp) = F::exponent_limit();
    let shift_exp = F::mantissa_limit();
    let mantissa_size = F::MANTISSA_SIZE + 1;
    if mantissa >> mantissa_size != 0 {
        None
    } else if exponent == 0 {
        // Integer, exactly representable.
        Some(F::cast_from_u64(mantissa))
    } else if exponent >= min_exp && exponent <= max_exp {
        // A single exact multiply or divide by a power of ten.
        Some(F::cast_from_u64(mantissa).pow10(exponent))
    } else if exponent >= 0 && exponent <= max_exp + shift_exp {
        // Disguised fast path: shift digits from the exponent into the
        // mantissa, then check the product still has no rounded bits.
        // https://www.exploringbinary.com/fast-path-decimal-to-floating-point-conversion/
        let shift = exponent - max_exp;
        let power = POW10_64[shift as usize];
        let value = mantissa.checked_mul(power)?;
        if value >> mantissa_size != 0 {
            None
        } else {
            Some(F::cast_from_u64(value).pow10(max_exp))
        }
    } else {
        // Exponent beyond the exact range either way.
        None
    }
}

// MODERATE

/// Convert via an extended-precision multiply by cached powers of ten.
///
/// Returns `None` when the result cannot be certified correctly rounded;
/// certain overflow and underflow are resolved here, not deferred.
pub(crate) fn moderate_path<F: Float>(mantissa: u64, exponent: i32, truncated: bool) -> Option<F> {
    let exponent = exponent.saturating_add(POWERS.bias);
    if exponent < 0 {
        // Beneath the table: even a 20-digit mantissa underflows to zero.
        return Some(F::ZERO);
    }
    let small_index = exponent % POWERS.step;
    let large_index = exponent / POWERS.step;
    if large_index as usize >= POWERS.len() {
        // Above the table: certain overflow.
        return Some(F::from_bits64(F::INFINITY_BITS));
    }

    // Errors are counted in eighths of a unit in the last place.
    let mut errors: u32 = 0;
    if truncated {
        errors += error_halfscale();
    }

    let mut fp = ExtendedFloat { mant: mantissa, exp: 0 };

    // Scale by the small power: exact as an integer multiply when it
    // fits, otherwise as a rounded extended multiply.
    match fp.mant.overflowing_mul(POWERS.get_small_int(small_index as usize)) {
        (_, true) => {
            fp.normalize();
            fp.imul(&POWERS.get_small(small_index as usize));
            errors += error_halfscale();
        }
        (mant, false) => {
            fp.mant = mant;
            fp.normalize();
        }
    }

    // Scale by the large power; its cached mantissa is itself rounded.
    fp.imul(&POWERS.get_large(large_index as usize));
    if errors > 0 {
        errors += 1;
    }
    errors += error_halfscale();

    let shift = fp.normalize();
    errors <<= shift;

    if error_is_accurate::<F>(errors, &fp) {
        Some(fp.into_float::<F>())
    } else {
        None
    }
}

// CONVERSION

/// Convert extracted decimal components to a float.
///
/// * `integer`     - Integer digits, without leading zeros.
/// * `fraction`    - Fraction digits.
/// * `exponent`    - Explicit decimal exponent.
///
/// The sign is the caller's business. `None` defers to the fallback.
pub(crate) fn convert<F: Float>(integer: &[u8], mut fraction: &[u8], exponent: i32) -> Option<F> {
    // Trailing fraction zeros contribute nothing but would count as
    // truncation once the mantissa overflows.
    while fraction.last() == Some(&b'0') {
        fraction = &fraction[..fraction.len() - 1];
    }

    let (mantissa, truncated) = parse_mantissa(integer, fraction);

    if mantissa == 0 {
        // Literal zero; truncation only happens on mantissa overflow, so
        // none occurred.
        return Some(F::ZERO);
    }

    let mant_exp = mantissa_exponent(exponent, fraction.len(), truncated);
    let is_truncated = truncated != 0;

    if !is_truncated {
        if let Some(float) = fast_path(mantissa, mant_exp) {
            return Some(float);
        }
    }

    moderate_path(mantissa, mant_exp, is_truncated)
}

// TESTS
// -----
