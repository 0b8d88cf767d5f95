//! Hexadecimal floating-point conversion.
//!
//! Hex digits map to mantissa bits exactly, so no error accounting is
//! needed: the digits are packed into a 64-bit fixed-point window, a
//! sticky bit records any truncated precision, and the shared
//! extended-float rounding produces the nearest double. The platform
//! parser does not understand this syntax, which is why both conversion
//! strategies route hex tokens here.
//!
//! Grammar, after the `0x`/`0X` prefix (the optional sign is the
//! scanner's business):
//!
//! ```text
//! hexdigits [ . hexdigits ] [ (p|P) [+|-] digits ]
//! ```
//!
//! At least one hex digit is required; the binary exponent is a power of
//! two and optional, as in strtod.

use crate::error::{Error, ErrorCode};
use crate::grisu::ExtendedFloat;

#[inline]
fn hex_digit(c: u8) -> Option<u32> {
    (c as char).to_digit(16)
}

/// Convert a hexadecimal float starting just past the `0x` prefix.
///
/// Returns the magnitude and the absolute offset one past the last
/// consumed byte.
pub(crate) fn convert(input: &[u8], start: usize) -> Result<(f64, usize), Error> {
    let mut pos = start;
    let mut mant: u64 = 0;
    // Bits still free in the fixed-point window.
    let mut window: u32 = 64;
    let mut sticky = false;
    let mut seen_digits = false;
    let mut significant = false;
    // Hex digits of weight above the point, and zeros below it, both
    // counted from the first significant digit.
    let mut int_digits: i32 = 0;
    let mut frac_zeros: i32 = 0;

    let mut push = |mant: &mut u64, sticky: &mut bool, digit: u32| {
        if window > 0 {
            window -= 4;
            *mant |= u64::from(digit) << window;
        } else {
            // Excess precision only matters as a tie-breaker.
            *sticky |= digit != 0;
        }
    };

    while let Some(digit) = input.get(pos).copied().and_then(hex_digit) {
        pos += 1;
        seen_digits = true;
        if !significant {
            if digit == 0 {
                continue;
            }
            significant = true;
        }
        int_digits = int_digits.saturating_add(1);
        push(&mut mant, &mut sticky, digit);
    }

    if input.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(digit) = input.get(pos).copied().and_then(hex_digit) {
            pos += 1;
            seen_digits = true;
            if !significant {
                if digit == 0 {
                    frac_zeros = frac_zeros.saturating_add(1);
                    continue;
                }
                significant = true;
            }
            push(&mut mant, &mut sticky, digit);
        }
    }

    if !seen_digits {
        return Err(Error::new(ErrorCode::EmptyHexMantissa, pos));
    }

    // Optional binary exponent.
    let mut exponent: i32 = 0;
    if matches!(input.get(pos).copied(), Some(b'p' | b'P')) {
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
        let digits_start = pos;
        while let Some(digit) = input.get(pos).copied().and_then(|c| (c as char).to_digit(10)) {
            exponent = exponent.saturating_mul(10).saturating_add(digit as i32);
            pos += 1;
        }
        if pos == digits_start {
            return Err(Error::new(ErrorCode::EmptyHexExponent, pos));
        }
        if negative {
            exponent = -exponent;
        }
    }

    if mant == 0 {
        return Ok((0.0, pos));
    }
    if sticky {
        // The window's lowest bit is far below any rounding boundary, so
        // this only ever breaks an exact halfway tie upward.
        mant |= 1;
    }

    // The window holds 0.mant scaled by 16^(int_digits - frac_zeros).
    // Anything beyond the clamp range is already a certain overflow or
    // underflow; clamping keeps later exponent sums inside i32.
    let binary_exp = int_digits
        .saturating_sub(frac_zeros)
        .saturating_mul(4)
        .saturating_add(exponent)
        .saturating_sub(64)
        .clamp(-4000, 4000);

    let fp = ExtendedFloat { mant, exp: binary_exp };
    Ok((fp.into_float::<f64>(), pos))
}

// TESTS
// -----
