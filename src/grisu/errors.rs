//! Error-bound accounting for the moderate path.
//!
//! Each lossy step of the extended-float computation contributes a bounded
//! error, counted here in eighths of a unit in the last place of the 64-bit
//! mantissa. A conversion is certified only when the accumulated band
//! around the truncated bits cannot reach the rounding halfway point;
//! anything closer is left to the fallback converter.

use crate::grisu::float::ExtendedFloat;
use crate::grisu::rounding::{lower_n_halfway, lower_n_mask};
use crate::num::Float;

/// Full scale of the error counter, one unit in the last place.
#[inline]
pub(crate) fn error_scale() -> u32 {
    8
}

/// Half a unit in the last place, the error of one rounded multiply.
#[inline]
pub(crate) fn error_halfscale() -> u32 {
    error_scale() / 2
}

/// Check the error bound against the rounding point with the mantissa shift
/// already resolved to `extrabits` truncated bits.
#[inline]
fn nearest_error_is_accurate(errors: u64, fp: &ExtendedFloat, extrabits: u64) -> bool {
    if extrabits == 65 {
        // A shift wider than the mantissa: the value only survives rounding
        // if adding the error cannot carry into the next binade.
        !fp.mant.overflowing_add(errors).1
    } else {
        let mask = lower_n_mask(extrabits);
        let extra = fp.mant & mask;

        // The truncated bits decide the rounding direction at the halfway
        // point b1000...0. If the error band straddles that point, two
        // different native values are still possible.
        let halfway = lower_n_halfway(extrabits);
        let cmp1 = halfway.wrapping_sub(errors) < extra;
        let cmp2 = extra < halfway.wrapping_add(errors);

        !(cmp1 && cmp2)
    }
}

/// Determine if the extended-precision float is an accurate representation,
/// given the accumulated error `count`.
#[inline]
pub(crate) fn error_is_accurate<F: Float>(count: u32, fp: &ExtendedFloat) -> bool {
    // Exponent at and below which the result lands in the denormal range
    // and truncation widens past the default shift.
    let bias = F::EXPONENT_BIAS - F::MANTISSA_SIZE;
    let denormal_exp = -bias - 63;

    let extrabits = if fp.exp <= denormal_exp {
        64 - F::MANTISSA_SIZE + denormal_exp - fp.exp
    } else {
        63 - F::MANTISSA_SIZE
    };

    // Cap at 65: any wider shift discards the whole mantissa either way.
    let extrabits = if extrabits > 65 { 65 } else { extrabits };

    nearest_error_is_accurate(u64::from(count), fp, extrabits as u64)
}

// TESTS
// -----
