// EXTENDED FLOAT TYPE

use crate::grisu::rounding::{round_nearest_tie_even, round_to_native};
use crate::num::Float;

/// Extended precision floating-point type: value = `mant * 2^exp`.
///
/// The 64-bit mantissa keeps 11 guard bits over an f64, enough for the
/// moderate path to certify most conversions as correctly rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ExtendedFloat {
    /// Mantissa for the extended-precision float.
    pub mant: u64,
    /// Binary exponent for the extended-precision float.
    pub exp: i32,
}

impl ExtendedFloat {
    /// Multiply two normalized extended-precision floats, as if by `a*b`.
    ///
    /// The precision is maximal when the inputs are normalized; the
    /// result is not normalized. The 128-bit product is rounded to its
    /// upper 64 bits, contributing at most half a unit of error.
    pub(crate) fn mul(&self, b: &ExtendedFloat) -> ExtendedFloat {
        const LOMASK: u64 = 0x0000_0000_FFFF_FFFF;

        // Values must carry high bits for the product to keep precision.
        debug_assert!(self.mant >> 32 != 0 && b.mant >> 32 != 0);

        let ah = self.mant >> 32;
        let al = self.mant & LOMASK;
        let bh = b.mant >> 32;
        let bl = b.mant & LOMASK;

        let ah_bl = ah * bl;
        let al_bh = al * bh;
        let al_bl = al * bl;
        let ah_bh = ah * bh;

        // Round up the discarded lower half.
        let mut tmp = (ah_bl & LOMASK) + (al_bh & LOMASK) + (al_bl >> 32);
        tmp += 1 << 31;

        ExtendedFloat {
            mant: ah_bh + (ah_bl >> 32) + (al_bh >> 32) + (tmp >> 32),
            exp: self.exp + b.exp + 64,
        }
    }

    /// Multiply in-place, as if by `a*b`.
    #[inline]
    pub(crate) fn imul(&mut self, b: &ExtendedFloat) {
        *self = self.mul(b);
    }

    /// Shift the mantissa so the leading bit is set, unless the value is 0.
    ///
    /// Returns the number of bits shifted.
    #[inline]
    pub(crate) fn normalize(&mut self) -> u32 {
        // leading_zeros lowers to a single instruction; also guards the
        // shift against mant == 0.
        let shift = if self.mant == 0 {
            0
        } else {
            self.mant.leading_zeros()
        };
        self.mant <<= shift;
        self.exp -= shift as i32;
        shift
    }

    /// Convert into the nearest native float, ties to even.
    #[inline]
    pub(crate) fn into_float<F: Float>(mut self) -> F {
        round_to_native::<F, _>(&mut self, round_nearest_tie_even);
        into_float(self)
    }
}

// INTO FLOAT

// Export an extended-precision float to a native float.
//
// The extended-precision float must already be rounded to the native
// mantissa width, with overflow/underflow expressed in the exponent.
#[inline]
pub(crate) fn into_float<F: Float>(fp: ExtendedFloat) -> F {
    if fp.mant == 0 || fp.exp < F::DENORMAL_EXPONENT {
        // Underflowed past the smallest denormal.
        F::ZERO
    } else if fp.exp >= F::MAX_EXPONENT {
        // Overflowed past the largest finite value.
        F::from_bits64(F::INFINITY_BITS)
    } else {
        let exp = if fp.exp == F::DENORMAL_EXPONENT && fp.mant & F::HIDDEN_BIT_MASK == 0 {
            0
        } else {
            (fp.exp + F::EXPONENT_BIAS) as u64
        };
        F::from_bits64((fp.mant & F::MANTISSA_MASK) | (exp << F::MANTISSA_SIZE))
    }
}

// TESTS
// -----
