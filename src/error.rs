//! When text begins a number that cannot be completed.

use core::fmt::{self, Display};

/// Error returned when the input starts a numeric token but the token
/// cannot be completed into a valid number.
///
/// This is distinct from the input simply not starting with a number,
/// which [`parse_double`](crate::parse_double) reports as `Ok(None)`.
/// The scanner does not backtrack: once an exponent marker or a hex
/// prefix is committed, missing digits are an error rather than a
/// shorter successful parse.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Error {
    code: ErrorCode,
    offset: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ErrorCode {
    /// An `e`/`E` marker with no digits following it.
    EmptyExponent,
    /// A `0x`/`0X` prefix with no hexadecimal digits following it.
    EmptyHexMantissa,
    /// A `p`/`P` marker with no digits following it.
    EmptyHexExponent,
}

impl Error {
    #[inline]
    pub(crate) fn new(code: ErrorCode, offset: usize) -> Self {
        Error { code, offset }
    }

    /// Byte offset of the position where the number stopped making sense.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self.code {
            ErrorCode::EmptyExponent => "exponent marker with no digits",
            ErrorCode::EmptyHexMantissa => "hex prefix with no digits",
            ErrorCode::EmptyHexExponent => "binary exponent marker with no digits",
        };
        write!(f, "{} at byte {}", description, self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// TESTS
// -----
