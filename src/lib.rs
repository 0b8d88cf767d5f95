//! Portable parsing of decimal text into IEEE-754 floats.
//!
//! Platform string-to-float conversions disagree on the details that
//! matter when numbers cross machines: overflow signaling, NaN handling,
//! whitespace, hexadecimal floats. This crate parses a numeric token out
//! of a byte slice with one fixed behavior everywhere, classifies range
//! errors the same way on every target, and provides deterministic
//! ordering and equality for the parsed values.
//!
//! ```
//! use core::cmp::Ordering;
//!
//! let (value, len) = parsefp::parse_double(b"6.022e23 mol").unwrap().unwrap();
//! assert_eq!(value, 6.022e23);
//! assert_eq!(len, 8);
//!
//! // Overflow still parses; the caller opts into detecting it.
//! let (huge, _) = parsefp::parse_double(b"1e400").unwrap().unwrap();
//! assert_eq!(parsefp::double_is_range_error(huge), parsefp::RangeError::Overflow);
//!
//! // NaN orders deterministically instead of poisoning a sort.
//! assert_eq!(parsefp::double_compare(f64::NAN, f64::NAN), Ordering::Greater);
//! ```
//!
//! Parsing is total in the sense that every outcome flows through the
//! return value: `Ok(Some(..))` with the consumed length on success,
//! `Ok(None)` when the input does not start with a number, and `Err` only
//! when a begun token cannot be completed (`"1e"`, `"0x"`). No
//! whitespace is skipped and `inf`/`nan` spellings are not accepted;
//! hexadecimal floats (`0x1.8p3`) are.
//!
//! # Features
//!
//! - `std` (default): implements [`std::error::Error`] for [`Error`].
//!   Without it the crate is `no_std` and allocation-free.
//! - `grisu` (default): compiles the self-contained fast-path converter.
//!   It resolves the common cases directly and hands anything it cannot
//!   certify to the platform converter, so disabling it changes
//!   performance, never results.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
#[macro_use]
extern crate std;

mod classify;
mod compare;
mod error;
mod grisu;
mod hex;
mod num;
mod parse;

pub use crate::classify::{double_is_range_error, float_is_range_error, RangeError};
pub use crate::compare::{double_compare, double_is_equal, float_compare, float_is_equal};
pub use crate::error::Error;
pub use crate::parse::{parse_double, parse_float};
