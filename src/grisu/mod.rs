//! Extended-precision float machinery and the fast-path decimal engine.
//!
//! The extended-float type and its rounding live here unconditionally;
//! the hexadecimal converter needs them regardless of which decimal
//! strategy is compiled in. The decimal fast path itself is gated on the
//! `grisu` feature.

#[cfg(feature = "grisu")]
mod algorithm;
#[cfg(feature = "grisu")]
mod cached;
#[cfg(feature = "grisu")]
mod digit;
#[cfg(feature = "grisu")]
mod errors;
#[cfg(feature = "grisu")]
mod exponent;
mod float;
mod rounding;

#[cfg(feature = "grisu")]
pub(crate) use self::algorithm::convert;
pub(crate) use self::float::ExtendedFloat;
