//! # charconv
//!
//! Conversion between binary floating-point values and decimal text, in both
//! directions, with exact results.
//!
//! ```edition2021
//! use charconv::CharsFormat;
//!
//! let mut buf = [0u8; 32];
//! let len = charconv::to_chars(&mut buf, 0.1f64 + 0.2f64)?;
//! assert_eq!(&buf[..len], b"0.30000000000000004");
//!
//! let (value, consumed) = charconv::from_chars::<f64>(&buf[..len], CharsFormat::General)?;
//! assert_eq!(value, 0.1 + 0.2);
//! assert_eq!(consumed, len);
//! # Ok::<(), charconv::Error>(())
//! ```
//!
//! # Formatting
//!
//! [`to_decimal`] turns an `f32` or `f64` into a [`Decimal`], a sign, a digit
//! string and a decimal exponent, under one of four [`Mode`]s:
//!
//! - `Mode::Shortest` produces the fewest significant digits that parse back
//!   to the same value. Among candidates of that length the one closest to
//!   the exact value wins.
//! - `Mode::Fixed(n)` rounds the exact binary value to `n` places after the
//!   decimal point, like `printf("%.nf")`.
//! - `Mode::Scientific(n)` rounds to `n` significant digits, like
//!   `printf("%.{n-1}e")`.
//! - `Mode::General(p)` follows `printf("%.pg")`, choosing fixed or
//!   scientific notation from the exponent *after* rounding to `p` digits
//!   and removing trailing zeros.
//!
//! Rounding is always half to even on the exact binary value, so the output
//! never depends on intermediate floating-point arithmetic.
//!
//! # Parsing
//!
//! [`from_decimal`] and [`from_chars`] return the float nearest to the
//! decimal value, ties to even, for any number of input digits. The parser
//! uses native arithmetic when the input is short enough to be exact, an
//! extended-precision approximation when its error bound decides the
//! rounding, and a big-integer comparison against the halfway point
//! otherwise.
//!
//! # Text
//!
//! [`to_chars`], [`to_chars_format`] and [`to_chars_precision`] write into a
//! caller-provided byte buffer and report how many bytes were written.
//! [`from_chars`] reads a number from the start of a byte slice and reports
//! how many bytes it spans. The formats are those of `printf` and `strtod` in
//! the "C" locale. [`CharsFormat::Hex`] is `%a` without the `0x` prefix.
//!
//! # No-std support
//!
//! With `default-features = false` and the `alloc` feature, charconv works on
//! targets without the standard library. Digit strings are heap-allocated, so
//! `alloc` is required.

#![doc(html_root_url = "https://docs.rs/charconv/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::collapsible_else_if,
    clippy::comparison_chain,
    clippy::manual_range_contains,
    clippy::needless_range_loop,
)]
// Ignored clippy_pedantic lints
#![allow(
    // digit and exponent arithmetic requires these sorts of casts
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::unreadable_literal,
    // noisy
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
)]
#![no_std]

mod features_check;

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Not public API. Used from the crate so that either `core` or `std` paths
// can be written the same way.
mod lib {
    pub(crate) use core::*;
}

mod atof;
mod bigint;
mod decimal;
mod dtoa;
mod error;
mod hex;
mod num;
mod tables;
mod text;

#[doc(inline)]
pub use crate::atof::from_decimal;
#[doc(inline)]
pub use crate::decimal::{Decimal, DecimalDigits, Mode, Notation};
#[doc(inline)]
pub use crate::dtoa::to_decimal;
#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Result};
#[doc(inline)]
pub use crate::num::{Decomposed, Float, FloatClass};
#[doc(inline)]
pub use crate::text::{from_chars, to_chars, to_chars_format, to_chars_precision, CharsFormat};
