//! Correctly rounded decimal to float conversion.
//!
//! The parser tries an exact native-float computation first, then an
//! extended-precision approximation with bounded error, and only falls back
//! to big-integer comparison against the halfway point when the
//! approximation cannot decide the rounding.

mod algorithm;
mod bhcomp;
mod cached;
mod digit;
mod errors;
mod exponent;
mod float;
mod parse;
mod rounding;
mod shift;

pub(crate) use self::parse::parse_float;

use self::exponent::into_i32;
use crate::decimal::DecimalDigits;
use crate::num::Float;

/// Convert decimal digits to the nearest float, ties to even.
///
/// Values too large for the type become infinity and values too small become
/// zero, both carrying the sign of the input.
///
/// ```
/// use charconv::{from_decimal, DecimalDigits};
///
/// let d = DecimalDigits::new(false, b"1", 1)?;
/// assert_eq!(from_decimal::<f64>(&d), 1.0);
///
/// let d = DecimalDigits::new(true, b"1", 400)?;
/// assert_eq!(from_decimal::<f64>(&d), f64::NEG_INFINITY);
/// # Ok::<(), charconv::Error>(())
/// ```
pub fn from_decimal<F: Float>(decimal: &DecimalDigits) -> F {
    let digits = decimal.digits();
    let exponent = decimal.exponent().saturating_sub(into_i32(digits.len()));
    let value: F = parse_float(digits, &[], exponent);
    if decimal.is_negative() {
        -value
    } else {
        value
    }
}
