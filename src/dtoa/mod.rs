//! Float to decimal conversion.
//!
//! Every mode is served by the Dragon4 digit generator in `dragon`, which
//! works on exact big-integer arithmetic and so is correct for all inputs.

mod decode;
mod dragon;
mod general;

use self::decode::{decode, Decoded, FullDecoded};
use self::dragon::{estimate_max_buf_len, format_exact, format_shortest};
use crate::decimal::{Decimal, DecimalDigits, Mode, Notation};
use crate::num::*;
use alloc::vec;
use alloc::vec::Vec;

/// More significant digits than any `f64` has in its exact expansion.
const MAX_EXACT_DIGITS: usize = 800;

/// Convert a float to decimal digits.
///
/// The conversion is total: NaN and the infinities come back as their own
/// variants, and zeros of either sign produce the digit `0`.
///
/// ```
/// use charconv::{to_decimal, Decimal, Mode, Notation};
///
/// match to_decimal(0.3f64, Mode::Shortest) {
///     Decimal::Finite { digits, notation } => {
///         assert_eq!(digits.as_str(), "3");
///         assert_eq!(digits.exponent(), 0);
///         assert_eq!(notation, Notation::Fixed);
///     }
///     _ => unreachable!(),
/// }
/// assert_eq!(to_decimal(1e21f64, Mode::Shortest).to_string(), "1e+21");
/// assert_eq!(to_decimal(2.5f64, Mode::Fixed(0)).to_string(), "2");
/// assert_eq!(to_decimal(1234.5f64, Mode::General(3)).to_string(), "1.23e+03");
/// ```
pub fn to_decimal<F: Float>(value: F, mode: Mode) -> Decimal {
    let (negative, full) = decode(value);
    let decoded = match full {
        FullDecoded::Nan => return Decimal::Nan { negative },
        FullDecoded::Infinite => return Decimal::Infinite { negative },
        FullDecoded::Zero => return zero(negative, mode),
        FullDecoded::Finite(decoded) => decoded,
    };

    let (digits, k, notation) = match mode {
        Mode::Shortest => {
            let (digits, k) = format_shortest(&decoded);
            debug_assert!(digits.len() <= F::MAX_SHORTEST_DIGITS);
            let notation = shortest_notation(digits.len(), k);
            (digits, k, notation)
        }
        Mode::Fixed(precision) => {
            let (digits, k) = exact_fixed(&decoded, precision);
            (digits, k, Notation::Fixed)
        }
        Mode::Scientific(precision) => {
            let (digits, k) = exact_significant(&decoded, precision.max(1));
            (digits, k, Notation::Scientific)
        }
        Mode::General(precision) => {
            let precision = precision.max(1);
            let magnitude = if value.is_sign_negative() { -value } else { value };
            let x = general::scientific_exponent_x::<F>(magnitude.to_bits(), precision);
            let (digits, k, notation) = if general::use_fixed(precision, x) {
                let (digits, k) = exact_fixed(&decoded, (precision as i64 - 1 - x as i64) as usize);
                (digits, k, Notation::Fixed)
            } else {
                let (digits, k) = exact_significant(&decoded, precision);
                (digits, k, Notation::Scientific)
            };
            let mut digits = DecimalDigits::from_generated(negative, &digits, k);
            digits.trim_trailing_zeros();
            return Decimal::Finite { digits, notation };
        }
    };

    Decimal::Finite {
        digits: DecimalDigits::from_generated(negative, &digits, k),
        notation,
    }
}

/// The notation that renders `len` shortest digits at `k` in fewer
/// characters, preferring fixed on a tie.
pub(crate) fn shortest_notation(len: usize, k: i32) -> Notation {
    let len = len as i64;
    let exp = i64::from(k) - len;
    let (lower, upper) = if len == 1 { (-3, 4) } else { (-(len + 3), 5) };
    if lower <= exp && exp <= upper {
        Notation::Fixed
    } else {
        Notation::Scientific
    }
}

fn zero(negative: bool, mode: Mode) -> Decimal {
    let (len, notation) = match mode {
        Mode::Shortest => (1, Notation::Fixed),
        Mode::Fixed(precision) => (precision.saturating_add(1), Notation::Fixed),
        Mode::Scientific(precision) => (precision.max(1), Notation::Scientific),
        // `%g` keeps no trailing zeros and zero always prints fixed.
        Mode::General(_) => (1, Notation::Fixed),
    };
    Decimal::Finite {
        digits: DecimalDigits::from_generated(negative, &vec![b'0'; len], 1),
        notation,
    }
}

/// Digits down to `10^-frac`, padded with zeros.
fn exact_fixed(d: &Decoded, frac: usize) -> (Vec<u8>, i32) {
    let frac = i32::try_from(frac).unwrap_or(i32::MAX);
    let buflen = estimate_max_buf_len(d.exp).max(1);
    let (mut digits, k) = format_exact(d, buflen, -frac);
    if digits.is_empty() {
        // rounded to zero at the last place
        return (vec![b'0'; frac as usize + 1], 1);
    }
    let len = (i64::from(k) + i64::from(frac)) as usize;
    if digits.len() < len {
        digits.resize(len, b'0');
    }
    (digits, k)
}

/// Exactly `count` significant digits, padded with zeros.
fn exact_significant(d: &Decoded, count: usize) -> (Vec<u8>, i32) {
    let (mut digits, k) = format_exact(d, count.min(MAX_EXACT_DIGITS), i32::MIN);
    digits.resize(count, b'0');
    (digits, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    fn finite(d: Decimal) -> (String, i32, Notation, bool) {
        match d {
            Decimal::Finite { digits, notation } => (
                String::from(digits.as_str()),
                digits.exponent(),
                notation,
                digits.is_negative(),
            ),
            other => panic!("not finite: {:?}", other),
        }
    }

    fn render<F: Float>(v: F, mode: Mode) -> String {
        to_decimal(v, mode).to_string()
    }

    #[test]
    fn special_test() {
        assert_eq!(
            to_decimal(f64::NAN, Mode::Shortest),
            Decimal::Nan { negative: false }
        );
        assert_eq!(
            to_decimal(-f64::NAN, Mode::Fixed(3)),
            Decimal::Nan { negative: true }
        );
        assert_eq!(
            to_decimal(f32::NEG_INFINITY, Mode::General(6)),
            Decimal::Infinite { negative: true }
        );
    }

    #[test]
    fn zero_test() {
        assert_eq!(finite(to_decimal(0.0f64, Mode::Shortest)), ("0".into(), 1, Notation::Fixed, false));
        assert_eq!(finite(to_decimal(-0.0f64, Mode::Shortest)), ("0".into(), 1, Notation::Fixed, true));
        assert_eq!(render(0.0f64, Mode::Fixed(3)), "0.000");
        assert_eq!(render(-0.0f64, Mode::Scientific(3)), "-0.00e+00");
        assert_eq!(render(0.0f32, Mode::General(6)), "0");
        assert_eq!(render(0.0f32, Mode::Scientific(0)), "0e+00");
    }

    #[test]
    fn shortest_test() {
        assert_eq!(finite(to_decimal(0.3f64, Mode::Shortest)), ("3".into(), 0, Notation::Fixed, false));
        assert_eq!(finite(to_decimal(1.0f64, Mode::Shortest)), ("1".into(), 1, Notation::Fixed, false));
        assert_eq!(render(123.456f64, Mode::Shortest), "123.456");
        assert_eq!(render(1e21f64, Mode::Shortest), "1e+21");
        assert_eq!(render(10000.0f64, Mode::Shortest), "10000");
        assert_eq!(render(100000.0f64, Mode::Shortest), "1e+05");
        assert_eq!(render(0.001f64, Mode::Shortest), "0.001");
        assert_eq!(render(0.0001f64, Mode::Shortest), "1e-04");
        assert_eq!(render(5e-324f64, Mode::Shortest), "5e-324");
        assert_eq!(render(f64::MAX, Mode::Shortest), "1.7976931348623157e+308");
        assert_eq!(render(0.1f32, Mode::Shortest), "0.1");
        assert_eq!(render(16777216.0f32, Mode::Shortest), "16777216");
        assert_eq!(render(-1.5f32, Mode::Shortest), "-1.5");
    }

    #[test]
    fn shortest_notation_test() {
        assert_eq!(shortest_notation(1, 5), Notation::Fixed);
        assert_eq!(shortest_notation(1, 6), Notation::Scientific);
        assert_eq!(shortest_notation(1, -2), Notation::Fixed);
        assert_eq!(shortest_notation(1, -3), Notation::Scientific);
        assert_eq!(shortest_notation(2, 7), Notation::Fixed);
        assert_eq!(shortest_notation(2, 8), Notation::Scientific);
        assert_eq!(shortest_notation(2, -3), Notation::Fixed);
        assert_eq!(shortest_notation(2, -4), Notation::Scientific);
    }

    #[test]
    fn fixed_test() {
        assert_eq!(render(123.456f64, Mode::Fixed(2)), "123.46");
        assert_eq!(render(0.5f64, Mode::Fixed(2)), "0.50");
        assert_eq!(render(0.001f64, Mode::Fixed(2)), "0.00");
        assert_eq!(render(0.5f64, Mode::Fixed(0)), "0");
        assert_eq!(render(1.5f64, Mode::Fixed(0)), "2");
        assert_eq!(render(2.5f64, Mode::Fixed(0)), "2");
        assert_eq!(render(0.6f64, Mode::Fixed(0)), "1");
        assert_eq!(render(9.96f64, Mode::Fixed(1)), "10.0");
        assert_eq!(render(1e23f64, Mode::Fixed(0)), "99999999999999991611392");
        assert_eq!(render(-1.25f32, Mode::Fixed(5)), "-1.25000");
        assert_eq!(
            render(0.1f64, Mode::Fixed(30)),
            "0.100000000000000005551115123126"
        );
    }

    #[test]
    fn scientific_test() {
        assert_eq!(render(123.456f64, Mode::Scientific(3)), "1.23e+02");
        assert_eq!(render(123.456f64, Mode::Scientific(1)), "1e+02");
        assert_eq!(render(123.456f64, Mode::Scientific(0)), "1e+02");
        assert_eq!(render(9.99f64, Mode::Scientific(2)), "1.0e+01");
        assert_eq!(render(1.0f64, Mode::Scientific(4)), "1.000e+00");
        assert_eq!(render(5e-324f64, Mode::Scientific(3)), "4.94e-324");
        assert_eq!(
            render(0.1f64, Mode::Scientific(20)),
            "1.0000000000000000555e-01"
        );
        let (digits, k, _, _) = finite(to_decimal(1.0f64, Mode::Scientific(1000)));
        assert_eq!(digits.len(), 1000);
        assert!(digits[1..].bytes().all(|c| c == b'0'));
        assert_eq!(k, 1);
    }

    #[test]
    fn general_test() {
        assert_eq!(render(1234.5f64, Mode::General(3)), "1.23e+03");
        assert_eq!(render(1234.5f64, Mode::General(6)), "1234.5");
        assert_eq!(render(0.0001f64, Mode::General(6)), "0.0001");
        assert_eq!(render(0.00001f64, Mode::General(6)), "1e-05");
        assert_eq!(render(100000.0f64, Mode::General(6)), "100000");
        assert_eq!(render(1000000.0f64, Mode::General(6)), "1e+06");
        assert_eq!(render(999999.5f64, Mode::General(6)), "1e+06");
        assert_eq!(render(9.5f64, Mode::General(1)), "1e+01");
        assert_eq!(render(9.5f64, Mode::General(0)), "1e+01");
        assert_eq!(render(0.5f64, Mode::General(1)), "0.5");
        assert_eq!(render(1.0f32, Mode::General(6)), "1");
        assert_eq!(render(-2.0f64 / 3.0, Mode::General(4)), "-0.6667");
    }
}
