use super::algorithm::*;
use super::digit::*;
use super::exponent::*;
use crate::num::*;

// PARSERS
// -------

/// Parse the significant digits of the float.
///
/// * `integer`     - Slice containing the integer digits.
/// * `fraction`    - Slice containing the fraction digits.
///
/// Returns the mantissa and the number of digits that did not fit.
fn parse_mantissa(integer: &[u8], fraction: &[u8]) -> (u64, usize) {
    let mut value: u64 = 0;
    // On overflow, calculate the number of truncated digits.
    let mut integer = integer.iter();
    while let Some(c) = integer.next() {
        value = match add_digit(value, to_digit(*c)) {
            Some(v) => v,
            None => return (value, 1 + integer.count() + fraction.len()),
        };
    }
    let mut fraction = fraction.iter();
    while let Some(c) = fraction.next() {
        value = match add_digit(value, to_digit(*c)) {
            Some(v) => v,
            None => return (value, 1 + fraction.count()),
        };
    }
    (value, 0)
}

/// Parse float from extracted float components.
///
/// * `integer`     - Slice containing the integer digits.
/// * `fraction`    - Slice containing the fraction digits.
/// * `exponent`    - Parsed, 32-bit exponent.
///
/// Every byte must be an ASCII digit. The value is
/// `integer.fraction * 10^exponent`, rounded to nearest, ties to even.
pub(crate) fn parse_float<F>(mut integer: &[u8], mut fraction: &[u8], mut exponent: i32) -> F
where
    F: Float,
{
    // Trim leading zeroes from the integer part.
    while integer.first() == Some(&b'0') {
        integer = &integer[1..];
    }

    // Trim trailing zeroes from the fraction part.
    while fraction.last() == Some(&b'0') {
        fraction = &fraction[..fraction.len() - 1];
    }

    // With no fraction left, trailing integer zeroes move into the exponent.
    if fraction.is_empty() {
        let digits = integer.len();
        while integer.last() == Some(&b'0') {
            integer = &integer[..integer.len() - 1];
        }
        exponent = exponent.saturating_add(into_i32(digits - integer.len()));
    }

    let (mantissa, truncated) = parse_mantissa(integer, fraction);
    if mantissa == 0 {
        // Only zero digits remain. Truncation needs a full mantissa first.
        return F::ZERO;
    }

    Significand {
        integer,
        fraction,
        exponent,
        mantissa,
        scale: mantissa_exponent(exponent, fraction.len(), truncated),
        truncated: truncated != 0,
    }
    .to_float()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mantissa_test() {
        assert_eq!(parse_mantissa(b"123", b"456"), (123456, 0));
        assert_eq!(
            parse_mantissa(b"12345678901234567890", b"12"),
            (12345678901234567890, 2)
        );
        assert_eq!(
            parse_mantissa(b"1", b"2345678901234567890123"),
            (12345678901234567890, 3)
        );
    }

    #[test]
    fn parse_float_test() {
        assert_eq!(parse_float::<f64>(b"1", b"5", 0), 1.5);
        assert_eq!(parse_float::<f64>(b"000", b"000", 5), 0.0);
        assert_eq!(parse_float::<f64>(b"", b"1", 0), 0.1);
        assert_eq!(parse_float::<f64>(b"0012", b"5000", -1), 1.25);
        assert_eq!(parse_float::<f32>(b"3", b"4028235", 38), 3.4028235e38);
        assert_eq!(parse_float::<f64>(b"17976931348623157", b"", 292), f64::MAX);
    }

    #[test]
    fn parse_float_integer_zeros_test() {
        // Trailing integer zeros are folded into the exponent.
        let mut digits = [b'0'; 400];
        digits[0] = b'1';
        assert_eq!(parse_float::<f64>(&digits, b"", -399), 1.0);
        assert_eq!(parse_float::<f64>(&digits, b"", -700), 1e-301);
        assert_eq!(parse_float::<f64>(&digits, b"", i32::MAX), f64::INFINITY);
    }

    #[test]
    fn parse_float_range_test() {
        assert_eq!(parse_float::<f64>(b"1", b"", 309), f64::INFINITY);
        assert_eq!(parse_float::<f64>(b"1", b"", -400), 0.0);
        assert_eq!(parse_float::<f64>(b"5", b"", -324), 5e-324);
        assert_eq!(parse_float::<f64>(b"2", b"", -324), 0.0);
        assert_eq!(parse_float::<f32>(b"1", b"", 39), f32::INFINITY);
        assert_eq!(parse_float::<f32>(b"1", b"4", -45), 1e-45);
    }

    #[test]
    fn parse_float_halfway_test() {
        // 2^53 + 1 ties to even, below.
        assert_eq!(
            parse_float::<f64>(b"9007199254740993", b"", 0),
            9007199254740992.0
        );
        // Just above the tie rounds up.
        assert_eq!(
            parse_float::<f64>(b"9007199254740993", b"0000000000000000000001", 0),
            9007199254740994.0
        );
        // 2^53 + 3 ties to even, above.
        assert_eq!(
            parse_float::<f64>(b"9007199254740995", b"", 0),
            9007199254740996.0
        );
        // The largest subnormal and smallest normal sit one ULP apart.
        assert_eq!(
            parse_float::<f64>(b"2", b"2250738585072011", -308),
            2.2250738585072011e-308
        );
        assert_eq!(
            parse_float::<f64>(b"2", b"2250738585072014", -308),
            2.2250738585072014e-308
        );
    }
}
