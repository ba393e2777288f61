//! Hexadecimal float text, `h.hhhp±d`, read and written straight from the
//! significand bits.
//!
//! The format is the one `<charconv>` uses: no `0x` prefix, a leading digit
//! of `1` for normal values and `0` for subnormals, lowercase digits, and a
//! decimal binary exponent that is always signed.

use crate::decimal::{write_decimal, Decimal};
use crate::lib::fmt;
use crate::num::*;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Number of hex digits after the point that hold every fraction bit.
#[inline]
fn fraction_hexits<F: Float>() -> usize {
    (F::MANTISSA_SIZE as usize + 3) / 4
}

/// Write `value` in hex notation.
///
/// With no precision the fraction is the shortest that is exact. With a
/// precision the fraction has exactly that many digits, rounded half to
/// even, and the leading digit may carry to `2`.
pub(crate) fn write_hex<F, W>(w: &mut W, value: F, precision: Option<usize>) -> fmt::Result
where
    F: Float,
    W: ?Sized + fmt::Write,
{
    let Decomposed { negative, class } = value.decompose();
    let (significand, exponent) = match class {
        FloatClass::Nan => return write_decimal(w, &Decimal::Nan { negative }),
        FloatClass::Infinity => return write_decimal(w, &Decimal::Infinite { negative }),
        FloatClass::Zero => (0, 0),
        FloatClass::Subnormal {
            significand,
            exponent,
        }
        | FloatClass::Normal {
            significand,
            exponent,
        } => (significand.as_u64(), exponent + F::MANTISSA_SIZE),
    };

    // Left-align the fraction bits on a hex digit boundary.
    let hexits = fraction_hexits::<F>();
    let full = significand << (hexits * 4 - F::MANTISSA_SIZE as usize);
    let (lead, fraction, hexits) = match precision {
        None => {
            let mut fraction = full & low_mask(hexits * 4);
            let mut hexits = hexits;
            while hexits > 0 && fraction & 0xF == 0 {
                fraction >>= 4;
                hexits -= 1;
            }
            (full >> (fraction_hexits::<F>() * 4), fraction, hexits)
        }
        Some(precision) if precision < hexits => {
            let kept = round_even(full, (hexits - precision) * 4);
            (kept >> (precision * 4), kept & low_mask(precision * 4), precision)
        }
        Some(_) => (full >> (hexits * 4), full & low_mask(hexits * 4), hexits),
    };

    if negative {
        w.write_str("-")?;
    }
    write_hexit(w, lead)?;
    let padding = match precision {
        Some(precision) => precision.saturating_sub(hexits),
        None => 0,
    };
    if hexits + padding > 0 {
        w.write_str(".")?;
        for i in (0..hexits).rev() {
            write_hexit(w, fraction >> (i * 4))?;
        }
        for _ in 0..padding {
            w.write_str("0")?;
        }
    }
    w.write_str(if exponent < 0 { "p-" } else { "p+" })?;
    let mut buffer = itoa::Buffer::new();
    w.write_str(buffer.format(exponent.unsigned_abs()))
}

#[inline]
fn write_hexit<W: ?Sized + fmt::Write>(w: &mut W, value: u64) -> fmt::Result {
    w.write_char(char::from(HEX_DIGITS[(value & 0xF) as usize]))
}

#[inline]
fn low_mask(bits: usize) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Drop the low `shift` bits of `x`, rounding half to even.
fn round_even(x: u64, shift: usize) -> u64 {
    debug_assert!(shift > 0 && shift < 64);
    let kept = x >> shift;
    let rest = x & low_mask(shift);
    let half = 1 << (shift - 1);
    if rest > half || (rest == half && kept & 1 == 1) {
        kept + 1
    } else {
        kept
    }
}

// PARSING

#[inline]
fn hex_value(c: u8) -> u64 {
    match c {
        b'0'..=b'9' => u64::from(c - b'0'),
        b'a'..=b'f' => u64::from(c - b'a' + 10),
        b'A'..=b'F' => u64::from(c - b'A' + 10),
        _ => unreachable!(),
    }
}

/// Convert hex digits and a binary exponent to the nearest float, ties to
/// even. Returns infinity on overflow and zero on underflow.
pub(crate) fn parse_hex<F: Float>(integer: &[u8], fraction: &[u8], exponent: i32) -> F {
    // Collect up to 64 significant bits, then fold the rest into a sticky bit.
    let mut mantissa: u64 = 0;
    let mut exp2 = i64::from(exponent);
    let mut sticky = false;
    for &c in integer {
        let digit = hex_value(c);
        if mantissa >> 60 == 0 {
            mantissa = (mantissa << 4) | digit;
        } else {
            sticky |= digit != 0;
            exp2 = exp2.saturating_add(4);
        }
    }
    for &c in fraction {
        let digit = hex_value(c);
        if mantissa >> 60 == 0 {
            mantissa = (mantissa << 4) | digit;
            exp2 = exp2.saturating_sub(4);
        } else {
            sticky |= digit != 0;
        }
    }
    round_to_float(mantissa, exp2, sticky)
}

/// The float nearest to `mantissa * 2^exp2`, where `sticky` marks nonzero
/// bits below the mantissa.
fn round_to_float<F: Float>(mantissa: u64, exp2: i64, sticky: bool) -> F {
    if mantissa == 0 {
        return F::ZERO;
    }
    let bits = i64::from(64 - mantissa.leading_zeros());
    let top = exp2.saturating_add(bits - 1);
    let mantissa_size = i64::from(F::MANTISSA_SIZE);
    let mut exp = top
        .saturating_sub(mantissa_size)
        .max(i64::from(F::DENORMAL_EXPONENT));
    let shift = exp.saturating_sub(exp2);

    let mut significand = if shift <= 0 {
        debug_assert!(!sticky);
        mantissa << -shift
    } else if shift > 65 {
        0
    } else {
        let wide = u128::from(mantissa);
        let kept = (wide >> shift) as u64;
        let rest = wide & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        let up = rest > half || (rest == half && (sticky || kept & 1 == 1));
        if up {
            kept + 1
        } else {
            kept
        }
    };

    if significand >> (F::MANTISSA_SIZE + 1) != 0 {
        significand >>= 1;
        exp += 1;
    }
    if exp >= i64::from(F::MAX_EXPONENT) {
        return F::from_bits(F::INFINITY_BITS);
    }

    let hidden = F::HIDDEN_BIT_MASK.as_u64();
    let bits = if significand & hidden == 0 {
        significand
    } else {
        let biased = (exp + i64::from(F::EXPONENT_BIAS)) as u64;
        (biased << F::MANTISSA_SIZE) | (significand & F::MANTISSA_MASK.as_u64())
    };
    F::from_bits(F::Unsigned::as_cast(bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn hex<F: Float>(value: F, precision: Option<usize>) -> String {
        let mut s = String::new();
        write_hex(&mut s, value, precision).unwrap();
        s
    }

    #[test]
    fn write_shortest_test() {
        assert_eq!(hex(1.0f64, None), "1p+0");
        assert_eq!(hex(-0.0f64, None), "-0p+0");
        assert_eq!(hex(0.5f64, None), "1p-1");
        assert_eq!(hex(1.5f64, None), "1.8p+0");
        assert_eq!(hex(f64::MAX, None), "1.fffffffffffffp+1023");
        assert_eq!(hex(f64::from_bits(1), None), "0.0000000000001p-1022");
        assert_eq!(hex(f32::MAX, None), "1.fffffep+127");
        assert_eq!(hex(f32::from_bits(1), None), "0.000002p-126");
        assert_eq!(hex(f64::NEG_INFINITY, None), "-inf");
    }

    #[test]
    fn write_precision_test() {
        assert_eq!(hex(1.0f64, Some(3)), "1.000p+0");
        assert_eq!(hex(0.0f32, Some(2)), "0.00p+0");
        assert_eq!(hex(1.5f64, Some(0)), "2p+0");
        assert_eq!(hex(1.25f64, Some(0)), "1p+0");
        assert_eq!(hex(f64::MAX, Some(1)), "2.0p+1023");
        // 1.08 ties down to 1.0, 1.18 ties up to 1.2
        assert_eq!(hex(f64::from_bits(0x3FF0800000000000), Some(1)), "1.0p+0");
        assert_eq!(hex(f64::from_bits(0x3FF1800000000000), Some(1)), "1.2p+0");
        assert_eq!(hex(1.0f64, Some(15)), "1.000000000000000p+0");
    }

    #[test]
    fn round_even_test() {
        assert_eq!(round_even(0x18, 4), 0x2);
        assert_eq!(round_even(0x28, 4), 0x2);
        assert_eq!(round_even(0x29, 4), 0x3);
        assert_eq!(round_even(0x27, 4), 0x2);
    }

    #[test]
    fn parse_hex_test() {
        assert_eq!(parse_hex::<f64>(b"1", b"8", 0), 1.5);
        assert_eq!(parse_hex::<f64>(b"", b"8", 1), 1.0);
        assert_eq!(parse_hex::<f64>(b"00ff", b"", -4), 15.9375);
        assert_eq!(parse_hex::<f64>(b"0", b"000", 5), 0.0);
        assert_eq!(parse_hex::<f64>(b"1", b"", -1074), f64::from_bits(1));
        assert_eq!(parse_hex::<f64>(b"1", b"", -1075), 0.0);
        assert_eq!(parse_hex::<f64>(b"1", b"8", -1075), f64::from_bits(1));
        assert_eq!(parse_hex::<f64>(b"1", b"", 1024), f64::INFINITY);
        assert_eq!(parse_hex::<f64>(b"1", b"", i32::MAX), f64::INFINITY);
        assert_eq!(parse_hex::<f64>(b"1", b"", i32::MIN), 0.0);
    }

    #[test]
    fn parse_hex_sticky_test() {
        // 2^53 + 1 ties to even, any bit past the 64th breaks the tie.
        assert_eq!(parse_hex::<f64>(b"20000000000001", b"", 0), 9007199254740992.0);
        assert_eq!(
            parse_hex::<f64>(b"20000000000001", b"0000000000000001", 0),
            9007199254740994.0
        );
    }
}
