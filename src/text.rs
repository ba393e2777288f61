//! Conversions between floats and text in caller-provided buffers.
//!
//! Output is written without a terminating byte and nothing is written
//! beyond the end of the buffer. Input must start with the number, with an
//! optional `-` and no leading whitespace or `+`.

use crate::atof::parse_float;
use crate::decimal::{write_decimal, Decimal, DecimalDigits, Mode, Notation};
use crate::dtoa::to_decimal;
use crate::error::{Error, ErrorCode, Result};
use crate::hex::{parse_hex, write_hex};
use crate::lib::fmt;
use crate::num::Float;
use alloc::vec::Vec;

/// The notation requested from `to_chars_format`, `to_chars_precision` and
/// `from_chars`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CharsFormat {
    /// `d.ddde±XX`, like `printf("%e")`.
    Scientific,
    /// `ddd.ddd` without an exponent, like `printf("%f")`.
    Fixed,
    /// Either of the above, like `printf("%g")`.
    General,
    /// `h.hhhp±d` with a binary exponent, like `printf("%a")` without the
    /// `0x` prefix.
    Hex,
}

/// Write the shortest text that reads back as `value`.
///
/// Fixed or scientific notation is chosen by whichever is shorter, with fixed
/// winning ties. Returns the number of bytes written.
///
/// ```
/// let mut buf = [0u8; 32];
/// let len = charconv::to_chars(&mut buf, 0.1f64)?;
/// assert_eq!(&buf[..len], b"0.1");
///
/// let len = charconv::to_chars(&mut buf, 1e100f64)?;
/// assert_eq!(&buf[..len], b"1e+100");
/// # Ok::<(), charconv::Error>(())
/// ```
///
/// # Errors
///
/// Fails with `ErrorCode::ValueTooLarge` if `buf` is too small. The error
/// offset is the length that would have been needed.
pub fn to_chars<F: Float>(buf: &mut [u8], value: F) -> Result<usize> {
    let decimal = to_decimal(value, Mode::Shortest);
    write_chars(buf, &exact_integer(value, decimal))
}

/// Write the shortest text that reads back as `value`, in the given notation.
///
/// `CharsFormat::General` uses fixed notation when the decimal exponent `X`
/// of the shortest digits satisfies `6 > X >= -4`, the same rule `%g` applies
/// with its default precision. `CharsFormat::Hex` writes the fewest hex
/// digits that are exact.
///
/// ```
/// use charconv::CharsFormat;
///
/// let mut buf = [0u8; 32];
/// let len = charconv::to_chars_format(&mut buf, 1e3f64, CharsFormat::Scientific)?;
/// assert_eq!(&buf[..len], b"1e+03");
///
/// let len = charconv::to_chars_format(&mut buf, 1e-5f64, CharsFormat::General)?;
/// assert_eq!(&buf[..len], b"1e-05");
///
/// let len = charconv::to_chars_format(&mut buf, -0.75f64, CharsFormat::Hex)?;
/// assert_eq!(&buf[..len], b"-1.8p-1");
/// # Ok::<(), charconv::Error>(())
/// ```
///
/// # Errors
///
/// Fails with `ErrorCode::ValueTooLarge` if `buf` is too small.
pub fn to_chars_format<F: Float>(buf: &mut [u8], value: F, format: CharsFormat) -> Result<usize> {
    if format == CharsFormat::Hex {
        return write_with(buf, |w| write_hex(w, value, None));
    }
    let decimal = match to_decimal(value, Mode::Shortest) {
        Decimal::Finite { digits, .. } => {
            let notation = match format {
                CharsFormat::Fixed => Notation::Fixed,
                CharsFormat::Scientific | CharsFormat::Hex => Notation::Scientific,
                CharsFormat::General => {
                    let x = digits.scientific_exponent();
                    if (-4..6).contains(&x) {
                        Notation::Fixed
                    } else {
                        Notation::Scientific
                    }
                }
            };
            Decimal::Finite { digits, notation }
        }
        special => special,
    };
    write_chars(buf, &exact_integer(value, decimal))
}

/// Write `value` with a fixed precision.
///
/// The precision counts digits after the point for `Fixed`, `Scientific`
/// and `Hex`, and significant digits for `General`, matching `printf`.
/// The result is rounded half to even from the exact binary value.
///
/// ```
/// use charconv::CharsFormat;
///
/// let mut buf = [0u8; 32];
/// let len = charconv::to_chars_precision(&mut buf, 3.14159f64, CharsFormat::Fixed, 2)?;
/// assert_eq!(&buf[..len], b"3.14");
///
/// let len = charconv::to_chars_precision(&mut buf, 3.14159f64, CharsFormat::Scientific, 2)?;
/// assert_eq!(&buf[..len], b"3.14e+00");
///
/// let len = charconv::to_chars_precision(&mut buf, 1e-5f64, CharsFormat::General, 3)?;
/// assert_eq!(&buf[..len], b"1e-05");
///
/// let len = charconv::to_chars_precision(&mut buf, 1.0f64 / 3.0, CharsFormat::Hex, 4)?;
/// assert_eq!(&buf[..len], b"1.5555p-2");
/// # Ok::<(), charconv::Error>(())
/// ```
///
/// # Errors
///
/// Fails with `ErrorCode::ValueTooLarge` if `buf` is too small.
pub fn to_chars_precision<F: Float>(
    buf: &mut [u8],
    value: F,
    format: CharsFormat,
    precision: usize,
) -> Result<usize> {
    let mode = match format {
        CharsFormat::Fixed => Mode::Fixed(precision),
        CharsFormat::Scientific => Mode::Scientific(precision.saturating_add(1)),
        CharsFormat::General => Mode::General(precision),
        CharsFormat::Hex => return write_with(buf, |w| write_hex(w, value, Some(precision))),
    };
    write_chars(buf, &to_decimal(value, mode))
}

/// Shortest digits rendered in fixed notation past their last digit would
/// print zeros where the exact binary value has other digits. Print the
/// exact integer instead.
fn exact_integer<F: Float>(value: F, decimal: Decimal) -> Decimal {
    let past_digits = matches!(
        &decimal,
        Decimal::Finite {
            digits,
            notation: Notation::Fixed,
        } if digits.exponent() as i64 > digits.len() as i64
    );
    if past_digits {
        to_decimal(value, Mode::Fixed(0))
    } else {
        decimal
    }
}

/// Copies as much of the output as fits and counts the full length.
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> fmt::Write for SliceWriter<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len.saturating_add(s.len());
        if end <= self.buf.len() {
            self.buf[self.len..end].copy_from_slice(s.as_bytes());
        }
        self.len = end;
        Ok(())
    }
}

fn write_chars(buf: &mut [u8], decimal: &Decimal) -> Result<usize> {
    write_with(buf, |w| write_decimal(w, decimal))
}

fn write_with<G>(buf: &mut [u8], write: G) -> Result<usize>
where
    G: FnOnce(&mut SliceWriter<'_>) -> fmt::Result,
{
    let mut writer = SliceWriter { buf, len: 0 };
    // SliceWriter never fails, it only counts past the end.
    let _ = write(&mut writer);
    if writer.len > writer.buf.len() {
        return Err(Error::new(ErrorCode::ValueTooLarge, writer.len));
    }
    Ok(writer.len)
}

// PARSING

/// Parse a float from the start of `bytes`.
///
/// Returns the value and the number of bytes it spans. Accepts an optional
/// `-`, decimal digits with an optional `.`, and an exponent `e±ddd` which
/// is required for `Scientific`, ignored for `Fixed` and optional for
/// `General`. `Hex` reads hex digits with an optional `.` and an optional
/// binary exponent `p±ddd`, without a `0x` prefix. `inf`, `infinity`, `nan`
/// and `nan(chars)` are accepted in any case.
///
/// ```
/// use charconv::CharsFormat;
///
/// let (value, len) = charconv::from_chars::<f64>(b"1.5e3xyz", CharsFormat::General)?;
/// assert_eq!((value, len), (1500.0, 5));
///
/// let (value, len) = charconv::from_chars::<f64>(b"1.5e3", CharsFormat::Fixed)?;
/// assert_eq!((value, len), (1.5, 3));
///
/// let (value, len) = charconv::from_chars::<f64>(b"1.8p+1", CharsFormat::Hex)?;
/// assert_eq!((value, len), (3.0, 6));
/// # Ok::<(), charconv::Error>(())
/// ```
///
/// # Errors
///
/// - `ErrorCode::InvalidArgument` at offset 0 if no number starts the input.
/// - `ErrorCode::Overflow` if the number rounds to infinity.
/// - `ErrorCode::Underflow` if a nonzero number rounds to zero.
///
/// Range errors carry the length of the number as their offset.
pub fn from_chars<F: Float>(bytes: &[u8], format: CharsFormat) -> Result<(F, usize)> {
    match scan(bytes, format)? {
        Scanned::Infinity { negative, len } => {
            let value = F::from_bits(F::INFINITY_BITS);
            Ok((if negative { -value } else { value }, len))
        }
        Scanned::Nan { negative, len } => {
            let value = F::from_bits(F::NAN_BITS);
            Ok((if negative { -value } else { value }, len))
        }
        Scanned::Number(number) => {
            let value: F = if format == CharsFormat::Hex {
                parse_hex(number.integer, number.fraction, number.exponent)
            } else {
                parse_float(number.integer, number.fraction, number.exponent)
            };
            if value.is_inf() {
                return Err(Error::new(ErrorCode::Overflow, number.len));
            }
            if value == F::ZERO && number.has_nonzero_digit() {
                return Err(Error::new(ErrorCode::Underflow, number.len));
            }
            Ok((if number.negative { -value } else { value }, number.len))
        }
    }
}

/// Parse a whole string in general format into decimal digits without
/// rounding.
pub(crate) fn parse_decimal(bytes: &[u8]) -> Result<DecimalDigits> {
    let number = match scan(bytes, CharsFormat::General)? {
        Scanned::Number(number) => number,
        _ => return Err(Error::new(ErrorCode::InvalidArgument, 0)),
    };
    if number.len != bytes.len() {
        return Err(Error::new(ErrorCode::InvalidArgument, number.len));
    }

    let integer = trim_leading_zeros(number.integer);
    let (digits, k) = if integer.is_empty() {
        let fraction = trim_leading_zeros(number.fraction);
        let skipped = number.fraction.len() - fraction.len();
        (fraction.to_vec(), number.exponent.saturating_sub(into_i32(skipped)))
    } else {
        let mut digits = Vec::with_capacity(integer.len() + number.fraction.len());
        digits.extend_from_slice(integer);
        digits.extend_from_slice(number.fraction);
        (digits, number.exponent.saturating_add(into_i32(integer.len())))
    };

    if digits.iter().all(|&c| c == b'0') {
        return Ok(DecimalDigits::from_generated(number.negative, b"0", 1));
    }
    Ok(DecimalDigits::from_generated(number.negative, &digits, k))
}

fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
    let zeros = digits.iter().take_while(|&&c| c == b'0').count();
    &digits[zeros..]
}

fn into_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// The parts of a decimal number, borrowed from the input.
struct Number<'a> {
    negative: bool,
    integer: &'a [u8],
    fraction: &'a [u8],
    exponent: i32,
    len: usize,
}

impl<'a> Number<'a> {
    fn has_nonzero_digit(&self) -> bool {
        self.integer
            .iter()
            .chain(self.fraction)
            .any(|&c| c != b'0')
    }
}

enum Scanned<'a> {
    Number(Number<'a>),
    Infinity { negative: bool, len: usize },
    Nan { negative: bool, len: usize },
}

struct Scanner<'a> {
    slice: &'a [u8],
    index: usize,
}

impl<'a> Scanner<'a> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.slice.get(self.index).copied()
    }

    #[inline]
    fn eat_char(&mut self) {
        self.index += 1;
    }

    fn eat_digits(&mut self) -> &'a [u8] {
        let start = self.index;
        while let Some(b'0'..=b'9') = self.peek() {
            self.eat_char();
        }
        &self.slice[start..self.index]
    }

    fn eat_significand_digits(&mut self, hex: bool) -> &'a [u8] {
        if !hex {
            return self.eat_digits();
        }
        let start = self.index;
        while let Some(b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F') = self.peek() {
            self.eat_char();
        }
        &self.slice[start..self.index]
    }

    /// Consume `word` ignoring ASCII case.
    fn eat_word(&mut self, word: &[u8]) -> bool {
        let rest = &self.slice[self.index..];
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word) {
            self.index += word.len();
            true
        } else {
            false
        }
    }

    /// Consume `(chars)` after `nan` if it is well formed.
    fn eat_nan_payload(&mut self) {
        if self.peek() != Some(b'(') {
            return;
        }
        let rest = &self.slice[self.index + 1..];
        if let Some(close) = memchr::memchr(b')', rest) {
            let payload = &rest[..close];
            if payload
                .iter()
                .all(|&c| c.is_ascii_alphanumeric() || c == b'_')
            {
                self.index += close + 2;
            }
        }
    }

    /// Consume an exponent introduced by `marker`, in either case, if a
    /// complete one follows. The value saturates.
    fn eat_exponent(&mut self, marker: u8) -> Option<i32> {
        match self.peek() {
            Some(c) if c.to_ascii_lowercase() == marker => {}
            _ => return None,
        }
        let start = self.index;
        self.eat_char();

        let positive = match self.peek() {
            Some(b'+') => {
                self.eat_char();
                true
            }
            Some(b'-') => {
                self.eat_char();
                false
            }
            _ => true,
        };

        let digits = self.eat_digits();
        if digits.is_empty() {
            // `1e` and `1e+` end before the `e`.
            self.index = start;
            return None;
        }

        let mut exp: i32 = 0;
        for &c in digits {
            exp = exp.saturating_mul(10).saturating_add(i32::from(c - b'0'));
        }
        Some(if positive { exp } else { -exp })
    }
}

fn scan(bytes: &[u8], format: CharsFormat) -> Result<Scanned<'_>> {
    let mut scanner = Scanner {
        slice: bytes,
        index: 0,
    };

    let negative = scanner.peek() == Some(b'-');
    if negative {
        scanner.eat_char();
    }

    if scanner.eat_word(b"inf") {
        scanner.eat_word(b"inity");
        return Ok(Scanned::Infinity {
            negative,
            len: scanner.index,
        });
    }
    if scanner.eat_word(b"nan") {
        scanner.eat_nan_payload();
        return Ok(Scanned::Nan {
            negative,
            len: scanner.index,
        });
    }

    let hex = format == CharsFormat::Hex;
    let integer = scanner.eat_significand_digits(hex);
    let fraction = if scanner.peek() == Some(b'.') {
        let dot = scanner.index;
        scanner.eat_char();
        let fraction = scanner.eat_significand_digits(hex);
        if integer.is_empty() && fraction.is_empty() {
            scanner.index = dot;
        }
        fraction
    } else {
        &[]
    };
    if integer.is_empty() && fraction.is_empty() {
        return Err(Error::new(ErrorCode::InvalidArgument, 0));
    }

    let exponent = match format {
        CharsFormat::Fixed => 0,
        CharsFormat::General => scanner.eat_exponent(b'e').unwrap_or(0),
        CharsFormat::Hex => scanner.eat_exponent(b'p').unwrap_or(0),
        CharsFormat::Scientific => match scanner.eat_exponent(b'e') {
            Some(exponent) => exponent,
            None => return Err(Error::new(ErrorCode::InvalidArgument, 0)),
        },
    };

    Ok(Scanned::Number(Number {
        negative,
        integer,
        fraction,
        exponent,
        len: scanner.index,
    }))
}
