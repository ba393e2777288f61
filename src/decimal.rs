//! The decimal model shared by the formatter and the parser.

use crate::error::{Error, ErrorCode, Result};
use crate::lib::fmt::{self, Display};
use crate::lib::str::FromStr;
use alloc::string::String;

/// A signed decimal significand with a decimal exponent.
///
/// The value is `0.d1 d2 ... dn * 10^k`. For example `1.0` is digits `"1"`
/// with `k = 1` and `0.1` is digits `"1"` with `k = 0`.
///
/// ```
/// use charconv::DecimalDigits;
///
/// let d = DecimalDigits::new(true, b"125", -6)?;
/// assert_eq!(d.to_string(), "-1.25e-07");
/// assert_eq!(charconv::from_decimal::<f64>(&d), -1.25e-7);
/// # Ok::<(), charconv::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DecimalDigits {
    negative: bool,
    digits: String,
    k: i32,
}

impl DecimalDigits {
    /// Create a digit sequence, checking that every byte is an ASCII digit.
    ///
    /// Fails with `ErrorCode::InvalidDigits` if `digits` is empty or holds
    /// anything other than `'0'..='9'`. The error offset is the index of
    /// the offending byte.
    pub fn new(negative: bool, digits: &[u8], k: i32) -> Result<Self> {
        if digits.is_empty() {
            return Err(Error::new(ErrorCode::InvalidDigits, 0));
        }
        if let Some(index) = digits.iter().position(|c| !c.is_ascii_digit()) {
            return Err(Error::new(ErrorCode::InvalidDigits, index));
        }
        Ok(DecimalDigits {
            negative,
            digits: digits.iter().map(|&c| char::from(c)).collect(),
            k,
        })
    }

    /// Wrap digits produced by the digit generator.
    #[inline]
    pub(crate) fn from_generated(negative: bool, digits: &[u8], k: i32) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|c| c.is_ascii_digit()));
        DecimalDigits {
            negative,
            digits: digits.iter().map(|&c| char::from(c)).collect(),
            k,
        }
    }

    /// Whether the value carries a minus sign.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The significant digits as ASCII bytes.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        self.digits.as_bytes()
    }

    /// The significant digits as a string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The decimal exponent `k` in `0.digits * 10^k`.
    #[inline]
    pub fn exponent(&self) -> i32 {
        self.k
    }

    /// The exponent of the leading digit in scientific notation, `k - 1`.
    #[inline]
    pub fn scientific_exponent(&self) -> i32 {
        self.k.saturating_sub(1)
    }

    /// Number of significant digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false, the digit sequence is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Whether every digit is `'0'`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.bytes().all(|c| c == b'0')
    }

    /// Remove trailing zeros, keeping at least one digit.
    pub(crate) fn trim_trailing_zeros(&mut self) {
        let keep = self.digits.trim_end_matches('0').len().max(1);
        self.digits.truncate(keep);
    }
}

impl fmt::Debug for DecimalDigits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DecimalDigits")
            .field("negative", &self.negative)
            .field("digits", &self.digits)
            .field("k", &self.k)
            .finish()
    }
}

/// Renders the scientific form, for example `-1.25e-07`.
impl Display for DecimalDigits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_scientific(f, self.negative, &self.digits, self.k)
    }
}

/// Parses the text accepted by `from_chars` in general format. The whole
/// string must be consumed.
///
/// ```
/// use charconv::DecimalDigits;
///
/// let d: DecimalDigits = "0.00125".parse()?;
/// assert_eq!(d.as_str(), "125");
/// assert_eq!(d.exponent(), -2);
/// # Ok::<(), charconv::Error>(())
/// ```
impl FromStr for DecimalDigits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::text::parse_decimal(s.as_bytes())
    }
}

/// How a finite decimal result is laid out as text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Positional, like `123.45` or `0.001`.
    Fixed,
    /// Mantissa and exponent, like `1.2345e+02`.
    Scientific,
}

/// What digits the generator should produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The fewest digits that parse back to the same value.
    Shortest,
    /// This many digits after the decimal point.
    Fixed(usize),
    /// This many significant digits. Zero is treated as one.
    Scientific(usize),
    /// This many significant digits in `%g` style. Zero is treated as one.
    General(usize),
}

/// The result of converting a float to decimal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decimal {
    /// A finite value and the notation chosen to render it.
    Finite {
        digits: DecimalDigits,
        notation: Notation,
    },
    /// Positive or negative infinity.
    Infinite { negative: bool },
    /// A NaN. The sign bit is kept.
    Nan { negative: bool },
}

impl Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_decimal(f, self)
    }
}

// RENDERING

const ZEROS: &str = "0000000000000000000000000000000000000000000000000000000000000000";

fn write_zeros<W>(w: &mut W, mut n: usize) -> fmt::Result
where
    W: ?Sized + fmt::Write,
{
    while n > 0 {
        let chunk = n.min(ZEROS.len());
        w.write_str(&ZEROS[..chunk])?;
        n -= chunk;
    }
    Ok(())
}

pub(crate) fn write_decimal<W>(w: &mut W, decimal: &Decimal) -> fmt::Result
where
    W: ?Sized + fmt::Write,
{
    match decimal {
        Decimal::Finite { digits, notation } => match notation {
            Notation::Fixed => write_fixed(w, digits.negative, &digits.digits, digits.k),
            Notation::Scientific => write_scientific(w, digits.negative, &digits.digits, digits.k),
        },
        Decimal::Infinite { negative } => write_special(w, *negative, "inf"),
        Decimal::Nan { negative } => write_special(w, *negative, "nan"),
    }
}

fn write_special<W>(w: &mut W, negative: bool, name: &str) -> fmt::Result
where
    W: ?Sized + fmt::Write,
{
    if negative {
        w.write_str("-")?;
    }
    w.write_str(name)
}

/// Write `0.digits * 10^k` positionally.
fn write_fixed<W>(w: &mut W, negative: bool, digits: &str, k: i32) -> fmt::Result
where
    W: ?Sized + fmt::Write,
{
    if negative {
        w.write_str("-")?;
    }
    let len = digits.len();
    if k <= 0 {
        w.write_str("0.")?;
        write_zeros(w, k.unsigned_abs() as usize)?;
        w.write_str(digits)
    } else if (k as usize) < len {
        let (int, frac) = digits.split_at(k as usize);
        w.write_str(int)?;
        w.write_str(".")?;
        w.write_str(frac)
    } else {
        w.write_str(digits)?;
        write_zeros(w, k as usize - len)
    }
}

/// Write `0.digits * 10^k` as `d[.ddd]e±XX`.
fn write_scientific<W>(w: &mut W, negative: bool, digits: &str, k: i32) -> fmt::Result
where
    W: ?Sized + fmt::Write,
{
    if negative {
        w.write_str("-")?;
    }
    let (first, rest) = digits.split_at(1);
    w.write_str(first)?;
    if !rest.is_empty() {
        w.write_str(".")?;
        w.write_str(rest)?;
    }

    // Zero is written with a zero exponent whatever its k.
    let exp = if digits.bytes().all(|c| c == b'0') {
        0
    } else {
        i64::from(k) - 1
    };
    w.write_str(if exp < 0 { "e-" } else { "e+" })?;
    let abs = exp.unsigned_abs();
    if abs < 10 {
        w.write_str("0")?;
    }
    let mut buffer = itoa::Buffer::new();
    w.write_str(buffer.format(abs))
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::DecimalDigits;
    use crate::lib::fmt;
    use crate::lib::str::FromStr;
    use serde_core::de::{self, Deserialize, Deserializer, Visitor};
    use serde_core::ser::{Serialize, Serializer};

    impl Serialize for DecimalDigits {
        #[inline]
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for DecimalDigits {
        #[inline]
        fn deserialize<D>(deserializer: D) -> Result<DecimalDigits, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct DecimalVisitor;

            impl<'de> Visitor<'de> for DecimalVisitor {
                type Value = DecimalDigits;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a decimal number string")
                }

                fn visit_str<E>(self, s: &str) -> Result<DecimalDigits, E>
                where
                    E: de::Error,
                {
                    DecimalDigits::from_str(s).map_err(de::Error::custom)
                }
            }

            deserializer.deserialize_str(DecimalVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn digits(negative: bool, d: &str, k: i32) -> DecimalDigits {
        DecimalDigits::new(negative, d.as_bytes(), k).unwrap()
    }

    #[test]
    fn new_test() {
        let d = digits(false, "125", 1);
        assert_eq!(d.digits(), b"125");
        assert_eq!(d.exponent(), 1);
        assert_eq!(d.scientific_exponent(), 0);
        assert!(!d.is_negative());

        let err = DecimalDigits::new(false, b"", 0).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidDigits);
        let err = DecimalDigits::new(false, b"12a4", 0).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidDigits);
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn trim_test() {
        let mut d = digits(false, "12500", 3);
        d.trim_trailing_zeros();
        assert_eq!(d.as_str(), "125");
        let mut d = digits(false, "000", 1);
        d.trim_trailing_zeros();
        assert_eq!(d.as_str(), "0");
        assert!(d.is_zero());
    }

    #[test]
    fn display_scientific_test() {
        assert_eq!(digits(true, "125", -6).to_string(), "-1.25e-07");
        assert_eq!(digits(false, "1", 1).to_string(), "1e+00");
        assert_eq!(
            digits(false, "17976931348623157", 309).to_string(),
            "1.7976931348623157e+308"
        );
        assert_eq!(digits(false, "5", -323).to_string(), "5e-324");
        assert_eq!(digits(false, "0", 1).to_string(), "0e+00");
        assert_eq!(digits(false, "000", 1).to_string(), "0.00e+00");
    }

    #[test]
    fn display_fixed_test() {
        let fixed = |negative, d, k| {
            Decimal::Finite {
                digits: digits(negative, d, k),
                notation: Notation::Fixed,
            }
            .to_string()
        };
        assert_eq!(fixed(false, "1", 1), "1");
        assert_eq!(fixed(false, "1", 0), "0.1");
        assert_eq!(fixed(false, "125", -2), "0.00125");
        assert_eq!(fixed(true, "125", 2), "-12.5");
        assert_eq!(fixed(false, "125", 5), "12500");
        assert_eq!(fixed(false, "000", 1), "0.00");
        assert_eq!(fixed(true, "0", 1), "-0");
    }

    #[test]
    fn display_special_test() {
        assert_eq!(Decimal::Infinite { negative: false }.to_string(), "inf");
        assert_eq!(Decimal::Infinite { negative: true }.to_string(), "-inf");
        assert_eq!(Decimal::Nan { negative: false }.to_string(), "nan");
        assert_eq!(Decimal::Nan { negative: true }.to_string(), "-nan");
    }
}
