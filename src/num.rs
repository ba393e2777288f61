//! IEEE-754 decomposition and the numeric traits shared by the formatter and
//! the parser.

use crate::lib::ops;
use crate::tables::general;

/// Precalculated values of radix**i for i in range [0, arr.len()-1].
/// Each value can be **exactly** represented as that type.
const F32_POW10: [f32; 11] = [
    1.0,
    10.0,
    100.0,
    1000.0,
    10000.0,
    100000.0,
    1000000.0,
    10000000.0,
    100000000.0,
    1000000000.0,
    10000000000.0,
];

/// Precalculated values of radix**i for i in range [0, arr.len()-1].
/// Each value can be **exactly** represented as that type.
const F64_POW10: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Type that can be converted to primitive with `as`.
pub trait AsPrimitive: Sized + Copy + PartialEq + PartialOrd + Send + Sync {
    fn as_u32(self) -> u32;
    fn as_u64(self) -> u64;
    fn as_u128(self) -> u128;
    fn as_usize(self) -> usize;
    fn as_i32(self) -> i32;
    fn as_f32(self) -> f32;
    fn as_f64(self) -> f64;
}

macro_rules! as_primitive_impl {
    ($($t:tt)*) => ($(
        impl AsPrimitive for $t {
            #[inline]
            fn as_u32(self) -> u32 {
                self as u32
            }

            #[inline]
            fn as_u64(self) -> u64 {
                self as u64
            }

            #[inline]
            fn as_u128(self) -> u128 {
                self as u128
            }

            #[inline]
            fn as_usize(self) -> usize {
                self as usize
            }

            #[inline]
            fn as_i32(self) -> i32 {
                self as i32
            }

            #[inline]
            fn as_f32(self) -> f32 {
                self as f32
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*)
}

as_primitive_impl! { u32 u64 u128 usize i32 f32 f64 }

/// An interface for casting between machine scalars.
pub trait AsCast: AsPrimitive {
    /// Creates a number from another value that can be converted into
    /// a primitive via the `AsPrimitive` trait.
    fn as_cast<N: AsPrimitive>(n: N) -> Self;
}

macro_rules! as_cast_impl {
    ($t:ty, $meth:ident) => {
        impl AsCast for $t {
            #[inline]
            fn as_cast<N: AsPrimitive>(n: N) -> $t {
                n.$meth()
            }
        }
    };
}

as_cast_impl!(u32, as_u32);
as_cast_impl!(u64, as_u64);
as_cast_impl!(u128, as_u128);
as_cast_impl!(usize, as_usize);
as_cast_impl!(i32, as_i32);
as_cast_impl!(f32, as_f32);
as_cast_impl!(f64, as_f64);

/// Numerical type trait.
pub trait Number:
    AsCast
    + ops::Add<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::Sub<Output = Self>
{
}

macro_rules! number_impl {
    ($($t:tt)*) => ($(
        impl Number for $t {
        }
    )*)
}

number_impl! { u32 u64 u128 usize i32 f32 f64 }

/// Defines a trait that supports integral operations.
pub trait Integer:
    Number
    + Ord
    + ops::BitAnd<Output = Self>
    + ops::BitOr<Output = Self>
    + ops::Shr<i32, Output = Self>
    + ops::Shl<i32, Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! integer_impl {
    ($($t:tt)*) => ($(
        impl Integer for $t {
            const ZERO: $t = 0;
            const ONE: $t = 1;
        }
    )*)
}

integer_impl! { u32 u64 u128 usize i32 }

/// Type trait for the mantissa type.
pub trait Mantissa: Integer {
    /// Mask to extract the high bits from the integer.
    const HIMASK: Self;
    /// Mask to extract the low bits from the integer.
    const LOMASK: Self;
    /// Full size of the integer, in bits.
    const FULL: i32;
    /// Half size of the integer, in bits.
    const HALF: i32 = Self::FULL / 2;
}

impl Mantissa for u64 {
    const HIMASK: u64 = 0xFFFFFFFF00000000;
    const LOMASK: u64 = 0x00000000FFFFFFFF;
    const FULL: i32 = 64;
}

/// The class of a floating-point bit pattern, with the integer form of
/// finite nonzero values.
///
/// A finite value equals `significand * 2^exponent`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FloatClass<U> {
    /// Positive or negative zero.
    Zero,
    /// A value below the smallest normal. The hidden bit is clear and the
    /// exponent is pinned to `Float::DENORMAL_EXPONENT`.
    Subnormal { significand: U, exponent: i32 },
    /// A normal value. The significand includes the hidden bit.
    Normal { significand: U, exponent: i32 },
    /// Positive or negative infinity.
    Infinity,
    /// Any NaN, quiet or signaling.
    Nan,
}

/// Sign and class of a floating-point value, as returned by
/// [`Float::decompose`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Decomposed<U> {
    /// Whether the sign bit is set.
    pub negative: bool,
    /// The class and integer form of the magnitude.
    pub class: FloatClass<U>,
}

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// An IEEE-754 binary floating-point type, either `f32` or `f64`.
///
/// This trait is sealed. Its constants describe the bit layout and are what
/// the digit generator and the parser are written against.
pub trait Float: private::Sealed + Number + ops::Neg<Output = Self> {
    /// Unsigned type of the same size.
    type Unsigned: Integer + 'static;

    /// Literal zero.
    const ZERO: Self;
    /// Maximum number of digits that can contribute in the mantissa.
    ///
    /// We can exactly represent a float in radix `b` from radix 2 if
    /// `b` is divisible by 2. This is the number of significant digits in
    /// the longest exact decimal expansion, following the "Handbook of
    /// Floating Point Arithmetic" with emin the min exponent and p2 the
    /// precision:
    ///
    /// `−emin + p2 + ⌊(emin + 1) log(2, b) − log(1 − 2^(−p2), b)⌋`
    const MAX_DIGITS: usize;
    /// Most significant digits a shortest round-trip representation needs.
    const MAX_SHORTEST_DIGITS: usize;

    // MASKS

    /// Bitmask for the sign bit.
    const SIGN_MASK: Self::Unsigned;
    /// Bitmask for the exponent, including the hidden bit.
    const EXPONENT_MASK: Self::Unsigned;
    /// Bitmask for the hidden bit in exponent, which is an implicit 1 in the fraction.
    const HIDDEN_BIT_MASK: Self::Unsigned;
    /// Bitmask for the mantissa (fraction), excluding the hidden bit.
    const MANTISSA_MASK: Self::Unsigned;

    // PROPERTIES

    /// Positive infinity as bits.
    const INFINITY_BITS: Self::Unsigned;
    /// Positive quiet NaN as bits.
    const NAN_BITS: Self::Unsigned;
    /// Size of the significand (mantissa) without hidden bit.
    const MANTISSA_SIZE: i32;
    /// Bias of the exponent, including the mantissa size.
    const EXPONENT_BIAS: i32;
    /// Exponent portion of a denormal float.
    const DENORMAL_EXPONENT: i32;
    /// Maximum exponent value in float.
    const MAX_EXPONENT: i32;

    // ROUNDING

    /// Default number of bits to shift (or 64 - mantissa size - 1).
    const DEFAULT_SHIFT: i32;
    /// Mask to determine if a full-carry occurred (1 in bit above hidden bit).
    const CARRY_MASK: u64;

    // GENERAL FORMAT

    /// Largest precision with its own row in the special X table.
    const MAX_SPECIAL_P: usize;
    /// Precision at which the ordinary X table stops growing.
    const MAX_P: usize;

    /// Rows for precisions `1..=MAX_SPECIAL_P`, laid out back to back.
    fn special_x_table() -> &'static [Self::Unsigned];

    /// The single row shared by precisions above `MAX_SPECIAL_P`.
    fn ordinary_x_table() -> &'static [Self::Unsigned];

    /// Get min and max exponent limits (exact) from radix.
    fn exponent_limit() -> (i32, i32);

    /// Get the number of digits that can be shifted from exponent to mantissa.
    fn mantissa_limit() -> i32;

    // Re-exported methods from std.
    fn pow10(self, n: i32) -> Self;
    fn from_bits(u: Self::Unsigned) -> Self;
    fn to_bits(self) -> Self::Unsigned;
    fn is_sign_positive(self) -> bool;
    fn is_sign_negative(self) -> bool;

    /// Returns true if the float is a denormal.
    #[inline]
    fn is_denormal(self) -> bool {
        self.to_bits() & Self::EXPONENT_MASK == Self::Unsigned::ZERO
    }

    /// Returns true if the float is a NaN or Infinite.
    #[inline]
    fn is_special(self) -> bool {
        self.to_bits() & Self::EXPONENT_MASK == Self::EXPONENT_MASK
    }

    /// Returns true if the float is infinite.
    #[inline]
    fn is_inf(self) -> bool {
        self.is_special() && (self.to_bits() & Self::MANTISSA_MASK) == Self::Unsigned::ZERO
    }

    /// Split the bit pattern into its sign and class.
    ///
    /// Total over every bit pattern.
    fn decompose(self) -> Decomposed<Self::Unsigned> {
        let bits = self.to_bits();
        let negative = bits & Self::SIGN_MASK != Self::Unsigned::ZERO;
        let fraction = bits & Self::MANTISSA_MASK;
        let biased = bits & Self::EXPONENT_MASK;

        let class = if biased == Self::EXPONENT_MASK {
            if fraction == Self::Unsigned::ZERO {
                FloatClass::Infinity
            } else {
                FloatClass::Nan
            }
        } else if biased == Self::Unsigned::ZERO {
            if fraction == Self::Unsigned::ZERO {
                FloatClass::Zero
            } else {
                FloatClass::Subnormal {
                    significand: fraction,
                    exponent: Self::DENORMAL_EXPONENT,
                }
            }
        } else {
            FloatClass::Normal {
                significand: fraction | Self::HIDDEN_BIT_MASK,
                exponent: (biased >> Self::MANTISSA_SIZE).as_i32() - Self::EXPONENT_BIAS,
            }
        };

        Decomposed { negative, class }
    }

    /// Get exponent component from the float.
    #[inline]
    fn exponent(self) -> i32 {
        if self.is_denormal() {
            return Self::DENORMAL_EXPONENT;
        }

        let bits = self.to_bits();
        let biased_e: i32 = ((bits & Self::EXPONENT_MASK) >> Self::MANTISSA_SIZE).as_i32();
        biased_e - Self::EXPONENT_BIAS
    }

    /// Get mantissa (significand) component from float.
    #[inline]
    fn mantissa(self) -> Self::Unsigned {
        let bits = self.to_bits();
        let s = bits & Self::MANTISSA_MASK;
        if !self.is_denormal() {
            s + Self::HIDDEN_BIT_MASK
        } else {
            s
        }
    }

    /// Get next greater float for a positive float.
    /// Value must be >= 0.0 and < INFINITY.
    #[inline]
    fn next_positive(self) -> Self {
        debug_assert!(self.is_sign_positive() && !self.is_inf());
        Self::from_bits(self.to_bits() + Self::Unsigned::ONE)
    }

    /// Round a positive number to even.
    #[inline]
    fn round_positive_even(self) -> Self {
        if self.mantissa() & Self::Unsigned::ONE == Self::Unsigned::ONE {
            self.next_positive()
        } else {
            self
        }
    }
}

impl Float for f32 {
    type Unsigned = u32;

    const ZERO: f32 = 0.0;
    const MAX_DIGITS: usize = 114;
    const MAX_SHORTEST_DIGITS: usize = 9;
    const SIGN_MASK: u32 = 0x80000000;
    const EXPONENT_MASK: u32 = 0x7F800000;
    const HIDDEN_BIT_MASK: u32 = 0x00800000;
    const MANTISSA_MASK: u32 = 0x007FFFFF;
    const INFINITY_BITS: u32 = 0x7F800000;
    const NAN_BITS: u32 = 0x7FC00000;
    const MANTISSA_SIZE: i32 = 23;
    const EXPONENT_BIAS: i32 = 127 + Self::MANTISSA_SIZE;
    const DENORMAL_EXPONENT: i32 = 1 - Self::EXPONENT_BIAS;
    const MAX_EXPONENT: i32 = 0xFF - Self::EXPONENT_BIAS;
    const DEFAULT_SHIFT: i32 = u64::FULL - f32::MANTISSA_SIZE - 1;
    const CARRY_MASK: u64 = 0x1000000;
    const MAX_SPECIAL_P: usize = general::F32_MAX_SPECIAL_P;
    const MAX_P: usize = general::F32_MAX_P;

    #[inline]
    fn special_x_table() -> &'static [u32] {
        &general::F32_SPECIAL_X_TABLE
    }

    #[inline]
    fn ordinary_x_table() -> &'static [u32] {
        &general::F32_ORDINARY_X_TABLE
    }

    #[inline]
    fn exponent_limit() -> (i32, i32) {
        (-10, 10)
    }

    #[inline]
    fn mantissa_limit() -> i32 {
        7
    }

    #[inline]
    fn pow10(self, n: i32) -> f32 {
        // Check the exponent is within bounds in debug builds.
        debug_assert!({
            let (min, max) = Self::exponent_limit();
            n >= min && n <= max
        });

        if n > 0 {
            self * F32_POW10[n as usize]
        } else {
            self / F32_POW10[(-n) as usize]
        }
    }

    #[inline]
    fn from_bits(u: u32) -> f32 {
        f32::from_bits(u)
    }

    #[inline]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }

    #[inline]
    fn is_sign_positive(self) -> bool {
        f32::is_sign_positive(self)
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        f32::is_sign_negative(self)
    }
}

impl Float for f64 {
    type Unsigned = u64;

    const ZERO: f64 = 0.0;
    const MAX_DIGITS: usize = 769;
    const MAX_SHORTEST_DIGITS: usize = 17;
    const SIGN_MASK: u64 = 0x8000000000000000;
    const EXPONENT_MASK: u64 = 0x7FF0000000000000;
    const HIDDEN_BIT_MASK: u64 = 0x0010000000000000;
    const MANTISSA_MASK: u64 = 0x000FFFFFFFFFFFFF;
    const INFINITY_BITS: u64 = 0x7FF0000000000000;
    const NAN_BITS: u64 = 0x7FF8000000000000;
    const MANTISSA_SIZE: i32 = 52;
    const EXPONENT_BIAS: i32 = 1023 + Self::MANTISSA_SIZE;
    const DENORMAL_EXPONENT: i32 = 1 - Self::EXPONENT_BIAS;
    const MAX_EXPONENT: i32 = 0x7FF - Self::EXPONENT_BIAS;
    const DEFAULT_SHIFT: i32 = u64::FULL - f64::MANTISSA_SIZE - 1;
    const CARRY_MASK: u64 = 0x20000000000000;
    const MAX_SPECIAL_P: usize = general::F64_MAX_SPECIAL_P;
    const MAX_P: usize = general::F64_MAX_P;

    #[inline]
    fn special_x_table() -> &'static [u64] {
        &general::F64_SPECIAL_X_TABLE
    }

    #[inline]
    fn ordinary_x_table() -> &'static [u64] {
        &general::F64_ORDINARY_X_TABLE
    }

    #[inline]
    fn exponent_limit() -> (i32, i32) {
        (-22, 22)
    }

    #[inline]
    fn mantissa_limit() -> i32 {
        15
    }

    #[inline]
    fn pow10(self, n: i32) -> f64 {
        // Check the exponent is within bounds in debug builds.
        debug_assert!({
            let (min, max) = Self::exponent_limit();
            n >= min && n <= max
        });

        if n > 0 {
            self * F64_POW10[n as usize]
        } else {
            self / F64_POW10[(-n) as usize]
        }
    }

    #[inline]
    fn from_bits(u: u64) -> f64 {
        f64::from_bits(u)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline]
    fn is_sign_positive(self) -> bool {
        f64::is_sign_positive(self)
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        f64::is_sign_negative(self)
    }
}

// TEST
// ----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_f64_test() {
        let d = 1.0f64.decompose();
        assert!(!d.negative);
        assert_eq!(
            d.class,
            FloatClass::Normal {
                significand: 1 << 52,
                exponent: -52
            }
        );

        let d = (-0.0f64).decompose();
        assert!(d.negative);
        assert_eq!(d.class, FloatClass::Zero);

        let d = f64::from_bits(1).decompose();
        assert_eq!(
            d.class,
            FloatClass::Subnormal {
                significand: 1,
                exponent: -1074
            }
        );

        // Smallest normal shares the subnormal exponent.
        let d = f64::MIN_POSITIVE.decompose();
        assert_eq!(
            d.class,
            FloatClass::Normal {
                significand: 1 << 52,
                exponent: -1074
            }
        );

        assert_eq!(f64::INFINITY.decompose().class, FloatClass::Infinity);
        assert!(f64::NEG_INFINITY.decompose().negative);
        assert_eq!(f64::NAN.decompose().class, FloatClass::Nan);
        assert_eq!(
            f64::from_bits(0xFFF0000000000001).decompose().class,
            FloatClass::Nan
        );
    }

    #[test]
    fn decompose_f32_test() {
        let d = 3.0f32.decompose();
        assert_eq!(
            d.class,
            FloatClass::Normal {
                significand: 0xC00000,
                exponent: -22
            }
        );

        let d = f32::from_bits(0x807FFFFF).decompose();
        assert!(d.negative);
        assert_eq!(
            d.class,
            FloatClass::Subnormal {
                significand: 0x7FFFFF,
                exponent: -149
            }
        );

        let d = f32::MAX.decompose();
        assert_eq!(
            d.class,
            FloatClass::Normal {
                significand: 0xFFFFFF,
                exponent: 104
            }
        );
    }

    #[test]
    fn decompose_matches_mantissa_exponent_test() {
        for &x in &[1e-310f64, 2.5e-308, 0.1, 1.0, 123456.789, 1.7976931348623157e308] {
            match x.decompose().class {
                FloatClass::Normal {
                    significand,
                    exponent,
                }
                | FloatClass::Subnormal {
                    significand,
                    exponent,
                } => {
                    assert_eq!(significand, x.mantissa());
                    assert_eq!(exponent, x.exponent());
                }
                class => panic!("unexpected class {:?}", class),
            }
        }
    }

    #[test]
    fn next_positive_test() {
        assert_eq!(0.0f64.next_positive(), f64::from_bits(1));
        assert_eq!(1.0f32.next_positive(), 1.0000001f32);
        assert_eq!(f64::MAX.next_positive(), f64::INFINITY);
    }

    #[test]
    fn round_positive_even_test() {
        assert_eq!(1.0f64.round_positive_even(), 1.0);
        let odd = f64::from_bits(0x3FF0000000000001);
        assert_eq!(
            odd.round_positive_even().to_bits(),
            0x3FF0000000000002
        );
    }

    #[test]
    fn pow10_test() {
        assert_eq!(3.0f64.pow10(22), 3e22);
        assert_eq!(3.0f64.pow10(-22), 3e-22);
        assert_eq!(7.0f32.pow10(10), 7e10);
        assert_eq!(7.0f32.pow10(-3), 7e-3);
    }

    #[test]
    fn x_table_shape_test() {
        let p = f64::MAX_SPECIAL_P;
        assert_eq!(f64::special_x_table().len(), (p - 1) * (p + 10) / 2 + p + 5);
        assert_eq!(f64::ordinary_x_table().len(), f64::MAX_P + 5);
        let p = f32::MAX_SPECIAL_P;
        assert_eq!(f32::special_x_table().len(), (p - 1) * (p + 10) / 2 + p + 5);
        assert_eq!(f32::ordinary_x_table().len(), f32::MAX_P + 5);
    }
}
