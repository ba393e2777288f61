//! Extended precision floating-point type used by the parser.

use super::rounding::*;
use super::shift::*;
use crate::num::*;

/// Extended precision floating-point type.
///
/// The value is `mant * 2^exp`, with no hidden bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ExtendedFloat {
    /// Mantissa for the extended-precision float.
    pub mant: u64,
    /// Binary exponent for the extended-precision float.
    pub exp: i32,
}

impl ExtendedFloat {
    // OPERATIONS

    /// Multiply two normalized extended-precision floats, as if by `a*b`.
    ///
    /// The precision is maximal when the numbers are normalized, however,
    /// decent precision will occur as long as both values have high bits
    /// set. The result is not normalized.
    ///
    /// Algorithm:
    ///     1. Non-signed multiplication of mantissas (requires 2x as many bits as input).
    ///     2. Normalization of the result (not done here).
    ///     3. Addition of exponents.
    pub(crate) fn mul(&self, b: &ExtendedFloat) -> ExtendedFloat {
        // Logic check, values must be decently normalized prior to multiplication.
        debug_assert!((self.mant & u64::HIMASK != 0) && (b.mant & u64::HIMASK != 0));

        let ah = self.mant >> u64::HALF;
        let al = self.mant & u64::LOMASK;
        let bh = b.mant >> u64::HALF;
        let bl = b.mant & u64::LOMASK;

        let ah_bl = ah * bl;
        let al_bh = al * bh;
        let al_bl = al * bl;
        let ah_bh = ah * bh;

        let mut tmp = (ah_bl & u64::LOMASK) + (al_bh & u64::LOMASK) + (al_bl >> u64::HALF);
        // round up
        tmp += 1 << (u64::HALF - 1);

        ExtendedFloat {
            mant: ah_bh + (ah_bl >> u64::HALF) + (al_bh >> u64::HALF) + (tmp >> u64::HALF),
            exp: self.exp + b.exp + u64::FULL,
        }
    }

    /// Multiply in-place, as if by `a*b`.
    ///
    /// The result is not normalized.
    #[inline]
    pub(crate) fn imul(&mut self, b: &ExtendedFloat) {
        *self = self.mul(b);
    }

    /// Shift the mantissa so the number of leading zeros is 0, or the value
    /// itself is 0.
    ///
    /// Returns the number of bits shifted.
    #[inline]
    pub(crate) fn normalize(&mut self) -> u32 {
        // Zero has no leading one to find, and a shift of 64 would overflow.
        let shift = if self.mant == 0 {
            0
        } else {
            self.mant.leading_zeros()
        };
        shl(self, shift as i32);
        shift
    }

    /// Lossy round float-point number to native mantissa boundaries.
    #[inline]
    pub(crate) fn round_to_native<F, Algorithm>(&mut self, algorithm: Algorithm)
    where
        F: Float,
        Algorithm: FnOnce(&mut ExtendedFloat, i32),
    {
        round_to_native::<F, _>(self, algorithm);
    }

    /// Create extended float from native float.
    #[inline]
    pub(crate) fn from_float<F: Float>(f: F) -> ExtendedFloat {
        ExtendedFloat {
            mant: f.mantissa().as_u64(),
            exp: f.exponent(),
        }
    }

    /// Convert into default-rounded, lower-precision native float.
    #[inline]
    pub(crate) fn into_float<F: Float>(mut self) -> F {
        self.round_to_native::<F, _>(round_nearest_tie_even);
        into_float(self)
    }

    /// Convert into downward-rounded, lower-precision native float.
    #[inline]
    pub(crate) fn into_downward_float<F: Float>(mut self) -> F {
        self.round_to_native::<F, _>(round_downward);
        into_float(self)
    }
}

// Export extended-precision float to native float.
//
// The extended-precision float must be in native float representation,
// with overflow/underflow appropriately handled.
#[inline]
pub(crate) fn into_float<F>(fp: ExtendedFloat) -> F
where
    F: Float,
{
    if fp.mant == 0 || fp.exp < F::DENORMAL_EXPONENT {
        // sub-denormal, underflow
        F::ZERO
    } else if fp.exp >= F::MAX_EXPONENT {
        // overflow
        F::from_bits(F::INFINITY_BITS)
    } else {
        // Calculate the exp and fraction bits, and return a float from bits.
        let exp: u64 =
            if (fp.exp == F::DENORMAL_EXPONENT) && (fp.mant & F::HIDDEN_BIT_MASK.as_u64()) == 0 {
                0
            } else {
                (fp.exp + F::EXPONENT_BIAS).as_u64()
            };
        let exp = exp << F::MANTISSA_SIZE;
        let mant = fp.mant & F::MANTISSA_MASK.as_u64();
        F::from_bits(<F::Unsigned as AsCast>::as_cast(mant | exp))
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    fn check_normalize(mant: u64, exp: i32, shift: u32, r_mant: u64, r_exp: i32) {
        let mut x = ExtendedFloat { mant, exp };
        assert_eq!(x.normalize(), shift);
        assert_eq!(
            x,
            ExtendedFloat {
                mant: r_mant,
                exp: r_exp
            }
        );
    }

    #[test]
    fn normalize_test() {
        check_normalize(0, 0, 0, 0, 0);
        // f32 min subnormal
        check_normalize(1, -149, 63, 1 << 63, -212);
        // f64 max
        check_normalize(9007199254740991, 971, 11, 18446744073709549568, 960);
        // 1.0
        check_normalize(1 << 52, -52, 11, 1 << 63, -63);
    }

    #[test]
    fn mul_test() {
        // 1.0 * 1.0
        let a = ExtendedFloat {
            mant: 1 << 63,
            exp: -63,
        };
        let mut c = a.mul(&a);
        c.normalize();
        assert_eq!(c, a);

        // 0.5 * 3.0 = 1.5
        let b = ExtendedFloat {
            mant: 1 << 63,
            exp: -64,
        };
        let d = ExtendedFloat {
            mant: 3 << 62,
            exp: -62,
        };
        let mut e = b.mul(&d);
        e.normalize();
        assert_eq!(
            e,
            ExtendedFloat {
                mant: 3 << 62,
                exp: -63
            }
        );
    }

    #[test]
    fn from_float_test() {
        assert_eq!(
            ExtendedFloat::from_float(1.0f64),
            ExtendedFloat {
                mant: 1 << 52,
                exp: -52
            }
        );
        assert_eq!(
            ExtendedFloat::from_float(1e-45f32),
            ExtendedFloat { mant: 1, exp: -149 }
        );
        assert_eq!(
            ExtendedFloat::from_float(f64::MAX),
            ExtendedFloat {
                mant: 9007199254740991,
                exp: 971
            }
        );
    }

    #[test]
    fn into_float_test() {
        let fp = ExtendedFloat {
            mant: 1 << 63,
            exp: -63,
        };
        assert_eq!(fp.into_float::<f64>(), 1.0);
        assert_eq!(fp.into_float::<f32>(), 1.0);

        // Past the largest exponent.
        let fp = ExtendedFloat {
            mant: 1 << 63,
            exp: 1000,
        };
        assert_eq!(fp.into_float::<f64>(), f64::INFINITY);

        // Below half the smallest subnormal.
        let fp = ExtendedFloat {
            mant: 1 << 63,
            exp: -1200,
        };
        assert_eq!(fp.into_float::<f64>(), 0.0);

        // 1 + 2^-53 + 2^-60 rounds up, downward rounding truncates.
        let fp = ExtendedFloat {
            mant: (1 << 63) + (1 << 10) + (1 << 3),
            exp: -63,
        };
        assert_eq!(fp.into_float::<f64>(), 1.0000000000000002);
        assert_eq!(fp.into_downward_float::<f64>(), 1.0);
    }
}
