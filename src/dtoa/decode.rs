//! Decodes a float into the scaled integers the digit generator works on.

use crate::num::*;

/// A finite, nonzero value with its rounding interval.
///
/// The value is `mant * 2^exp`. Every value in
/// `(mant - minus) * 2^exp ..= (mant + plus) * 2^exp` rounds back to it,
/// with the endpoints included only when `inclusive` is set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Decoded {
    pub mant: u64,
    pub minus: u64,
    pub plus: u64,
    pub exp: i32,
    /// Round-half-to-even on the significand keeps the endpoints.
    pub inclusive: bool,
}

/// A decoded float, split by what the digit generator has to do with it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FullDecoded {
    Nan,
    Infinite,
    Zero,
    Finite(Decoded),
}

/// Returns the sign and the decoded magnitude.
pub(crate) fn decode<F: Float>(v: F) -> (bool, FullDecoded) {
    let Decomposed { negative, class } = v.decompose();
    let decoded = match class {
        FloatClass::Nan => FullDecoded::Nan,
        FloatClass::Infinity => FullDecoded::Infinite,
        FloatClass::Zero => FullDecoded::Zero,
        FloatClass::Subnormal {
            significand,
            exponent,
        } => {
            // neighbors: (mant - 2, exp) -- (mant, exp) -- (mant + 2, exp)
            let mant = significand.as_u64();
            FullDecoded::Finite(Decoded {
                mant: mant << 1,
                minus: 1,
                plus: 1,
                exp: exponent - 1,
                inclusive: mant & 1 == 0,
            })
        }
        FloatClass::Normal {
            significand,
            exponent,
        } => {
            let mant = significand.as_u64();
            let inclusive = mant & 1 == 0;
            if significand == F::HIDDEN_BIT_MASK && exponent > F::DENORMAL_EXPONENT {
                // neighbors: (maxmant, exp - 1) -- (minnormmant, exp) -- (minnormmant + 1, exp)
                // where maxmant = minnormmant * 2 - 1
                FullDecoded::Finite(Decoded {
                    mant: mant << 2,
                    minus: 1,
                    plus: 2,
                    exp: exponent - 2,
                    inclusive,
                })
            } else {
                // neighbors: (mant - 1, exp) -- (mant, exp) -- (mant + 1, exp)
                FullDecoded::Finite(Decoded {
                    mant: mant << 1,
                    minus: 1,
                    plus: 1,
                    exp: exponent - 1,
                    inclusive,
                })
            }
        }
    };
    (negative, decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_specials_test() {
        assert_eq!(decode(f64::NAN).1, FullDecoded::Nan);
        assert_eq!(decode(f64::NEG_INFINITY), (true, FullDecoded::Infinite));
        assert_eq!(decode(-0.0f32), (true, FullDecoded::Zero));
    }

    #[test]
    fn decode_finite_test() {
        // 1.5 sits inside a binade.
        assert_eq!(
            decode(1.5f64),
            (
                false,
                FullDecoded::Finite(Decoded {
                    mant: 3 << 52,
                    minus: 1,
                    plus: 1,
                    exp: -53,
                    inclusive: true,
                })
            )
        );

        // 1.0 has a narrower gap below.
        assert_eq!(
            decode(1.0f64).1,
            FullDecoded::Finite(Decoded {
                mant: 1 << 54,
                minus: 1,
                plus: 2,
                exp: -54,
                inclusive: true,
            })
        );

        // The smallest normal has subnormal spacing on both sides.
        assert_eq!(
            decode(f64::MIN_POSITIVE).1,
            FullDecoded::Finite(Decoded {
                mant: 1 << 53,
                minus: 1,
                plus: 1,
                exp: -1075,
                inclusive: true,
            })
        );

        // The smallest subnormal is odd.
        assert_eq!(
            decode(f32::from_bits(1)).1,
            FullDecoded::Finite(Decoded {
                mant: 2,
                minus: 1,
                plus: 1,
                exp: -150,
                inclusive: false,
            })
        );
    }
}
