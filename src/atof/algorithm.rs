//! The three strategies for turning a decimal significand into a float.
//!
//! Each one is tried in turn until one of them can prove its answer is
//! correctly rounded.

use super::bhcomp::*;
use super::cached::*;
use super::errors::*;
use super::float::ExtendedFloat;
use crate::num::*;
use crate::tables::small_powers::POW10_64;

/// A decimal value `integer.fraction * 10^exponent`, with its leading
/// digits already gathered into a machine word.
pub(crate) struct Significand<'a> {
    pub integer: &'a [u8],
    pub fraction: &'a [u8],
    pub exponent: i32,
    /// The leading digits that fit in a `u64`.
    pub mantissa: u64,
    /// The power of ten that scales `mantissa` to the value.
    pub scale: i32,
    /// Nonzero digits were left out of `mantissa`.
    pub truncated: bool,
}

impl<'a> Significand<'a> {
    pub(crate) fn to_float<F: Float>(&self) -> F {
        if !self.truncated {
            if let Some(float) = exact::<F>(self.mantissa, self.scale) {
                return float;
            }
        }

        let (fp, accurate) = approximate::<F>(self.mantissa, self.scale, self.truncated);
        if accurate {
            return fp.into_float::<F>();
        }

        // The answer is this float or the next one up.
        let lower = fp.into_downward_float::<F>();
        if lower.is_special() {
            return lower;
        }
        bhcomp(lower, self.integer, self.fraction, self.exponent)
    }
}

/// Native arithmetic, when both `mantissa` and `10^scale` are exact in `F`
/// so a single rounding step gives the answer.
pub(crate) fn exact<F: Float>(mantissa: u64, scale: i32) -> Option<F> {
    let fits = |m: u64| m >> (F::MANTISSA_SIZE + 1) == 0;
    if !fits(mantissa) {
        return None;
    }

    let (min_exp, max_exp) = F::exponent_limit();
    if scale == 0 {
        Some(F::as_cast(mantissa))
    } else if scale >= min_exp && scale <= max_exp {
        Some(F::as_cast(mantissa).pow10(scale))
    } else if scale > max_exp && scale <= max_exp + F::mantissa_limit() {
        // Few digits with a large power: move the excess power into the
        // mantissa while it stays exact.
        let shifted = mantissa.checked_mul(POW10_64[(scale - max_exp).as_usize()])?;
        if fits(shifted) {
            Some(F::as_cast(shifted).pow10(max_exp))
        } else {
            None
        }
    } else {
        None
    }
}

/// An 80-bit approximation of `mantissa * 10^scale`, and whether its error
/// bound keeps it clear of a rounding boundary for `F`.
pub(crate) fn approximate<F: Float>(
    mantissa: u64,
    scale: i32,
    truncated: bool,
) -> (ExtendedFloat, bool) {
    let mut fp = ExtendedFloat {
        mant: mantissa,
        exp: 0,
    };
    let powers = ExtendedFloat::get_powers();
    let biased = scale.saturating_add(powers.bias);
    if biased < 0 {
        fp.mant = 0;
        return (fp, true);
    }
    let large = (biased / powers.step).as_usize();
    let small = (biased % powers.step).as_usize();
    if large >= powers.large.len() {
        fp.mant = 1 << 63;
        fp.exp = 0x7FF;
        return (fp, true);
    }

    // Error in units of half an ulp of the 64-bit mantissa.
    let half = u64::error_halfscale();
    let mut errors = if truncated { half } else { 0 };

    match fp.mant.checked_mul(powers.get_small_int(small)) {
        Some(mant) => {
            fp.mant = mant;
            fp.normalize();
        }
        None => {
            fp.normalize();
            fp.imul(&powers.get_small(small));
            errors += half;
        }
    }

    fp.imul(&powers.get_large(large));
    if errors > 0 {
        errors += 1;
    }
    errors += half;
    errors <<= fp.normalize();

    let accurate = u64::error_is_accurate::<F>(errors, &fp);
    (fp, accurate)
}
