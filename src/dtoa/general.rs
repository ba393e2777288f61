//! Notation selection for `%g`-style output.
//!
//! `%g` with precision `P` picks fixed notation when the scientific
//! exponent `X` of the value, *after* rounding to `P` significant digits,
//! satisfies `P > X >= -4`. Rounding can carry into a new decade, so `X`
//! is looked up in precomputed boundary tables rather than derived from
//! the unrounded value.

use crate::num::*;

/// The scientific exponent of `bits` once rounded to `p` significant
/// digits.
///
/// `bits` is the bit pattern of a finite, non-negative value and `p` is at
/// least one. Zero gives `0`.
pub(crate) fn scientific_exponent_x<F: Float>(bits: F::Unsigned, p: usize) -> i32 {
    debug_assert!(p > 0);
    if bits == F::Unsigned::ZERO {
        return 0;
    }

    let row = if p <= F::MAX_SPECIAL_P {
        let start = (p - 1) * (p + 10) / 2;
        &F::special_x_table()[start..start + p + 5]
    } else {
        &F::ordinary_x_table()[..p.min(F::MAX_P) + 5]
    };

    // The first entry at or above `bits`, or one past the end.
    let index = row.partition_point(|&entry| entry < bits);
    index as i32 - 5
}

/// Whether `%g` with precision `p` writes a value of exponent `x` in fixed
/// notation.
#[inline]
pub(crate) fn use_fixed(p: usize, x: i32) -> bool {
    x >= -4 && (x as i64) < p as i64
}
