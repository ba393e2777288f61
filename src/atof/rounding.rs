//! Defines rounding schemes for floating-point numbers.

use super::float::ExtendedFloat;
use super::shift::*;
use crate::num::*;

// MASKS

/// Calculate a scalar factor of 2 above the halfway point.
#[inline]
fn nth_bit(n: u64) -> u64 {
    debug_assert!(n < 64, "nth_bit() overflow in shl.");

    1 << n
}

/// Generate a bitwise mask for the lower `n` bits.
#[inline]
pub(crate) fn lower_n_mask(n: u64) -> u64 {
    debug_assert!(n <= 64, "lower_n_mask() overflow in shl.");

    match n == 64 {
        true => u64::MAX,
        false => (1 << n) - 1,
    }
}

/// Calculate the halfway point for the lower `n` bits.
#[inline]
pub(crate) fn lower_n_halfway(n: u64) -> u64 {
    debug_assert!(n <= 64, "lower_n_halfway() overflow in shl.");

    match n == 0 {
        true => 0,
        false => nth_bit(n - 1),
    }
}

/// Calculate a bitwise mask with `n` 1 bits starting at the `bit` position.
#[inline]
fn internal_n_mask(bit: u64, n: u64) -> u64 {
    debug_assert!(bit <= 64, "internal_n_mask() overflow in shl.");
    debug_assert!(bit >= n, "internal_n_mask() overflow in sub.");

    lower_n_mask(bit) ^ lower_n_mask(bit - n)
}

// NEAREST ROUNDING

/// Shift right `shift` bits and report where the dropped bits fell.
///
/// Returns if we are above halfway and if we are exactly halfway.
#[inline]
pub(crate) fn round_nearest(fp: &mut ExtendedFloat, shift: i32) -> (bool, bool) {
    // For example, for 4 truncated bits, the mask would be b1111
    // and the midway point would be b1000.
    let mask = lower_n_mask(shift as u64);
    let halfway = lower_n_halfway(shift as u64);

    let truncated_bits = fp.mant & mask;
    let is_above = truncated_bits > halfway;
    let is_halfway = truncated_bits == halfway;

    // Bit shift so the leading bit is in the hidden bit.
    overflowing_shr(fp, shift);

    (is_above, is_halfway)
}

/// Tie rounded floating point to even.
#[inline]
pub(crate) fn tie_even(fp: &mut ExtendedFloat, is_above: bool, is_halfway: bool) {
    // Round up when above halfway, or odd and exactly halfway.
    let is_odd = fp.mant & 1 == 1;
    if is_above || (is_odd && is_halfway) {
        fp.mant += 1;
    }
}

/// Shift right `shift` bits and round nearest, tie-to-even.
#[inline]
pub(crate) fn round_nearest_tie_even(fp: &mut ExtendedFloat, shift: i32) {
    let (is_above, is_halfway) = round_nearest(fp, shift);
    tie_even(fp, is_above, is_halfway);
}

// DIRECTED ROUNDING

/// Shift right `shift` bits and truncate, giving the value at or below the
/// extended float.
#[inline]
pub(crate) fn round_downward(fp: &mut ExtendedFloat, shift: i32) {
    overflowing_shr(fp, shift);
}

// ROUND TO FLOAT

/// Shift the ExtendedFloat fraction to the fraction bits in a native float.
///
/// Handles the denormal range in a single shift, and renormalizes when
/// rounding carries past the hidden bit.
#[inline]
fn round_to_float<F, Algorithm>(fp: &mut ExtendedFloat, algorithm: Algorithm)
where
    F: Float,
    Algorithm: FnOnce(&mut ExtendedFloat, i32),
{
    let final_exp = fp.exp + F::DEFAULT_SHIFT;
    if final_exp < F::DENORMAL_EXPONENT {
        // We would end up with a denormal exponent, try to round to more
        // digits. Only shift right if we can avoid zeroing out the value,
        // which requires the exponent diff to be <= 64.
        let diff = F::DENORMAL_EXPONENT - fp.exp;
        if diff <= u64::FULL {
            algorithm(fp, diff);
        } else {
            // Certain underflow, assign literal 0s.
            fp.mant = 0;
            fp.exp = 0;
        }
    } else {
        algorithm(fp, F::DEFAULT_SHIFT);
    }

    if fp.mant & F::CARRY_MASK == F::CARRY_MASK {
        // Roundup carried over to 1 past the hidden bit.
        shr(fp, 1);
    }
}

// AVOID OVERFLOW/UNDERFLOW

/// Shift left until a 1-bit is in the hidden bit, when the exponent is at
/// or past the maximum and such a shift can bring it back in range.
#[inline]
fn avoid_overflow<F>(fp: &mut ExtendedFloat)
where
    F: Float,
{
    if fp.exp >= F::MAX_EXPONENT {
        let diff = fp.exp - F::MAX_EXPONENT;
        if diff <= F::MANTISSA_SIZE {
            // The mask starts at the hidden bit and spans `diff+1` bits.
            let bit = (F::MANTISSA_SIZE + 1) as u64;
            let n = (diff + 1) as u64;
            let mask = internal_n_mask(bit, n);
            if (fp.mant & mask) == 0 {
                let shift = diff + 1;
                shl(fp, shift);
            }
        }
    }
}

// ROUND TO NATIVE

/// Round an extended-precision float to a native float representation.
#[inline]
pub(crate) fn round_to_native<F, Algorithm>(fp: &mut ExtendedFloat, algorithm: Algorithm)
where
    F: Float,
    Algorithm: FnOnce(&mut ExtendedFloat, i32),
{
    // The following right-shifts do not work for a non-normalized number.
    fp.normalize();

    round_to_float::<F, _>(fp, algorithm);
    avoid_overflow::<F>(fp);
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_test() {
        assert_eq!(lower_n_mask(0), 0b0);
        assert_eq!(lower_n_mask(10), 0b1111111111);
        assert_eq!(lower_n_mask(64), u64::MAX);
        assert_eq!(lower_n_halfway(0), 0b0);
        assert_eq!(lower_n_halfway(10), 0b1000000000);
        assert_eq!(nth_bit(31), 0x80000000);
        assert_eq!(internal_n_mask(4, 2), 0b1100);
        assert_eq!(internal_n_mask(10, 4), 0b1111000000);
    }

    #[test]
    fn round_nearest_test() {
        // Exactly halfway (b'1100000')
        let mut fp = ExtendedFloat { mant: 0x60, exp: 0 };
        assert_eq!(round_nearest(&mut fp, 6), (false, true));
        assert_eq!(fp.mant, 1);

        // Above halfway (b'1100001')
        let mut fp = ExtendedFloat { mant: 0x61, exp: 0 };
        assert_eq!(round_nearest(&mut fp, 6), (true, false));

        // Below halfway (b'1011111')
        let mut fp = ExtendedFloat { mant: 0x5F, exp: 0 };
        assert_eq!(round_nearest(&mut fp, 6), (false, false));
    }

    #[test]
    fn round_nearest_tie_even_test() {
        // Halfway, odd rounds up.
        let mut fp = ExtendedFloat { mant: 0x60, exp: 0 };
        round_nearest_tie_even(&mut fp, 6);
        assert_eq!(fp.mant, 2);

        // Halfway, even stays.
        let mut fp = ExtendedFloat { mant: 0x20, exp: 0 };
        round_nearest_tie_even(&mut fp, 6);
        assert_eq!(fp.mant, 0);

        let mut fp = ExtendedFloat { mant: 0x21, exp: 0 };
        round_nearest_tie_even(&mut fp, 6);
        assert_eq!(fp.mant, 1);

        let mut fp = ExtendedFloat { mant: 0x1F, exp: 0 };
        round_nearest_tie_even(&mut fp, 6);
        assert_eq!(fp.mant, 0);
    }

    #[test]
    fn round_downward_test() {
        for &mant in &[0x40, 0x60, 0x7F] {
            let mut fp = ExtendedFloat { mant, exp: 0 };
            round_downward(&mut fp, 6);
            assert_eq!(fp, ExtendedFloat { mant: 1, exp: 6 });
        }
    }

    #[test]
    fn round_to_native_test() {
        // 1.0
        let mut fp = ExtendedFloat { mant: 1 << 63, exp: -63 };
        round_to_native::<f64, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp, ExtendedFloat { mant: 1 << 52, exp: -52 });

        // Smallest f64 subnormal.
        let mut fp = ExtendedFloat { mant: 1 << 63, exp: -1137 };
        round_to_native::<f64, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp, ExtendedFloat { mant: 1, exp: -1074 });

        // Half of it rounds to even, which is zero.
        let mut fp = ExtendedFloat { mant: 1 << 63, exp: -1138 };
        round_to_native::<f64, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp, ExtendedFloat { mant: 0, exp: -1074 });

        // Carry into a new binade.
        let mut fp = ExtendedFloat { mant: u64::MAX, exp: 0 };
        round_to_native::<f32, _>(&mut fp, round_nearest_tie_even);
        assert_eq!(fp, ExtendedFloat { mant: 1 << 23, exp: 41 });
    }
}
