//! Bit-shift helpers.

use super::float::ExtendedFloat;
use crate::lib::mem;

const BITS: i32 = mem::size_of::<u64>() as i32 * 8;

/// Shift extended-precision float right `shift` bits.
#[inline]
pub(crate) fn shr(fp: &mut ExtendedFloat, shift: i32) {
    debug_assert!(shift < BITS, "shr() overflow in shift right.");

    fp.mant >>= shift;
    fp.exp += shift;
}

/// Shift extended-precision float right `shift` bits.
///
/// Accepts a shift equal to the type size, which zeroes the mantissa.
#[inline]
pub(crate) fn overflowing_shr(fp: &mut ExtendedFloat, shift: i32) {
    debug_assert!(shift <= BITS, "overflowing_shr() overflow in shift right.");

    fp.mant = match shift == BITS {
        true => 0,
        false => fp.mant >> shift,
    };
    fp.exp += shift;
}

/// Shift extended-precision float left `shift` bits.
#[inline]
pub(crate) fn shl(fp: &mut ExtendedFloat, shift: i32) {
    debug_assert!(shift < BITS, "shl() overflow in shift left.");

    fp.mant <<= shift;
    fp.exp -= shift;
}
