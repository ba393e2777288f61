//! Helpers to convert and add digits from characters.

/// Convert an ASCII digit to its value.
///
/// Callers pass bytes already validated as `b'0'..=b'9'`.
#[inline]
pub(crate) fn to_digit(c: u8) -> u32 {
    debug_assert!(c.is_ascii_digit());
    u32::from(c.wrapping_sub(b'0'))
}

/// Add digit to mantissa.
#[inline]
pub(crate) fn add_digit(value: u64, digit: u32) -> Option<u64> {
    value.checked_mul(10)?.checked_add(u64::from(digit))
}
