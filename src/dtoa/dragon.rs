//! Almost direct (but slightly optimized) Rust translation of Figure 3 of "Printing
//! Floating-Point Numbers Quickly and Accurately"[^1].
//!
//! [^1]: Burger, R. G. and Dybvig, R. K. 1996. Printing floating-point numbers
//!   quickly and accurately. SIGPLAN Not. 31, 5 (May. 1996), 108-116.

use super::decode::Decoded;
use crate::bigint::{Bigint, Math, POW10_LIMB};
use crate::lib::cmp::Ordering;
use alloc::vec::Vec;

/// The longest digit sequence the shortest mode can need.
const MAX_SIG_DIGITS: usize = 17;

/// Returns `k` such that `10^(k-1) < mant * 2^exp <= 10^(k+1)`, off by at most one.
///
/// `mant` must be nonzero.
pub(crate) fn estimate_scaling_factor(mant: u64, exp: i32) -> i32 {
    // 2^(nbits-1) < mant <= 2^nbits if mant > 0
    let nbits = 64 - (mant - 1).leading_zeros() as i64;
    // 1292913986 = floor(2^32 * log_10 2)
    // therefore this always underestimates (or is exact), but not much.
    (((nbits + exp as i64) * 1292913986) >> 32) as i32
}

/// Upper bound on the significant digits needed to write `mant * 2^exp` exactly.
pub(crate) fn estimate_max_buf_len(exp: i32) -> usize {
    21 + ((if exp < 0 { -12 } else { 5 } * exp as i64) as usize >> 4)
}

/// `x / (2 * 10^n)`, dropping the remainder.
fn div_2pow10(x: &mut Bigint, mut n: usize) {
    let largest = POW10_LIMB.len() - 2;
    while n > largest {
        x.idiv_small(POW10_LIMB[largest]);
        n -= largest;
    }
    x.idiv_small(POW10_LIMB[n] << 1);
}

/// Scale `mant * 2^exp` to `mant / scale`.
fn scaled(mant: u64, exp: i32) -> (Bigint, Bigint) {
    let mut mant = Bigint::from_u64(mant);
    let mut scale = Bigint::from_u64(1);
    if exp < 0 {
        scale.imul_pow2(exp.unsigned_abs());
    } else {
        mant.imul_pow2(exp as u32);
    }
    (mant, scale)
}

/// Subtract the largest multiple of `scale` below 10 from `x`, returning it.
///
/// `x` must be below `10 * scale`.
fn div_rem_upto_16(
    x: &mut Bigint,
    scale: &Bigint,
    scale2: &Bigint,
    scale4: &Bigint,
    scale8: &Bigint,
) -> u8 {
    let mut d = 0;
    for (multiple, weight) in [(scale8, 8), (scale4, 4), (scale2, 2), (scale, 1)] {
        if x.compare(multiple) != Ordering::Less {
            x.isub(multiple);
            d += weight;
        }
    }
    debug_assert!(x.compare(scale) == Ordering::Less);
    d
}

/// Add one to the last digit, carrying through nines.
///
/// Returns the digit to append when every digit was a nine, in which case
/// the buffer now reads `100..`.
pub(crate) fn round_up(d: &mut [u8]) -> Option<u8> {
    match d.iter().rposition(|&c| c != b'9') {
        Some(i) => {
            // d[i+1..n] is all nines
            d[i] += 1;
            for c in &mut d[i + 1..] {
                *c = b'0';
            }
            None
        }
        None if !d.is_empty() => {
            // 999..999 rounds to 1000..000 with an increased exponent
            d[0] = b'1';
            for c in &mut d[1..] {
                *c = b'0';
            }
            Some(b'0')
        }
        // an empty buffer rounds up (a bit strange but reasonable)
        None => Some(b'1'),
    }
}

/// The shortest mode implementation for Dragon.
///
/// Returns the digits and `k` with the value `0.digits * 10^k`. Trailing
/// zeros are removed.
pub(crate) fn format_shortest(d: &Decoded) -> (Vec<u8>, i32) {
    // the number `v` to format is known to be:
    // - equal to `mant * 2^exp`;
    // - preceded by `(mant - 2 * minus) * 2^exp` in the original type; and
    // - followed by `(mant + 2 * plus) * 2^exp` in the original type.
    //
    // obviously, `minus` and `plus` cannot be zero. (for infinities, we use out-of-range values.)
    // also we assume that at least one digit is generated, i.e., `mant` cannot be zero too.
    //
    // this also means that any number between `low = (mant - minus) * 2^exp` and
    // `high = (mant + plus) * 2^exp` will map to this exact floating point number,
    // with bounds included when the original mantissa was even (i.e., `!mant_was_odd`).
    debug_assert!(d.mant > 0);
    debug_assert!(d.minus > 0);
    debug_assert!(d.plus > 0);
    debug_assert!(d.mant.checked_add(d.plus).is_some());
    debug_assert!(d.mant.checked_sub(d.minus).is_some());

    // `a.cmp(&b) < rounding` is `if d.inclusive {a <= b} else {a < b}`
    let rounding = if d.inclusive {
        Ordering::Greater
    } else {
        Ordering::Equal
    };

    // estimate `k_0` from original inputs satisfying `10^(k_0-1) < high <= 10^(k_0+1)`.
    // the tight bound `k` satisfying `10^(k-1) < high <= 10^k` is calculated later.
    let mut k = estimate_scaling_factor(d.mant + d.plus, d.exp);

    // convert `{mant, plus, minus} * 2^exp` into the fractional form so that:
    // - `v = mant / scale`
    // - `low = (mant - minus) / scale`
    // - `high = (mant + plus) / scale`
    let (mut mant, mut scale) = scaled(d.mant, d.exp);
    let (mut minus, _) = scaled(d.minus, d.exp);
    let (mut plus, _) = scaled(d.plus, d.exp);

    // divide `mant` by `10^k`. now `scale / 10 < mant + plus <= scale * 10`.
    if k >= 0 {
        scale.imul_pow10(k as u32);
    } else {
        let n = k.unsigned_abs();
        mant.imul_pow10(n);
        minus.imul_pow10(n);
        plus.imul_pow10(n);
    }

    // fixup when `mant + plus > scale` (or `>=`).
    // we are not actually modifying `scale`, since we can skip the initial multiplication instead.
    // now `scale < mant + plus <= scale * 10` and we are ready to generate digits.
    //
    // note that `d[0]` *can* be zero, when `scale - plus < mant < scale`.
    // in this case rounding-up condition (`up` below) will be triggered immediately.
    if scale.compare(&mant.add(&plus)) < rounding {
        // equivalent to scaling `scale` by 10
        k += 1;
    } else {
        mant.imul_small(10);
        minus.imul_small(10);
        plus.imul_small(10);
    }

    // cache `(2, 4, 8) * scale` for digit generation.
    let scale2 = scale.mul_pow2(1);
    let scale4 = scale.mul_pow2(2);
    let scale8 = scale.mul_pow2(3);

    let mut buf = [0u8; MAX_SIG_DIGITS];
    let mut down;
    let mut up;
    let mut i = 0;
    loop {
        // invariants, where `d[0..n-1]` are digits generated so far:
        // - `v = mant / scale * 10^(k-n-1) + d[0..n-1] * 10^(k-n)`
        // - `v - low = minus / scale * 10^(k-n-1)`
        // - `high - v = plus / scale * 10^(k-n-1)`
        // - `(mant + plus) / scale <= 10` (thus `mant / scale < 10`)
        // where `d[i..j]` is a shorthand for `d[i] * 10^(j-i) + ... + d[j-1] * 10 + d[j]`.

        // generate one digit: `d[n] = floor(mant / scale) < 10`.
        let digit = div_rem_upto_16(&mut mant, &scale, &scale2, &scale4, &scale8);
        debug_assert!(digit < 10);
        buf[i] = b'0' + digit;
        i += 1;

        // this is a simplified description of the modified Dragon algorithm.
        // many intermediate derivations and completeness arguments are omitted for convenience.
        //
        // start with modified invariants, as we've updated `n`:
        // - `v = mant / scale * 10^(k-n) + d[0..n-1] * 10^(k-n)`
        // - `v - low = minus / scale * 10^(k-n)`
        // - `high - v = plus / scale * 10^(k-n)`
        //
        // assume that `d[0..n-1]` is the shortest representation between `low` and `high`,
        // i.e., `d[0..n-1]` satisfies both of the following but `d[0..n-2]` doesn't:
        // - `low < d[0..n-1] * 10^(k-n) < high` (bijectivity: digits round to `v`); and
        // - `abs(v / 10^(k-n) - d[0..n-1]) <= 1/2` (the last digit is correct).
        //
        // the second condition simplifies to `2 * mant <= scale`.
        // solving invariants in terms of `mant`, `low` and `high` yields
        // a simpler version of the first condition: `-plus < mant < minus`.
        // since `-plus < 0 <= mant`, we have the correct shortest representation
        // when `mant < minus` and `2 * mant <= scale`.
        // (the former becomes `mant <= minus` when the original mantissa is even.)
        //
        // when the second doesn't hold (`2 * mant > scale`), we need to increase the last digit.
        // this is enough for restoring that condition: we already know that
        // the digit generation guarantees `0 <= v / 10^(k-n) - d[0..n-1] < 1`.
        // in this case, the first condition becomes `-plus < mant - scale < minus`.
        // since `mant < scale` after the generation, we have `scale < mant + plus`.
        // (again, this becomes `scale <= mant + plus` when the original mantissa is even.)
        //
        // in short:
        // - stop and round `down` (keep digits as is) when `mant < minus` (or `<=`).
        // - stop and round `up` (increase the last digit) when `scale < mant + plus` (or `<=`).
        // - keep generating otherwise.
        down = mant.compare(&minus) < rounding;
        up = scale.compare(&mant.add(&plus)) < rounding;
        if down || up || i == MAX_SIG_DIGITS {
            break;
        } // we have the shortest representation, proceed to the rounding

        // restore the invariants.
        // this makes the algorithm always terminating: `minus` and `plus` always increases,
        // but `mant` is clipped modulo `scale` and `scale` is fixed.
        mant.imul_small(10);
        minus.imul_small(10);
        plus.imul_small(10);
    }

    // when both roundings are possible, pick the nearer candidate.
    // an exact tie goes to the even digit.
    let round = match (down, up) {
        (_, false) => false,
        (false, true) => true,
        (true, true) => match mant.mul_pow2(1).compare(&scale) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => (buf[i - 1] - b'0') & 1 == 1,
        },
    };
    if round && round_up(&mut buf[..i]).is_some() {
        // the buffer now reads `100..`, one place higher.
        k += 1;
    }

    let mut digits = buf[..i].to_vec();
    while digits.len() > 1 && digits.last() == Some(&b'0') {
        digits.pop();
    }
    (digits, k)
}

/// The exact and fixed mode implementation for Dragon.
///
/// Writes at most `buflen` significant digits and no digit below `10^limit`,
/// rounding half to even. Returns the digits and `k` with the value
/// `0.digits * 10^k`. The digits are empty when the value rounds to zero
/// at `10^limit`.
pub(crate) fn format_exact(d: &Decoded, buflen: usize, limit: i32) -> (Vec<u8>, i32) {
    debug_assert!(d.mant > 0);
    debug_assert!(d.minus > 0);
    debug_assert!(d.plus > 0);
    debug_assert!(buflen > 0);

    // estimate `k_0` from original inputs satisfying `10^(k_0-1) < v < 10^(k_0+1)`.
    let mut k = estimate_scaling_factor(d.mant, d.exp);

    // `v = mant / scale`.
    let (mut mant, mut scale) = scaled(d.mant, d.exp);

    // divide `mant` by `10^k`. now `scale / 10 < mant <= scale * 10`.
    if k >= 0 {
        scale.imul_pow10(k as u32);
    } else {
        mant.imul_pow10(k.unsigned_abs());
    }

    // fixup when `mant + floor(plus) >= scale`, where `plus / scale = 10^-buflen / 2`.
    // in order to keep the fixed-size bignum, we actually use `mant + floor(plus) >= scale`.
    // we are not actually modifying `scale`, since we can skip the initial multiplication instead.
    // again with the shortest algorithm, `d[0]` can be zero but will be eventually rounded up.
    let mut plus = scale.clone();
    div_2pow10(&mut plus, buflen);
    if plus.add(&mant).compare(&scale) != Ordering::Less {
        // equivalent to scaling `scale` by 10
        k += 1;
    } else {
        mant.imul_small(10);
    }

    // if we are working with the last-digit limitation, we need to shorten the buffer
    // before the actual rendering in order to avoid double rounding.
    // note that we have to enlarge the buffer again when rounding up happens!
    let mut len = if k < limit {
        // oops, we cannot even produce *one* digit.
        // this is possible when, say, we've got something like 9.5 and it's being rounded to 10.
        // we return an empty buffer, with an exception of the later rounding-up case
        // which occurs when `k == limit` and has to produce exactly one digit.
        0
    } else {
        let room = i64::from(k) - i64::from(limit);
        if room < buflen as i64 {
            room as usize
        } else {
            buflen
        }
    };

    let mut buf = Vec::with_capacity(len + 1);
    if len > 0 {
        // cache `(2, 4, 8) * scale` for digit generation.
        // (this can be expensive, so do not calculate them when the buffer is empty.)
        let scale2 = scale.mul_pow2(1);
        let scale4 = scale.mul_pow2(2);
        let scale8 = scale.mul_pow2(3);

        for _ in 0..len {
            if mant.is_zero() {
                // following digits are all zeroes, we stop here
                // do *not* try to perform rounding! rather, fill remaining digits.
                buf.resize(len, b'0');
                return (buf, k);
            }

            let digit = div_rem_upto_16(&mut mant, &scale, &scale2, &scale4, &scale8);
            debug_assert!(digit < 10);
            buf.push(b'0' + digit);
            mant.imul_small(10);
        }
    }

    // rounding up if we stop in the middle of digits
    // if the following digits are exactly 5000..., check the prior digit and try to
    // round to even (i.e., avoid rounding up when the prior digit is even).
    let mut scale5 = scale;
    scale5.imul_small(5);
    let order = mant.compare(&scale5);
    let odd = buf.last().map_or(false, |&c| (c - b'0') & 1 == 1);
    if order == Ordering::Greater || (order == Ordering::Equal && odd) {
        // if the rounding up changes the length, the exponent should also change.
        // but we've been requested a fixed number of digits, so do not alter the buffer...
        if let Some(c) = round_up(&mut buf) {
            // ...unless we've been requested the fixed precision instead.
            // we also need to check that, if the original buffer was empty,
            // the additional digit can only be added when `k == limit` (edge case).
            k += 1;
            if k > limit && len < buflen {
                buf.push(c);
                len += 1;
            }
        }
    }

    debug_assert_eq!(buf.len(), len);
    (buf, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtoa::decode::{decode, FullDecoded};
    use crate::num::Float;
    use alloc::string::String;

    fn decoded<F: Float>(v: F) -> Decoded {
        match decode(v).1 {
            FullDecoded::Finite(d) => d,
            other => panic!("not finite: {:?}", other),
        }
    }

    fn shortest<F: Float>(v: F) -> (String, i32) {
        let (digits, k) = format_shortest(&decoded(v));
        (String::from_utf8(digits).unwrap(), k)
    }

    fn exact<F: Float>(v: F, buflen: usize, limit: i32) -> (String, i32) {
        let (digits, k) = format_exact(&decoded(v), buflen, limit);
        (String::from_utf8(digits).unwrap(), k)
    }

    #[test]
    fn estimate_scaling_factor_test() {
        // the exact k satisfies 10^(k-1) < v <= 10^k; the estimate is k or k - 1.
        let cases: &[(u64, i32, i32)] = &[
            (1, 0, 0),
            (10, 0, 1),
            (11, 0, 2),
            (1 << 52, -52, 0),
            (999, 0, 3),
            (1000, 0, 3),
            (1001, 0, 4),
            (1, -1074, -323),
            (9007199254740991, 971, 309),
        ];
        for &(mant, exp, k) in cases {
            let estimate = estimate_scaling_factor(mant, exp);
            assert!(
                estimate == k || estimate == k - 1,
                "estimate {} for {} * 2^{} with k = {}",
                estimate,
                mant,
                exp,
                k
            );
        }
    }

    #[test]
    fn round_up_test() {
        let mut d = *b"129";
        assert_eq!(round_up(&mut d), None);
        assert_eq!(&d, b"130");
        let mut d = *b"999";
        assert_eq!(round_up(&mut d), Some(b'0'));
        assert_eq!(&d, b"100");
        assert_eq!(round_up(&mut []), Some(b'1'));
    }

    #[test]
    fn format_shortest_test() {
        assert_eq!(shortest(1.0f64), ("1".into(), 1));
        assert_eq!(shortest(0.1f64), ("1".into(), 0));
        assert_eq!(shortest(0.3f64), ("3".into(), 0));
        assert_eq!(shortest(123.456f64), ("123456".into(), 3));
        assert_eq!(shortest(1e23f64), ("1".into(), 24));
        assert_eq!(shortest(f64::MAX), ("17976931348623157".into(), 309));
        assert_eq!(shortest(f64::MIN_POSITIVE), ("22250738585072014".into(), -307));
        assert_eq!(shortest(f64::from_bits(1)), ("5".into(), -323));
        assert_eq!(shortest(0.1f32), ("1".into(), 0));
        assert_eq!(shortest(f32::MAX), ("34028235".into(), 39));
        assert_eq!(shortest(f32::from_bits(1)), ("1".into(), -44));
        assert_eq!(shortest(16777216.0f32), ("16777216".into(), 8));
    }

    #[test]
    fn format_shortest_tie_test() {
        // 2^-24 as f32 needs eight digits.
        assert_eq!(shortest(2f32.powi(-24)), ("59604645".into(), -7));
        // 2^53 prints all of its integer digits.
        assert_eq!(shortest(9007199254740992.0f64), ("9007199254740992".into(), 16));
    }

    #[test]
    fn format_exact_significant_test() {
        let none = i32::MIN;
        assert_eq!(exact(1.0f64, 3, none), ("100".into(), 1));
        assert_eq!(exact(0.1f64, 20, none), ("10000000000000000555".into(), 0));
        assert_eq!(exact(2.5f64, 1, none), ("2".into(), 1));
        assert_eq!(exact(3.5f64, 1, none), ("4".into(), 1));
        assert_eq!(exact(9.5f64, 1, none), ("1".into(), 2));
        assert_eq!(exact(0.125f64, 2, none), ("12".into(), 0));
        assert_eq!(exact(0.375f64, 2, none), ("38".into(), 0));
        assert_eq!(exact(f64::from_bits(1), 3, none), ("494".into(), -323));
    }

    #[test]
    fn format_exact_fixed_test() {
        // 1.5 at two fractional digits.
        assert_eq!(exact(1.5f64, 30, -2), ("150".into(), 1));
        // 0.05 at two fractional digits.
        assert_eq!(exact(0.05f64, 30, -2), ("5".into(), -1));
        // 0.006 rounds up into a new place.
        assert_eq!(exact(0.006f64, 30, -2), ("1".into(), -1));
        // 0.004 rounds to nothing.
        assert_eq!(exact(0.004f64, 30, -2).0, "");
        // 0.5 rounds to even at the units place.
        assert_eq!(exact(0.5f64, 30, 0).0, "");
        assert_eq!(exact(1.5f64, 30, 0), ("2".into(), 1));
        // exact integer digits of 1e23
        assert_eq!(
            exact(1e23f64, 40, 0),
            ("99999999999999991611392".into(), 23)
        );
    }

    #[test]
    fn estimate_max_buf_len_test() {
        // the longest exact expansions fit.
        assert!(estimate_max_buf_len(-1075) >= 767);
        assert!(estimate_max_buf_len(969) >= 309);
        assert!(estimate_max_buf_len(-150) >= 112);
    }
}
