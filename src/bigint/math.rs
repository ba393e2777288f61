//! Fixed-capacity arithmetic on little-endian limb buffers.
//!
//! Index 0 holds the least significant limb. Buffers are kept normalized,
//! with no zero limb at the top, so zero is the empty buffer.

use super::slice::*;
use crate::lib::{cmp, iter, mem};
use crate::num::*;
use crate::tables::pow5::{get_power, MAX_POWER};
use crate::tables::small_powers::*;

// LIMBS
// -----

// `build.rs` picks 64-bit limbs where the target has a native
// 64x64->128 multiply, and 32-bit limbs elsewhere.

#[cfg(limb_width_32)]
pub(crate) type Limb = u32;

#[cfg(limb_width_32)]
pub(crate) const POW10_LIMB: &[Limb] = &POW10_32;

#[cfg(limb_width_32)]
type Wide = u64;

#[cfg(limb_width_64)]
pub(crate) type Limb = u64;

#[cfg(limb_width_64)]
pub(crate) const POW10_LIMB: &[Limb] = &POW10_64;

#[cfg(limb_width_64)]
type Wide = u128;

const LIMB_BITS: usize = mem::size_of::<Limb>() * 8;

// The widest value is the exact scaled input of the formatter or parser,
// under 4096 bits.
#[cfg(limb_width_32)]
pub(crate) type LimbVecType = arrayvec::ArrayVec<Limb, 128>;

#[cfg(limb_width_64)]
pub(crate) type LimbVecType = arrayvec::ArrayVec<Limb, 64>;

#[inline(always)]
pub(crate) fn as_limb<T: Integer>(t: T) -> Limb {
    Limb::as_cast(t)
}

#[inline(always)]
fn as_wide<T: Integer>(t: T) -> Wide {
    Wide::as_cast(t)
}

/// `x` as limbs, least significant first.
#[inline]
#[cfg(limb_width_32)]
fn split_u64(x: u64) -> [Limb; 2] {
    [as_limb(x), as_limb(x >> 32)]
}

/// `x` as limbs, least significant first.
#[inline]
#[cfg(limb_width_64)]
fn split_u64(x: u64) -> [Limb; 1] {
    [x]
}

/// Repack little-endian 32-bit words as limbs.
#[inline]
#[cfg(limb_width_32)]
pub(crate) fn from_u32(x: &[u32]) -> LimbVecType {
    x.iter().copied().collect()
}

/// Repack little-endian 32-bit words as limbs.
#[inline]
#[cfg(limb_width_64)]
pub(crate) fn from_u32(x: &[u32]) -> LimbVecType {
    x.chunks(2)
        .map(|pair| match *pair {
            [lo, hi] => (u64::from(hi) << 32) | u64::from(lo),
            [lo] => u64::from(lo),
            _ => 0,
        })
        .collect()
}

/// The 64 most significant bits of `x`, left-aligned, and whether any bit
/// below them is set.
fn hi64(x: &[Limb]) -> (u64, bool) {
    debug_assert!(x.last() != Some(&0));
    // The top 128 bits always hold 64 significant ones below the leading
    // limb's zeros.
    let rview = x.rview();
    let take = x.len().min(128 / LIMB_BITS);
    let mut window: u128 = 0;
    for i in 0..take {
        window = (window << LIMB_BITS) | u128::from(rview[i]);
    }
    if window == 0 {
        return (0, false);
    }
    let aligned = window << window.leading_zeros();
    let rest = &x[..x.len() - take];
    let truncated = aligned as u64 != 0 || rest.iter().any(|&limb| limb != 0);
    ((aligned >> 64) as u64, truncated)
}

/// Resize the buffer, padding with `value`.
#[inline]
fn resize(vec: &mut LimbVecType, len: usize, value: Limb) {
    debug_assert!(len <= vec.capacity());
    if len > vec.len() {
        let extra = len - vec.len();
        vec.extend(iter::repeat(value).take(extra));
    } else {
        vec.truncate(len);
    }
}

// SCALAR
// ------

mod scalar {
    use super::*;

    /// `x * y + carry` as (low, high). The wide type holds the largest
    /// result, `(2^n - 1)^2 + 2^n - 1`.
    #[inline]
    pub fn mul_add(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        let z = as_wide(x) * as_wide(y) + as_wide(carry);
        (as_limb(z), as_limb(z >> LIMB_BITS))
    }

    /// `rem:x / y` as (quotient, remainder). `rem < y` keeps the quotient
    /// in one limb.
    #[inline]
    pub fn div_rem(x: Limb, y: Limb, rem: Limb) -> (Limb, Limb) {
        debug_assert!(rem < y);
        let z = (as_wide(rem) << LIMB_BITS) | as_wide(x);
        let y = as_wide(y);
        (as_limb(z / y), as_limb(z % y))
    }
} // scalar

// SMALL
// -----

// A big integer combined with a single limb.

mod small {
    use super::*;

    /// Add `y` at limb `start`, carrying upward.
    pub fn iadd_at(x: &mut LimbVecType, y: Limb, start: usize) {
        if x.len() <= start {
            if y != 0 {
                resize(x, start, 0);
                x.push(y);
            }
            return;
        }
        let mut carry = y;
        for xi in &mut x[start..] {
            let (sum, overflow) = xi.overflowing_add(carry);
            *xi = sum;
            if !overflow {
                return;
            }
            carry = 1;
        }
        x.push(1);
    }

    #[inline]
    pub fn iadd(x: &mut LimbVecType, y: Limb) {
        iadd_at(x, y, 0);
    }

    /// Subtract `y` at limb `start`, borrowing upward. The result must not
    /// be negative.
    pub fn isub_at(x: &mut LimbVecType, y: Limb, start: usize) {
        debug_assert!(x.len() > start && (x[start] >= y || x.len() > start + 1));
        let mut borrow = y;
        for xi in &mut x[start..] {
            let (diff, underflow) = xi.overflowing_sub(borrow);
            *xi = diff;
            if !underflow {
                break;
            }
            borrow = 1;
        }
        normalize(x);
    }

    pub fn imul(x: &mut LimbVecType, y: Limb) {
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            let (lo, hi) = scalar::mul_add(*xi, y, carry);
            *xi = lo;
            carry = hi;
        }
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Multiply by `5^n` from the table, in steps of at most `MAX_POWER`.
    pub fn imul_pow5(x: &mut LimbVecType, mut n: u32) {
        while n != 0 {
            let step = n.min(MAX_POWER);
            if let Some(power) = get_power(step) {
                if !power.large.is_empty() {
                    large::imul(x, &from_u32(power.large));
                }
                if power.small != 1 {
                    imul(x, as_limb(power.small));
                }
            }
            n -= step;
        }
    }

    /// Divide in place by `y`, returning the remainder.
    pub fn idiv(x: &mut LimbVecType, y: Limb) -> Limb {
        debug_assert!(y != 0);
        let mut rem: Limb = 0;
        for xi in x.iter_mut().rev() {
            let (quotient, r) = scalar::div_rem(*xi, y, rem);
            *xi = quotient;
            rem = r;
        }
        normalize(x);
        rem
    }

    #[inline]
    pub fn leading_zeros(x: &[Limb]) -> usize {
        if x.is_empty() {
            0
        } else {
            x.rindex(0).leading_zeros().as_usize()
        }
    }

    #[inline]
    pub fn bit_length(x: &[Limb]) -> usize {
        LIMB_BITS * x.len() - leading_zeros(x)
    }

    /// Shift left by fewer bits than a limb holds.
    pub fn ishl_bits(x: &mut LimbVecType, n: usize) {
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            let out = *xi >> (LIMB_BITS - n);
            *xi = (*xi << n) | carry;
            carry = out;
        }
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Shift left by whole limbs.
    pub fn ishl_limbs(x: &mut LimbVecType, n: usize) {
        if n == 0 || x.is_empty() {
            return;
        }
        let len = x.len();
        resize(x, len + n, 0);
        x.copy_within(..len, n);
        x[..n].fill(0);
    }

    #[inline]
    pub fn ishl(x: &mut LimbVecType, n: usize) {
        ishl_bits(x, n % LIMB_BITS);
        ishl_limbs(x, n / LIMB_BITS);
    }

    /// Drop zero limbs from the top.
    #[inline]
    pub fn normalize(x: &mut LimbVecType) {
        while x.last() == Some(&0) {
            x.pop();
        }
    }
} // small

// LARGE
// -----

// Two big integers.

mod large {
    use super::*;

    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        // Both sides are normalized, so more limbs means a larger value.
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }

    /// Add `y` shifted up by `start` limbs.
    pub fn iadd_at(x: &mut LimbVecType, y: &[Limb], start: usize) {
        let end = start + y.len();
        if x.len() < end {
            resize(x, end, 0);
        }
        let mut carry = false;
        for (xi, &yi) in x[start..].iter_mut().zip(y) {
            let (sum, c1) = xi.overflowing_add(yi);
            let (sum, c2) = sum.overflowing_add(Limb::from(carry));
            *xi = sum;
            carry = c1 || c2;
        }
        if carry {
            small::iadd_at(x, 1, end);
        }
    }

    #[inline]
    pub fn iadd(x: &mut LimbVecType, y: &[Limb]) {
        iadd_at(x, y, 0);
    }

    /// Subtract `y`, which must not exceed `x`.
    pub fn isub(x: &mut LimbVecType, y: &[Limb]) {
        debug_assert!(compare(x, y) != cmp::Ordering::Less);
        let mut borrow = false;
        for (xi, &yi) in x.iter_mut().zip(y) {
            let (diff, b1) = xi.overflowing_sub(yi);
            let (diff, b2) = diff.overflowing_sub(Limb::from(borrow));
            *xi = diff;
            borrow = b1 || b2;
        }
        if borrow {
            small::isub_at(x, 1, y.len());
        } else {
            small::normalize(x);
        }
    }

    /// Schoolbook product. Operands stay small enough that nothing
    /// subquadratic would pay off.
    fn long_mul(x: &[Limb], y: &[Limb]) -> LimbVecType {
        let mut z = LimbVecType::new();
        resize(&mut z, x.len() + y.len(), 0);
        for (j, &yj) in y.iter().enumerate() {
            let mut carry: Limb = 0;
            for (i, &xi) in x.iter().enumerate() {
                // `xi * yj + z + carry` fits in two limbs.
                let w = as_wide(xi) * as_wide(yj) + as_wide(z[i + j]) + as_wide(carry);
                z[i + j] = as_limb(w);
                carry = as_limb(w >> LIMB_BITS);
            }
            z[j + x.len()] = carry;
        }
        small::normalize(&mut z);
        z
    }

    pub fn imul(x: &mut LimbVecType, y: &[Limb]) {
        match y.len() {
            0 => x.clear(),
            1 => small::imul(x, y[0]),
            _ if x.is_empty() => {}
            _ => *x = long_mul(x, y),
        }
    }
} // large

// TRAITS
// ------

/// Big-integer operations over any type that owns a limb buffer.
///
/// These are methods rather than operator impls so each costly step is
/// spelled out at the call site.
pub(crate) trait Math: Clone + Sized + Default {
    fn data(&self) -> &LimbVecType;

    fn data_mut(&mut self) -> &mut LimbVecType;

    #[inline]
    fn compare(&self, y: &Self) -> cmp::Ordering {
        large::compare(self.data(), y.data())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.data().is_empty()
    }

    /// The high 64 bits, left-aligned, and whether lower bits were dropped.
    #[inline]
    fn hi64(&self) -> (u64, bool) {
        hi64(self.data())
    }

    #[inline]
    fn bit_length(&self) -> usize {
        small::bit_length(self.data())
    }

    fn from_u64(x: u64) -> Self {
        let mut v = Self::default();
        v.data_mut().extend(split_u64(x));
        v.normalize();
        v
    }

    #[inline]
    fn normalize(&mut self) {
        small::normalize(self.data_mut());
    }

    #[inline]
    fn iadd_small(&mut self, y: Limb) {
        small::iadd(self.data_mut(), y);
    }

    #[inline]
    fn iadd(&mut self, y: &Self) {
        large::iadd(self.data_mut(), y.data());
    }

    /// `y` must not exceed `self`.
    #[inline]
    fn isub(&mut self, y: &Self) {
        large::isub(self.data_mut(), y.data());
    }

    #[inline]
    fn imul_small(&mut self, y: Limb) {
        small::imul(self.data_mut(), y);
    }

    #[inline]
    fn imul_pow2(&mut self, n: u32) {
        self.ishl(n.as_usize())
    }

    #[inline]
    fn imul_pow5(&mut self, n: u32) {
        small::imul_pow5(self.data_mut(), n)
    }

    #[inline]
    fn imul_pow10(&mut self, n: u32) {
        self.imul_pow5(n);
        self.imul_pow2(n);
    }

    /// Divide by `y`, returning the remainder.
    #[inline]
    fn idiv_small(&mut self, y: Limb) -> Limb {
        small::idiv(self.data_mut(), y)
    }

    #[inline]
    fn ishl(&mut self, n: usize) {
        small::ishl(self.data_mut(), n);
    }
}

// TESTS
// -----
