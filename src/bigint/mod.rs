//! Big integer type definition.
//!
//! A fixed-capacity, stack-allocated unsigned integer used by the digit
//! generator and by the exact comparison in the parser.

mod math;
mod slice;

pub(crate) use self::math::{Limb, Math, POW10_LIMB};

use self::math::LimbVecType;

/// Storage for a big integer type.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub(crate) struct Bigint {
    /// Internal storage for the Bigint, in little-endian order.
    pub(crate) data: LimbVecType,
}

impl Math for Bigint {
    #[inline]
    fn data(&self) -> &LimbVecType {
        &self.data
    }

    #[inline]
    fn data_mut(&mut self) -> &mut LimbVecType {
        &mut self.data
    }
}

impl Bigint {
    /// `self * 2^n` as a new value.
    #[inline]
    pub(crate) fn mul_pow2(&self, n: u32) -> Bigint {
        let mut x = self.clone();
        x.imul_pow2(n);
        x
    }

    /// `self + y` as a new value.
    #[inline]
    pub(crate) fn add(&self, y: &Bigint) -> Bigint {
        let mut x = self.clone();
        x.iadd(y);
        x
    }
}
