//! Precomputed tables. All of them are immutable `static` data.

pub(crate) mod cached;
pub(crate) mod general;
pub(crate) mod pow5;
pub(crate) mod small_powers;
