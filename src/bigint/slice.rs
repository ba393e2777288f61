//! Read-only views over little-endian limb buffers.

use crate::lib::ops;

/// Reverse, immutable view of a sequence.
///
/// Index 0 is the most significant limb.
pub(crate) struct ReverseView<'a, T: 'a> {
    inner: &'a [T],
}

impl<'a, T> ops::Index<usize> for ReverseView<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.inner[self.inner.len() - index - 1]
    }
}

/// Trait for generic slices.
pub(crate) trait Slice<T> {
    /// Get slice of immutable elements.
    fn as_slice(&self) -> &[T];

    /// Get the length of the collection.
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self.as_slice())
    }

    /// Get the element `index` places from the most significant end.
    #[inline]
    fn rindex(&self, index: usize) -> &T {
        &self.as_slice()[self.len() - index - 1]
    }

    /// Create a reverse view of the vector for indexing.
    #[inline]
    fn rview(&self) -> ReverseView<'_, T> {
        ReverseView {
            inner: self.as_slice(),
        }
    }
}

impl<T> Slice<T> for [T] {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rview_test() {
        let x: &[u32] = &[1, 2, 3];
        let rview = x.rview();
        assert_eq!(rview[0], 3);
        assert_eq!(rview[2], 1);
        assert_eq!(*x.rindex(0), 3);
        assert_eq!(*x.rindex(1), 2);
    }
}
