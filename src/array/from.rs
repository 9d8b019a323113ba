// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::FixedArray, error::Error};

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(slots: [T; N]) -> Self {
        Self { slots }
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for FixedArray<T, N> {
    fn from(src: &[T; N]) -> Self {
        Self::from_fn(|i| src[i].clone())
    }
}

impl<T, const N: usize> From<FixedArray<T, N>> for [T; N] {
    fn from(array: FixedArray<T, N>) -> Self {
        array.slots
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = Error;

    /// Clones `src` into a new array.
    ///
    /// Returns [`Error::InvalidLen`] unless `src.len() == N`.
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        if src.len() != N {
            return Err(Error::InvalidLen);
        }
        Ok(Self::from_fn(|i| src[i].clone()))
    }
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Unwraps the backing `[T; N]`.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.slots
    }
}

impl<T: Default, const N: usize> FixedArray<T, N> {
    /// Tries to construct from an iterator that yields exactly `N` items.
    ///
    /// Semantics:
    /// - Items fill slots `0..N` in iterator order.
    /// - Fewer than `N` items, or more than `N`, returns
    ///   `Err(Error::InvalidLen)`; the partially built array is dropped.
    /// - At most `N + 1` items are pulled from the source iterator.
    ///
    /// Storage is default-initialized first and each item then replaces its
    /// slot, so `T: Default` is required.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut out = Self::new();
        let mut iter = iter.into_iter();
        for index in 0..N {
            let item = iter.next().ok_or(Error::InvalidLen)?;
            out.replace(index, item);
        }
        if iter.next().is_some() {
            return Err(Error::InvalidLen);
        }
        Ok(out)
    }
}
