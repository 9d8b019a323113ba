// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::FixedArray;

impl<T: Default, const N: usize> FixedArray<T, N> {
    /// Constructs an array with every slot set to `T::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Constructs an array whose slot `i` holds `f(i)`.
    ///
    /// `f` is called once per slot, in index order.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self {
            slots: core::array::from_fn(f),
        }
    }
}

impl<T: Clone, const N: usize> FixedArray<T, N> {
    /// Constructs an array with every slot holding a clone of `value`.
    ///
    /// Each slot is constructed directly from `value`; no default element is
    /// built first, so `T` does not need to implement `Default`.
    #[inline]
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}
