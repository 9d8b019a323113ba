// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unchecked slot access, enabled by the `unsafe-unchecked` feature.
//!
//! These are the zero-overhead counterparts of indexing and
//! [`FixedArray::replace`]. Debug builds still assert the precondition.

// Crate imports
use crate::array::FixedArray;

impl<T, const N: usize> FixedArray<T, N> {
    /// Returns a reference to slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Calling this with `index >= N` is **undefined behavior**.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N, "index out of bounds");
        // SAFETY: the caller guarantees `index < N`.
        unsafe { self.slots.get_unchecked(index) }
    }

    /// Returns a mutable reference to slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Calling this with `index >= N` is **undefined behavior**.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "index out of bounds");
        // SAFETY: the caller guarantees `index < N`.
        unsafe { self.slots.get_unchecked_mut(index) }
    }

    /// Drops the element at `index` and moves `value` into its place,
    /// without bounds checking.
    ///
    /// # Safety
    ///
    /// Calling this with `index >= N` is **undefined behavior**.
    #[inline]
    pub unsafe fn replace_unchecked(&mut self, index: usize, value: T) {
        trace_slot!("replace slot {} of {} (unchecked)", index, N);
        // SAFETY: the caller guarantees `index < N`.
        let slot = unsafe { self.get_unchecked_mut(index) };
        *slot = value;
    }
}
