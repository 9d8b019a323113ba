// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::FixedArray;

// Core imports
use core::mem;

impl<T, const N: usize> FixedArray<T, N> {
    /// Exchanges every element of `self` with the element in the same slot of
    /// `other`.
    ///
    /// Both sides already hold live elements, so this is a plain per-slot
    /// exchange: nothing is dropped or constructed.
    ///
    /// # Examples
    /// ```
    /// # use fixed_stack_array::FixedArray;
    /// let mut a = FixedArray::from([1, 2, 3]);
    /// let mut b = FixedArray::from([4, 5, 6]);
    /// a.swap(&mut b);
    /// assert_eq!(a, [4, 5, 6]);
    /// assert_eq!(b, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        trace_slot!("swap {} slots", N);
        for (mine, theirs) in self.slots.iter_mut().zip(other.slots.iter_mut()) {
            mem::swap(mine, theirs);
        }
    }

    /// Exchanges the elements in slots `a` and `b` of this array.
    ///
    /// # Panics
    ///
    /// Panics if `a >= N` or `b >= N`.
    #[inline]
    pub fn swap_slots(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }
}
