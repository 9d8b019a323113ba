// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move-out operations.
//!
//! A plain Rust move transfers the whole array and makes the source
//! unusable. The operations here move the *elements* out instead, leaving a
//! `T::default()` placeholder in each source slot so the source array stays
//! fully initialized and reusable.

// Crate imports
use crate::array::FixedArray;

// Core imports
use core::mem;

impl<T: Default, const N: usize> FixedArray<T, N> {
    /// Moves every element into a new array, leaving `T::default()` behind in
    /// each slot of `self`.
    ///
    /// # Examples
    /// ```
    /// # use fixed_stack_array::FixedArray;
    /// let mut a = FixedArray::from([1, 2, 3]);
    /// let b = a.take();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert_eq!(a, [0, 0, 0]);
    /// ```
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        trace_slot!("move {} slots out", N);
        Self::from_fn(|index| mem::take(&mut self.slots[index]))
    }

    /// Replaces every slot of `self` with the element moved out of the same
    /// slot of `other`, leaving `T::default()` behind in `other`.
    ///
    /// Each destination slot goes through [`replace`](Self::replace), so its
    /// previous element is dropped. Moving an array into itself is rejected
    /// by the borrow checker.
    #[inline]
    pub fn move_from(&mut self, other: &mut Self) {
        trace_slot!("move {} slots in", N);
        for (index, source) in other.slots.iter_mut().enumerate() {
            self.replace(index, mem::take(source));
        }
    }
}
