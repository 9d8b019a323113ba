// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The replace primitive.
//!
//! Every operation that changes what a slot holds (copy-assignment,
//! move-assignment, fill, single-slot replace) funnels through
//! [`FixedArray::replace_with`]: the new element is constructed first, then
//! the old element is dropped in place and the new one is moved into the
//! slot. A constructor that panics therefore leaves the slot holding its
//! previous, still-live element.

// Crate imports
use crate::{array::FixedArray, error::Error};

impl<T, const N: usize> FixedArray<T, N> {
    /// Drops the element at `index` and stores the element built by `make`.
    ///
    /// `make` runs before the old element is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`. The check happens before `make` is called.
    #[inline]
    pub fn replace_with<F: FnOnce() -> T>(&mut self, index: usize, make: F) {
        let slot = &mut self.slots[index];
        trace_slot!("replace slot {} of {}", index, N);
        *slot = make();
    }

    /// Drops the element at `index` and moves `value` into its place.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn replace(&mut self, index: usize, value: T) {
        self.replace_with(index, || value);
    }

    /// Checked variant of [`replace`](Self::replace).
    ///
    /// Returns [`Error::OutOfBounds`] when `index >= N`; the array is left
    /// unchanged and `value` is dropped.
    #[inline]
    pub fn try_replace(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index >= N {
            return Err(Error::OutOfBounds);
        }
        self.replace(index, value);
        Ok(())
    }

    /// Replaces every slot, in index order, with an element built by `make`.
    #[inline]
    pub fn fill_with<F: FnMut() -> T>(&mut self, mut make: F) {
        trace_slot!("fill {} slots", N);
        for index in 0..N {
            self.replace_with(index, &mut make);
        }
    }

    /// Replaces every slot with a clone of `value`.
    #[inline]
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.fill_with(|| value.clone());
    }
}
