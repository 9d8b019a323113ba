// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedArray`](crate::FixedArray).
//!
//! `Index` and `IndexMut` behave exactly like they do on `[T; N]`:
//! - a single `usize` addresses one slot and panics when `index >= N`;
//! - every standard range form yields a sub-slice and panics when the range
//!   is inverted or reaches past `N`.

// Crate imports
use crate::array::FixedArray;

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}
impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

macro_rules! impl_range_index {
    ($($range:ty),+ $(,)?) => {
        $(
            impl<T, const N: usize> Index<$range> for FixedArray<T, N> {
                type Output = [T];
                fn index(&self, range: $range) -> &[T] {
                    &self.slots[range]
                }
            }
            impl<T, const N: usize> IndexMut<$range> for FixedArray<T, N> {
                fn index_mut(&mut self, range: $range) -> &mut [T] {
                    &mut self.slots[range]
                }
            }
        )+
    };
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>,
    RangeInclusive<usize>,
    RangeFull,
);
