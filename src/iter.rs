// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cursor and iterator support for [`FixedArray`](crate::FixedArray).
//!
//! - [`Iter`] is the read-only cursor; it is `Copy` and comparable.
//! - [`IterMut`] is the read/write cursor; it narrows into an `Iter`.
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//!
//! Both cursors also implement `Iterator`, so `for x in &array` and
//! `for x in &mut array` walk the slots from index `0` to `N - 1`.

mod mutable;
mod read_only;

pub use mutable::IterMut;
pub use read_only::Iter;

// Crate imports
use crate::array::FixedArray;

// Core imports
use core::{array, fmt, iter::FusedIterator};

/// Owned iterator returned by `FixedArray::into_iter()`.
///
/// Yields elements by value from front to back. Elements not yet yielded
/// are dropped with the iterator.
pub struct IntoIter<T, const N: usize> {
    inner: array::IntoIter<T, N>,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Elements not yet yielded, front to back.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T: Clone, const N: usize> Clone for IntoIter<T, N> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.begin_mut()
    }
}
impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.slots.into_iter(),
        }
    }
}
