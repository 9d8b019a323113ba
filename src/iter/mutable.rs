// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::iter::Iter;

// Core imports
use core::{fmt, iter::FusedIterator, mem, ptr};

/// Read/write cursor over the slots of a [`FixedArray`](crate::FixedArray).
///
/// Created by [`FixedArray::begin_mut`](crate::FixedArray::begin_mut) or
/// [`FixedArray::iter_mut`](crate::FixedArray::iter_mut). It holds the
/// array's unique borrow, so it is neither `Copy` nor `Clone`.
///
/// An `IterMut` narrows into an [`Iter`] through `From`/`Into`,
/// [`into_read_only`](Self::into_read_only) or
/// [`as_read_only`](Self::as_read_only). There is no way back.
///
/// Only one `IterMut` over a given array can be alive at a time, so `==`
/// only ever compares cursors of different arrays and is `false` unless the
/// elements are zero-sized or the arrays are empty. Test for the end with
/// [`is_end`](Self::is_end) instead of comparing against an end cursor.
pub struct IterMut<'a, T> {
    /// Slots from the current position up to the end of the array.
    rest: &'a mut [T],
    pos: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(rest: &'a mut [T], pos: usize) -> Self {
        Self { rest, pos }
    }

    pub(crate) fn into_parts(self) -> (&'a [T], usize) {
        let rest: &'a [T] = self.rest;
        (rest, self.pos)
    }

    /// Index of the slot this cursor points at (`N` at the end).
    #[inline]
    pub fn index(&self) -> usize {
        self.pos
    }

    /// Returns `true` once the cursor is one past the last slot.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Returns the element under the cursor, or `None` at the end.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.rest.first()
    }

    /// Returns the element under the cursor mutably, or `None` at the end.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.rest.first_mut()
    }

    /// Moves the cursor forward by one slot and returns it.
    ///
    /// At the end this does nothing.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        let _ = self.next();
        self
    }

    /// Consumes the cursor and returns a read-only cursor at the same slot.
    #[inline]
    pub fn into_read_only(self) -> Iter<'a, T> {
        self.into()
    }

    /// Lends a read-only cursor at the same slot.
    ///
    /// The mutable cursor is frozen while the returned cursor is alive.
    #[inline]
    pub fn as_read_only(&self) -> Iter<'_, T> {
        Iter::new(&*self.rest, self.pos)
    }

    /// Remaining slots, from the cursor to the end of the array.
    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        self.rest
    }
}

impl<T> PartialEq for IterMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
            && ptr::eq(self.rest.as_ptr_range().end, other.rest.as_ptr_range().end)
    }
}
impl<T> Eq for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("index", &self.pos)
            .field("current", &self.get())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    /// Yields the element under the cursor, then advances.
    fn next(&mut self) -> Option<&'a mut T> {
        let (first, rest) = mem::take(&mut self.rest).split_first_mut()?;
        self.rest = rest;
        self.pos += 1;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.rest.len();
        (rem, Some(rem))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
