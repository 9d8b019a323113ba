// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::iter::IterMut;

// Core imports
use core::{fmt, iter::FusedIterator, ptr};

/// Read-only cursor over the slots of a [`FixedArray`](crate::FixedArray).
///
/// Created by [`FixedArray::begin`](crate::FixedArray::begin),
/// [`FixedArray::end`](crate::FixedArray::end),
/// [`FixedArray::iter`](crate::FixedArray::iter), or by narrowing an
/// [`IterMut`]. The cursor is `Copy`; copies advance independently.
///
/// Two cursors compare equal when they point at the same slot of the same
/// array. Advancing at the end is a no-op and [`get`](Self::get) returns
/// `None` there, so the end cursor can never be dereferenced.
pub struct Iter<'a, T> {
    /// Slots from the current position up to the end of the array.
    rest: &'a [T],
    pos: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(rest: &'a [T], pos: usize) -> Self {
        Self { rest, pos }
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
    pub fn get(&self) -> Option<&'a T> {
        self.rest.first()
    }

    /// Moves the cursor forward by one slot and returns it.
    ///
    /// At the end this does nothing.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        if let Some((_, rest)) = self.rest.split_first() {
            self.rest = rest;
            self.pos += 1;
        }
        self
    }

    /// Remaining slots, from the cursor to the end of the array.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.rest
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Iter<'_, T> {}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        // The end of `rest` is the end of the backing array; it identifies
        // the container while `pos` identifies the slot.
        self.pos == other.pos
            && ptr::eq(self.rest.as_ptr_range().end, other.rest.as_ptr_range().end)
    }
}
impl<T> Eq for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("index", &self.pos)
            .field("current", &self.get())
            .finish()
    }
}

impl<'a, T> From<IterMut<'a, T>> for Iter<'a, T> {
    /// Narrows a read/write cursor into a read-only one at the same slot.
    fn from(cursor: IterMut<'a, T>) -> Self {
        let (rest, pos) = cursor.into_parts();
        Self::new(rest, pos)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Yields the element under the cursor, then advances.
    fn next(&mut self) -> Option<&'a T> {
        let (first, rest) = self.rest.split_first()?;
        self.rest = rest;
        self.pos += 1;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.rest.len();
        (rem, Some(rem))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
