// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedArray` type and its inherent API.
//!
//! `FixedArray<T, N>` owns exactly `N` elements stored inline. All slots are
//! live at all times; operations that change a slot go through the replace
//! primitive ([`FixedArray::replace`]) so the old element is always
//! dropped and a fully constructed new one takes its place.
//!
//! No heap allocations are performed.

mod from;
mod new;
mod replace;
mod swap;
mod take;
#[cfg(feature = "unsafe-unchecked")]
mod unchecked;

// Crate imports
use crate::iter::{Iter, IterMut};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
};

/// A fixed-size, stack-allocated array.
///
/// `FixedArray<T, N>` stores `N` elements of `T` inline with the exact layout
/// of `[T; N]`. Unlike a vector there is no length: every index in `0..N`
/// addresses a live element from construction until the container is dropped.
///
/// # Value semantics
///
/// - **Copy**: [`Clone`] constructs each slot once from the source element.
///   [`Clone::clone_from`] replaces every slot of an existing array.
/// - **Move**: a plain Rust move (`let b = a;`) transfers the whole array.
///   When the source must stay usable, [`take`](Self::take) and
///   [`move_from`](Self::move_from) move the elements out and leave
///   `T::default()` placeholders behind.
/// - **Replace**: [`replace`](Self::replace) and
///   [`replace_with`](Self::replace_with) drop the element in one slot and
///   store a newly constructed one. [`fill`](Self::fill) applies this to
///   every slot.
/// - **Swap**: [`swap`](Self::swap) exchanges corresponding elements of two
///   arrays without reconstructing anything.
///
/// # Indexing
///
/// `a[i]`, [`front`](Self::front), [`back`](Self::back) and `replace` panic
/// when `i >= N`, exactly like slices. Use [`get`](Self::get),
/// [`get_mut`](Self::get_mut) or [`try_replace`](Self::try_replace) for the
/// non-panicking forms.
///
/// # Iteration
///
/// [`begin`](Self::begin) and [`end`](Self::end) bracket the array with
/// read-only [`Iter`] cursors; [`begin_mut`](Self::begin_mut) yields a
/// read/write [`IterMut`] cursor that narrows into an `Iter` on demand. The
/// borrow checker guarantees no cursor outlives the array or survives a
/// mutating call.
///
/// # Examples
///
/// ```rust
/// use fixed_stack_array::FixedArray;
///
/// let mut a = FixedArray::from([1, 2, 3]);
/// let mut b = FixedArray::from([4, 5, 6]);
/// a.swap(&mut b);
/// assert_eq!(a, [4, 5, 6]);
/// assert_eq!(b, [1, 2, 3]);
///
/// let mut it = a.begin();
/// let end = a.end();
/// let mut seen = 0;
/// while it != end {
///     assert_eq!(it.get(), Some(&a[seen]));
///     it.advance();
///     seen += 1;
/// }
/// assert_eq!(seen, a.size());
/// ```
#[repr(transparent)]
pub struct FixedArray<T, const N: usize> {
    pub(crate) slots: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// The fixed number of slots.
    pub const SIZE: usize = N;

    /// Returns the number of slots (always `N`).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Alias of [`size`](Self::size), for parity with slices.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` only for `FixedArray<T, 0>`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to slot `0`.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    #[inline]
    pub fn front(&self) -> &T {
        &self.slots[0]
    }

    /// Returns a mutable reference to slot `0`.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.slots[0]
    }

    /// Returns a reference to slot `N - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    #[inline]
    pub fn back(&self) -> &T {
        &self.slots[N - 1]
    }

    /// Returns a mutable reference to slot `N - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        &mut self.slots[N - 1]
    }

    /// Returns `Some(&T)` if `index < N`, otherwise `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    /// Returns `Some(&mut T)` if `index < N`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// Returns all slots as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Returns all slots as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Returns the backing array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.slots
    }

    /// Returns the backing array mutably.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.slots
    }

    /// Returns a read-only cursor at slot `0`.
    #[inline]
    pub fn begin(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, 0)
    }

    /// Returns a read-only cursor one past slot `N - 1`.
    ///
    /// The end cursor never yields an element.
    #[inline]
    pub fn end(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[N..], N)
    }

    /// Returns a read/write cursor at slot `0`.
    #[inline]
    pub fn begin_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.slots, 0)
    }

    /// Shorthand for [`begin`](Self::begin), for use as an iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.begin()
    }

    /// Shorthand for [`begin_mut`](Self::begin_mut), for use as an iterator.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.begin_mut()
    }

    /// Returns `true` if any slot compares equal to `x`.
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.slots.contains(x)
    }

    /// Builds a new array by applying `f` to every element in slot order.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> FixedArray<U, N> {
        FixedArray {
            slots: self.slots.map(f),
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("size", &N)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.slots.iter().zip(other.slots.iter()).all(|(a, b)| a == b)
    }
}
impl<T: Eq, const N: usize> Eq for FixedArray<T, N> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for FixedArray<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.slots == *other
    }
}
impl<T: PartialEq, const N: usize> PartialEq<[T]> for FixedArray<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Ord, const N: usize> Ord for FixedArray<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for FixedArray<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for FixedArray<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Copy, const N: usize> Copy for FixedArray<T, N> {}
impl<T: Clone, const N: usize> Clone for FixedArray<T, N> {
    /// Constructs every slot once from a clone of the matching source slot.
    fn clone(&self) -> Self {
        Self::from_fn(|i| self.slots[i].clone())
    }

    /// Replaces every slot with a clone of the matching slot of `source`.
    ///
    /// Self-assignment cannot be expressed: `a.clone_from(&a)` is rejected
    /// by the borrow checker.
    fn clone_from(&mut self, source: &Self) {
        for (index, item) in source.slots.iter().enumerate() {
            self.replace(index, item.clone());
        }
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for FixedArray<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for FixedArray<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedArray;
    use alloc::{format, vec::Vec};

    #[test]
    fn test_size_is_compile_time_constant() {
        let a: FixedArray<i32, 4> = FixedArray::new();
        assert_eq!(a.size(), 4);
        assert_eq!(a.len(), 4);
        assert!(!a.is_empty());
        assert_eq!(FixedArray::<i32, 4>::SIZE, 4);

        let z: FixedArray<i32, 0> = FixedArray::new();
        assert_eq!(z.size(), 0);
        assert!(z.is_empty());
    }

    #[test]
    fn test_front_and_back() {
        let mut a = FixedArray::from([1, 2, 3]);
        assert_eq!(*a.front(), 1);
        assert_eq!(*a.back(), 3);

        *a.front_mut() = 10;
        *a.back_mut() = 30;
        assert_eq!(a, [10, 2, 30]);
    }

    #[test]
    fn test_front_and_back_coincide_for_single_slot() {
        let a = FixedArray::from([42]);
        assert_eq!(a.front(), a.back());
    }

    #[test]
    #[should_panic]
    fn test_front_on_zero_size_panics() {
        let a: FixedArray<u8, 0> = FixedArray::new();
        let _ = a.front();
    }

    #[test]
    #[should_panic]
    fn test_back_on_zero_size_panics() {
        let a: FixedArray<u8, 0> = FixedArray::new();
        let _ = a.back();
    }

    #[test]
    fn test_get_and_get_mut() {
        let mut a = FixedArray::from([7, 8, 9]);
        assert_eq!(a.get(1), Some(&8));
        assert_eq!(a.get(3), None);
        *a.get_mut(2).unwrap() = 90;
        assert_eq!(a, [7, 8, 90]);
        assert!(a.get_mut(3).is_none());
    }

    #[test]
    fn test_equality_is_elementwise() {
        let a = FixedArray::from([1, 2, 3]);
        let b = FixedArray::from([1, 2, 3]);
        let c = FixedArray::from([1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!(a != b));
        assert!(a != c);
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(a, [1, 2, 3][..]);
    }

    #[test]
    fn test_zero_size_arrays_are_equal() {
        let a: FixedArray<i32, 0> = FixedArray::new();
        let b: FixedArray<i32, 0> = FixedArray::new();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ord_and_hash_follow_slice() {
        use core::cmp::Ordering;
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let a = FixedArray::from([1, 2, 3]);
        let c = FixedArray::from([1, 2, 4]);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Less));

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        [1, 2, 3][..].hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_debug_structure() {
        let a = FixedArray::from([1, 2]);
        let dbg = format!("{a:?}");
        assert!(dbg.contains("FixedArray"));
        assert!(dbg.contains("size: 2"));
        assert!(dbg.contains("elements"));
        assert!(dbg.contains("[1, 2]"));
    }

    #[test]
    fn test_clone_is_independent_copy() {
        let a = FixedArray::from([1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(a, b);

        b[1] = 20;
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(b, [1, 20, 3]);
    }

    #[test]
    fn test_clone_of_non_copy_elements() {
        let a = FixedArray::from([Vec::from([1]), Vec::from([2, 2])]);
        let mut b = a.clone();
        b[0].push(9);
        assert_eq!(a[0], [1]);
        assert_eq!(b[0], [1, 9]);
    }

    #[test]
    fn test_clone_from_replaces_every_slot() {
        let src = FixedArray::from([Vec::from([1]), Vec::from([2])]);
        let mut dst = FixedArray::from([Vec::new(), Vec::from([7, 7, 7])]);
        dst.clone_from(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_copy_when_elements_are_copy() {
        let a = FixedArray::from([1u8, 2, 3]);
        let b = a;
        // `a` is still usable because the array is `Copy`.
        assert_eq!(a, b);
    }

    #[test]
    fn test_contains_and_map() {
        let a = FixedArray::from([1, 2, 3]);
        assert!(a.contains(&2));
        assert!(!a.contains(&5));

        let doubled = a.map(|x| x * 2);
        assert_eq!(doubled, [2, 4, 6]);
    }

    #[test]
    fn test_slice_views() {
        let mut a = FixedArray::from([1, 2, 3]);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        a.as_mut_slice()[0] = 5;
        assert_eq!(a.as_array(), &[5, 2, 3]);
        a.as_mut_array()[2] = 6;
        assert_eq!(a, [5, 2, 6]);

        let r: &[i32] = a.as_ref();
        assert_eq!(r, &[5, 2, 6]);
        let m: &mut [i32] = a.as_mut();
        m[1] = 0;
        assert_eq!(a, [5, 0, 6]);
    }

    #[test]
    fn test_borrow_and_borrow_mut_behave_like_slice() {
        use core::borrow::{Borrow, BorrowMut};

        let mut a = FixedArray::from([1, 2, 3]);
        let b: &[i32] = Borrow::<[i32]>::borrow(&a);
        assert_eq!(b, &[1, 2, 3]);
        {
            let bm: &mut [i32] = BorrowMut::<[i32]>::borrow_mut(&mut a);
            bm[1] = 20;
        }
        assert_eq!(a, [1, 20, 3]);
    }

    #[test]
    fn test_begin_end_bracket_the_array() {
        let a = FixedArray::from([1, 2, 3]);
        assert_eq!(a.begin().index(), 0);
        assert_eq!(a.end().index(), 3);
        assert!(a.end().get().is_none());

        let z: FixedArray<u8, 0> = FixedArray::new();
        assert!(z.begin() == z.end());
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut a: FixedArray<(), 4> = FixedArray::new();
        assert_eq!(a.size(), 4);
        a.replace(3, ());
        assert_eq!(a.iter().count(), 4);
    }
}
