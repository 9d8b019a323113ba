// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-stack-array`
//!
//! A `no_std`, fixed-size, stack-allocated array with value semantics,
//! **with no `unsafe` by default**.
//!
//! The core type, [`FixedArray<T, N>`], stores exactly `N` elements of `T`
//! inline. Every slot holds a live `T` for the whole lifetime of the
//! container; there is no length and no uninitialized tail. The type has the
//! size and layout of `[T; N]` but adds:
//!
//! - an explicit **replace** primitive ([`FixedArray::replace`],
//!   [`FixedArray::replace_with`]) that drops the element in a slot and
//!   constructs a new one in its place. Copy-assignment
//!   ([`Clone::clone_from`]), move-assignment ([`FixedArray::move_from`]),
//!   [`fill`](FixedArray::fill) and [`fill_with`](FixedArray::fill_with) are
//!   all expressed through it;
//! - move-out semantics that leave a defined placeholder behind
//!   ([`FixedArray::take`]);
//! - a pair of cursors, [`IterMut`] (read/write) and [`Iter`] (read-only),
//!   with a one-way conversion from the former to the latter.
//!
//! ## When to use this crate
//!
//! - You know the element count at compile time and it never changes.
//! - You cannot (or do not want to) allocate.
//! - You want the container embedded inline in another struct.
//!
//! If the element count varies at runtime, use a vector type instead.
//!
//! ## Construction
//!
//! Each slot is constructed exactly once. Nothing is default-initialized and
//! then overwritten:
//!
//! - [`FixedArray::new`] / [`Default`]: every slot is `T::default()`.
//! - [`FixedArray::filled`]: every slot is a clone of one value.
//! - [`FixedArray::from_fn`]: slot `i` is built from its index.
//! - [`From<[T; N]>`](From): takes ownership of an array. The length is part
//!   of the type, so a mismatch is a compile error.
//! - [`TryFrom<&[T]>`](TryFrom) and [`FixedArray::try_from_iter`]: runtime
//!   length, returning [`Error::InvalidLen`] unless exactly `N` items arrive.
//!
//! ## Indexing and bounds
//!
//! Indexing (`a[i]`, `a[1..3]`), [`front`](FixedArray::front),
//! [`back`](FixedArray::back) and [`replace`](FixedArray::replace) follow Rust
//! slice semantics and **panic** on an out-of-range index.
//! [`get`](FixedArray::get), [`get_mut`](FixedArray::get_mut) and
//! [`try_replace`](FixedArray::try_replace) return `Option`/`Result` instead.
//!
//! With the `unsafe-unchecked` feature, `unsafe fn` variants skip the bounds
//! check entirely for hot paths where the caller already guarantees
//! `index < N`.
//!
//! ## Iteration
//!
//! [`FixedArray::begin`] and [`FixedArray::end`] bracket the container with
//! read-only cursors. [`FixedArray::begin_mut`] returns a read/write cursor.
//! Both cursor types are also ordinary [`Iterator`]s, so `for x in &a` and
//! `for x in &mut a` work as usual.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `FixedArray<T, N>` as a sequence
//!   of exactly `N` elements. Deserialization requires `T: Default`.
//! - `log`: emits `trace`-level events through the `log` facade for every
//!   slot-level replace, fill, swap and move.
//! - `unsafe-unchecked`: enables `get_unchecked`, `get_unchecked_mut` and
//!   `replace_unchecked`. Without it the crate is `#![forbid(unsafe_code)]`.
//!
//! ## Example
//!
//! ```rust
//! use fixed_stack_array::FixedArray;
//!
//! let mut a = FixedArray::from([1, 2, 3]);
//! a.replace(1, 99);
//! assert_eq!(a, [1, 99, 3]);
//!
//! a.fill(0);
//! assert_eq!(a, [0, 0, 0]);
//! assert_eq!((*a.front(), *a.back()), (0, 0));
//! assert_eq!(a.size(), 3);
//! ```

#![cfg_attr(not(feature = "unsafe-unchecked"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

#[macro_use]
mod trace;

// Modules
mod array;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;

// Public exports (crate API surface)
pub use array::FixedArray;
pub use error::Error;
pub use iter::{IntoIter, Iter, IterMut};

// The container is a transparent wrapper: no header, no padding.
static_assertions::assert_eq_size!(FixedArray<u64, 4>, [u64; 4]);
static_assertions::assert_eq_size!(FixedArray<u8, 3>, [u8; 3]);
static_assertions::assert_eq_align!(FixedArray<u64, 2>, [u64; 2]);
static_assertions::assert_eq_size!(FixedArray<u32, 0>, [u32; 0]);

// Narrowing is one-way: a read-only cursor can never be widened again.
static_assertions::assert_impl_all!(Iter<'static, u8>: Copy, From<IterMut<'static, u8>>);
static_assertions::assert_not_impl_any!(IterMut<'static, u8>: Clone, From<Iter<'static, u8>>);
