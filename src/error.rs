// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedArray`.
//!
//! Only the checked variants of operations report errors; the plain variants
//! panic like slice indexing does. Errors are `Copy` and implement
//! `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the checked operations on [`FixedArray`](crate::FixedArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index was not below the fixed size `N`.
    OutOfBounds,
    /// A runtime-length input did not have exactly `N` elements.
    ///
    /// Returned by [`TryFrom<&[T]>`](TryFrom) and
    /// [`FixedArray::try_from_iter`](crate::FixedArray::try_from_iter).
    InvalidLen,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::InvalidLen => f.write_str("length does not match array size"),
        }
    }
}

impl CoreError for Error {}
