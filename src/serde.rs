// This file is part of fixed-stack-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FixedArray`](crate::FixedArray).
//!
//! - **Serialize**: as a sequence of exactly `N` elements.
//! - **Deserialize**: from a sequence of exactly `N` elements. Shorter input
//!   fails with serde's `invalid length` error; longer input fails with
//!   `too many elements (expected N)`.
//!
//! Deserialization requires `T: Default`: the array starts from
//! [`FixedArray::new`](crate::FixedArray::new) and each incoming element
//! replaces one slot.

// Crate imports
use crate::array::FixedArray;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const N: usize> Serialize for FixedArray<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(N))?;
        for item in self.as_slice() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for ArrayVisitor<T, N>
where
    T: Deserialize<'de> + Default,
{
    type Value = FixedArray<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with exactly {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = FixedArray::<T, N>::new();
        for index in 0..N {
            match a.next_element::<T>()? {
                Some(elem) => out.replace(index, elem),
                None => return Err(de::Error::invalid_length(index, &self)),
            }
        }
        if a.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(format_args!(
                "too many elements (expected {N})"
            )));
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedArray<T, N>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor::<T, N>(PhantomData))
    }
}
