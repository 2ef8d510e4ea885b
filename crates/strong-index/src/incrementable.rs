// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Incrementable Indices
//!
//! Positions that move by raw offsets but are never combined with each
//! other. On top of everything `Basic` offers, `Incrementable<Tag, T>` can be
//! stepped (`increment`, `post_increment`, `decrement`, `post_decrement`)
//! and shifted by an underlying-type value (`+`, `-`, `+=`, `-=`).
//!
//! ```rust
//! use strong_index::strong_index;
//!
//! strong_index! {
//!     pub type Slot = Incrementable<SlotTag>;
//! }
//!
//! let mut slot = Slot::new(61);
//! assert_eq!(slot.increment().get(), 62);
//! assert_eq!(slot.post_increment().get(), 62);
//! assert_eq!(slot.get(), 63);
//!
//! slot -= 3;
//! assert_eq!((slot + 1).get(), 61);
//! ```
//!
//! Adding two indices is rejected; that takes `FullArithmetic`:
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type Slot = Incrementable<SlotTag>; }
//! let sum = Slot::new(1) + Slot::new(2);
//! ```
//!
//! The same holds for subtracting one index from another, in either form:
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type Slot = Incrementable<SlotTag>; }
//! let gap = Slot::new(3) - Slot::new(1);
//! ```
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type Slot = Incrementable<SlotTag>; }
//! let mut slot = Slot::new(3);
//! slot -= Slot::new(1);
//! ```
//!
//! A raw offset only goes on the right-hand side:
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type Slot = Incrementable<SlotTag>; }
//! let shifted = 2usize + Slot::new(1);
//! ```
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type Slot = Incrementable<SlotTag>; }
//! let scaled = Slot::new(1) * 2;
//! ```
//!
//! Tiers do not mix either, even within one domain:
//!
//! ```compile_fail
//! # use strong_index::{Basic, Incrementable};
//! enum SlotTag {}
//! let same = Incrementable::<SlotTag>::new(1) == Basic::<SlotTag>::new(1);
//! ```

use crate::macros::{impl_index_identity, impl_index_step};

/// An index that supports stepping and shifting by a raw offset.
///
/// Overflow and underflow behave exactly like the underlying type's own
/// operators. Use [`checked_add`](Self::checked_add) or
/// [`checked_sub`](Self::checked_sub) to detect them instead.
#[repr(transparent)]
pub struct Incrementable<Tag, T = usize> {
    value: T,
    _tag: std::marker::PhantomData<fn() -> Tag>,
}

impl_index_identity!(Incrementable);
impl_index_step!(Incrementable);

#[cfg(test)]
mod tests {
    use crate::macros::{assert_index_identity, assert_index_step};

    crate::strong_index! {
        type TestIndex = Incrementable<TestTag>;
        type ByteIndex = Incrementable<ByteTag, u8>;
        type SignedIndex = Incrementable<SignedTag, i16>;
    }

    #[test]
    fn test_identity_contract() {
        assert_index_identity!(TestIndex, 61);
    }

    #[test]
    fn test_step_and_shift() {
        assert_index_step!(TestIndex, 61);
    }

    #[test]
    fn test_increment_chains_in_place() {
        let mut idx = TestIndex::new(0);
        idx.increment().increment().increment();
        assert_eq!(idx.get(), 3);
        idx.decrement().decrement();
        assert_eq!(idx.get(), 1);
    }

    #[test]
    fn test_signed_underlying_steps_through_zero() {
        let mut idx = SignedIndex::new(0);
        assert_eq!(idx.post_decrement().get(), 0);
        assert_eq!(idx.get(), -1);
        idx -= 5;
        assert_eq!(idx.get(), -6);
        assert_eq!((idx + 6).get(), 0);
    }

    #[test]
    fn test_checked_shift() {
        let idx = ByteIndex::new(250);
        assert_eq!(idx.checked_add(5), Some(ByteIndex::new(255)));
        assert_eq!(idx.checked_add(6), None);
        assert_eq!(ByteIndex::new(0).checked_sub(1), None);
        assert_eq!(idx.checked_sub(50).map(|i| i.get()), Some(200));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "attempt to add with overflow")]
    fn test_overflow_behaves_like_underlying() {
        let mut idx = ByteIndex::new(u8::MAX);
        idx.increment();
    }

    #[test]
    fn test_layout_matches_underlying() {
        assert_eq!(std::mem::size_of::<ByteIndex>(), 1);
        assert_eq!(std::mem::align_of::<SignedIndex>(), std::mem::align_of::<i16>());
    }
}
