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

//! # Basic Indices
//!
//! `Basic<Tag, T>` is the identity-only tier: an index that is "just a
//! label". It can be built from an underlying value, turned back into one,
//! compared with another index of the same domain, reassigned, and
//! rendered. Nothing else.
//!
//! ## Usage
//!
//! ```rust
//! use strong_index::strong_index;
//!
//! strong_index! {
//!     pub type UserId = Basic<UserIdTag>;
//! }
//!
//! let mut id = UserId::new(12);
//! assert_eq!(id.get(), 12);
//! assert_eq!(id.to_string(), "12");
//! assert_eq!(usize::from(id), 12);
//!
//! id.set(13);
//! assert!(id != UserId::new(12));
//! ```
//!
//! ## Rejected at compile time
//!
//! A raw integer is never accepted where an index is expected:
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type UserId = Basic<UserIdTag>; }
//! fn lookup(_id: UserId) {}
//! lookup(5);
//! ```
//!
//! Indices of different domains cannot be compared, even with the same
//! underlying type and value:
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type UserId = Basic<UserIdTag>; type StudentId = Basic<StudentIdTag>; }
//! let same = UserId::new(1) == StudentId::new(1);
//! ```
//!
//! An index does not compare against its underlying type without an
//! explicit conversion:
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type UserId = Basic<UserIdTag>; }
//! let same = UserId::new(1) == 1;
//! ```
//!
//! There is no arithmetic and no ordering at this tier:
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type UserId = Basic<UserIdTag>; }
//! let next = UserId::new(1) + 1;
//! ```
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type UserId = Basic<UserIdTag>; }
//! let less = UserId::new(1) < UserId::new(2);
//! ```

use crate::macros::impl_index_identity;

/// An identity-only index tagged with the domain `Tag`.
///
/// `Basic` is `#[repr(transparent)]` over `T`: it has the size, alignment and
/// bit layout of the underlying value and costs nothing at runtime. The tag
/// lives only in the type, so `Basic<A, usize>` and `Basic<B, usize>` are
/// unrelated types.
///
/// # Examples
///
/// ```rust
/// # use strong_index::{Basic, IndexTag};
/// enum VesselTag {}
///
/// impl IndexTag for VesselTag {
///     const NAME: &'static str = "VesselIndex";
/// }
///
/// type VesselIndex = Basic<VesselTag>;
///
/// let v = VesselIndex::new(3);
/// assert_eq!(v.get(), 3);
/// assert_eq!(format!("{}", v), "3");
/// assert_eq!(format!("{:?}", v), "VesselIndex(3)");
/// assert_eq!(std::mem::size_of::<VesselIndex>(), std::mem::size_of::<usize>());
/// ```
#[repr(transparent)]
pub struct Basic<Tag, T = usize> {
    value: T,
    _tag: std::marker::PhantomData<fn() -> Tag>,
}

impl_index_identity!(Basic);

#[cfg(test)]
mod tests {
    use super::Basic;
    use crate::macros::assert_index_identity;
    use std::collections::HashSet;

    crate::strong_index! {
        type TestIndex = Basic<TestTag>;
        type SmallIndex = Basic<SmallTag, u16>;
        type SignedIndex = Basic<SignedTag, i32>;
    }

    #[test]
    fn test_identity_contract() {
        assert_index_identity!(TestIndex, 12);
    }

    #[test]
    fn test_equality_matches_underlying_equality() {
        for (a, b) in [(0usize, 0usize), (1, 2), (usize::MAX, usize::MAX), (7, 70)] {
            let (x, y) = (TestIndex::new(a), TestIndex::new(b));
            assert_eq!(x == y, a == b);
            assert_eq!(x != y, !(x == y));
        }
    }

    #[test]
    fn test_round_trip_at_bounds() {
        assert_eq!(SmallIndex::new(u16::MAX).get(), u16::MAX);
        assert_eq!(u16::from(SmallIndex::new(0)), 0);
        assert_eq!(SignedIndex::new(i32::MIN).into_inner(), i32::MIN);
    }

    #[test]
    fn test_display_forwards_formatter_flags() {
        let idx = TestIndex::new(42);
        assert_eq!(format!("{}", idx), "42");
        assert_eq!(format!("{:>5}", idx), "   42");
        assert_eq!(format!("{:03}", SmallIndex::new(7)), "007");
        assert_eq!(format!("{}", SignedIndex::new(-9)), "-9");
    }

    #[test]
    fn test_debug_uses_tag_name() {
        assert_eq!(format!("{:?}", TestIndex::new(7)), "TestIndex(7)");
        assert_eq!(format!("{:?}", SignedIndex::new(-1)), "SignedIndex(-1)");
    }

    #[test]
    fn test_hash_follows_value() {
        let set: HashSet<TestIndex> = [1, 2, 2, 3].into_iter().map(TestIndex::new).collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&TestIndex::new(2)));
    }

    #[test]
    fn test_layout_matches_underlying() {
        assert_eq!(std::mem::size_of::<SmallIndex>(), std::mem::size_of::<u16>());
        // Niches of the underlying type survive the wrapper.
        assert_eq!(
            std::mem::size_of::<Option<Basic<TestTag, Box<u8>>>>(),
            std::mem::size_of::<Option<Box<u8>>>()
        );
    }

    #[test]
    fn test_non_copy_underlying_type() {
        enum NameTag {}
        let mut name: Basic<NameTag, String> = Basic::new(String::from("a"));
        let copy = name.clone();
        name.set(String::from("b"));
        assert!(name != copy);
        assert_eq!(name.to_string(), "b");
        assert_eq!(copy.into_inner(), "a");
    }

    #[test]
    fn test_send_sync_follow_underlying() {
        fn assert_send_sync<X: Send + Sync>() {}
        enum NotSyncTag {}
        // The tag is a type-level marker only and never affects auto traits.
        assert_send_sync::<Basic<NotSyncTag, u64>>();
        assert_send_sync::<Basic<std::cell::Cell<u8>, u64>>();
    }
}
