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

//! # Strong Index
//!
//! Zero-cost, phantom-tagged index wrappers that keep indices into
//! logically distinct containers from being mixed up. A user index cannot
//! be used to look up a student, even though both are plain `usize` values
//! underneath.
//!
//! ## Tiers
//!
//! Three independent wrapper types, each a strict superset of the previous
//! one's operations:
//!
//! - `Basic<Tag, T>`: identity only. Explicit construction and conversion,
//!   equality, assignment and `Display`.
//! - `Incrementable<Tag, T>`: adds stepping and shifting by a raw `T`, but
//!   never adding two indices together.
//! - `FullArithmetic<Tag, T>`: adds index-to-index addition/subtraction and
//!   multiplication, division and remainder by a raw `T`.
//!
//! `T` defaults to `usize`. Every tier is `#[repr(transparent)]` over `T`.
//! Tiers never convert into each other; go through `into_inner` explicitly
//! when that is really wanted.
//!
//! ## Modules
//!
//! - `tag`: The `IndexTag` trait implemented by domain tags.
//! - `num`: `PlusOne` (the increment step) and by-value checked arithmetic.
//! - `strong_index!`: Declares tag and alias in one line.
//!
//! ## Usage
//!
//! ```rust
//! use strong_index::strong_index;
//!
//! strong_index! {
//!     pub type UserId = Basic<UserIdTag>;
//!     pub type StudentId = Basic<StudentIdTag>;
//! }
//!
//! struct UserDb {
//!     friend_counts: Vec<u32>,
//! }
//!
//! impl UserDb {
//!     fn friend_count(&self, id: UserId) -> u32 {
//!         self.friend_counts[usize::from(id)]
//!     }
//! }
//!
//! let db = UserDb { friend_counts: vec![3, 1, 4] };
//! assert_eq!(db.friend_count(UserId::new(2)), 4);
//! ```
//!
//! Looking the table up with the wrong domain's index does not compile:
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { pub type UserId = Basic<UserIdTag>; pub type StudentId = Basic<StudentIdTag>; }
//! # struct UserDb { friend_counts: Vec<u32> }
//! # impl UserDb {
//! #     fn friend_count(&self, id: UserId) -> u32 { self.friend_counts[usize::from(id)] }
//! # }
//! let db = UserDb { friend_counts: vec![3, 1, 4] };
//! db.friend_count(StudentId::new(2));
//! ```

mod macros;

pub mod basic;
pub mod full_arithmetic;
pub mod incrementable;
pub mod num;
pub mod tag;

pub use basic::Basic;
pub use full_arithmetic::FullArithmetic;
pub use incrementable::Incrementable;
pub use tag::IndexTag;
