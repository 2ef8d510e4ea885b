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

/// A marker for one logical index domain.
///
/// Tags exist only at the type level: indices hold them as
/// `PhantomData<fn() -> Tag>`, so a tag never takes part in equality,
/// hashing, `Display`, or auto traits. The usual tag is an uninhabited enum,
/// which makes accidental instantiation impossible. `NAME` is used by the
/// `Debug` rendering of an index.
///
/// Prefer the [`strong_index!`](crate::strong_index) macro, which declares
/// the tag and the index alias together.
///
/// # Examples
///
/// ```rust
/// # use strong_index::{Basic, IndexTag};
/// pub enum RowTag {}
///
/// impl IndexTag for RowTag {
///     const NAME: &'static str = "Row";
/// }
///
/// type Row = Basic<RowTag, u32>;
///
/// let row = Row::new(4);
/// assert_eq!(format!("{:?}", row), "Row(4)");
/// assert_eq!(format!("{}", row), "4");
/// ```
pub trait IndexTag {
    /// Human-readable name of the index domain.
    const NAME: &'static str;
}
