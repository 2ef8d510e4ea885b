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

/// A trait for types that have a constant representing one step.
///
/// `Incrementable` and `FullArithmetic` indices move by exactly
/// `PLUS_ONE` when incremented or decremented. Implement this for a custom
/// underlying type to make it usable with those tiers.
///
/// # Examples
///
/// ```rust
/// # use strong_index::num::constants::PlusOne;
/// assert_eq!(u8::PLUS_ONE, 1);
/// assert_eq!(i64::PLUS_ONE, 1);
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// struct Lane(u16);
///
/// impl PlusOne for Lane {
///     const PLUS_ONE: Self = Lane(1);
/// }
/// assert_eq!(Lane::PLUS_ONE, Lane(1));
/// ```
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

macro_rules! impl_plus_one_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl PlusOne for $t {
                const PLUS_ONE: Self = 1;
            }
        )*
    };
}

impl_plus_one_for!(u8, u16, u32, u64, u128, usize);
impl_plus_one_for!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::PlusOne;

    fn step<T: PlusOne>() -> T {
        T::PLUS_ONE
    }

    #[test]
    fn test_plus_one_is_one_for_all_widths() {
        assert_eq!(step::<u8>(), 1);
        assert_eq!(step::<u128>(), 1);
        assert_eq!(step::<usize>(), 1);
        assert_eq!(step::<i8>(), 1);
        assert_eq!(step::<isize>(), 1);
    }
}
