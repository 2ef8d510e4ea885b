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

//! # Full-Arithmetic Indices
//!
//! Quantities that live in one index domain: offsets, counts, strides.
//! `FullArithmetic<Tag, T>` offers everything `Incrementable` does, plus
//! addition and subtraction between two indices of the same domain, and
//! multiplication, division and remainder by an underlying-type value.
//!
//! ## Highlights
//!
//! - `a + b`, `a - b`, `a += b`, `a -= b` for indices of the same tag.
//! - `a * t`, `a / t`, `a % t` and their assignment forms for a raw `t`.
//! - `t + a` and `t * a` for primitive integer `t`.
//! - Division, remainder and overflow are those of the underlying type,
//!   including truncation and panics on division by zero. The `checked_*`
//!   methods are the opt-in alternative.
//!
//! ## Usage
//!
//! ```rust
//! use strong_index::strong_index;
//!
//! strong_index! {
//!     pub type Offset = FullArithmetic<OffsetTag>;
//! }
//!
//! let base = Offset::new(107_792);
//! let sum = base + Offset::new(107_790);
//! assert_eq!(sum.get(), 215_582);
//! assert_eq!((sum * 4).get(), 862_328);
//! assert_eq!((2usize * base + 4) % 4, Offset::new(0));
//! assert_eq!((Offset::new(862_327) / 4).get(), 215_581);
//! ```
//!
//! Indices of different domains still do not mix:
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type Offset = FullArithmetic<OffsetTag>; type Stride = FullArithmetic<StrideTag>; }
//! let mixed = Offset::new(1) + Stride::new(2);
//! ```
//!
//! Multiplying two indices has no meaning and is rejected:
//!
//! ```compile_fail
//! # use strong_index::strong_index;
//! # strong_index! { type Offset = FullArithmetic<OffsetTag>; }
//! let area = Offset::new(3) * Offset::new(4);
//! ```

use crate::macros::{impl_index_identity, impl_index_step};
use crate::num::checked::{
    CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedRemVal, CheckedSubVal,
};

/// An index with the full set of arithmetic operators.
///
/// # Panics
///
/// The operators panic exactly where the underlying type's operators panic:
/// on division or remainder by zero, and on overflow in debug builds.
#[repr(transparent)]
pub struct FullArithmetic<Tag, T = usize> {
    value: T,
    _tag: std::marker::PhantomData<fn() -> Tag>,
}

impl_index_identity!(FullArithmetic);
impl_index_step!(FullArithmetic);

macro_rules! impl_index_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt, $assign_op:tt) => {
        impl<Tag, T> std::ops::$trait_name for FullArithmetic<Tag, T>
        where
            T: std::ops::$trait_name<Output = T>,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(self.value $op rhs.value)
            }
        }

        impl<Tag, T> std::ops::$assign_trait for FullArithmetic<Tag, T>
        where
            T: std::ops::$assign_trait,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                self.value $assign_op rhs.value;
            }
        }
    };
}

macro_rules! impl_scale_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt, $assign_op:tt) => {
        impl<Tag, T> std::ops::$trait_name<T> for FullArithmetic<Tag, T>
        where
            T: std::ops::$trait_name<Output = T>,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: T) -> Self::Output {
                Self::new(self.value $op rhs)
            }
        }

        impl<Tag, T> std::ops::$assign_trait<T> for FullArithmetic<Tag, T>
        where
            T: std::ops::$assign_trait,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: T) {
                self.value $assign_op rhs;
            }
        }
    };
}

impl_index_op!(Add, add, AddAssign, add_assign, +, +=);
impl_index_op!(Sub, sub, SubAssign, sub_assign, -, -=);

impl_scale_op!(Mul, mul, MulAssign, mul_assign, *, *=);
impl_scale_op!(Div, div, DivAssign, div_assign, /, /=);
impl_scale_op!(Rem, rem, RemAssign, rem_assign, %, %=);

// `t + index` and `t * index`. Coherence only allows these per primitive.
macro_rules! impl_commutative_ops {
    ($($p:ty),* $(,)?) => {
        $(
            impl<Tag> std::ops::Add<FullArithmetic<Tag, $p>> for $p {
                type Output = FullArithmetic<Tag, $p>;

                #[inline(always)]
                fn add(self, index: FullArithmetic<Tag, $p>) -> Self::Output {
                    index + self
                }
            }

            impl<Tag> std::ops::Mul<FullArithmetic<Tag, $p>> for $p {
                type Output = FullArithmetic<Tag, $p>;

                #[inline(always)]
                fn mul(self, index: FullArithmetic<Tag, $p>) -> Self::Output {
                    index * self
                }
            }
        )*
    };
}

impl_commutative_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<Tag, T> FullArithmetic<Tag, T>
where
    T: CheckedAddVal,
{
    /// Adds another index of the same domain, returning `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strong_index::FullArithmetic;
    /// enum CountTag {}
    /// type Count = FullArithmetic<CountTag, u8>;
    ///
    /// assert_eq!(Count::new(200).checked_add_index(Count::new(55)).map(|c| c.get()), Some(255));
    /// assert!(Count::new(200).checked_add_index(Count::new(56)).is_none());
    /// ```
    #[inline(always)]
    pub fn checked_add_index(self, other: Self) -> Option<Self> {
        self.value.checked_add_val(other.value).map(Self::new)
    }
}

impl<Tag, T> FullArithmetic<Tag, T>
where
    T: CheckedSubVal,
{
    /// Subtracts another index of the same domain, returning `None` on overflow.
    #[inline(always)]
    pub fn checked_sub_index(self, other: Self) -> Option<Self> {
        self.value.checked_sub_val(other.value).map(Self::new)
    }
}

impl<Tag, T> FullArithmetic<Tag, T>
where
    T: CheckedMulVal,
{
    /// Scales the index, returning `None` on overflow.
    #[inline(always)]
    pub fn checked_mul(self, scale: T) -> Option<Self> {
        self.value.checked_mul_val(scale).map(Self::new)
    }
}

impl<Tag, T> FullArithmetic<Tag, T>
where
    T: CheckedDivVal,
{
    /// Divides the index, returning `None` on division by zero or overflow.
    #[inline(always)]
    pub fn checked_div(self, divisor: T) -> Option<Self> {
        self.value.checked_div_val(divisor).map(Self::new)
    }
}

impl<Tag, T> FullArithmetic<Tag, T>
where
    T: CheckedRemVal,
{
    /// Takes the remainder, returning `None` on division by zero or overflow.
    #[inline(always)]
    pub fn checked_rem(self, divisor: T) -> Option<Self> {
        self.value.checked_rem_val(divisor).map(Self::new)
    }
}
