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

//! By-value checked arithmetic.
//!
//! These traits mirror the inherent `checked_*` methods of the primitive
//! integers behind a trait, so that generic index code can ask for
//! overflow and division-by-zero detection without naming a concrete type.
//! The index tiers never call them from their operators; they back the
//! explicit `checked_*` methods only.

/// A trait for types that support checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use strong_index::num::checked::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(100), None);
/// assert_eq!(a.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized {
    /// Performs checked addition, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use strong_index::num::checked::CheckedSubVal;
/// let a: usize = 50;
/// assert_eq!(a.checked_sub_val(100), None);
/// assert_eq!(a.checked_sub_val(20), Some(30));
/// ```
pub trait CheckedSubVal: Sized {
    /// Performs checked subtraction, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use strong_index::num::checked::CheckedMulVal;
/// let a: u8 = 20;
/// assert_eq!(a.checked_mul_val(10), Some(200));
/// assert_eq!(a.checked_mul_val(20), None);
/// ```
pub trait CheckedMulVal: Sized {
    /// Performs checked multiplication, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked division by value.
///
/// # Examples
///
/// ```rust
/// # use strong_index::num::checked::CheckedDivVal;
/// let a: u32 = 100;
/// assert_eq!(a.checked_div_val(0), None);
/// assert_eq!(a.checked_div_val(4), Some(25));
/// assert_eq!(i8::MIN.checked_div_val(-1), None);
/// ```
pub trait CheckedDivVal: Sized {
    /// Performs checked division, returning `None` on division by zero or overflow.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked remainder by value.
///
/// # Examples
///
/// ```rust
/// # use strong_index::num::checked::CheckedRemVal;
/// let a: u64 = 10;
/// assert_eq!(a.checked_rem_val(0), None);
/// assert_eq!(a.checked_rem_val(3), Some(1));
/// ```
pub trait CheckedRemVal: Sized {
    /// Performs checked remainder, returning `None` on division by zero or overflow.
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty),* $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

macro_rules! checked_impl_all {
    ($trait_name:ident, $method:ident, $src_method:ident) => {
        checked_impl_val!(
            $trait_name, $method, $src_method;
            u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
        );
    };
}

checked_impl_all!(CheckedAddVal, checked_add_val, checked_add);
checked_impl_all!(CheckedSubVal, checked_sub_val, checked_sub);
checked_impl_all!(CheckedMulVal, checked_mul_val, checked_mul);
checked_impl_all!(CheckedDivVal, checked_div_val, checked_div);
checked_impl_all!(CheckedRemVal, checked_rem_val, checked_rem);
