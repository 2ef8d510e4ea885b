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

//! Declaration macro and the impl macros shared by the index tiers.

/// Declares one or more strongly typed indices.
///
/// Each declaration produces an uninhabited tag enum, its
/// [`IndexTag`](crate::IndexTag) impl with `NAME` set to the alias name,
/// and the alias itself. The underlying type defaults to `usize`.
///
/// ```rust
/// use strong_index::strong_index;
///
/// strong_index! {
///     /// Row in the user table.
///     pub type UserId = Basic<UserIdTag>;
///     /// Cursor into a 32-bit ring buffer.
///     pub type Cursor = Incrementable<CursorTag, u32>;
///     pub type Offset = FullArithmetic<OffsetTag, i64>;
/// }
///
/// let user = UserId::new(7);
/// assert_eq!(format!("{:?}", user), "UserId(7)");
///
/// let mut cursor = Cursor::new(1);
/// cursor.increment();
/// assert_eq!(cursor.get(), 2u32);
///
/// let offset = Offset::new(-4) + Offset::new(10);
/// assert_eq!(offset.get(), 6i64);
/// ```
///
/// Two declarations never produce compatible types, even when the tier and
/// the underlying type match:
///
/// ```compile_fail
/// use strong_index::strong_index;
///
/// strong_index! {
///     type UserId = Basic<UserIdTag>;
///     type StudentId = Basic<StudentIdTag>;
/// }
///
/// let user = UserId::new(3);
/// let student: StudentId = user;
/// ```
#[macro_export]
macro_rules! strong_index {
    ($(
        $(#[$meta:meta])*
        $vis:vis type $name:ident = $tier:ident < $tag:ident $(, $underlying:ty)? >;
    )*) => {
        $(
            #[doc = concat!("Tag of the [`", stringify!($name), "`] index domain.")]
            $vis enum $tag {}

            impl $crate::IndexTag for $tag {
                const NAME: &'static str = stringify!($name);
            }

            $(#[$meta])*
            $vis type $name = $crate::$tier<$tag $(, $underlying)?>;
        )*
    };
}

/// Construction, conversion, equality, hashing and rendering. Every tier
/// gets exactly this set; nothing here depends on the tier.
macro_rules! impl_index_identity {
    ($name:ident) => {
        impl<Tag, T> $name<Tag, T> {
            /// Creates an index wrapping `value`.
            #[inline(always)]
            pub const fn new(value: T) -> Self {
                Self {
                    value,
                    _tag: ::std::marker::PhantomData,
                }
            }

            /// Replaces the wrapped value.
            #[inline(always)]
            pub fn set(&mut self, value: T) {
                self.value = value;
            }

            /// Consumes the index and returns the underlying value.
            #[inline(always)]
            pub fn into_inner(self) -> T {
                self.value
            }
        }

        impl<Tag, T> $name<Tag, T>
        where
            T: Copy,
        {
            /// Returns the underlying value.
            #[inline(always)]
            pub const fn get(&self) -> T {
                self.value
            }
        }

        impl<Tag, T> Clone for $name<Tag, T>
        where
            T: Clone,
        {
            #[inline(always)]
            fn clone(&self) -> Self {
                Self::new(self.value.clone())
            }
        }

        impl<Tag, T> Copy for $name<Tag, T> where T: Copy {}

        impl<Tag, T> PartialEq for $name<Tag, T>
        where
            T: PartialEq,
        {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl<Tag, T> Eq for $name<Tag, T> where T: Eq {}

        impl<Tag, T> ::std::hash::Hash for $name<Tag, T>
        where
            T: ::std::hash::Hash,
        {
            #[inline(always)]
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(&self.value, state);
            }
        }

        impl<Tag, T> ::std::fmt::Debug for $name<Tag, T>
        where
            Tag: $crate::IndexTag,
            T: ::std::fmt::Debug,
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_tuple(Tag::NAME).field(&self.value).finish()
            }
        }

        impl<Tag, T> ::std::fmt::Display for $name<Tag, T>
        where
            T: ::std::fmt::Display,
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.value, f)
            }
        }

        impl<Tag, T> From<T> for $name<Tag, T> {
            #[inline(always)]
            fn from(value: T) -> Self {
                Self::new(value)
            }
        }

        $crate::macros::impl_into_primitive!(
            $name; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
        );
    };
}

/// `From<Index<Tag, P>> for P`, the cast-like way back to a primitive.
/// A blanket `From<Index<Tag, T>> for T` is ruled out by coherence.
macro_rules! impl_into_primitive {
    ($name:ident; $($p:ty),* $(,)?) => {
        $(
            impl<Tag> From<$name<Tag, $p>> for $p {
                #[inline(always)]
                fn from(index: $name<Tag, $p>) -> $p {
                    index.value
                }
            }
        )*
    };
}

/// Stepping and shifting by a raw underlying-type offset. Shared by
/// `Incrementable` and `FullArithmetic`; deliberately never by `Basic`.
macro_rules! impl_index_step {
    ($name:ident) => {
        impl<Tag, T> $name<Tag, T>
        where
            T: ::std::ops::AddAssign + $crate::num::constants::PlusOne,
        {
            /// Advances the index by one step and returns it.
            #[inline(always)]
            pub fn increment(&mut self) -> &mut Self {
                self.value += T::PLUS_ONE;
                self
            }
        }

        impl<Tag, T> $name<Tag, T>
        where
            T: Copy + ::std::ops::AddAssign + $crate::num::constants::PlusOne,
        {
            /// Advances the index by one step and returns the value it held before.
            #[inline(always)]
            pub fn post_increment(&mut self) -> Self {
                let previous = *self;
                self.increment();
                previous
            }
        }

        impl<Tag, T> $name<Tag, T>
        where
            T: ::std::ops::SubAssign + $crate::num::constants::PlusOne,
        {
            /// Moves the index back by one step and returns it.
            #[inline(always)]
            pub fn decrement(&mut self) -> &mut Self {
                self.value -= T::PLUS_ONE;
                self
            }
        }

        impl<Tag, T> $name<Tag, T>
        where
            T: Copy + ::std::ops::SubAssign + $crate::num::constants::PlusOne,
        {
            /// Moves the index back by one step and returns the value it held before.
            #[inline(always)]
            pub fn post_decrement(&mut self) -> Self {
                let previous = *self;
                self.decrement();
                previous
            }
        }

        impl<Tag, T> $name<Tag, T>
        where
            T: $crate::num::checked::CheckedAddVal,
        {
            /// Shifts the index forward, returning `None` on overflow.
            #[inline(always)]
            pub fn checked_add(self, shift: T) -> Option<Self> {
                $crate::num::checked::CheckedAddVal::checked_add_val(self.value, shift)
                    .map(Self::new)
            }
        }

        impl<Tag, T> $name<Tag, T>
        where
            T: $crate::num::checked::CheckedSubVal,
        {
            /// Shifts the index backward, returning `None` on overflow.
            #[inline(always)]
            pub fn checked_sub(self, shift: T) -> Option<Self> {
                $crate::num::checked::CheckedSubVal::checked_sub_val(self.value, shift)
                    .map(Self::new)
            }
        }

        impl<Tag, T> ::std::ops::Add<T> for $name<Tag, T>
        where
            T: ::std::ops::Add<Output = T>,
        {
            type Output = Self;

            #[inline(always)]
            fn add(self, shift: T) -> Self {
                Self::new(self.value + shift)
            }
        }

        impl<Tag, T> ::std::ops::Sub<T> for $name<Tag, T>
        where
            T: ::std::ops::Sub<Output = T>,
        {
            type Output = Self;

            #[inline(always)]
            fn sub(self, shift: T) -> Self {
                Self::new(self.value - shift)
            }
        }

        impl<Tag, T> ::std::ops::AddAssign<T> for $name<Tag, T>
        where
            T: ::std::ops::AddAssign,
        {
            #[inline(always)]
            fn add_assign(&mut self, shift: T) {
                self.value += shift;
            }
        }

        impl<Tag, T> ::std::ops::SubAssign<T> for $name<Tag, T>
        where
            T: ::std::ops::SubAssign,
        {
            #[inline(always)]
            fn sub_assign(&mut self, shift: T) {
                self.value -= shift;
            }
        }
    };
}

/// Checks the identity contract every tier shares, for a `usize`-backed index.
#[cfg(test)]
macro_rules! assert_index_identity {
    ($index:ty, $value:expr) => {{
        let value: usize = $value;
        let index = <$index>::new(value);
        assert_eq!(index.get(), value);

        let same = <$index>::new(value);
        let mut different = <$index>::new(value + 1);
        assert!(index == same);
        assert!(index != different);
        different = same;
        assert!(index == different);

        different.set(value + 2);
        assert_eq!(different.get(), value + 2);
        assert_eq!(different.into_inner(), value + 2);

        assert_eq!(index.to_string(), value.to_string());
        assert_eq!(usize::from(index), value);
        assert_eq!(<$index>::from(value), index);
        assert_eq!(std::mem::size_of::<$index>(), std::mem::size_of::<usize>());
        assert_eq!(std::mem::align_of::<$index>(), std::mem::align_of::<usize>());
    }};
}

/// Checks stepping and raw shifting, starting from `$value` (must be >= 5).
#[cfg(test)]
macro_rules! assert_index_step {
    ($index:ty, $value:expr) => {{
        let expected: usize = $value;
        let mut index = <$index>::new(expected);

        let pre_inc = *index.increment();
        assert_eq!(pre_inc.get(), expected + 1);
        assert_eq!(index.get(), expected + 1);
        let post_inc = index.post_increment();
        assert_eq!(post_inc.get(), expected + 1);
        assert_eq!(index.get(), expected + 2);

        let pre_dec = *index.decrement();
        assert_eq!(pre_dec.get(), expected + 1);
        assert_eq!(index.get(), expected + 1);
        let post_dec = index.post_decrement();
        assert_eq!(post_dec.get(), expected + 1);
        assert_eq!(index.get(), expected);

        index += 2;
        assert_eq!(index.get(), expected + 2);
        index -= 3;
        assert_eq!(index.get(), expected - 1);

        assert_eq!((index + 3).get(), expected + 2);
        assert_eq!((index - 4).get(), expected - 5);
        assert_eq!(index.get(), expected - 1);
    }};
}

pub(crate) use impl_index_identity;
pub(crate) use impl_index_step;
pub(crate) use impl_into_primitive;

#[cfg(test)]
pub(crate) use assert_index_identity;
#[cfg(test)]
pub(crate) use assert_index_step;
