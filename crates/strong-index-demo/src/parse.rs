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

//! Turning command-line text into table row numbers.
//!
//! Parsing is generic over the unsigned type an index is built on, so the
//! range diagnostic names the type that actually overflowed. Validation
//! stops at the first bad argument.

use crate::error::ArgumentError;
use num_traits::{PrimInt, Unsigned};
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// Parses `text` as a row number of a table with `table_size` rows.
///
/// `position` is the 1-based argument position used in diagnostics.
///
/// # Errors
///
/// * [`ArgumentError::NotANumber`] if `text` is not an unsigned integer.
/// * [`ArgumentError::OutOfRange`] if it does not fit into `T`.
/// * [`ArgumentError::ExceedsTable`] if it is `>= table_size`.
///
/// # Examples
///
/// ```rust
/// # use strong_index_demo::parse::parse_row;
/// # use strong_index_demo::error::ArgumentError;
/// assert_eq!(parse_row::<usize>("5", 1, 100), Ok(5));
/// assert_eq!(
///     parse_row::<u8>("300", 2, 100),
///     Err(ArgumentError::OutOfRange { position: 2, type_name: "u8" })
/// );
/// ```
pub fn parse_row<T>(text: &str, position: usize, table_size: usize) -> Result<T, ArgumentError>
where
    T: PrimInt + Unsigned + FromStr<Err = ParseIntError>,
{
    let value = text.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ArgumentError::OutOfRange {
            position,
            type_name: std::any::type_name::<T>(),
        },
        _ => ArgumentError::NotANumber {
            position,
            text: text.to_string(),
        },
    })?;

    // A value that does not fit into usize cannot address any table row.
    match value.to_usize() {
        Some(row) if row < table_size => Ok(value),
        _ => Err(ArgumentError::ExceedsTable {
            position,
            table_size,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_rows_below_table_size() {
        assert_eq!(parse_row::<usize>("0", 1, 100), Ok(0));
        assert_eq!(parse_row::<usize>("99", 1, 100), Ok(99));
        assert_eq!(parse_row::<u32>("+7", 2, 100), Ok(7));
    }

    #[test]
    fn test_rejects_table_bound() {
        assert_eq!(
            parse_row::<usize>("100", 1, 100),
            Err(ArgumentError::ExceedsTable {
                position: 1,
                table_size: 100
            })
        );
        assert!(matches!(
            parse_row::<usize>("0", 2, 0),
            Err(ArgumentError::ExceedsTable { position: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_non_numbers() {
        for text in ["abc", "", "-5", "1.5", "5 ", "0x10"] {
            assert_eq!(
                parse_row::<usize>(text, 1, 100),
                Err(ArgumentError::NotANumber {
                    position: 1,
                    text: text.to_string()
                }),
                "input {:?}",
                text
            );
        }
    }

    #[test]
    fn test_rejects_values_beyond_type_range() {
        assert_eq!(
            parse_row::<usize>("99999999999999999999999999999", 1, 100),
            Err(ArgumentError::OutOfRange {
                position: 1,
                type_name: "usize"
            })
        );
        assert_eq!(
            parse_row::<u16>("65536", 2, 100),
            Err(ArgumentError::OutOfRange {
                position: 2,
                type_name: "u16"
            })
        );
    }

    #[test]
    fn test_wide_type_beyond_usize_exceeds_table() {
        let huge = u128::MAX.to_string();
        assert_eq!(
            parse_row::<u128>(&huge, 1, usize::MAX),
            Err(ArgumentError::ExceedsTable {
                position: 1,
                table_size: usize::MAX
            })
        );
    }
}
