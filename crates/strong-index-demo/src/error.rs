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

//! Error types of the demonstration program.

/// A positional argument that could not be turned into a table index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The text is not an unsigned integer (includes negatives and decimals).
    NotANumber {
        /// 1-based position of the argument.
        position: usize,
        /// The offending text.
        text: String,
    },
    /// The text is an integer too large for the underlying index type.
    OutOfRange {
        /// 1-based position of the argument.
        position: usize,
        /// The name of the underlying index type (e.g., "usize").
        type_name: &'static str,
    },
    /// The value does not address a row of the table.
    ExceedsTable {
        /// 1-based position of the argument.
        position: usize,
        /// Number of rows in the table.
        table_size: usize,
    },
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber { position, .. } => write!(
                f,
                "Could not convert argument {} to an unsigned integer",
                position
            ),
            Self::OutOfRange {
                position,
                type_name,
            } => write!(
                f,
                "Argument {} was outside the range of {}",
                position, type_name
            ),
            Self::ExceedsTable {
                position,
                table_size,
            } => write!(
                f,
                "Argument {} was larger than or equal to the table size ({})",
                position, table_size
            ),
        }
    }
}

impl std::error::Error for ArgumentError {}

/// The error type of a demonstration run.
#[derive(Debug)]
pub enum DemoError {
    /// A positional argument was rejected.
    Argument(ArgumentError),
    /// The configured table size is larger than [`MAX_TABLE_SIZE`].
    ///
    /// [`MAX_TABLE_SIZE`]: crate::config::MAX_TABLE_SIZE
    TableTooLarge {
        /// The requested number of rows.
        table_size: usize,
        /// The largest accepted number of rows.
        max: usize,
    },
    /// Writing the report failed.
    Io(std::io::Error),
}

impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Argument(e) => write!(f, "{}", e),
            Self::TableTooLarge { table_size, max } => write!(
                f,
                "The table size {} exceeds the maximum of {}",
                table_size, max
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Argument(e) => Some(e),
            Self::TableTooLarge { .. } => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ArgumentError> for DemoError {
    fn from(e: ArgumentError) -> Self {
        Self::Argument(e)
    }
}

impl From<std::io::Error> for DemoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
