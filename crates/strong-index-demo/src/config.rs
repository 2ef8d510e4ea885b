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

//! Configuration of a demonstration run.

/// Number of rows in each sample table unless configured otherwise.
pub const DEFAULT_TABLE_SIZE: usize = 100;

/// Largest table size a run accepts.
pub const MAX_TABLE_SIZE: usize = 1 << 20;

/// Settings for a demonstration run.
///
/// # Configuration
/// * `table_size`: Number of rows in both sample tables. Arguments must be
///   strictly below it, and it must not exceed [`MAX_TABLE_SIZE`].
/// * `seed`: Seed for the table contents. Without one, the tables are filled
///   from OS entropy and differ between runs.
///
/// # Examples
///
/// ```rust
/// # use strong_index_demo::config::{DemoConfig, DEFAULT_TABLE_SIZE};
/// let config = DemoConfig::new().with_seed(7);
/// assert_eq!(config.table_size(), DEFAULT_TABLE_SIZE);
/// assert_eq!(config.seed(), Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    table_size: usize,
    seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Creates a new `DemoConfig` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of rows in each sample table.
    #[inline]
    pub fn with_table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    /// Makes the table contents deterministic.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn table_size(&self) -> usize {
        self.table_size
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.table_size(), 100);
        assert_eq!(config.seed(), None);
        assert_eq!(config, DemoConfig::new());
    }

    #[test]
    fn test_builder_overrides() {
        let config = DemoConfig::new().with_table_size(5).with_seed(42);
        assert_eq!(config.table_size(), 5);
        assert_eq!(config.seed(), Some(42));
    }
}
