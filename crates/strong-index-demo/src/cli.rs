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

//! Command-line interface definition.

use crate::config::{DEFAULT_TABLE_SIZE, DemoConfig};
use clap::Parser;

/// Look up a user and a student by row number, using indices that cannot be
/// mixed up.
#[derive(Debug, Parser)]
#[command(name = "strong-index-demo", version, about, long_about = None)]
pub struct Cli {
    /// Row of the user table (an unsigned integer below the table size)
    #[arg(value_name = "USER_ID", allow_hyphen_values = true)]
    pub user_id: String,

    /// Row of the student table (an unsigned integer below the table size)
    #[arg(value_name = "STUDENT_ID", allow_hyphen_values = true)]
    pub student_id: String,

    /// Number of rows in each sample table (at most 1048576)
    #[arg(long, default_value_t = DEFAULT_TABLE_SIZE)]
    pub table_size: usize,

    /// Seed for the table contents; random if omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Builds the run configuration from the parsed flags.
    pub fn config(&self) -> DemoConfig {
        let config = DemoConfig::new().with_table_size(self.table_size);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
