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

//! # Strong Index Demo
//!
//! A small command-line program that looks up one row in each of two
//! sample tables. The user table is indexed by `UserId` and the student
//! table by `students::Id`. Both are `Basic` indices over `usize`, so the
//! compiler rejects any attempt to read one table with the other's index.
//!
//! ## Modules
//!
//! - `cli`: clap definition of the two positional arguments and flags.
//! - `config`: `DemoConfig`, the explicit run configuration.
//! - `db`: The `UserDb` and `StudentDb` sample tables and their index types.
//! - `error`: `ArgumentError` and `DemoError`.
//! - `parse`: Validation of argument text into row numbers.
//! - `report`: The lookup result and its rendering.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod parse;
pub mod report;

use crate::{
    config::{DemoConfig, MAX_TABLE_SIZE},
    db::{
        students::{self, StudentDb},
        users::{UserDb, UserId},
    },
    error::DemoError,
    parse::parse_row,
    report::Report,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;

/// Validates both arguments, builds the sample tables and writes the report
/// to `out`.
///
/// Both arguments are validated before any table is built; the first bad
/// one is reported.
///
/// # Errors
///
/// Returns [`DemoError::TableTooLarge`] if the configured table size
/// exceeds [`MAX_TABLE_SIZE`], [`DemoError::Argument`] for a rejected
/// argument and [`DemoError::Io`] if writing to `out` fails.
///
/// # Examples
///
/// ```rust
/// # use strong_index_demo::{config::DemoConfig, run};
/// let mut out = Vec::new();
/// let report = run(&DemoConfig::new().with_seed(1), "5", "10", &mut out).unwrap();
/// assert_eq!(report.user_id().get(), 5);
/// assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
/// ```
pub fn run<W>(
    config: &DemoConfig,
    user_arg: &str,
    student_arg: &str,
    out: &mut W,
) -> Result<Report, DemoError>
where
    W: Write,
{
    let table_size = config.table_size();
    if table_size > MAX_TABLE_SIZE {
        return Err(DemoError::TableTooLarge {
            table_size,
            max: MAX_TABLE_SIZE,
        });
    }

    let user_id = UserId::new(parse_row(user_arg, 1, table_size)?);
    let student_id = students::Id::new(parse_row(student_arg, 2, table_size)?);

    let mut rng = match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    let user_db = UserDb::random(table_size, &mut rng);
    let student_db = StudentDb::random(table_size, &mut rng);

    let report = Report::lookup(&user_db, &student_db, user_id, student_id);
    writeln!(out, "{}", report)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::users::MAX_FRIENDS;
    use crate::error::ArgumentError;

    fn run_seeded(user: &str, student: &str) -> (Result<Report, DemoError>, String) {
        let mut out = Vec::new();
        let result = run(&DemoConfig::new().with_seed(42), user, student, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_valid_arguments_print_two_lines() {
        let (result, out) = run_seeded("5", "10");
        let report = result.unwrap();
        assert!(report.friend_count() <= MAX_FRIENDS);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("User with ID 5 has "));
        assert!(lines[1].starts_with("Student with ID 10 has a "));
    }

    #[test]
    fn test_same_seed_same_output() {
        assert_eq!(run_seeded("3", "4").1, run_seeded("3", "4").1);
    }

    #[test]
    fn test_bound_exceeded() {
        let (result, out) = run_seeded("100", "5");
        assert!(matches!(
            result,
            Err(DemoError::Argument(ArgumentError::ExceedsTable {
                position: 1,
                table_size: 100
            }))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_conversion_failure() {
        let (result, _) = run_seeded("abc", "5");
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not convert argument 1 to an unsigned integer"
        );
    }

    #[test]
    fn test_second_argument_out_of_range() {
        let (result, _) = run_seeded("5", "99999999999999999999999");
        assert!(matches!(
            result,
            Err(DemoError::Argument(ArgumentError::OutOfRange { position: 2, .. }))
        ));
    }

    #[test]
    fn test_custom_table_size() {
        let mut out = Vec::new();
        let config = DemoConfig::new().with_table_size(3).with_seed(0);
        assert!(run(&config, "2", "2", &mut out).is_ok());
        assert!(run(&config, "3", "0", &mut out).is_err());
    }

    #[test]
    fn test_oversized_table_is_rejected() {
        let mut out = Vec::new();
        let config = DemoConfig::new().with_table_size(usize::MAX).with_seed(0);
        let result = run(&config, "5", "10", &mut out);
        assert!(matches!(
            result,
            Err(DemoError::TableTooLarge {
                table_size: usize::MAX,
                max: MAX_TABLE_SIZE
            })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_largest_table_is_accepted() {
        let mut out = Vec::new();
        let config = DemoConfig::new().with_table_size(MAX_TABLE_SIZE).with_seed(0);
        let last = (MAX_TABLE_SIZE - 1).to_string();
        assert!(run(&config, &last, "0", &mut out).is_ok());
    }

    #[test]
    fn test_unseeded_run_succeeds() {
        let mut out = Vec::new();
        assert!(run(&DemoConfig::new(), "0", "99", &mut out).is_ok());
    }
}
