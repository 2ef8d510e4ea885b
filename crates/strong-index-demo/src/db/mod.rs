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

//! # Sample Tables
//!
//! Two in-memory tables indexed by distinct `Basic` index types. Their
//! only purpose is to show that an index from one table cannot be used to
//! read the other:
//!
//! ```compile_fail
//! # use strong_index_demo::db::{students::StudentDb, users::UserId};
//! let students = StudentDb::from_gpas(vec![3.5]);
//! students.gpa(UserId::new(0));
//! ```
//!
//! ```compile_fail
//! # use strong_index_demo::db::users::UserDb;
//! let users = UserDb::from_friend_counts(vec![1]);
//! users.friend_count(0);
//! ```

pub mod students;
pub mod users;
