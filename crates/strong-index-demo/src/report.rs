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

//! The lookup result and its two-line rendering.

use crate::db::{
    students::{self, StudentDb},
    users::{UserDb, UserId},
};

/// The result of looking up one user and one student.
///
/// `Display` renders the two lines the program prints:
///
/// ```rust
/// # use strong_index_demo::db::{students::{self, StudentDb}, users::{UserDb, UserId}};
/// # use strong_index_demo::report::Report;
/// let user_db = UserDb::from_friend_counts(vec![0, 1]);
/// let student_db = StudentDb::from_gpas(vec![3.25]);
/// let report = Report::lookup(&user_db, &student_db, UserId::new(1), students::Id::new(0));
/// assert_eq!(
///     report.to_string(),
///     "User with ID 1 has 1 friend.\nStudent with ID 0 has a 3.25 GPA."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    user_id: UserId,
    friend_count: u32,
    student_id: students::Id,
    gpa: f64,
}

impl Report {
    /// Looks up `user_id` in `user_db` and `student_id` in `student_db`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds for its table.
    pub fn lookup(
        user_db: &UserDb,
        student_db: &StudentDb,
        user_id: UserId,
        student_id: students::Id,
    ) -> Self {
        Self {
            user_id,
            friend_count: user_db.friend_count(user_id),
            student_id,
            gpa: student_db.gpa(student_id),
        }
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn friend_count(&self) -> u32 {
        self.friend_count
    }

    #[inline]
    pub fn student_id(&self) -> students::Id {
        self.student_id
    }

    #[inline]
    pub fn gpa(&self) -> f64 {
        self.gpa
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = if self.friend_count == 1 { "" } else { "s" };
        writeln!(
            f,
            "User with ID {} has {} friend{}.",
            self.user_id, self.friend_count, plural
        )?;
        write!(
            f,
            "Student with ID {} has a {} GPA.",
            self.student_id, self.gpa
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> (UserDb, StudentDb) {
        (
            UserDb::from_friend_counts(vec![0, 1, 42]),
            StudentDb::from_gpas(vec![0.0, 3.999, 2.5]),
        )
    }

    #[test]
    fn test_lookup_reads_both_tables() {
        let (user_db, student_db) = tables();
        let report = Report::lookup(&user_db, &student_db, UserId::new(2), students::Id::new(1));
        assert_eq!(report.user_id(), UserId::new(2));
        assert_eq!(report.friend_count(), 42);
        assert_eq!(report.student_id(), students::Id::new(1));
        assert_eq!(report.gpa(), 3.999);
    }

    #[test]
    fn test_friend_pluralization() {
        let (user_db, student_db) = tables();
        let sid = students::Id::new(2);

        let none = Report::lookup(&user_db, &student_db, UserId::new(0), sid).to_string();
        let one = Report::lookup(&user_db, &student_db, UserId::new(1), sid).to_string();
        let many = Report::lookup(&user_db, &student_db, UserId::new(2), sid).to_string();

        assert!(none.starts_with("User with ID 0 has 0 friends."));
        assert!(one.starts_with("User with ID 1 has 1 friend."));
        assert!(many.starts_with("User with ID 2 has 42 friends."));
        assert!(many.ends_with("Student with ID 2 has a 2.5 GPA."));
    }

    #[test]
    fn test_gpa_is_rendered_unrounded() {
        let (user_db, student_db) = tables();
        let report = Report::lookup(&user_db, &student_db, UserId::new(0), students::Id::new(1));
        assert!(report.to_string().ends_with("Student with ID 1 has a 3.999 GPA."));
    }
}
