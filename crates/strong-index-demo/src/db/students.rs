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

//! The student sample table, indexed by its own [`Id`].

use rand::Rng;
use strong_index::strong_index;

strong_index! {
    /// Row of a [`StudentDb`].
    pub type Id = Basic<IdTag>;
}

/// Upper (exclusive) bound of generated grade point averages.
pub const MAX_GPA: f64 = 4.0;

/// Grade point averages per student.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDb {
    gpas: Vec<f64>,
}

impl StudentDb {
    /// Creates a table of `size` students with GPAs in `[0.0, MAX_GPA)`.
    pub fn random<R>(size: usize, rng: &mut R) -> Self
    where
        R: Rng,
    {
        let gpas = (0..size).map(|_| rng.random_range(0.0..MAX_GPA)).collect();
        Self { gpas }
    }

    /// Creates a table from explicit GPAs.
    pub fn from_gpas(gpas: Vec<f64>) -> Self {
        Self { gpas }
    }

    /// Returns the number of students.
    #[inline]
    pub fn len(&self) -> usize {
        self.gpas.len()
    }

    /// Returns `true` if the table has no students.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gpas.is_empty()
    }

    /// Returns the GPA of the student `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not less than `self.len()`.
    #[inline]
    pub fn gpa(&self, id: Id) -> f64 {
        debug_assert!(
            id.get() < self.len(),
            "called `StudentDb::gpa` with student index out of bounds: the len is {} but the index is {}",
            self.len(),
            id
        );

        self.gpas[usize::from(id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_table_respects_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let db = StudentDb::random(100, &mut rng);
        assert_eq!(db.len(), 100);
        for i in 0..db.len() {
            let gpa = db.gpa(Id::new(i));
            assert!((0.0..MAX_GPA).contains(&gpa), "gpa {} out of range", gpa);
        }
    }

    #[test]
    fn test_lookup_by_index() {
        let db = StudentDb::from_gpas(vec![3.5, 2.0]);
        assert_eq!(db.gpa(Id::new(1)), 2.0);
        assert_eq!(format!("{:?}", Id::new(1)), "Id(1)");
    }

    #[test]
    fn test_empty_table() {
        let db = StudentDb::random(0, &mut ChaCha8Rng::seed_from_u64(1));
        assert!(db.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_lookup_out_of_bounds_panics() {
        let db = StudentDb::from_gpas(vec![1.5]);
        db.gpa(Id::new(1));
    }
}
