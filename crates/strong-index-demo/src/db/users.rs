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

//! The user sample table, indexed by [`UserId`].

use rand::Rng;
use strong_index::strong_index;

strong_index! {
    /// Row of a [`UserDb`].
    pub type UserId = Basic<UserIdTag>;
}

/// Highest friend count generated by [`UserDb::random`].
pub const MAX_FRIENDS: u32 = 100;

/// Friend counts per user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDb {
    friend_counts: Vec<u32>,
}

impl UserDb {
    /// Creates a table of `size` users with friend counts in `0..=MAX_FRIENDS`.
    pub fn random<R>(size: usize, rng: &mut R) -> Self
    where
        R: Rng,
    {
        let friend_counts = (0..size)
            .map(|_| rng.random_range(0..=MAX_FRIENDS))
            .collect();
        Self { friend_counts }
    }

    /// Creates a table from explicit friend counts.
    pub fn from_friend_counts(friend_counts: Vec<u32>) -> Self {
        Self { friend_counts }
    }

    /// Returns the number of users.
    #[inline]
    pub fn len(&self) -> usize {
        self.friend_counts.len()
    }

    /// Returns `true` if the table has no users.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.friend_counts.is_empty()
    }

    /// Returns the friend count of the user `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not less than `self.len()`.
    #[inline]
    pub fn friend_count(&self, id: UserId) -> u32 {
        debug_assert!(
            id.get() < self.len(),
            "called `UserDb::friend_count` with user index out of bounds: the len is {} but the index is {}",
            self.len(),
            id
        );

        self.friend_counts[usize::from(id)]
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
        let db = UserDb::random(100, &mut rng);
        assert_eq!(db.len(), 100);
        assert!((0..100).all(|i| db.friend_count(UserId::new(i)) <= MAX_FRIENDS));
    }

    #[test]
    fn test_random_table_is_deterministic_per_seed() {
        let a = UserDb::random(50, &mut ChaCha8Rng::seed_from_u64(7));
        let b = UserDb::random(50, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_lookup_by_index() {
        let db = UserDb::from_friend_counts(vec![4, 1, 0]);
        assert_eq!(db.friend_count(UserId::new(0)), 4);
        assert_eq!(db.friend_count(UserId::new(2)), 0);
        assert!(!db.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_lookup_out_of_bounds_panics() {
        let db = UserDb::from_friend_counts(vec![4]);
        db.friend_count(UserId::new(1));
    }
}
