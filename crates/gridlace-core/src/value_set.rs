//! A set of puzzle values, optimized for candidate tracking.
//!
//! This module provides [`ValueSet`], a 16-bit bitset holding values in the
//! range 1-9. Boards never use more than nine distinct values (the largest
//! supported block size), so one machine word covers every geometry.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::ValueSet;
//!
//! let mut set = ValueSet::new();
//! set.insert(1);
//! set.insert(4);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(4));
//! assert!(!set.contains(2));
//! ```

use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

/// A set of puzzle values in the range 1-9, represented as a bitset.
///
/// Bit `n` of the backing `u16` represents value `n + 1`. All set
/// operations are O(1).
///
/// # Examples
///
/// ```
/// use gridlace_core::ValueSet;
///
/// // Candidates for a 4x4 board start with values 1-4 available
/// let mut candidates = ValueSet::full(4);
///
/// candidates.remove(2);
/// candidates.remove(3);
///
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates.iter().collect::<Vec<_>>(), vec![1, 4]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueSet(u16);

impl ValueSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing every value from 1 to `block_size`.
    ///
    /// # Panics
    ///
    /// Panics if `block_size` is not in the range 1-9.
    #[must_use]
    pub fn full(block_size: u8) -> Self {
        assert!(
            (1..=9).contains(&block_size),
            "block size must be between 1 and 9, got {block_size}"
        );
        Self((1 << block_size) - 1)
    }

    /// Creates a set containing a single value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn from_elem(value: u8) -> Self {
        Self(bit(value))
    }

    /// Inserts a value into the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn insert(&mut self, value: u8) {
        self.0 |= bit(value);
    }

    /// Removes a value from the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn remove(&mut self, value: u8) {
        self.0 &= !bit(value);
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        self.0 & bit(value) != 0
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if the set has exactly one, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::ValueSet;
    ///
    /// assert_eq!(ValueSet::from_elem(7).as_single(), Some(7));
    /// assert_eq!(ValueSet::full(4).as_single(), None);
    /// assert_eq!(ValueSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub const fn as_single(self) -> Option<u8> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of the two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the values in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9).filter(move |&value| self.contains(value))
    }
}

fn bit(value: u8) -> u16 {
    assert!(
        (1..=9).contains(&value),
        "value must be between 1 and 9, got {value}"
    );
    1 << (value - 1)
}

impl FromIterator<u8> for ValueSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl BitOr for ValueSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for ValueSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for ValueSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for ValueSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl fmt::Debug for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = ValueSet::new();
        set.insert(1);
        set.insert(9);
        assert!(set.contains(1));
        assert!(set.contains(9));
        assert_eq!(set.len(), 2);

        set.remove(1);
        assert!(!set.contains(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    #[should_panic(expected = "value must be")]
    fn test_rejects_zero() {
        let mut set = ValueSet::new();
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "value must be")]
    fn test_rejects_ten() {
        let mut set = ValueSet::new();
        set.insert(10);
    }

    #[test]
    fn test_full_matches_block_size() {
        for block_size in 1..=9 {
            let set = ValueSet::full(block_size);
            assert_eq!(set.len(), usize::from(block_size));
            for value in 1..=block_size {
                assert!(set.contains(value));
            }
        }
    }

    #[test]
    fn test_as_single() {
        assert_eq!(ValueSet::from_elem(3).as_single(), Some(3));
        assert_eq!(ValueSet::from_iter([3, 4]).as_single(), None);
        assert_eq!(ValueSet::EMPTY.as_single(), None);
    }

    #[test]
    fn test_iteration_order() {
        let set = ValueSet::from_iter([9, 1, 5, 3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_operations() {
        let a = ValueSet::from_iter([1, 2, 3]);
        let b = ValueSet::from_iter([2, 3, 4]);

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b), ValueSet::from_elem(1));
        assert_eq!(a | b, a.union(b));
        assert_eq!(a & b, a.intersection(b));
    }

    proptest! {
        #[test]
        fn prop_union_contains_both(values_a in proptest::collection::vec(1u8..=9, 0..9),
                                    values_b in proptest::collection::vec(1u8..=9, 0..9)) {
            let a: ValueSet = values_a.iter().copied().collect();
            let b: ValueSet = values_b.iter().copied().collect();
            let union = a | b;
            for value in values_a.iter().chain(&values_b) {
                prop_assert!(union.contains(*value));
            }
        }

        #[test]
        fn prop_difference_disjoint_from_subtrahend(
            values_a in proptest::collection::vec(1u8..=9, 0..9),
            values_b in proptest::collection::vec(1u8..=9, 0..9),
        ) {
            let a: ValueSet = values_a.iter().copied().collect();
            let b: ValueSet = values_b.iter().copied().collect();
            prop_assert!(a.difference(b).intersection(b).is_empty());
        }
    }
}
