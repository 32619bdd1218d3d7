use std::cmp::Ordering;

use crate::compare::{compare, SortKey};
use crate::monster::Monster;

/// Outcome of [`check_sorted`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verification {
    Sorted,
    /// `v[index - 1]` orders after `v[index]`.
    Unsorted { index: usize },
}

impl Verification {
    pub fn is_sorted(&self) -> bool {
        matches!(self, Verification::Sorted)
    }
}

/// Checks that `v` is non-decreasing under `key`, stopping at the first violation.
pub fn check_sorted(v: &[Monster], key: SortKey) -> Verification {
    for i in 1..v.len() {
        if compare(&v[i - 1], &v[i], key) == Ordering::Greater {
            return Verification::Unsorted { index: i };
        }
    }

    Verification::Sorted
}

pub fn is_sorted(v: &[Monster], key: SortKey) -> bool {
    check_sorted(v, key).is_sorted()
}
