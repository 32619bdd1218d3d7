//! Bubble sort, without the early exit on a pass that swapped nothing.

use crate::compare::{is_not_less, SortKey};
use crate::counters::Counters;
use crate::monster::Monster;
use crate::moves::swap;

sort_impl!("bubble");

/// Always performs `n - 1` passes, so comparisons are `n * (n - 1) / 2` for every input.
///
/// Ties are swapped as well, which makes this variant unstable.
pub fn sort(v: &mut [Monster], key: SortKey) -> Counters {
    let mut counters = Counters::new();
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        for j in 0..(len - i - 1) {
            counters.comparisons += 1;

            if is_not_less(&v[j], &v[j + 1], key) {
                counters.swaps += 1;
                swap(v, j, j + 1);
            }
        }
    }

    counters
}
