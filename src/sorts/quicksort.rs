//! Non-recursive quicksort with a Lomuto partition around the last element.
//!
//! The pivot choice is fixed, so sorted, reverse sorted and all equal inputs take `O(n^2)`
//! comparisons. Pending ranges live on a heap allocated stack, which keeps those inputs from
//! overflowing the call stack.

use crate::compare::{is_not_less, SortKey};
use crate::counters::Counters;
use crate::monster::Monster;
use crate::moves::swap;

sort_impl!("quicksort");

pub fn sort(v: &mut [Monster], key: SortKey) -> Counters {
    let mut counters = Counters::new();

    if v.len() < 2 {
        return counters;
    }

    // Inclusive `(low, high)` ranges still to be partitioned, each holding at least two elements.
    let mut stack = vec![(0, v.len() - 1)];

    while let Some((low, high)) = stack.pop() {
        let pivot_pos = partition(v, low, high, key, &mut counters);

        // Pushed right first so the left side is handled first, like the recursive formulation.
        if high > pivot_pos + 1 {
            stack.push((pivot_pos + 1, high));
        }
        if pivot_pos > low + 1 {
            stack.push((low, pivot_pos - 1));
        }
    }

    counters
}

/// Partitions `v[low..=high]` around `v[high]` and returns the final position of the pivot.
///
/// Every element that is not `>=` the pivot is swapped to the front, even onto itself, and the
/// closing pivot swap always happens. Each of those counts as a swap.
fn partition(
    v: &mut [Monster],
    low: usize,
    high: usize,
    key: SortKey,
    counters: &mut Counters,
) -> usize {
    let mut i = low;

    for j in low..high {
        counters.comparisons += 1;

        if !is_not_less(&v[j], &v[high], key) {
            counters.swaps += 1;
            swap(v, i, j);
            i += 1;
        }
    }

    counters.swaps += 1;
    swap(v, i, high);

    i
}
