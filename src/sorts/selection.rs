//! Selection sort, moving the largest remaining monster to the end of the unsorted region.

use crate::compare::{is_not_less, SortKey};
use crate::counters::Counters;
use crate::monster::Monster;
use crate::moves::swap;

sort_impl!("selection");

pub fn sort(v: &mut [Monster], key: SortKey) -> Counters {
    let mut counters = Counters::new();

    for i in (1..v.len()).rev() {
        let highest = find_highest(&v[..=i], key, &mut counters);

        if highest != i {
            counters.swaps += 1;
            swap(v, highest, i);
        }
    }

    counters
}

/// Index of the last maximal element of `v`.
///
/// The scan starts by comparing `v[0]` with itself, every element costs one comparison.
fn find_highest(v: &[Monster], key: SortKey, counters: &mut Counters) -> usize {
    let mut highest = 0;

    for i in 0..v.len() {
        counters.comparisons += 1;

        if is_not_less(&v[i], &v[highest], key) {
            highest = i;
        }
    }

    highest
}
