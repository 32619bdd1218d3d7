//! Insertion sort with a forward scan from the start of the sorted prefix.
//!
//! Unlike the textbook variant the insertion point is searched front to back, so already sorted
//! input is the most expensive case for comparisons while reverse sorted input is the cheapest.

use crate::compare::{is_not_less, SortKey};
use crate::counters::Counters;
use crate::monster::Monster;
use crate::moves::shift_block;

sort_impl!("insertion");

pub fn sort(v: &mut [Monster], key: SortKey) -> Counters {
    let mut counters = Counters::new();
    insertion_sort(v, key, &mut counters);

    counters
}

/// Sorts `v` in place, accumulating into `counters`. Shared with the merge-insertion hybrid.
pub(crate) fn insertion_sort(v: &mut [Monster], key: SortKey, counters: &mut Counters) {
    for i in 1..v.len() {
        let pos = find_position(&v[..=i], key, counters);

        if pos != i {
            let tmp = v[i];

            shift_block(v, pos + 1, pos, i - pos);
            counters.block_copies += 1;
            counters.copies += (i - pos) as u64;

            v[pos] = tmp;
        }
    }
}

/// First index whose monster is `>=` the last one of `v`, which is the default.
fn find_position(v: &[Monster], key: SortKey, counters: &mut Counters) -> usize {
    let last = v.len() - 1;
    let current = &v[last];

    for i in 0..=last {
        counters.comparisons += 1;

        if is_not_less(&v[i], current, key) {
            return i;
        }
    }

    last
}
