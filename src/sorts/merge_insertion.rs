//! Mergesort that hands small ranges to insertion sort instead of splitting them further.

use crate::compare::SortKey;
use crate::counters::Counters;
use crate::error::SortError;
use crate::monster::Monster;
use crate::sorts::insertion::insertion_sort;
use crate::sorts::mergesort::merge;

sort_impl!("merge_insertion", fallible);

/// Ranges of at most this many monsters are insertion sorted.
pub const MERGE_INSERTION_THRESHOLD: usize = 16;

/// Counters of both phases are summed, the insertion phase contributes block copies and copies
/// according to the insertion sort rules.
pub fn sort(v: &mut [Monster], key: SortKey) -> Result<Counters, SortError> {
    let mut counters = Counters::new();
    merge_insertion_sort(v, key, &mut counters)?;

    Ok(counters)
}

fn merge_insertion_sort(
    v: &mut [Monster],
    key: SortKey,
    counters: &mut Counters,
) -> Result<(), SortError> {
    let len = v.len();
    if len <= MERGE_INSERTION_THRESHOLD {
        insertion_sort(v, key, counters);
        return Ok(());
    }

    let mid = (len - 1) / 2 + 1;

    merge_insertion_sort(&mut v[..mid], key, counters)?;
    merge_insertion_sort(&mut v[mid..], key, counters)?;
    merge(v, mid, key, counters)
}
