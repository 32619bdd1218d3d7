//! Top-down mergesort, merging through two freshly allocated buffers.

use crate::compare::{is_not_less, SortKey};
use crate::counters::Counters;
use crate::error::SortError;
use crate::monster::Monster;

sort_impl!("mergesort", fallible);

/// Sorts `v`, failing only if a merge buffer can't be allocated. In that case `v` is left in an
/// unspecified order.
pub fn sort(v: &mut [Monster], key: SortKey) -> Result<Counters, SortError> {
    let mut counters = Counters::new();
    mergesort(v, key, &mut counters)?;

    Ok(counters)
}

fn mergesort(v: &mut [Monster], key: SortKey, counters: &mut Counters) -> Result<(), SortError> {
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    // Same split as `(low + high) / 2` on absolute indices, the left half gets the extra element.
    let mid = (len - 1) / 2 + 1;

    mergesort(&mut v[..mid], key, counters)?;
    mergesort(&mut v[mid..], key, counters)?;
    merge(v, mid, key, counters)
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]`.
///
/// Costs two allocations and two block copies for the buffers, one comparison plus one copy per
/// step while both buffers have elements, and one copy per record drained afterwards.
pub(crate) fn merge(
    v: &mut [Monster],
    mid: usize,
    key: SortKey,
    counters: &mut Counters,
) -> Result<(), SortError> {
    let left = buffer_from(&v[..mid])?;
    let right = buffer_from(&v[mid..])?;
    counters.allocations += 2;
    counters.block_copies += 2;

    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        counters.comparisons += 1;
        counters.copies += 1;

        // Take the left front unless it is `>=` the right one, ties go right.
        if is_not_less(&left[i], &right[j], key) {
            v[k] = right[j];
            j += 1;
        } else {
            v[k] = left[i];
            i += 1;
        }
        k += 1;
    }

    for rest in [&left[i..], &right[j..]] {
        for m in rest {
            counters.copies += 1;
            v[k] = *m;
            k += 1;
        }
    }

    debug_assert_eq!(k, v.len());

    Ok(())
}

fn buffer_from(src: &[Monster]) -> Result<Vec<Monster>, SortError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())
        .map_err(|_| SortError::AllocationFailure { records: src.len() })?;
    buf.extend_from_slice(src);

    Ok(buf)
}
