//! Regression tests for the cost model of each sort.

use monster_sorts::compare::SortKey;
use monster_sorts::counters::Counters;
use monster_sorts::patterns;
use monster_sorts::sorts::merge_insertion::MERGE_INSERTION_THRESHOLD;
use monster_sorts::sorts::{bubble, insertion, merge_insertion, mergesort, quicksort, selection};
use monster_sorts::verify::is_sorted;

const SIZES: [usize; 8] = [2, 3, 5, 10, 17, 33, 100, 257];

fn triangle(n: u64) -> u64 {
    n * (n + 1) / 2
}

#[test]
fn bubble_comparisons_are_input_independent() {
    for n in SIZES {
        for mut v in [
            patterns::monsters(n),
            patterns::ascending(n),
            patterns::descending(n),
        ] {
            let counters = bubble::sort(&mut v, SortKey::ByWeight);
            assert_eq!(counters.comparisons, triangle(n as u64 - 1));
        }
    }
}

#[test]
fn bubble_descending_swaps_every_pair() {
    let n = 50;
    let mut v = patterns::descending(n);
    let counters = bubble::sort(&mut v, SortKey::ByName);

    assert_eq!(counters.swaps, triangle(n as u64 - 1));
    assert!(is_sorted(&v, SortKey::ByName));
}

#[test]
fn bubble_swaps_ties() {
    let mut v = patterns::all_equal(4);
    let counters = bubble::sort(&mut v, SortKey::ByWeight);

    assert_eq!(counters.swaps, 6);
    // Every pass carries the first monster to the end of its region.
    let ids = v.iter().map(|m| m.id()).collect::<Vec<_>>();
    assert_eq!(ids, [3, 2, 1, 0]);
}

#[test]
fn selection_comparisons() {
    for n in SIZES {
        let mut v = patterns::monsters(n);
        let counters = selection::sort(&mut v, SortKey::ByWeight);

        // Scanning `0..=i` for i in 1..n.
        assert_eq!(counters.comparisons, triangle(n as u64) - 1);
        assert!(counters.swaps < n as u64);
    }
}

#[test]
fn selection_picks_last_of_tied_maxima() {
    let mut v = patterns::from_weights(&[7.0, 1.0, 7.0, 2.0]);
    let counters = selection::sort(&mut v, SortKey::ByWeight);

    // The later 7 (id 2) is moved to the end first, the earlier one follows it.
    let ids = v.iter().map(|m| m.id()).collect::<Vec<_>>();
    assert_eq!(ids, [1, 3, 0, 2]);
    assert_eq!(counters.swaps, 3);
}

#[test]
fn insertion_ascending_comparisons() {
    for n in SIZES {
        let mut v = patterns::ascending(n);
        let counters = insertion::sort(&mut v, SortKey::ByWeight);

        assert_eq!(counters.comparisons, triangle(n as u64) - 1);
        assert_eq!(counters.copies, 0);
        assert_eq!(counters.block_copies, 0);
    }
}

#[test]
fn insertion_descending_comparisons() {
    for n in SIZES {
        let mut v = patterns::descending(n);
        let counters = insertion::sort(&mut v, SortKey::ByName);

        // The new monster always belongs at the front, found with a single comparison, and the
        // whole prefix is shifted.
        assert_eq!(counters.comparisons, n as u64 - 1);
        assert_eq!(counters.block_copies, n as u64 - 1);
        assert_eq!(counters.copies, triangle(n as u64 - 1));
        assert!(is_sorted(&v, SortKey::ByName));
    }
}

#[test]
fn sorted_input_costs_no_moves_for_simple_sorts() {
    for key in [SortKey::ByWeight, SortKey::ByName] {
        let mut v = patterns::monsters(300);
        mergesort::sort(&mut v, key).unwrap();
        let sorted = v.clone();

        for counters in [
            bubble::sort(&mut v, key),
            selection::sort(&mut v, key),
            insertion::sort(&mut v, key),
        ] {
            assert_eq!(counters.swaps, 0);
            assert_eq!(counters.copies, 0);
            assert_eq!(counters.block_copies, 0);
            assert_eq!(v, sorted);
        }
    }
}

#[test]
fn quicksort_ascending_is_quadratic() {
    let n = 200u64;
    let mut v = patterns::ascending(n as usize);
    let counters = quicksort::sort(&mut v, SortKey::ByWeight);

    // Every partition of a range of length m compares m - 1 times and leaves the pivot in place,
    // down to ranges of two.
    assert_eq!(counters.comparisons, triangle(n - 1));
    // One self swap per comparison plus the pivot swap per partition.
    assert_eq!(counters.swaps, triangle(n - 1) + (n - 1));
    assert_eq!(v, patterns::ascending(n as usize));
}

#[test]
fn quicksort_two_elements() {
    let mut v = patterns::from_weights(&[5.0, 3.0]);
    let counters = quicksort::sort(&mut v, SortKey::ByWeight);

    assert_eq!(
        counters,
        Counters {
            comparisons: 1,
            swaps: 1,
            ..Counters::default()
        }
    );
}

#[test]
fn mergesort_buffer_accounting() {
    for n in SIZES {
        let mut v = patterns::monsters(n);
        let counters = mergesort::sort(&mut v, SortKey::ByWeight).unwrap();

        // A binary split tree over n leaves has n - 1 merges.
        let merges = n as u64 - 1;
        assert_eq!(counters.allocations, 2 * merges);
        assert_eq!(counters.block_copies, 2 * merges);
        assert_eq!(counters.swaps, 0);
        assert!(counters.comparisons <= counters.copies);
        assert!(is_sorted(&v, SortKey::ByWeight));
    }
}

#[test]
fn mergesort_drains_tails() {
    let mut v = patterns::from_weights(&[5.0, 3.0, 4.0, 1.0, 2.0]);
    let counters = mergesort::sort(&mut v, SortKey::ByWeight).unwrap();

    let weights = v.iter().map(|m| m.weight()).collect::<Vec<_>>();
    assert_eq!(weights, [1.0, 2.0, 3.0, 4.0, 5.0]);

    // Merges of sizes 2, 3, 2 and 5, every record is copied once per merge it takes part in.
    assert_eq!(counters.copies, 12);
    assert_eq!(counters.allocations, 8);
}

#[test]
fn merge_insertion_below_threshold_is_insertion_sort() {
    let n = MERGE_INSERTION_THRESHOLD;
    let mut a = patterns::monsters(n);
    let mut b = a.clone();

    let hybrid = merge_insertion::sort(&mut a, SortKey::ByName).unwrap();
    let plain = insertion::sort(&mut b, SortKey::ByName);

    assert_eq!(hybrid, plain);
    assert_eq!(hybrid.allocations, 0);
    assert_eq!(a, b);
}

#[test]
fn merge_insertion_above_threshold_merges() {
    let n = 4 * MERGE_INSERTION_THRESHOLD;
    let mut v = patterns::descending(n);
    let counters = merge_insertion::sort(&mut v, SortKey::ByWeight).unwrap();

    // 64 splits into four runs of 16, joined by three merges.
    assert_eq!(counters.allocations, 6);
    assert!(counters.comparisons > 0);
    assert!(is_sorted(&v, SortKey::ByWeight));
}

#[test]
fn counters_start_at_zero_for_every_call() {
    let original = patterns::monsters(64);

    let mut a = original.clone();
    let first = quicksort::sort(&mut a, SortKey::ByWeight);
    let mut b = original.clone();
    let second = quicksort::sort(&mut b, SortKey::ByWeight);

    assert_eq!(first, second);
}
