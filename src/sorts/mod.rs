//! The six instrumented sorts. Each module exposes a free `sort` function and a `SortImpl`.

pub mod bubble;
pub mod insertion;
pub mod merge_insertion;
pub mod mergesort;
pub mod quicksort;
pub mod selection;
