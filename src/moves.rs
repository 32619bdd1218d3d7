//! In-place move primitives shared by the sorts. They do no accounting, callers count.

use crate::monster::Monster;

#[inline]
pub fn swap(v: &mut [Monster], i: usize, j: usize) {
    v.swap(i, j);
}

/// Moves `count` records starting at `src` to start at `dst`.
///
/// Ranges may overlap, this has memmove semantics.
///
/// Panics if either range is out of bounds.
#[inline]
pub fn shift_block(v: &mut [Monster], dst: usize, src: usize, count: usize) {
    v.copy_within(src..src + count, dst);
}
