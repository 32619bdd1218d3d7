//! Provides sets of monsters useful for testing and benchmarking the sorts.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use once_cell::sync::OnceCell;

use crate::monster::Monster;

/// Upper bound (exclusive) of generated weights.
pub const MAX_WEIGHT: f64 = 500.0;

// --- Public ---

pub fn monsters(size: usize) -> Vec<Monster> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seed();

    (0..size)
        .map(|i| {
            let name = format!("Monster #{}", rng.gen_range(0..=i32::MAX));
            let element = format!("Element #{}", rng.gen_range(0..=i32::MAX));
            let population = rng.gen_range(0..=i32::MAX) as u32;
            let weight = rng.gen_range(0.0..MAX_WEIGHT);

            monster(i, &name, &element, population, weight)
        })
        .collect()
}

/// One monster per weight, ids follow the slice order.
pub fn from_weights(weights: &[f64]) -> Vec<Monster> {
    weights
        .iter()
        .enumerate()
        .map(|(i, &w)| monster(i, &format!("Monster #{i}"), "Element #0", 0, w))
        .collect()
}

pub fn random_weights_uniform<R>(size: usize, range: R) -> Vec<Monster>
where
    R: Into<rand::distributions::Uniform<u32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<u32> = range.into();

    let weights = (0..size)
        .map(|_| dist.sample(&mut rng) as f64)
        .collect::<Vec<_>>();

    from_weights(&weights)
}

pub fn all_equal(size: usize) -> Vec<Monster> {
    // ......
    // ::::::

    (0..size)
        .map(|i| monster(i, "Monster #66", "Element #66", 66, 66.0))
        .collect()
}

/// Ascending in both weight and name.
pub fn ascending(size: usize) -> Vec<Monster> {
    //     .:
    //   .:::
    // .:::::

    (0..size).map(ordered_monster).collect()
}

/// Descending in both weight and name.
pub fn descending(size: usize) -> Vec<Monster> {
    // :.
    // :::.
    // :::::.

    (0..size).rev().map(ordered_monster).collect()
}

pub fn pipe_organ(size: usize) -> Vec<Monster> {
    //   .:.
    // .:::::.

    let mut v = monsters(size);

    let (first_half, second_half) = v.split_at_mut(size / 2);
    first_half.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
    second_half.sort_by(|a, b| b.weight().total_cmp(&a.weight()));

    v
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);
static SEED: OnceCell<u64> = OnceCell::new();

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// Pins the process wide seed. Returns false if a seed was already chosen.
pub fn set_seed(seed: u64) -> bool {
    SEED.set(seed).is_ok()
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_seed() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn monster(i: usize, name: &str, element: &str, population: u32, weight: f64) -> Monster {
    // Generated text is far below the bounds and weights lie in [0, MAX_WEIGHT).
    Monster::new(i as u32, name, element, population, weight)
        .unwrap_or_else(|e| panic!("generated invalid monster {i}: {e}"))
}

fn ordered_monster(i: usize) -> Monster {
    // Zero padded so the lexicographic name order matches the numeric one.
    monster(
        i,
        &format!("Monster #{i:010}"),
        &format!("Element #{i}"),
        i as u32,
        i as f64,
    )
}
