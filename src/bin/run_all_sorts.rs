use std::error::Error;
use std::time::Instant;

use log::{debug, error, info, warn, LevelFilter};

use monster_sorts::compare::SortKey;
use monster_sorts::config::BenchConfig;
use monster_sorts::counters::Counters;
use monster_sorts::monster::Monster;
use monster_sorts::sorts::{bubble, insertion, merge_insertion, mergesort, quicksort, selection};
use monster_sorts::verify::{check_sorted, Verification};
use monster_sorts::{patterns, Sort};

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = BenchConfig::from_env()?;

    if let Some(seed) = config.seed {
        patterns::set_seed(seed);
    }
    println!("Seed: {}\n", patterns::random_init_seed());

    for &size in &config.sizes {
        for &key in &config.keys {
            run_all_sorts(&config, size, key)?;
        }
    }

    Ok(())
}

fn run_all_sorts(config: &BenchConfig, size: usize, key: SortKey) -> Result<(), Box<dyn Error>> {
    let only_fast = !config.runs_slow_sorts(size);
    info!("sort set n = {size} by {key}, only_fast = {only_fast}");

    let canonical = patterns::monsters(size);

    println!(
        "SORT SET: n = {size}, {}, by {key}\n",
        if only_fast {
            "fast sorts only"
        } else {
            "all sorts"
        }
    );

    if config.prints_list(size) {
        output_monster_list(&canonical, "unsorted");
    }

    if !only_fast {
        run_sort::<bubble::SortImpl>(config, &canonical, key)?;
        run_sort::<selection::SortImpl>(config, &canonical, key)?;
        run_sort::<insertion::SortImpl>(config, &canonical, key)?;
    }

    run_sort::<quicksort::SortImpl>(config, &canonical, key)?;
    run_sort::<mergesort::SortImpl>(config, &canonical, key)?;
    run_sort::<merge_insertion::SortImpl>(config, &canonical, key)?;

    println!("SORT SET COMPLETE\n");

    Ok(())
}

/// Sorts a fresh copy of `canonical` with `S`, then reports cost and verifies the result.
fn run_sort<S: Sort>(
    config: &BenchConfig,
    canonical: &[Monster],
    key: SortKey,
) -> Result<(), Box<dyn Error>> {
    let name = S::name();
    let mut v = canonical.to_vec();

    println!("{} sort {} monsters by {key}...", title(&name), v.len());

    let start = Instant::now();
    let counters = S::sort(&mut v, key)?;
    let elapsed = start.elapsed();

    debug!("{name}: {counters:?} in {elapsed:?}");

    println!("Sort complete with {}.", report(&name, &counters));
    println!("  {:.6}s CPU time used", elapsed.as_secs_f64());

    if config.prints_list(v.len()) {
        output_monster_list(&v, &format!("after {name} sort"));
    }

    match check_sorted(&v, key) {
        Verification::Sorted => println!("The list is sorted.\n"),
        Verification::Unsorted { index } => {
            warn!("{name} by {key}: monsters {} and {index} are out of order", index - 1);
            println!("*** The list is NOT sorted.\n");
        }
    }

    Ok(())
}

fn title(name: &str) -> String {
    let spaced = name.replace('_', "-");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}

/// Only the counters an algorithm actually maintains.
fn report(name: &str, c: &Counters) -> String {
    match name {
        "bubble" | "selection" | "quicksort" => {
            format!("{} comparisons and {} swaps", c.comparisons, c.swaps)
        }
        "insertion" => format!(
            "{} comparisons and {} block copies ({} total copies)",
            c.comparisons, c.block_copies, c.copies
        ),
        _ => format!(
            "{} comparisons, {} block copies, {} total copies, {} mallocs",
            c.comparisons, c.block_copies, c.copies, c.allocations
        ),
    }
}

fn output_monster_list(list: &[Monster], title: &str) {
    println!("List {title}:");
    for (i, monster) in list.iter().enumerate() {
        println!("  Monster {i}: {monster}");
    }
    println!();
}
