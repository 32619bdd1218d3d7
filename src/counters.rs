use std::fmt;
use std::ops::AddAssign;

/// Cost of a single sort call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
    /// Individual record copies, and records moved by block shifts.
    pub copies: u64,
    /// Contiguous moves, counted once regardless of their length.
    pub block_copies: u64,
    /// Buffers allocated by out-of-place algorithms.
    pub allocations: u64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, other: Self) {
        self.comparisons += other.comparisons;
        self.swaps += other.swaps;
        self.copies += other.copies;
        self.block_copies += other.block_copies;
        self.allocations += other.allocations;
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} comparisons, {} swaps, {} block copies, {} total copies, {} mallocs",
            self.comparisons, self.swaps, self.block_copies, self.copies, self.allocations
        )
    }
}
