//! Ordering of monsters by the two supported keys.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SortError;
use crate::monster::Monster;

/// Selects which field drives the ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    ByName,
    ByWeight,
}

impl SortKey {
    /// Decodes the two flag selector used by the benchmark schedule. Name wins if both are set.
    pub fn from_flags(use_name: bool, use_weight: bool) -> Result<Self, SortError> {
        match (use_name, use_weight) {
            (true, _) => Ok(SortKey::ByName),
            (false, true) => Ok(SortKey::ByWeight),
            (false, false) => Err(SortError::InvalidKey("<none>".into())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::ByName => "name",
            SortKey::ByWeight => "weight",
        }
    }
}

impl FromStr for SortKey {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::ByName),
            "weight" => Ok(SortKey::ByWeight),
            _ => Err(SortError::InvalidKey(s.into())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[inline]
pub fn compare(a: &Monster, b: &Monster, key: SortKey) -> Ordering {
    match key {
        SortKey::ByName => a.name().cmp(b.name()),
        // Weights are validated to be finite and non-negative, total_cmp agrees with `<`.
        SortKey::ByWeight => a.weight().total_cmp(&b.weight()),
    }
}

/// `a >= b` under `key`. Every algorithm decides with this predicate, which is true on ties.
#[inline]
pub fn is_not_less(a: &Monster, b: &Monster, key: SortKey) -> bool {
    compare(a, b, key) != Ordering::Less
}
