use crate::compare::SortKey;
use crate::counters::Counters;
use crate::error::SortError;
use crate::monster::Monster;

/// Common interface of every instrumented sort, so the runner, tests and benchmarks can be
/// generic over the algorithm.
pub trait Sort {
    fn name() -> String;

    fn sort(v: &mut [Monster], key: SortKey) -> Result<Counters, SortError>;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(
                v: &mut [crate::monster::Monster],
                key: crate::compare::SortKey,
            ) -> Result<crate::counters::Counters, crate::error::SortError> {
                Ok(sort(v, key))
            }
        }
    };
    // For algorithms that allocate and can therefore fail.
    ($name:expr, fallible) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(
                v: &mut [crate::monster::Monster],
                key: crate::compare::SortKey,
            ) -> Result<crate::counters::Counters, crate::error::SortError> {
                sort(v, key)
            }
        }
    };
}

pub mod compare;
pub mod config;
pub mod counters;
pub mod error;
pub mod monster;
pub mod moves;
pub mod patterns;
pub mod verify;

pub mod sorts;
