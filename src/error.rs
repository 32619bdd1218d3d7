use thiserror::Error;

/// Failures of the sort engine and of record construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortError {
    #[error("invalid sort key `{0}`, expected `name` or `weight`")]
    InvalidKey(String),

    /// A merge buffer could not be reserved. The input may already be partially overwritten, so
    /// callers must not use it any further.
    #[error("failed to allocate a merge buffer for {records} records")]
    AllocationFailure { records: usize },

    #[error("text of {len} bytes exceeds the limit of {max} bytes")]
    TextTooLong { len: usize, max: usize },

    #[error("text must not contain NUL bytes")]
    InvalidText,

    #[error("weight must be a non-negative number, got {0}")]
    InvalidWeight(f64),
}

/// Failures while reading the runner configuration from the environment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{var}: `{value}` is not a valid size")]
    InvalidSize { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidKey {
        var: &'static str,
        #[source]
        source: SortError,
    },

    #[error("{var}: `{value}` is not a valid u64 seed")]
    InvalidSeed { var: &'static str, value: String },

    #[error("{var}: `{value}` is not a boolean flag")]
    InvalidFlag { var: &'static str, value: String },
}
