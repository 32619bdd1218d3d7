//! Runner configuration, read from `MONSTER_*` environment variables.

use std::env;
use std::str::FromStr;

use crate::compare::SortKey;
use crate::error::ConfigError;

pub const SIZES_VAR: &str = "MONSTER_SIZES";
pub const KEYS_VAR: &str = "MONSTER_KEYS";
pub const FAST_ONLY_FROM_VAR: &str = "MONSTER_FAST_ONLY_FROM";
pub const SEED_VAR: &str = "MONSTER_SEED";
pub const PRINT_LISTS_VAR: &str = "MONSTER_PRINT_LISTS";

/// Sets larger than this are never dumped, even with `MONSTER_PRINT_LISTS` set.
pub const PRINT_LISTS_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub keys: Vec<SortKey>,
    /// From this size on the quadratic sorts are skipped.
    pub fast_only_from: usize,
    pub seed: Option<u64>,
    pub print_lists: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![50, 500, 5_000, 50_000, 500_000],
            keys: vec![SortKey::ByWeight, SortKey::ByName],
            fast_only_from: 50_000,
            seed: None,
            print_lists: false,
        }
    }
}

impl BenchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars())
    }

    /// Builds a config from `(name, value)` pairs, unknown names are ignored and missing ones keep
    /// their default.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (name, value) in vars {
            let value = value.as_ref();

            match name.as_ref() {
                SIZES_VAR => {
                    config.sizes = parse_list(value, |s| {
                        usize::from_str(s).map_err(|_| ConfigError::InvalidSize {
                            var: SIZES_VAR,
                            value: s.into(),
                        })
                    })?;
                }
                KEYS_VAR => {
                    config.keys = parse_list(value, |s| {
                        SortKey::from_str(s).map_err(|source| ConfigError::InvalidKey {
                            var: KEYS_VAR,
                            source,
                        })
                    })?;
                }
                FAST_ONLY_FROM_VAR => {
                    config.fast_only_from =
                        usize::from_str(value.trim()).map_err(|_| ConfigError::InvalidSize {
                            var: FAST_ONLY_FROM_VAR,
                            value: value.into(),
                        })?;
                }
                SEED_VAR => {
                    let seed = u64::from_str(value.trim()).map_err(|_| ConfigError::InvalidSeed {
                        var: SEED_VAR,
                        value: value.into(),
                    })?;
                    config.seed = Some(seed);
                }
                PRINT_LISTS_VAR => {
                    config.print_lists = parse_flag(PRINT_LISTS_VAR, value)?;
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Whether bubble, selection and insertion sort are run for a set of `size` monsters.
    pub fn runs_slow_sorts(&self, size: usize) -> bool {
        size < self.fast_only_from
    }

    pub fn prints_list(&self, size: usize) -> bool {
        self.print_lists && size <= PRINT_LISTS_MAX_LEN
    }
}

fn parse_list<T>(
    value: &str,
    parse: impl Fn(&str) -> Result<T, ConfigError>,
) -> Result<Vec<T>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse)
        .collect()
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.into(),
        }),
    }
}
