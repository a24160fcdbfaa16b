use std::path::PathBuf;

use crate::common::{AirlineDataError, Error};

pub const DEFAULT_DB_PATH: &str = "airline-data.db";
pub const DB_PATH_ENV: &str = "AIRLINE_DB_PATH";
pub const SEED_ENV: &str = "AIRLINE_SEED";

/// Number of records generated per table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCounts {
    pub airlines: u32,
    pub airports: u32,
    pub aircrafts: u32,
    pub flights: u32,
    pub passengers: u32,
    pub bookings: u32,
}

impl Default for RecordCounts {
    fn default() -> Self {
        Self {
            airlines: 5,
            airports: 20,
            aircrafts: 50,
            flights: 100,
            passengers: 500,
            bookings: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub counts: RecordCounts,
    /// `None` draws from OS entropy, so every run differs.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            counts: RecordCounts::default(),
            seed: None,
        }
    }
}

impl Config {
    /// Defaults, overridden by `AIRLINE_DB_PATH` and `AIRLINE_SEED` when set.
    ///
    /// # Errors
    ///
    /// When the seed is not a valid `u64`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();

        if let Some(db_path) = lookup(DB_PATH_ENV) {
            config.db_path = PathBuf::from(db_path);
        }

        if let Some(raw_seed) = lookup(SEED_ENV) {
            let seed = raw_seed
                .trim()
                .parse::<u64>()
                .map_err(|_| AirlineDataError::InvalidEnvVar {
                    var: SEED_ENV,
                    value: raw_seed.clone(),
                })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }
}
