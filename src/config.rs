use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, PrimeError, StackError};
use crate::primes::{DEFAULT_CAPACITY_SEED, DEFAULT_SIEVE_BOUND, MAX_SIEVE_BOUND};
use crate::stack::DEFAULT_CAPACITY;

/// Sizing knobs for the entity store. The load factor is fixed at
/// [`LOAD_FACTOR`](crate::table::LOAD_FACTOR) and not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults
pub struct StoreConfig {
    /// Upper bound of the sieve that pre-computes table capacities
    pub sieve_bound: i64,
    /// The table starts at the smallest prime at or above this value
    pub initial_capacity_seed: i64,
    /// Slots in the bounded redo buffer
    pub garbage_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            sieve_bound: DEFAULT_SIEVE_BOUND,
            initial_capacity_seed: DEFAULT_CAPACITY_SEED,
            garbage_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StoreConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded store config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Runs the same range checks the constructors would, without sieving.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_SIEVE_BOUND).contains(&self.sieve_bound) {
            return Err(PrimeError::InvalidBound(self.sieve_bound).into());
        }
        if self.initial_capacity_seed < 2 || self.initial_capacity_seed >= self.sieve_bound {
            return Err(PrimeError::InvalidSeed {
                seed: self.initial_capacity_seed,
                bound: self.sieve_bound,
            }
            .into());
        }
        if self.garbage_capacity == 0 {
            return Err(StackError::InvalidCapacity(0).into());
        }
        Ok(())
    }
}
