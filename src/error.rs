use thiserror::Error;

/// Errors raised while building the prime capacity sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimeError {
    #[error("sieve bound {0} is outside [2, {}]", crate::primes::MAX_SIEVE_BOUND)]
    InvalidBound(i64),

    #[error("growth seed {seed} must be in [2, {bound})")]
    InvalidSeed { seed: i64, bound: i64 },
}

/// Errors raised by the entity stacks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack is empty")]
    Empty,

    #[error("{0} does not support iteration")]
    UnsupportedOperation(&'static str),

    #[error("stack capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

/// Errors that can occur while loading a store configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid prime settings: {0}")]
    Prime(#[from] PrimeError),

    #[error("Invalid stack settings: {0}")]
    Stack(#[from] StackError),
}

/// Any error the store can surface to its caller
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Prime(#[from] PrimeError),

    #[error(transparent)]
    Stack(#[from] StackError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for fallible store operations
pub type StoreResult<T> = Result<T, StoreError>;
