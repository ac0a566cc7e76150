//! Shared handles for using the store from more than one thread.
//!
//! None of the table, stack or history types synchronize internally; a
//! rehash rewrites the whole slot array. A single exclusive lock around the
//! whole structure is the only supported way to share one.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::history::EntityHistory;
use crate::table::EntityHashTable;

pub type Shared<T> = Arc<Mutex<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(Mutex::new(value))
}

pub fn shared_table(config: &StoreConfig) -> StoreResult<Shared<EntityHashTable>> {
    Ok(shared(EntityHashTable::with_config(config)?))
}

pub fn shared_history(config: &StoreConfig) -> StoreResult<Shared<EntityHistory>> {
    Ok(shared(EntityHistory::with_config(config)?))
}

/// Table and history sized by the JSON config file at `path`
pub fn shared_store(
    path: &Path,
) -> StoreResult<(Shared<EntityHashTable>, Shared<EntityHistory>)> {
    let config = StoreConfig::load(path)?;
    Ok((shared_table(&config)?, shared_history(&config)?))
}
