//! Key/value persistence, the console's analogue of browser local storage.
//!
//! Each piece of state persists under its own string key as a JSON-encoded
//! value, independently read at startup and written on every change. There
//! is no schema versioning; hydration falls back to defaults on corruption.
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod file;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use file::FileStore;
pub use memory::MemoryStore;

/// The persisted entry names, matching the original storage keys.
pub mod keys {
    pub const PAGINATION: &str = "pagination";
    pub const LEAD_STATUS_FILTER: &str = "leadsStatusFilter";
    pub const LEAD_SCORE_SORT: &str = "leadsScoreSort";
    pub const OPPORTUNITIES: &str = "opportunities";
    pub const OPPORTUNITY_SEARCH: &str = "opportunitiesSearch";
    pub const OPPORTUNITY_STAGE_FILTER: &str = "opportunitiesStageFilter";
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A string-keyed store of JSON-encoded values.
///
/// Implementations take `&self`; the single logical writer of the
/// application model means callers never race, but interior mutability keeps
/// the handle shareable across stores.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Reads and decodes the value under `key`, if present.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StorageResult<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encodes and writes `value` under `key`.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Hydration helper: a missing, unreadable or unparsable value falls back to
/// the default, with the failure logged.
pub fn load_json_or_default<T: DeserializeOwned + Default>(
    store: &dyn KeyValueStore,
    key: &str,
) -> T {
    match load_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(err) => {
            log::warn!("Discarding persisted value for {key}: {err}");
            T::default()
        }
    }
}
