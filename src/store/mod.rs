//! In-memory keyed store for live games
//!
//! [`GameStore`] knows nothing about game rules. It maps an opaque id to a
//! record behind a single reader/writer lock: reads share it, mutations take
//! it exclusively and only for the map operation itself.
//!
//! Nothing here is persisted; the store lives as long as the process.

mod shared;

pub use shared::SharedStore;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

/// Errors raised by store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("invalid id: must not be empty")]
    InvalidId,
    #[error("no record stored for id {0}")]
    NotFound(String),
}

/// Concurrency-safe map from id to record
#[derive(Debug)]
pub struct GameStore<V> {
    records: RwLock<FxHashMap<String, V>>,
}

impl<V: Clone> GameStore<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(FxHashMap::default()),
        }
    }

    /// Insert or overwrite the record stored at `id`
    ///
    /// # Errors
    /// Returns `StoreError::InvalidId` if `id` is empty or blank.
    pub fn save(&self, id: &str, record: V) -> Result<(), StoreError> {
        validate_id(id)?;

        let replaced = self.records.write().insert(id.to_string(), record).is_some();
        debug!(id, replaced, "record saved");
        Ok(())
    }

    /// Load a copy of the record stored at `id`
    ///
    /// An unknown id is not an error: it yields `Ok(None)`.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidId` if `id` is empty or blank.
    pub fn load(&self, id: &str) -> Result<Option<V>, StoreError> {
        validate_id(id)?;
        Ok(self.records.read().get(id).cloned())
    }

    /// Whether a record is stored at `id`
    ///
    /// # Errors
    /// Returns `StoreError::InvalidId` if `id` is empty or blank.
    pub fn exists(&self, id: &str) -> Result<bool, StoreError> {
        validate_id(id)?;
        Ok(self.records.read().contains_key(id))
    }

    /// Remove the record stored at `id`
    ///
    /// # Errors
    /// Returns `StoreError::InvalidId` if `id` is empty or blank, and
    /// `StoreError::NotFound` if nothing is stored at `id`.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        validate_id(id)?;

        if self.records.write().remove(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        debug!(id, "record deleted");
        Ok(())
    }

    /// Remove every record
    pub fn purge_all(&self) {
        let mut records = self.records.write();
        let purged = records.len();
        records.clear();
        drop(records);
        debug!(purged, "store purged");
    }

    /// Ids of every stored record, in no particular order
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.records.read().keys().cloned().collect()
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<V: Clone> Default for GameStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_id(id: &str) -> Result<(), StoreError> {
    if id.trim().is_empty() {
        return Err(StoreError::InvalidId);
    }
    Ok(())
}
