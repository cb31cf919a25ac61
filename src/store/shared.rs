//! Lazily created, resettable store slot
//!
//! Applications normally build one [`GameStore`] at startup and hand it to
//! the engine. `SharedStore` covers callers that want the store created on
//! first use instead: concurrent first callers race safely to a single
//! instance, and test harnesses can tear it down with [`SharedStore::reset`].

use super::GameStore;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// A slot holding at most one shared [`GameStore`]
#[derive(Debug)]
pub struct SharedStore<V> {
    slot: RwLock<Option<Arc<GameStore<V>>>>,
}

impl<V: Clone> SharedStore<V> {
    /// An empty slot; usable in a `static`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: parking_lot::const_rwlock(None),
        }
    }

    /// The shared store, creating it on first call
    pub fn get(&self) -> Arc<GameStore<V>> {
        if let Some(store) = self.slot.read().as_ref() {
            return Arc::clone(store);
        }

        // Re-check under the write lock: another caller may have won the race
        let mut slot = self.slot.write();
        Arc::clone(slot.get_or_insert_with(|| {
            debug!("shared store created");
            Arc::new(GameStore::new())
        }))
    }

    /// Whether the store has been created
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.slot.read().is_some()
    }

    /// Drop the shared store so the next [`get`](Self::get) builds a fresh one
    ///
    /// Handles obtained earlier keep the old store alive.
    pub fn reset(&self) {
        self.slot.write().take();
    }
}

impl<V: Clone> Default for SharedStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
