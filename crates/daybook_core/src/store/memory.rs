//! In-process identity-keyed store.
//!
//! # Responsibility
//! - Own the identifier-to-record map for one record kind.
//! - Mint monotonically increasing decimal identifiers.
//!
//! # Invariants
//! - Structural map changes happen under one exclusive lock.
//! - The identifier counter is independent of the map lock, so allocation
//!   never blocks readers.
//! - Records live and die with the process; there is no durability contract.

use crate::model::Identified;
use crate::store::EntityStore;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Insertion-ordered in-memory store for one record kind.
///
/// Values go in and come out as clones; nothing outside the store ever
/// aliases a stored record, so replacement via [`EntityStore::save`] is the
/// only way stored state changes.
#[derive(Debug)]
pub struct MemoryStore<T> {
    entries: RwLock<IndexMap<String, T>>,
    id_counter: AtomicU64,
}

impl<T> MemoryStore<T> {
    /// Creates an empty store with the identifier counter at zero, so the
    /// first minted identifier is `"1"`.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
            id_counter: AtomicU64::new(0),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identified + Clone> EntityStore<T> for MemoryStore<T> {
    fn save(&self, mut entity: T) -> T {
        if entity.id().is_empty() {
            entity.set_id(self.next_id());
        }
        let mut entries = self.entries.write();
        entries.insert(entity.id().to_string(), entity.clone());
        entity
    }

    fn find_by_id(&self, id: &str) -> Option<T> {
        self.entries.read().get(id).cloned()
    }

    fn find_all(&self) -> Vec<T> {
        self.entries.read().values().cloned().collect()
    }

    fn delete_by_id(&self, id: &str) -> bool {
        // shift_remove keeps the remaining records in insertion order.
        self.entries.write().shift_remove(id).is_some()
    }

    fn next_id(&self) -> String {
        let minted = self.id_counter.fetch_add(1, Ordering::SeqCst) + 1;
        minted.to_string()
    }
}
