//! Identity-keyed storage contracts and the in-process implementation.
//!
//! # Responsibility
//! - Define the store contract services depend on.
//! - Keep map and counter details inside the storage boundary.
//!
//! # Invariants
//! - Absence is data, not failure: lookups return `Option`, deletes return
//!   `bool`. The store raises no domain errors of its own.
//! - Stored values are owned exclusively by the store; callers only ever see
//!   clones, and replacement happens whole-value via `save`.

use crate::model::Identified;

pub mod memory;

pub use memory::MemoryStore;

/// Identity-keyed store contract for one record kind.
///
/// One store instance per kind, constructed once at process start and handed
/// to the kind's service. Implementations must be safe for concurrent
/// callers.
pub trait EntityStore<T: Identified> {
    /// Inserts or replaces the record under its identifier.
    ///
    /// When the identifier is empty, a fresh one is minted via [`next_id`]
    /// and assigned before insertion. Returns the stored value with its
    /// identifier populated. Cannot fail: the record was validated at
    /// construction.
    ///
    /// [`next_id`]: EntityStore::next_id
    fn save(&self, entity: T) -> T;

    /// Cloned lookup by identifier. `None` for absent keys, never an error.
    fn find_by_id(&self, id: &str) -> Option<T>;

    /// Defensive snapshot of all records in insertion order.
    ///
    /// The returned vector is detached: mutating it never affects the store.
    /// Callers must not rely on ordering beyond stability within a single
    /// snapshot.
    fn find_all(&self) -> Vec<T>;

    /// Removes the record if present; returns whether a removal occurred.
    fn delete_by_id(&self, id: &str) -> bool;

    /// Mints the next identifier.
    ///
    /// Monotonic and never reused, even after deletion. Concurrent calls
    /// never return the same value.
    fn next_id(&self) -> String;
}
