//! Task use-case service.

use crate::model::task::Task;
use crate::service::{ServiceError, ServiceResult};
use crate::store::EntityStore;
use log::info;

/// CRUD orchestration for tasks over one store instance.
pub struct TaskService<S: EntityStore<Task>> {
    store: S,
}

impl<S: EntityStore<Task>> TaskService<S> {
    /// Takes ownership of the kind's store, constructed once at startup.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates and stores a new task.
    ///
    /// Allocates the identifier first, then validates through construction;
    /// nothing is written when validation fails.
    pub fn create(&self, name: &str, description: &str) -> ServiceResult<Task> {
        let id = self.store.next_id();
        let task = Task::with_id(id, name, description)?;
        let stored = self.store.save(task);
        info!("event=task_created module=task status=ok id={}", stored.id());
        Ok(stored)
    }

    pub fn get_by_id(&self, id: &str) -> Option<Task> {
        self.store.find_by_id(id)
    }

    pub fn get_all(&self) -> Vec<Task> {
        self.store.find_all()
    }

    /// Replaces the stored task with a freshly validated value.
    ///
    /// All-or-nothing: any invalid field leaves the stored record untouched.
    ///
    /// # Errors
    /// - `NotFound` when `id` has no stored task.
    /// - `Invalid` when any incoming field fails its predicate.
    pub fn update(&self, id: &str, name: &str, description: &str) -> ServiceResult<Task> {
        if self.store.find_by_id(id).is_none() {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        let replacement = Task::with_id(id, name, description)?;
        let stored = self.store.save(replacement);
        info!("event=task_updated module=task status=ok id={}", stored.id());
        Ok(stored)
    }

    /// Deletes by identifier; absence returns `false`, not an error.
    pub fn delete(&self, id: &str) -> bool {
        let deleted = self.store.delete_by_id(id);
        if deleted {
            info!("event=task_deleted module=task status=ok id={id}");
        }
        deleted
    }
}
