//! Appointment use-case service.
//!
//! # Invariants
//! - Date validity is re-checked at every commit point, not carried over
//!   from an earlier validation: an appointment that was future-dated at
//!   creation can still fail a later update.

use crate::model::appointment::Appointment;
use crate::service::{ServiceError, ServiceResult};
use crate::store::EntityStore;
use log::info;

/// CRUD orchestration for appointments over one store instance.
pub struct AppointmentService<S: EntityStore<Appointment>> {
    store: S,
}

impl<S: EntityStore<Appointment>> AppointmentService<S> {
    /// Takes ownership of the kind's store, constructed once at startup.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates and stores a new appointment.
    ///
    /// Allocates the identifier first, then validates through construction;
    /// nothing is written when validation fails.
    pub fn create(&self, starts_at: i64, description: &str) -> ServiceResult<Appointment> {
        let id = self.store.next_id();
        let appointment = Appointment::with_id(id, starts_at, description)?;
        let stored = self.store.save(appointment);
        info!(
            "event=appointment_created module=appointment status=ok id={}",
            stored.id()
        );
        Ok(stored)
    }

    pub fn get_by_id(&self, id: &str) -> Option<Appointment> {
        self.store.find_by_id(id)
    }

    pub fn get_all(&self) -> Vec<Appointment> {
        self.store.find_all()
    }

    /// Replaces the stored appointment with a freshly validated value.
    ///
    /// All-or-nothing: any invalid field leaves the stored record untouched.
    ///
    /// # Errors
    /// - `NotFound` when `id` has no stored appointment.
    /// - `Invalid` when any incoming field fails its predicate.
    pub fn update(&self, id: &str, starts_at: i64, description: &str) -> ServiceResult<Appointment> {
        if self.store.find_by_id(id).is_none() {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        let replacement = Appointment::with_id(id, starts_at, description)?;
        let stored = self.store.save(replacement);
        info!(
            "event=appointment_updated module=appointment status=ok id={}",
            stored.id()
        );
        Ok(stored)
    }

    /// Deletes by identifier; absence returns `false`, not an error.
    pub fn delete(&self, id: &str) -> bool {
        let deleted = self.store.delete_by_id(id);
        if deleted {
            info!("event=appointment_deleted module=appointment status=ok id={id}");
        }
        deleted
    }
}
