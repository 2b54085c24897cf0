//! Contact use-case service.

use crate::model::contact::Contact;
use crate::service::{ServiceError, ServiceResult};
use crate::store::EntityStore;
use log::info;

/// CRUD orchestration for contacts over one store instance.
pub struct ContactService<S: EntityStore<Contact>> {
    store: S,
}

impl<S: EntityStore<Contact>> ContactService<S> {
    /// Takes ownership of the kind's store, constructed once at startup.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates and stores a new contact.
    ///
    /// Allocates the identifier first, then validates through construction;
    /// nothing is written when validation fails.
    pub fn create(
        &self,
        first_name: &str,
        last_name: &str,
        phone: &str,
        address: &str,
    ) -> ServiceResult<Contact> {
        let id = self.store.next_id();
        let contact = Contact::with_id(id, first_name, last_name, phone, address)?;
        let stored = self.store.save(contact);
        info!(
            "event=contact_created module=contact status=ok id={}",
            stored.id()
        );
        Ok(stored)
    }

    pub fn get_by_id(&self, id: &str) -> Option<Contact> {
        self.store.find_by_id(id)
    }

    pub fn get_all(&self) -> Vec<Contact> {
        self.store.find_all()
    }

    /// Replaces the stored contact with a freshly validated value.
    ///
    /// All-or-nothing: any invalid field leaves the stored record untouched.
    ///
    /// # Errors
    /// - `NotFound` when `id` has no stored contact.
    /// - `Invalid` when any incoming field fails its predicate.
    pub fn update(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
        phone: &str,
        address: &str,
    ) -> ServiceResult<Contact> {
        if self.store.find_by_id(id).is_none() {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        let replacement = Contact::with_id(id, first_name, last_name, phone, address)?;
        let stored = self.store.save(replacement);
        info!(
            "event=contact_updated module=contact status=ok id={}",
            stored.id()
        );
        Ok(stored)
    }

    /// Deletes by identifier; absence returns `false`, not an error.
    pub fn delete(&self, id: &str) -> bool {
        let deleted = self.store.delete_by_id(id);
        if deleted {
            info!("event=contact_deleted module=contact status=ok id={id}");
        }
        deleted
    }
}
