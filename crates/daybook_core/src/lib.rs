//! Core domain logic for Daybook.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::appointment::Appointment;
pub use model::contact::Contact;
pub use model::task::Task;
pub use model::{Identified, ValidationError, MAX_ID_LEN};
pub use service::{
    AppointmentService, ContactService, ServiceError, ServiceResult, TaskService,
};
pub use store::{EntityStore, MemoryStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
