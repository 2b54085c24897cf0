//! Per-kind record services.
//!
//! # Responsibility
//! - Orchestrate store operations behind validation gates.
//! - Translate store-level absence into a reportable `NotFound`.
//!
//! # Invariants
//! - Domain errors are raised here and only here, always before any
//!   mutation is committed. A failed operation leaves the store unchanged.
//! - Updates replace the stored record with a freshly validated value; no
//!   service path mutates a stored record in place.

use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod appointment_service;
pub mod contact_service;
pub mod task_service;

pub use appointment_service::AppointmentService;
pub use contact_service::ContactService;
pub use task_service::TaskService;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Three-way outcome surface for service mutations.
///
/// The request layer dispatches on this: `Ok` maps to a success class,
/// `Invalid` to a bad-request class, `NotFound` to a not-found class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A supplied field failed its record-kind predicate.
    Invalid(ValidationError),
    /// The targeted identifier has no stored record.
    NotFound(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Invalid(value)
    }
}
