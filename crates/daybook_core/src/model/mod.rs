//! Domain model for daybook records.
//!
//! # Responsibility
//! - Define the three record kinds (appointment, contact, task) with their
//!   field constraints.
//! - Expose the `Identified` capability every storable record satisfies.
//!
//! # Invariants
//! - A record is never observable with an invalid field: constructors return
//!   `Err(ValidationError)` instead of a half-built value.
//! - An empty identifier means "not yet assigned"; a non-empty identifier is
//!   1 to `MAX_ID_LEN` characters.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod appointment;
pub mod contact;
pub mod task;

/// Maximum identifier length shared by all record kinds.
pub const MAX_ID_LEN: usize = 10;

/// Capability for records that carry a store-managed string identifier.
///
/// The store is the only caller of `set_id`, and only with counter-minted
/// decimal identifiers, which always satisfy the identifier rule.
pub trait Identified {
    /// Current identifier. Empty when the record has not been saved yet.
    fn id(&self) -> &str;

    /// Assigns a store-minted identifier.
    fn set_id(&mut self, id: String);
}

/// A supplied field value failed its record-kind predicate.
///
/// Carries the record kind and the offending field so callers can map the
/// failure to a user-visible message without string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    kind: &'static str,
    field: &'static str,
}

impl ValidationError {
    pub(crate) fn new(kind: &'static str, field: &'static str) -> Self {
        Self { kind, field }
    }

    /// Record kind the failing value belongs to, e.g. `"contact"`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Name of the field that failed validation, e.g. `"phone"`.
    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} field: {}", self.kind, self.field)
    }
}

impl Error for ValidationError {}

/// Identifier rule for assigned identifiers.
///
/// `with_id` constructors reject values failing this; the empty pre-save
/// state never goes through here.
pub(crate) fn is_valid_assigned_id(id: &str) -> bool {
    !id.is_empty() && id.chars().count() <= MAX_ID_LEN
}
