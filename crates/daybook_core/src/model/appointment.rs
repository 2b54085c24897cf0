//! Appointment record.
//!
//! # Invariants
//! - `starts_at` is strictly in the future at validation time. Validity is
//!   therefore time-dependent: a value that passed at creation can fail a
//!   later re-validation, so update paths must re-check at commit time.
//! - `description` is 1 to `MAX_DESCRIPTION_LEN` characters.

use crate::model::{is_valid_assigned_id, Identified, ValidationError};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum appointment description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 50;

const KIND: &str = "appointment";

/// A scheduled appointment with a future start instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    id: String,
    /// Unix epoch milliseconds.
    starts_at: i64,
    description: String,
}

impl Appointment {
    /// Creates an appointment without an identifier; the store assigns one
    /// on first save.
    ///
    /// # Errors
    /// - `ValidationError("date")` when `starts_at` is not in the future.
    /// - `ValidationError("description")` when the description is empty or
    ///   too long.
    pub fn new(starts_at: i64, description: impl Into<String>) -> Result<Self, ValidationError> {
        Self::build(String::new(), starts_at, description.into())
    }

    /// Creates an appointment with a caller-provided identifier.
    ///
    /// Used when replacing a stored record under its existing identifier.
    pub fn with_id(
        id: impl Into<String>,
        starts_at: i64,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if !is_valid_assigned_id(&id) {
            return Err(ValidationError::new(KIND, "id"));
        }
        Self::build(id, starts_at, description.into())
    }

    fn build(id: String, starts_at: i64, description: String) -> Result<Self, ValidationError> {
        if !Self::is_valid_date(starts_at) {
            return Err(ValidationError::new(KIND, "date"));
        }
        if !Self::is_valid_description(&description) {
            return Err(ValidationError::new(KIND, "description"));
        }
        Ok(Self {
            id,
            starts_at,
            description,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Start instant in Unix epoch milliseconds.
    pub fn starts_at(&self) -> i64 {
        self.starts_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// A start instant is valid only when strictly after the current instant.
    pub fn is_valid_date(starts_at: i64) -> bool {
        starts_at > now_epoch_ms()
    }

    pub fn is_valid_description(description: &str) -> bool {
        let len = description.chars().count();
        (1..=MAX_DESCRIPTION_LEN).contains(&len)
    }
}

impl Identified for Appointment {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Current instant in Unix epoch milliseconds.
fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
