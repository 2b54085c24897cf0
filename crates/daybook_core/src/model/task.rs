//! Task record.
//!
//! # Invariants
//! - `name` is 1 to `MAX_NAME_LEN` characters.
//! - `description` is 1 to `MAX_DESCRIPTION_LEN` characters.

use crate::model::{is_valid_assigned_id, Identified, ValidationError};
use serde::Serialize;

/// Maximum task name length in characters.
pub const MAX_NAME_LEN: usize = 20;
/// Maximum task description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 50;

const KIND: &str = "task";

/// A named to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: String,
    name: String,
    description: String,
}

impl Task {
    /// Creates a task without an identifier; the store assigns one on first
    /// save.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::build(String::new(), name.into(), description.into())
    }

    /// Creates a task with a caller-provided identifier.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if !is_valid_assigned_id(&id) {
            return Err(ValidationError::new(KIND, "id"));
        }
        Self::build(id, name.into(), description.into())
    }

    fn build(id: String, name: String, description: String) -> Result<Self, ValidationError> {
        if !Self::is_valid_name(&name) {
            return Err(ValidationError::new(KIND, "name"));
        }
        if !Self::is_valid_description(&description) {
            return Err(ValidationError::new(KIND, "description"));
        }
        Ok(Self {
            id,
            name,
            description,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_valid_name(name: &str) -> bool {
        let len = name.chars().count();
        (1..=MAX_NAME_LEN).contains(&len)
    }

    pub fn is_valid_description(description: &str) -> bool {
        let len = description.chars().count();
        (1..=MAX_DESCRIPTION_LEN).contains(&len)
    }
}

impl Identified for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
