//! Contact record.
//!
//! # Invariants
//! - Names are 1 to `MAX_NAME_LEN` characters each.
//! - `phone` is exactly ten ASCII digits.
//! - `address` is 1 to `MAX_ADDRESS_LEN` characters.

use crate::model::{is_valid_assigned_id, Identified, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Maximum first/last name length in characters.
pub const MAX_NAME_LEN: usize = 10;
/// Maximum address length in characters.
pub const MAX_ADDRESS_LEN: usize = 30;

const KIND: &str = "contact";

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

/// An address-book contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    id: String,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,
}

impl Contact {
    /// Creates a contact without an identifier; the store assigns one on
    /// first save.
    ///
    /// # Errors
    /// `ValidationError` naming the first field that fails its predicate;
    /// no value is constructed in that case.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::build(
            String::new(),
            first_name.into(),
            last_name.into(),
            phone.into(),
            address.into(),
        )
    }

    /// Creates a contact with a caller-provided identifier.
    pub fn with_id(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if !is_valid_assigned_id(&id) {
            return Err(ValidationError::new(KIND, "id"));
        }
        Self::build(
            id,
            first_name.into(),
            last_name.into(),
            phone.into(),
            address.into(),
        )
    }

    fn build(
        id: String,
        first_name: String,
        last_name: String,
        phone: String,
        address: String,
    ) -> Result<Self, ValidationError> {
        if !Self::is_valid_name(&first_name) {
            return Err(ValidationError::new(KIND, "first_name"));
        }
        if !Self::is_valid_name(&last_name) {
            return Err(ValidationError::new(KIND, "last_name"));
        }
        if !Self::is_valid_phone(&phone) {
            return Err(ValidationError::new(KIND, "phone"));
        }
        if !Self::is_valid_address(&address) {
            return Err(ValidationError::new(KIND, "address"));
        }
        Ok(Self {
            id,
            first_name,
            last_name,
            phone,
            address,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Applies to both first and last name.
    pub fn is_valid_name(name: &str) -> bool {
        let len = name.chars().count();
        (1..=MAX_NAME_LEN).contains(&len)
    }

    /// Exactly ten ASCII digits, no separators.
    pub fn is_valid_phone(phone: &str) -> bool {
        PHONE_RE.is_match(phone)
    }

    pub fn is_valid_address(address: &str) -> bool {
        let len = address.chars().count();
        (1..=MAX_ADDRESS_LEN).contains(&len)
    }
}

impl Identified for Contact {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
