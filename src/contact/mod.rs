//! Contact Module
//!
//! A single person record in the address book.
//!
//! ## Responsibilities
//! - Assign a unique, roughly time-ordered ID at creation
//! - Stamp `created_at`/`updated_at`
//! - JSON encoding of all eight fields
//!
//! The ID and creation time never change once assigned; only the store may
//! move `updated_at` forward.

mod id;

pub use id::{generate_id, ID_TIMESTAMP_FORMAT};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AddressBookError, Result};

/// A person record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub(crate) id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Contact {
    /// Create a contact with a fresh ID; no field validation is performed
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(now),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// "First Last", skipping an empty half
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            _ => self.last_name.clone(),
        }
    }

    /// Case-insensitive substring match on first name, last name or email.
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        [&self.first_name, &self.last_name, &self.email]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Encode as a JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a JSON object produced by [`Contact::to_json`]
    ///
    /// Fails with `MalformedRecord` on bad structure, missing fields,
    /// non-RFC 3339 timestamps, an empty ID, or `updatedAt < createdAt`.
    pub fn from_json(json: &str) -> Result<Self> {
        let contact: Self = serde_json::from_str(json)?;
        contact.check_invariants()?;
        Ok(contact)
    }

    pub(crate) fn check_invariants(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(AddressBookError::malformed("contact ID is empty"));
        }
        if self.updated_at < self.created_at {
            return Err(AddressBookError::malformed(format!(
                "contact {}: UpdatedAt {} precedes CreatedAt {}",
                self.id, self.updated_at, self.created_at
            )));
        }
        Ok(())
    }
}
