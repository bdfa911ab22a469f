//! AddressBook implementation
//!
//! BTreeMap-based contact store with RwLock for concurrency.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::Utc;
use parking_lot::RwLock;

use crate::contact::Contact;
use crate::error::{AddressBookError, Result};

/// Thread-safe collection of contacts keyed by ID
///
/// ## Concurrency:
/// - `contacts`: one RwLock over the whole map
/// - Writers (`add`, `update`, `delete`) exclude everyone else
/// - Readers (`get`, `list_all`, `search`, `len`) run concurrently
/// - All methods use `&self`; share it through an `Arc`
#[derive(Debug, Default)]
pub struct AddressBook {
    contacts: RwLock<BTreeMap<String, Contact>>,
}

impl AddressBook {
    /// Create a new empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new contact (write lock)
    ///
    /// Fails with `DuplicateId` if the ID is taken; the existing record is
    /// left untouched.
    pub fn add(&self, contact: Contact) -> Result<()> {
        let mut contacts = self.contacts.write();

        match contacts.entry(contact.id.clone()) {
            Entry::Occupied(_) => Err(AddressBookError::DuplicateId(contact.id)),
            Entry::Vacant(slot) => {
                slot.insert(contact);
                Ok(())
            }
        }
    }

    /// Get a snapshot of a contact by ID (read lock)
    pub fn get(&self, id: &str) -> Result<Contact> {
        self.contacts
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| AddressBookError::NotFound(id.to_string()))
    }

    /// Replace a stored contact (write lock)
    ///
    /// The stored creation time is kept and `updated_at` is set to now,
    /// never moving backwards. Whatever timestamps the caller supplied are
    /// ignored.
    pub fn update(&self, mut contact: Contact) -> Result<()> {
        let mut contacts = self.contacts.write();

        let stored = contacts
            .get_mut(&contact.id)
            .ok_or_else(|| AddressBookError::NotFound(contact.id.clone()))?;

        contact.created_at = stored.created_at;
        contact.updated_at = Utc::now().max(stored.updated_at);
        *stored = contact;

        Ok(())
    }

    /// Remove a contact by ID (write lock)
    pub fn delete(&self, id: &str) -> Result<()> {
        self.contacts
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AddressBookError::NotFound(id.to_string()))
    }

    /// Snapshot of every contact, ordered by ID (read lock)
    pub fn list_all(&self) -> Vec<Contact> {
        self.contacts.read().values().cloned().collect()
    }

    /// Contacts whose first name, last name or email contains `query`,
    /// ignoring case. An empty query matches everything. (read lock)
    pub fn search(&self, query: &str) -> Vec<Contact> {
        let needle = query.to_lowercase();

        self.contacts
            .read()
            .values()
            .filter(|contact| contact.matches(&needle))
            .cloned()
            .collect()
    }

    /// Check whether an ID is present
    pub fn contains(&self, id: &str) -> bool {
        self.contacts.read().contains_key(id)
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.contacts.read().len()
    }

    /// Check if the book holds no contacts
    pub fn is_empty(&self) -> bool {
        self.contacts.read().is_empty()
    }
}
