//! Address Book Module
//!
//! The in-memory collection of contacts, keyed by ID.
//!
//! ## Responsibilities
//! - CRUD on contacts with duplicate/not-found checks
//! - Case-insensitive substring search
//! - Single-writer/multi-reader access pattern
//!
//! ## Data Structure Choice
//! A BTreeMap wrapped in one RwLock:
//! - Keys are contact IDs, which sort by creation second, so listing
//!   comes out in roughly creation order
//! - `add`/`update`/`delete` take the write lock
//! - `get`/`list_all`/`search` take the read lock and return owned snapshots

mod address_book;

pub use address_book::AddressBook;
