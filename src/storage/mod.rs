//! Storage Module
//!
//! Persistent storage layer using a flat CSV table.
//!
//! ## Responsibilities
//! - Snapshot an [`AddressBook`] to disk (full rewrite on every save)
//! - Rebuild an [`AddressBook`] from disk in bounded batches
//! - Cache the last saved/loaded book to skip redundant reads
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ ID,FirstName,LastName,Email,Phone,Address,CreatedAt,UpdatedAt        │  header
//! ├──────────────────────────────────────────────────────────────────────┤
//! │ 20240309070501-9f86d081884c7d65,Jane,Doe,jane@example.com,...        │  row
//! │ ... (one row per contact, RFC 3339 UTC timestamps)                   │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//! Fields containing commas, quotes or newlines are quoted per RFC 4180.

mod csv_store;
mod record;

use std::sync::Arc;

use crate::book::AddressBook;
use crate::error::Result;

pub use csv_store::CsvStorage;
pub use record::{decode_record, encode_record, format_timestamp, parse_timestamp, FIELD_COUNT, HEADER};

/// Moves an address book between memory and durable storage
pub trait Storage {
    /// Write a full snapshot of `book`; on success the book becomes the cache
    fn save(&self, book: &Arc<AddressBook>) -> Result<()>;

    /// Return the cached book, or read one from storage
    fn load(&self) -> Result<Arc<AddressBook>>;
}
