//! # addrbook
//!
//! A command-line address book with:
//! - A thread-safe in-memory contact store (single RwLock, many readers)
//! - Case-insensitive search over names and email
//! - Batched CSV persistence with a load cache
//! - JSON configuration with defaults
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Interactive CLI                           │
//! │              (menu loop, test-data generator)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ add / get / update / delete / list / search
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    AddressBook                               │
//! │            (Single Writer / Multi Reader)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ load on start, save on exit
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    CsvStorage                                │
//! │        (RwLock over cache + file, batched rows)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!                ┌─────────────┐
//!                │ contacts.csv│
//!                └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod contact;
pub mod book;
pub mod storage;
pub mod generator;
pub mod cli;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{AddressBookError, Result};
pub use config::Config;
pub use contact::Contact;
pub use book::AddressBook;
pub use storage::{CsvStorage, Storage};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of addrbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
