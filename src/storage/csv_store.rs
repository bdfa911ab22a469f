//! CSV Storage
//!
//! Saves and loads an [`AddressBook`] as a CSV file, in batches, with a
//! cached book to short-circuit repeated loads.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use parking_lot::RwLock;

use crate::book::AddressBook;
use crate::config::{Config, DEFAULT_BATCH_SIZE};
use crate::error::{AddressBookError, Result};

use super::record::{decode_record, encode_record, HEADER};
use super::Storage;

/// CSV-backed persistence with a cached address book
///
/// ## Concurrency:
/// - `cache`: RwLock guarding both the cached book and the file itself
/// - `save`: write lock for the whole serialize-and-write
/// - `load` cache hit: read lock only
/// - `load` cache miss: write lock for the whole read-and-parse, so two
///   cold loads never race to populate the cache
///
/// ## Cache policy
/// `load` only trusts the cache when it holds at least one contact. After
/// saving an empty book, the next `load` goes back to disk. A failed or
/// partial save is never re-validated by a cache hit.
pub struct CsvStorage {
    /// Target CSV file
    path: PathBuf,

    /// Rows per batch on save and load
    batch_size: usize,

    /// Last saved or loaded book
    cache: RwLock<Arc<AddressBook>>,
}

impl CsvStorage {
    /// Create storage for `path` with the default batch size
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_batch_size(path, DEFAULT_BATCH_SIZE)
    }

    /// Create storage for `path` processing `batch_size` rows at a time
    ///
    /// A batch size of 0 is treated as 1.
    pub fn with_batch_size(path: impl Into<PathBuf>, batch_size: usize) -> Self {
        Self {
            path: path.into(),
            batch_size: batch_size.max(1),
            cache: RwLock::new(Arc::new(AddressBook::new())),
        }
    }

    /// Create storage from the CSV path and batch size of a config
    pub fn from_config(config: &Config) -> Self {
        Self::with_batch_size(&config.csv_path, config.batch_size)
    }

    /// Get the CSV file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the batch size
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Write a full snapshot of `book`
    ///
    /// Steps:
    /// 1. Acquire the write lock
    /// 2. Create parent directories and truncate the file
    /// 3. Write the header, then rows in batches, flushing after each batch
    /// 4. Make `book` the cache (shared, not copied)
    ///
    /// No atomic rename is performed: an error mid-way can leave a partial
    /// file behind.
    pub fn save(&self, book: &Arc<AddressBook>) -> Result<()> {
        let mut cache = self.cache.write();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.path)?;
        let mut writer = WriterBuilder::new().from_writer(BufWriter::new(file));

        writer.write_record(HEADER)?;

        let contacts = book.list_all();
        for (batch_no, batch) in contacts.chunks(self.batch_size).enumerate() {
            for contact in batch {
                writer.write_record(encode_record(contact))?;
            }
            writer.flush()?;
            tracing::debug!(batch = batch_no, rows = batch.len(), "flushed batch");
        }
        writer.flush()?;

        *cache = Arc::clone(book);

        tracing::info!(
            path = %self.path.display(),
            contacts = contacts.len(),
            "saved address book"
        );
        Ok(())
    }

    /// Return the cached book, or read the file
    ///
    /// Steps:
    /// 1. Read lock: a non-empty cache is returned as-is
    /// 2. Write lock: re-check the cache, then read the file
    /// 3. Missing file: a fresh empty book
    /// 4. Header row is read and discarded
    /// 5. Data rows are parsed batch by batch into a fresh book
    /// 6. The fresh book becomes the cache
    ///
    /// Any error leaves the cache untouched and returns no partial book.
    pub fn load(&self) -> Result<Arc<AddressBook>> {
        {
            let cache = self.cache.read();
            if !cache.is_empty() {
                tracing::debug!(contacts = cache.len(), "address book served from cache");
                return Ok(Arc::clone(&cache));
            }
        }

        let mut cache = self.cache.write();
        if !cache.is_empty() {
            // Another cold load filled the cache while we waited
            return Ok(Arc::clone(&cache));
        }

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no contact file, starting empty");
                let book = Arc::new(AddressBook::new());
                *cache = Arc::clone(&book);
                return Ok(book);
            }
            Err(e) => return Err(e.into()),
        };

        let book = Arc::new(self.read_book(file)?);
        *cache = Arc::clone(&book);

        tracing::info!(
            path = %self.path.display(),
            contacts = book.len(),
            "loaded address book"
        );
        Ok(book)
    }

    /// Parse an open CSV file into a new book (called with write lock held)
    fn read_book(&self, file: File) -> Result<AddressBook> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .from_reader(BufReader::new(file));

        let mut header = StringRecord::new();
        if !reader.read_record(&mut header)? {
            return Err(AddressBookError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("failed to read CSV header from {}", self.path.display()),
            )));
        }
        if header.iter().ne(HEADER.iter().copied()) {
            tracing::warn!(path = %self.path.display(), header = ?header, "unexpected CSV header");
        }

        let book = AddressBook::new();
        let mut batch: Vec<StringRecord> = Vec::with_capacity(self.batch_size);
        let mut batch_no = 0usize;

        loop {
            let mut record = StringRecord::new();
            if !reader.read_record(&mut record)? {
                break;
            }
            batch.push(record);

            if batch.len() >= self.batch_size {
                Self::apply_batch(&book, &batch)?;
                tracing::debug!(batch = batch_no, rows = batch.len(), "parsed batch");
                batch.clear();
                batch_no += 1;
            }
        }

        if !batch.is_empty() {
            Self::apply_batch(&book, &batch)?;
            tracing::debug!(batch = batch_no, rows = batch.len(), "parsed batch");
        }

        Ok(book)
    }

    /// Decode every row of a batch and insert it into `book`
    fn apply_batch(book: &AddressBook, batch: &[StringRecord]) -> Result<()> {
        for record in batch {
            let contact = decode_record(record)?;
            book.add(contact).map_err(|e| match e {
                AddressBookError::DuplicateId(id) => {
                    AddressBookError::malformed(format!("duplicate contact ID {} in file", id))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

impl Storage for CsvStorage {
    fn save(&self, book: &Arc<AddressBook>) -> Result<()> {
        CsvStorage::save(self, book)
    }

    fn load(&self) -> Result<Arc<AddressBook>> {
        CsvStorage::load(self)
    }
}
