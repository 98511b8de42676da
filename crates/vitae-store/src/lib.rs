//! Vitae Storage Layer
//!
//! Implements the Repository trait over stored curriculum archives.
//!
//! # Architecture
//!
//! - SQLite table of compressed archives keyed by person identifier
//! - An in-memory map for tests and embedding
//!
//! Archives are stored and returned as raw bytes; no text decoding happens on
//! the way in or out.
//!
//! # Examples
//!
//! ```no_run
//! use vitae_domain::PersonId;
//! use vitae_store::SqliteRepository;
//!
//! let repository = SqliteRepository::open("curricula.db").unwrap();
//! repository.insert(PersonId::new(42), None, &[0x50, 0x4b, 0x05, 0x06]).unwrap();
//! ```

#![warn(missing_docs)]

mod memory;

pub use memory::InMemoryRepository;

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use vitae_domain::traits::Repository;
use vitae_domain::{PersonId, ResearcherId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of Repository
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// SqliteRepository instance.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open (or create) a repository at the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let repository = Self { conn };
        repository.initialize_schema()?;
        Ok(repository)
    }

    /// Open a fresh in-memory repository
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::open(":memory:")
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    /// Convert a PersonId to the SQLite integer key
    fn person_key(person: PersonId) -> Result<i64, StoreError> {
        i64::try_from(person.value()).map_err(|_| {
            StoreError::InvalidData(format!("Person id {} exceeds the storable range", person))
        })
    }

    /// Store (or replace) the archive of a person
    pub fn insert(
        &self,
        person: PersonId,
        researcher_id: Option<&ResearcherId>,
        archive: &[u8],
    ) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO curriculum_archives (person_id, researcher_id, archive)
             VALUES (?1, ?2, ?3)",
            params![
                Self::person_key(person)?,
                researcher_id.map(ResearcherId::as_str),
                archive
            ],
        )?;
        debug!("Stored {} byte archive for person {}", archive.len(), person);
        Ok(())
    }

    /// Remove the archive of a person, returning whether one existed
    pub fn remove(&self, person: PersonId) -> Result<bool, StoreError> {
        let removed = self.conn.execute(
            "DELETE FROM curriculum_archives WHERE person_id = ?1",
            params![Self::person_key(person)?],
        )?;
        Ok(removed > 0)
    }

    /// Number of stored persons
    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM curriculum_archives", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| StoreError::InvalidData(format!("Negative row count {}", count)))
    }
}

impl Repository for SqliteRepository {
    type Error = StoreError;

    fn fetch_compressed_document(&self, person: PersonId) -> Result<Option<Vec<u8>>, Self::Error> {
        let archive: Option<Option<Vec<u8>>> = self
            .conn
            .query_row(
                "SELECT archive FROM curriculum_archives WHERE person_id = ?1",
                params![Self::person_key(person)?],
                |row| row.get(0),
            )
            .optional()?;

        let archive = archive.flatten().filter(|bytes| !bytes.is_empty());
        debug!(
            "Archive lookup for person {}: {}",
            person,
            if archive.is_some() { "found" } else { "not found" }
        );
        Ok(archive)
    }

    fn researcher_id(&self, person: PersonId) -> Result<Option<ResearcherId>, Self::Error> {
        let id: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT researcher_id FROM curriculum_archives WHERE person_id = ?1",
                params![Self::person_key(person)?],
                |row| row.get(0),
            )
            .optional()?;

        Ok(id.flatten().map(ResearcherId::new))
    }
}
