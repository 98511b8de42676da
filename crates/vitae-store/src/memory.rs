//! In-memory repository

use std::collections::HashMap;
use std::convert::Infallible;
use vitae_domain::traits::Repository;
use vitae_domain::{PersonId, ResearcherId};

#[derive(Debug, Clone, Default)]
struct StoredCurriculum {
    researcher_id: Option<ResearcherId>,
    archive: Option<Vec<u8>>,
}

/// Repository backed by a hash map
///
/// # Examples
///
/// ```
/// use vitae_domain::traits::Repository;
/// use vitae_domain::{PersonId, ResearcherId};
/// use vitae_store::InMemoryRepository;
///
/// let repository = InMemoryRepository::new()
///     .with_archive(PersonId::new(1), vec![1, 2, 3])
///     .with_researcher_id(PersonId::new(1), ResearcherId::new("0123456789012345"));
///
/// assert_eq!(
///     repository.fetch_compressed_document(PersonId::new(1)).unwrap(),
///     Some(vec![1, 2, 3])
/// );
/// assert!(repository.fetch_compressed_document(PersonId::new(2)).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    entries: HashMap<PersonId, StoredCurriculum>,
}

impl InMemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an archive for a person
    pub fn with_archive(mut self, person: PersonId, archive: Vec<u8>) -> Self {
        self.insert_archive(person, archive);
        self
    }

    /// Add a researcher identifier for a person
    pub fn with_researcher_id(mut self, person: PersonId, id: ResearcherId) -> Self {
        self.entries.entry(person).or_default().researcher_id = Some(id);
        self
    }

    /// Store (or replace) the archive of a person
    pub fn insert_archive(&mut self, person: PersonId, archive: Vec<u8>) {
        self.entries.entry(person).or_default().archive = Some(archive);
    }

    /// Number of persons with an entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the repository holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Repository for InMemoryRepository {
    type Error = Infallible;

    fn fetch_compressed_document(&self, person: PersonId) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(self
            .entries
            .get(&person)
            .and_then(|entry| entry.archive.clone()))
    }

    fn researcher_id(&self, person: PersonId) -> Result<Option<ResearcherId>, Self::Error> {
        Ok(self
            .entries
            .get(&person)
            .and_then(|entry| entry.researcher_id.clone()))
    }
}
