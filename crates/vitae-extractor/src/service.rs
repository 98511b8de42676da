//! Retrieval pipeline: fetch, decompress, parse, extract

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::extractor::Extractor;
use crate::publications::PublicationLimit;
use crate::summary::Language;
use std::time::Instant;
use tracing::{debug, info};
use vitae_domain::traits::{ArchiveCodec, Repository, TreeDeserializer};
use vitae_domain::{Document, PersonId, PublicationRecord, ResearcherId};

/// Serves curriculum extractions by person identifier
///
/// Every call fetches a fresh archive from the repository, builds a Document
/// and discards it once the extraction is done. A person without a curriculum
/// yields `Ok(None)`; collaborator failures are returned with the
/// collaborator's error as the source.
pub struct CurriculumService<R, C, D>
where
    R: Repository,
    C: ArchiveCodec,
    D: TreeDeserializer,
{
    repository: R,
    codec: C,
    deserializer: D,
    extractor: Extractor,
}

impl<R, C, D> CurriculumService<R, C, D>
where
    R: Repository,
    C: ArchiveCodec,
    D: TreeDeserializer,
{
    /// Create a new CurriculumService
    pub fn new(
        repository: R,
        codec: C,
        deserializer: D,
        config: ExtractorConfig,
    ) -> Result<Self, ExtractorError> {
        Ok(Self {
            repository,
            codec,
            deserializer,
            extractor: Extractor::new(config)?,
        })
    }

    /// The extractor applied to fetched documents
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// The underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Fetch and build the Document of a person
    pub fn document(&self, person: PersonId) -> Result<Option<Document>, ExtractorError> {
        let start_time = Instant::now();

        let archive = self
            .repository
            .fetch_compressed_document(person)
            .map_err(|e| ExtractorError::Repository(Box::new(e)))?;

        let Some(archive) = archive else {
            info!("No curriculum found for person {}", person);
            return Ok(None);
        };

        debug!("Fetched {} byte archive for person {}", archive.len(), person);

        let xml = self
            .codec
            .decompress(&archive)
            .map_err(|e| ExtractorError::CorruptArchive(Box::new(e)))?;

        debug!("Decompressed {} chars of XML", xml.len());

        let document = self
            .deserializer
            .parse(&xml)
            .map_err(|e| ExtractorError::MalformedDocument(Box::new(e)))?;

        info!(
            "Loaded curriculum for person {} in {} ms",
            person,
            start_time.elapsed().as_millis()
        );

        Ok(Some(document))
    }

    /// The Document of a person serialized as JSON
    pub fn document_json(&self, person: PersonId) -> Result<Option<String>, ExtractorError> {
        match self.document(person)? {
            Some(document) => Ok(Some(document.to_json()?)),
            None => Ok(None),
        }
    }

    /// The researcher registry identifier of a person
    pub fn researcher_id(&self, person: PersonId) -> Result<Option<ResearcherId>, ExtractorError> {
        self.repository
            .researcher_id(person)
            .map_err(|e| ExtractorError::Repository(Box::new(e)))
    }

    /// Awards of a person, see [`Extractor::awards`]
    pub fn awards(&self, person: PersonId) -> Result<Option<Vec<String>>, ExtractorError> {
        Ok(self
            .document(person)?
            .and_then(|document| self.extractor.awards(&document)))
    }

    /// Summary of a person, see [`Extractor::summary`]
    pub fn summary(
        &self,
        person: PersonId,
        language: Language,
    ) -> Result<Option<String>, ExtractorError> {
        Ok(self
            .document(person)?
            .and_then(|document| self.extractor.summary(&document, language)))
    }

    /// Published articles of a person, see [`Extractor::publications`]
    pub fn publications(
        &self,
        person: PersonId,
        limit: PublicationLimit,
    ) -> Result<Option<Vec<PublicationRecord>>, ExtractorError> {
        Ok(self
            .document(person)?
            .and_then(|document| self.extractor.publications(&document, limit)))
    }
}
