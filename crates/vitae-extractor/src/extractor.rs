//! Core Extractor implementation

use crate::awards;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::publications::{self, PublicationLimit};
use crate::summary::{self, Language};
use vitae_domain::{AwardRecord, Document, PublicationRecord};

/// Extracts awards, summary and publications from curriculum documents
///
/// Holds only configuration, so one Extractor can serve any number of
/// documents from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor, validating the configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Awards rendered as `"<name> - Ano: <year>"`, in document order
    ///
    /// `None` when the awards section is absent or any award lacks a name.
    pub fn awards(&self, document: &Document) -> Option<Vec<String>> {
        awards::extract(document, &self.config.vocabulary)
    }

    /// Awards as structured records
    pub fn award_records(&self, document: &Document) -> Option<Vec<AwardRecord>> {
        awards::extract_records(document, &self.config.vocabulary)
    }

    /// Summary text in the given language
    pub fn summary(&self, document: &Document, language: Language) -> Option<String> {
        summary::extract(document, language, &self.config.vocabulary)
    }

    /// Summary text in the configured default language
    pub fn default_summary(&self, document: &Document) -> Option<String> {
        self.summary(document, Language::from_code(&self.config.default_language))
    }

    /// Published articles, newest production sequence first
    pub fn publications(
        &self,
        document: &Document,
        limit: PublicationLimit,
    ) -> Option<Vec<PublicationRecord>> {
        publications::extract(document, limit, &self.config.vocabulary)
    }

    /// Published articles truncated to the configured limit
    pub fn latest_publications(&self, document: &Document) -> Option<Vec<PublicationRecord>> {
        self.publications(document, PublicationLimit::from(self.config.publication_limit))
    }
}
