//! Vitae Extractor
//!
//! Extracts normalized records from a deserialized academic curriculum.
//!
//! # Overview
//!
//! A curriculum arrives as an XML tree converted to nested mappings and
//! sequences. That conversion has no cardinality marker: a repeated element
//! is a single mapping when it occurs once and an ordered array when it occurs
//! more than once. The extractors here walk such trees and always produce
//! complete, deterministic records:
//!
//! - **Awards**: `"<name> - Ano: <year>"` strings, all or nothing
//! - **Summary**: the biography text in Portuguese or English
//! - **Publications**: journal articles, newest production sequence first,
//!   truncated to a limit
//!
//! A section the document does not have is `None`, which is different from a
//! section that is present but empty.
//!
//! # Architecture
//!
//! ```text
//! Repository → ArchiveCodec → TreeDeserializer → Document → Extractor → records
//! ```
//!
//! The extraction functions are pure. [`CurriculumService`] wires them to the
//! collaborator traits of `vitae-domain`.
//!
//! # Example Usage
//!
//! ```
//! use serde_json::json;
//! use vitae_domain::Document;
//! use vitae_extractor::{extract_awards, extract_publications, extract_summary};
//!
//! let doc = Document::new(json!({
//!     "GENERAL-DATA": {
//!         "AWARDS-AND-TITLES": { "AWARD-OR-TITLE": {
//!             "@attributes": { "NAME-OF-AWARD-OR-TITLE": "Best Paper", "YEAR-OF-AWARD": "2019" }
//!         } }
//!     }
//! }));
//!
//! assert_eq!(extract_awards(&doc), Some(vec!["Best Paper - Ano: 2019".to_string()]));
//! assert_eq!(extract_summary(&doc, "en"), None);
//! assert_eq!(extract_publications(&doc, 5), None);
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod extractor;
mod service;

pub mod awards;
pub mod field;
pub mod publications;
pub mod shape;
pub mod summary;


use std::sync::LazyLock;
use vitae_domain::{AwardRecord, Document, PublicationRecord};

pub use error::{BoxError, ExtractorError};
pub use config::{ExtractorConfig, Vocabulary};
pub use extractor::Extractor;
pub use publications::PublicationLimit;
pub use service::CurriculumService;
pub use summary::Language;

static DEFAULT_VOCABULARY: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::default);

/// Awards rendered as `"<name> - Ano: <year>"`, using the default vocabulary
///
/// `None` when the awards section is absent, or when any award lacks a name.
pub fn extract_awards(document: &Document) -> Option<Vec<String>> {
    awards::extract(document, &DEFAULT_VOCABULARY)
}

/// Awards as structured records, using the default vocabulary
pub fn extract_award_records(document: &Document) -> Option<Vec<AwardRecord>> {
    awards::extract_records(document, &DEFAULT_VOCABULARY)
}

/// Summary text for a language code, using the default vocabulary
///
/// Only `"en"` (any case) selects English; every other code reads the
/// Portuguese text.
pub fn extract_summary(document: &Document, language: &str) -> Option<String> {
    summary::extract(document, Language::from_code(language), &DEFAULT_VOCABULARY)
}

/// Published articles, newest first, using the default vocabulary
///
/// `limit` of `-1` returns every article.
pub fn extract_publications(document: &Document, limit: i64) -> Option<Vec<PublicationRecord>> {
    publications::extract(document, PublicationLimit::from(limit), &DEFAULT_VOCABULARY)
}
