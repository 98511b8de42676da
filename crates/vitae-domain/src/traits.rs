//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction engine and
//! infrastructure. Infrastructure implementations live in other crates.

use crate::{Document, PersonId, ResearcherId};

/// Trait for retrieving the raw curriculum archive of a person
///
/// Implemented by the infrastructure layer (vitae-store)
pub trait Repository {
    /// Error type for repository operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the compressed curriculum of a person
    ///
    /// Returns `Ok(None)` when the repository has no curriculum for that person.
    /// The bytes are returned untouched: no text decoding is applied.
    fn fetch_compressed_document(&self, person: PersonId) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Resolve a person to their researcher registry identifier
    fn researcher_id(&self, person: PersonId) -> Result<Option<ResearcherId>, Self::Error>;
}

/// Trait for decompressing a curriculum archive into XML source text
///
/// Implemented by the infrastructure layer (vitae-codec)
pub trait ArchiveCodec {
    /// Error type for decompression (a corrupt archive)
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decompress raw archive bytes into XML text
    fn decompress(&self, archive: &[u8]) -> Result<String, Self::Error>;
}

/// Trait for parsing XML source text into a Document tree
///
/// Implemented by the infrastructure layer (vitae-codec)
pub trait TreeDeserializer {
    /// Error type for parsing (a malformed document)
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parse XML text into a Document
    fn parse(&self, text: &str) -> Result<Document, Self::Error>;
}
