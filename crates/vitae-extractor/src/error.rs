//! Error types for the Extractor

use thiserror::Error;

/// A collaborator error, carried unchanged
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while retrieving or extracting a curriculum
///
/// A missing section or a missing curriculum is not an error: those surface as
/// `None`. These variants cover collaborator failures and bad configuration.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Repository failure while fetching a curriculum
    #[error("Repository error: {0}")]
    Repository(#[source] BoxError),

    /// The archive could not be decompressed
    #[error("Corrupt archive: {0}")]
    CorruptArchive(#[source] BoxError),

    /// The XML could not be parsed into a document
    #[error("Malformed document: {0}")]
    MalformedDocument(#[source] BoxError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::Json(e.to_string())
    }
}
