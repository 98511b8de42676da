//! Vitae Codec Layer
//!
//! Implementations of the `ArchiveCodec` and `TreeDeserializer` traits from
//! `vitae-domain`.
//!
//! # Implementations
//!
//! - `ZipArchiveCodec`: reads the curriculum XML out of a ZIP archive
//! - `XmlTreeDeserializer`: turns XML text into a Document tree
//!
//! # Examples
//!
//! ```
//! use vitae_codec::XmlTreeDeserializer;
//! use vitae_domain::traits::TreeDeserializer;
//!
//! let xml = r#"<CV><AWARDS><AWARD NAME="A"/><AWARD NAME="B"/></AWARDS></CV>"#;
//! let doc = XmlTreeDeserializer::new().parse(xml).unwrap();
//!
//! // Two AWARD elements: an ordered array
//! assert_eq!(doc.path(&["AWARDS", "AWARD"]).unwrap().as_array().unwrap().len(), 2);
//! ```

#![warn(missing_docs)]

pub mod xml;
pub mod archive;

use thiserror::Error;

pub use crate::xml::XmlTreeDeserializer;
pub use crate::archive::ZipArchiveCodec;

/// Errors that can occur while decoding a curriculum
#[derive(Error, Debug)]
pub enum CodecError {
    /// The archive could not be opened or read
    #[error("Corrupt archive: {0}")]
    CorruptArchive(String),

    /// The XML text could not be turned into a tree
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

impl From<zip::result::ZipError> for CodecError {
    fn from(e: zip::result::ZipError) -> Self {
        CodecError::CorruptArchive(e.to_string())
    }
}

impl From<quick_xml::Error> for CodecError {
    fn from(e: quick_xml::Error) -> Self {
        CodecError::MalformedDocument(e.to_string())
    }
}
