//! ZIP archive codec

use crate::CodecError;
use std::io::{Cursor, Read};
use tracing::debug;
use vitae_domain::traits::ArchiveCodec;
use zip::ZipArchive;

/// Reads the curriculum XML out of a ZIP archive
///
/// The archive is opened from memory. The first entry whose name ends in
/// `.xml` is used, or the first file entry when none does. The bytes are
/// decoded as UTF-8 and, failing that, as ISO-8859-1, which is the encoding
/// curriculum exports declare.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveCodec;

impl ZipArchiveCodec {
    /// Create a new ZipArchiveCodec
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveCodec for ZipArchiveCodec {
    type Error = CodecError;

    fn decompress(&self, archive: &[u8]) -> Result<String, Self::Error> {
        let mut zip = ZipArchive::new(Cursor::new(archive))?;

        let mut first_file = None;
        let mut first_xml = None;
        for index in 0..zip.len() {
            let entry = zip.by_index(index)?;
            if entry.is_dir() {
                continue;
            }
            first_file.get_or_insert(index);
            if entry.name().to_ascii_lowercase().ends_with(".xml") {
                first_xml = Some(index);
                break;
            }
        }

        let index = first_xml
            .or(first_file)
            .ok_or_else(|| CodecError::CorruptArchive("archive has no file entries".to_string()))?;

        let mut entry = zip.by_index(index)?;
        let name = entry.name().to_string();
        debug!("Reading archive entry '{}' ({} bytes)", name, entry.size());

        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).map_err(|e| {
            CodecError::CorruptArchive(format!("failed to read entry {}: {}", name, e))
        })?;

        Ok(decode_text(bytes))
    }
}

/// Decode bytes as UTF-8, falling back to ISO-8859-1
///
/// Every byte sequence is valid ISO-8859-1, so this never fails. A leading
/// byte order mark is dropped.
pub fn decode_text(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| char::from(b)).collect(),
    };
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}
