//! Awards and honorary titles

use crate::config::Vocabulary;
use crate::field;
use crate::shape;
use serde_json::Value;
use tracing::{debug, warn};
use vitae_domain::{AwardRecord, Document};

/// An award entry without a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MalformedAward {
    /// Position of the entry in document order
    pub index: usize,
}

/// Extract award records in document order
///
/// Returns `None` when the awards section is absent, or when any single entry
/// lacks its name. Partial lists are never returned.
pub fn extract_records(document: &Document, vocabulary: &Vocabulary) -> Option<Vec<AwardRecord>> {
    let section = document
        .get(&vocabulary.general_data)?
        .get(&vocabulary.awards_and_titles)?;

    match collect(section, vocabulary) {
        Ok(records) => {
            debug!("Extracted {} awards", records.len());
            Some(records)
        }
        Err(MalformedAward { index }) => {
            warn!("Award {} has no name, discarding the awards section", index);
            None
        }
    }
}

/// Extract awards rendered as `"<name> - Ano: <year>"`
pub fn extract(document: &Document, vocabulary: &Vocabulary) -> Option<Vec<String>> {
    extract_records(document, vocabulary)
        .map(|records| records.iter().map(ToString::to_string).collect())
}

pub(crate) fn collect(
    section: &Value,
    vocabulary: &Vocabulary,
) -> Result<Vec<AwardRecord>, MalformedAward> {
    shape::resolve(section.get(&vocabulary.award_or_title))
        .into_iter()
        .enumerate()
        .map(|(index, award)| -> Result<AwardRecord, MalformedAward> {
            let name = field::lookup(Some(award), &vocabulary.award_name)
                .ok_or(MalformedAward { index })?;
            let year = field::attr(Some(award), &vocabulary.award_year);
            Ok(AwardRecord::new(name, year))
        })
        .collect()
}
