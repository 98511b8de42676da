//! Records derived from a curriculum document

use serde::{Deserialize, Serialize};
use std::fmt;

/// An award or honorary title
///
/// Rendered for display as `"<name> - Ano: <year>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecord {
    /// Name of the award or title
    pub name: String,

    /// Year it was granted; empty when the document does not say
    pub year: String,
}

impl AwardRecord {
    /// Create a new award record
    pub fn new(name: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            year: year.into(),
        }
    }
}

impl fmt::Display for AwardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Ano: {}", self.name, self.year)
    }
}

/// A published journal article
///
/// Every field is always present; fields the document lacks are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Article title
    pub title: String,

    /// Journal, magazine or venue title
    pub journal: String,

    /// Volume
    pub volume: String,

    /// First page
    pub start_page: String,

    /// Last page
    pub end_page: String,

    /// Year of publication
    pub year: String,
}
