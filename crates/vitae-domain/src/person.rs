//! Person module - identifiers for the owner of a curriculum

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Institutional identifier of a person
///
/// Repositories are keyed by this number.
///
/// # Examples
///
/// ```
/// use vitae_domain::PersonId;
///
/// let id: PersonId = "5385361".parse().unwrap();
/// assert_eq!(id.value(), 5385361);
/// assert_eq!(id.to_string(), "5385361");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    /// Create a PersonId from its numeric value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PersonId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| format!("Invalid person id '{}': {}", s, e))
    }
}

/// Identifier of a person in the national researcher registry
///
/// Opaque: the registry issues 16-digit strings, but nothing here relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResearcherId(String);

impl ResearcherId {
    /// Wrap a registry identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResearcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let id: PersonId = " 42\n".parse().unwrap();
        assert_eq!(id, PersonId::new(42));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<PersonId>().is_err());
        assert!("-1".parse::<PersonId>().is_err());
        assert!("".parse::<PersonId>().is_err());
    }

    #[test]
    fn test_researcher_id_display() {
        let id = ResearcherId::new("0123456789012345");
        assert_eq!(id.to_string(), "0123456789012345");
        assert_eq!(id.as_str(), "0123456789012345");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: PersonId ordering matches u64 ordering
        #[test]
        fn test_person_id_ordering_property(a: u64, b: u64) {
            prop_assert_eq!(PersonId::new(a) < PersonId::new(b), a < b);
            prop_assert_eq!(PersonId::new(a) == PersonId::new(b), a == b);
        }

        /// Property: Display output parses back to the same id
        #[test]
        fn test_person_id_string_roundtrip(value: u64) {
            let id = PersonId::new(value);
            prop_assert_eq!(id.to_string().parse::<PersonId>(), Ok(id));
        }
    }
}
